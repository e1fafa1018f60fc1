//! Display List for Grid Layout
//!
//! This module defines the layout record produced alongside the composed
//! SVG. It captures where every item was placed so callers (and the JS
//! adapter) can hit-test or overlay the grid without re-running layout.

use crate::models::{BoundingBox, Viewport};
use serde::{Deserialize, Serialize};

/// Top-level display list for one composed grid
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GridDisplayList {
    /// Document width (content plus margins)
    pub width: f64,

    /// Document height (content plus margins)
    pub height: f64,

    /// Viewport shared by every fragment
    pub viewport: Viewport,

    /// Rows in top-to-bottom order
    pub rows: Vec<RenderRow>,
}

/// A single row band
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderRow {
    /// Row index for identification
    pub row_index: usize,

    /// Top of the band (plane y, y-up)
    pub top: f64,

    /// Tallest item height in this row
    pub height: f64,

    /// Items in left-to-right order
    pub items: Vec<PlacedItem>,
}

/// One item at its composed position
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlacedItem {
    /// Position in the input sequence
    pub index: usize,

    pub row: usize,

    pub column: usize,

    /// Left edge requested from the item
    pub target_x: f64,

    /// Vertical center requested from the item
    pub target_y: f64,

    /// Rightmost x reported by the item after the move
    pub right: f64,

    /// Bounds of the shifted plane; `None` for an empty plane
    pub bounds: Option<BoundingBox>,

    /// Fragment id
    pub uid: String,

    pub label: Option<String>,
}

impl GridDisplayList {
    /// All placed items in input order
    pub fn items(&self) -> impl Iterator<Item = &PlacedItem> {
        self.rows.iter().flat_map(|row| row.items.iter())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
