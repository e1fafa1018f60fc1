//! Rendered fragment of one depiction

use serde::{Deserialize, Serialize};

/// SVG pieces of a single item, drawn at the item's current coordinates
///
/// A fragment has no document wrapper of its own; it is meant to be embedded
/// in a larger canvas by an `ElementEmitter`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Fragment {
    /// Point elements (symbols, markers)
    pub points: Vec<String>,

    /// Connection elements, stroked as one group
    pub connections: Vec<String>,

    /// Definitions placed in `<defs>`
    pub definitions: Vec<String>,

    /// Mask shapes cut out of the connection group
    pub masks: Vec<String>,

    /// Unique id, used to scope mask ids within a canvas
    pub uid: String,
}

impl Fragment {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Self::default()
        }
    }
}
