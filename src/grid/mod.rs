//! Grid Layout Engine
//!
//! This module arranges depictions into rows and columns and composes them
//! into one SVG document with an optional label per item.
//!
//! # Architecture
//!
//! ```text
//! plan_rows() -> Canvas::place_row() per row -> Canvas::finish()
//! ```
//!
//! Items are borrowed mutably for the whole call. Each one is moved into its
//! slot, rendered, and restored before the next one is touched, so every
//! plane is exactly as the caller left it once the call returns, whether it
//! succeeded or not.

pub mod planner;
pub mod guard;
pub mod canvas;
pub mod display_list;

pub use planner::{check_shape, plan_rows, RowPlan, DEFAULT_COLUMNS, ITEM_MARGIN, ROW_MARGIN};
pub use guard::PlaneGuard;
pub use canvas::Canvas;
pub use display_list::{GridDisplayList, PlacedItem, RenderRow};

use crate::config::{render_config, RenderConfig};
use crate::error::GridError;
use crate::models::Depictable;
use crate::renderers::svg::{ElementEmitter, GraphEmitter};

/// Convenience for calls without labels, so the label type need not be spelled out
pub const NO_LABELS: Option<&[&str]> = None;

/// Result of one composition
#[derive(Clone, Debug)]
pub struct ComposedGrid {
    /// The composed SVG document
    pub svg: String,

    /// Where every item ended up
    pub display: GridDisplayList,
}

/// Compose `items` into an SVG grid of `cols` columns.
///
/// Uses the process-wide render configuration and the default element
/// emitter. `labels`, when given, must have one entry per item.
pub fn compose_grid<D, S>(items: &mut [D], labels: Option<&[S]>, cols: usize) -> Result<String, GridError>
where
    D: Depictable,
    S: AsRef<str>,
{
    let config = render_config();
    let emitter = GraphEmitter::new(&config);
    compose_grid_with(items, labels, cols, &config, &emitter).map(|composed| composed.svg)
}

/// Compose with an explicit configuration and element emitter.
///
/// Fails with `ShapeMismatch` or `InvalidConfiguration` (bad `cols` or an
/// unusable config) before any item is moved, and with `RenderFailure` if an
/// item cannot render; no document is produced in either case.
pub fn compose_grid_with<D, S, E>(
    items: &mut [D],
    labels: Option<&[S]>,
    cols: usize,
    config: &RenderConfig,
    emitter: &E,
) -> Result<ComposedGrid, GridError>
where
    D: Depictable,
    S: AsRef<str>,
    E: ElementEmitter + ?Sized,
{
    check_shape(items.len(), labels.map(|l| l.len()), cols)?;
    config
        .validate()
        .map_err(|e| GridError::InvalidConfiguration(e.to_string()))?;
    let rows = plan_rows(items, cols)?;

    let mut canvas = Canvas::new(config);
    for row in &rows {
        let range = row.range();
        let row_labels = labels.map(|l| &l[range.clone()]);
        canvas.place_row(row, &mut items[range], row_labels)?;
    }

    Ok(canvas.finish(emitter))
}
