//! Row planning
//!
//! Splits the item sequence into rows of at most `cols` items and measures
//! each row from the items' unshifted planes. Nothing is mutated here.

use crate::error::GridError;
use crate::models::{plane_height, Depictable};
use serde::Serialize;
use std::ops::Range;

/// Items per row when the caller has no preference
pub const DEFAULT_COLUMNS: usize = 3;

/// Horizontal gap after each item's right edge
pub const ITEM_MARGIN: f64 = 2.0;

/// Vertical gap between row bands
pub const ROW_MARGIN: f64 = 2.0;

/// One row of the grid
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RowPlan {
    pub index: usize,

    /// Input position of the first item in the row
    pub start: usize,

    pub len: usize,

    /// Tallest plane height among the row's items
    pub height: f64,
}

impl RowPlan {
    /// Input positions covered by this row
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

/// Validate label count and column count before any item is touched
pub fn check_shape(items: usize, labels: Option<usize>, cols: usize) -> Result<(), GridError> {
    if let Some(labels) = labels {
        if labels != items {
            return Err(GridError::ShapeMismatch { labels, items });
        }
    }

    if cols < 1 {
        return Err(GridError::InvalidConfiguration(format!(
            "cols must be at least 1, got {}",
            cols
        )));
    }

    Ok(())
}

/// Partition `items` row-major into rows of `cols` and measure each row
pub fn plan_rows<D: Depictable>(items: &[D], cols: usize) -> Result<Vec<RowPlan>, GridError> {
    check_shape(items.len(), None, cols)?;

    let rows: Vec<RowPlan> = items
        .chunks(cols)
        .enumerate()
        .map(|(index, chunk)| RowPlan {
            index,
            start: index * cols,
            len: chunk.len(),
            height: chunk
                .iter()
                .map(|item| plane_height(item.plane()))
                .fold(0.0, f64::max),
        })
        .collect();

    log::debug!(
        "planned {} rows for {} items ({} columns)",
        rows.len(),
        items.len(),
        cols
    );

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Depiction;

    fn tall(id: &str, height: f64) -> Depiction {
        Depiction::with_id(id).with_point(0, 0.0, 0.0).with_point(1, 1.0, height)
    }

    #[test]
    fn test_rows_are_row_major_and_last_row_is_short() {
        let items: Vec<Depiction> = (0..7).map(|i| tall(&i.to_string(), 1.0)).collect();
        let rows = plan_rows(&items, 3).unwrap();

        let ranges: Vec<Range<usize>> = rows.iter().map(RowPlan::range).collect();
        assert_eq!(ranges, vec![0..3, 3..6, 6..7]);
    }

    #[test]
    fn test_row_height_is_tallest_item() {
        let items = vec![tall("a", 2.0), tall("b", 5.0), tall("c", 1.0)];
        let rows = plan_rows(&items, 2).unwrap();

        assert_eq!(rows[0].height, 5.0);
        assert_eq!(rows[1].height, 1.0);
    }

    #[test]
    fn test_empty_plane_contributes_zero_height() {
        let items = vec![Depiction::with_id("empty")];
        let rows = plan_rows(&items, 3).unwrap();
        assert_eq!(rows[0].height, 0.0);
    }

    #[test]
    fn test_no_items_no_rows() {
        let items: Vec<Depiction> = Vec::new();
        assert!(plan_rows(&items, 3).unwrap().is_empty());
    }

    #[test]
    fn test_zero_columns_rejected() {
        let items = vec![tall("a", 1.0)];
        assert!(matches!(
            plan_rows(&items, 0),
            Err(GridError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_label_count_must_match() {
        assert_eq!(
            check_shape(3, Some(2), 3),
            Err(GridError::ShapeMismatch { labels: 2, items: 3 })
        );
        assert_eq!(check_shape(3, Some(3), 3), Ok(()));
        assert_eq!(check_shape(0, None, 1), Ok(()));
    }
}
