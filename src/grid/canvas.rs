//! Canvas accumulation
//!
//! A `Canvas` walks the planned rows once. For each item it borrows the plane
//! through a `PlaneGuard`, moves the item to its slot, renders it, and lets
//! the guard restore the plane before the next item is touched. Extents grow
//! as rows are placed; `finish` serializes everything into one document.

use super::display_list::{GridDisplayList, PlacedItem, RenderRow};
use super::guard::PlaneGuard;
use super::planner::{RowPlan, ITEM_MARGIN, ROW_MARGIN};
use super::ComposedGrid;
use crate::config::RenderConfig;
use crate::error::GridError;
use crate::models::{BoundingBox, Depictable, Fragment, Viewport};
use crate::renderers::svg::{label_element, ElementEmitter, SvgDocument};

pub struct Canvas<'c> {
    config: &'c RenderConfig,

    /// Widest row cursor seen so far
    shift_x: f64,

    /// Top of the next row band; decreases row by row
    shift_y: f64,

    fragments: Vec<Fragment>,
    labels: Vec<String>,
    rows: Vec<RenderRow>,
}

impl<'c> Canvas<'c> {
    pub fn new(config: &'c RenderConfig) -> Self {
        Self {
            config,
            shift_x: 0.0,
            shift_y: 0.0,
            fragments: Vec::new(),
            labels: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Place, render and restore every item of one row.
    ///
    /// `items` and `labels` are the row's own slices. On a render failure the
    /// failing item is restored and the error is returned; items already
    /// placed were restored when their own step finished.
    pub fn place_row<D, S>(
        &mut self,
        plan: &RowPlan,
        items: &mut [D],
        labels: Option<&[S]>,
    ) -> Result<(), GridError>
    where
        D: Depictable,
        S: AsRef<str>,
    {
        let label_gap = self.config.label_gap();
        let center_y = self.shift_y - plan.height / 2.0;
        let mut cursor = 0.0;
        let mut placed = Vec::with_capacity(items.len());

        for (column, item) in items.iter_mut().enumerate() {
            let index = plan.start + column;
            let label: Option<&str> = labels.and_then(|l| l.get(column)).map(|s| s.as_ref());

            let target_x = cursor;
            let target_y = if label.is_some() {
                center_y - label_gap
            } else {
                center_y
            };

            let mut guard = PlaneGuard::acquire(item);
            let right = guard.recenter(target_x, target_y);
            let bounds = BoundingBox::from_plane(guard.plane());
            let fragment = guard.render(self.config).map_err(|source| {
                log::warn!("item {} failed to render: {}", index, source);
                GridError::RenderFailure { index, source }
            })?;
            drop(guard);

            log::trace!(
                "item {} placed at ({:.2}, {:.2}), right edge {:.2}",
                index,
                target_x,
                target_y,
                right
            );

            cursor = right + ITEM_MARGIN;
            if cursor > self.shift_x {
                self.shift_x = cursor;
            }

            if let Some(text) = label {
                self.labels.push(label_element(target_x, -self.shift_y, text));
            }

            placed.push(PlacedItem {
                index,
                row: plan.index,
                column,
                target_x,
                target_y,
                right,
                bounds,
                uid: fragment.uid.clone(),
                label: label.map(str::to_string),
            });
            self.fragments.push(fragment);
        }

        self.rows.push(RenderRow {
            row_index: plan.index,
            top: self.shift_y,
            height: plan.height,
            items: placed,
        });

        self.shift_y -= plan.height + ROW_MARGIN;
        if labels.is_some() {
            self.shift_y -= label_gap;
        }

        Ok(())
    }

    /// Viewport covering all content plus margins
    pub fn viewport(&self) -> Viewport {
        let offset = -self.config.label_gap();
        Viewport {
            min_x: offset,
            min_y: offset,
            width: self.shift_x + self.config.width_margin(),
            height: -self.shift_y + self.config.height_margin(),
        }
    }

    /// Serialize the canvas into one SVG document
    pub fn finish<E: ElementEmitter + ?Sized>(self, emitter: &E) -> ComposedGrid {
        let viewport = self.viewport();
        let mut document = SvgDocument::open(&viewport);

        for fragment in &self.fragments {
            document.extend(emitter.emit(fragment, &viewport));
        }

        document.label_layer(
            self.config.label_font_size(),
            &self.config.label_font_family,
            &self.labels,
        );

        log::debug!(
            "composed grid: {} rows, {} items, {:.2} x {:.2}",
            self.rows.len(),
            self.fragments.len(),
            viewport.width,
            viewport.height
        );

        ComposedGrid {
            svg: document.finish(),
            display: GridDisplayList {
                width: viewport.width,
                height: viewport.height,
                viewport,
                rows: self.rows,
            },
        }
    }
}
