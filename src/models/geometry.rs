//! 2D geometry primitives
//!
//! Points, planes (point id -> coordinate) and axis-aligned bounds. Plane
//! coordinates use a y-up frame; renderers flip y when writing SVG.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A 2D coordinate
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Mapping from point id to coordinate, ordered by id
pub type Plane = BTreeMap<usize, Point>;

/// Axis-aligned bounding box in plane coordinates
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Bounds of every point in the plane, `None` for an empty plane
    pub fn from_plane(plane: &Plane) -> Option<Self> {
        let mut points = plane.values();
        let first = points.next()?;
        let init = BoundingBox {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };

        Some(points.fold(init, |b, p| BoundingBox {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center_y(&self) -> f64 {
        (self.min_y + self.max_y) / 2.0
    }

    /// True when the interiors overlap; boxes sharing only an edge do not intersect
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }
}

/// Visible region of a composed document, in SVG user units
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Vertical extent of a plane; an empty plane has zero height
pub fn plane_height(plane: &Plane) -> f64 {
    BoundingBox::from_plane(plane).map_or(0.0, |b| b.height())
}

/// Translate a plane so its leftmost point sits at `target_x` and the middle
/// of its vertical range sits at `target_y`.
///
/// Returns the rightmost x after the move. An empty plane is left as is and
/// reports `target_x`.
pub fn fix_plane_mean(plane: &mut Plane, target_x: f64, target_y: f64) -> f64 {
    let Some(bounds) = BoundingBox::from_plane(plane) else {
        return target_x;
    };

    let dx = target_x - bounds.min_x;
    let dy = target_y - bounds.center_y();
    for point in plane.values_mut() {
        point.x += dx;
        point.y += dy;
    }

    bounds.max_x + dx
}
