//! Models module for grid depiction
//!
//! This module contains the geometric data model shared by the grid layout
//! and the renderers: planes of 2D points, rendered fragments, and the
//! `Depictable` contract every grid item fulfils.

pub mod geometry;
pub mod fragment;
pub mod depictable;
pub mod depiction;

// Re-export commonly used types
pub use geometry::{fix_plane_mean, plane_height, BoundingBox, Plane, Point, Viewport};
pub use fragment::Fragment;
pub use depictable::Depictable;
pub use depiction::{Connection, Depiction, PointSpec};
