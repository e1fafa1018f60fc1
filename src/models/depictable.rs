//! The contract between the grid layout and the items it places

use super::fragment::Fragment;
use super::geometry::{fix_plane_mean, Plane};
use crate::config::RenderConfig;
use crate::error::RenderError;

/// An item that owns a 2D plane and can render itself at its current
/// coordinates.
///
/// The grid moves items by writing to their plane, renders them, and puts the
/// original plane back. Implementors must render from the plane alone so the
/// shifted coordinates are what ends up in the fragment.
pub trait Depictable {
    fn plane(&self) -> &Plane;

    fn plane_mut(&mut self) -> &mut Plane;

    /// Move the item so its left edge is at `target_x` and its vertical
    /// center at `target_y`, returning the new rightmost x.
    fn recenter(&mut self, target_x: f64, target_y: f64) -> f64 {
        fix_plane_mean(self.plane_mut(), target_x, target_y)
    }

    /// Render the current coordinates into an embeddable fragment
    fn render(&self, config: &RenderConfig) -> Result<Fragment, RenderError>;
}

impl<T: Depictable + ?Sized> Depictable for Box<T> {
    fn plane(&self) -> &Plane {
        (**self).plane()
    }

    fn plane_mut(&mut self) -> &mut Plane {
        (**self).plane_mut()
    }

    fn recenter(&mut self, target_x: f64, target_y: f64) -> f64 {
        (**self).recenter(target_x, target_y)
    }

    fn render(&self, config: &RenderConfig) -> Result<Fragment, RenderError> {
        (**self).render(config)
    }
}

impl<T: Depictable + ?Sized> Depictable for &mut T {
    fn plane(&self) -> &Plane {
        (**self).plane()
    }

    fn plane_mut(&mut self) -> &mut Plane {
        (**self).plane_mut()
    }

    fn recenter(&mut self, target_x: f64, target_y: f64) -> f64 {
        (**self).recenter(target_x, target_y)
    }

    fn render(&self, config: &RenderConfig) -> Result<Fragment, RenderError> {
        (**self).render(config)
    }
}
