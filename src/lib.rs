//! Grid Depiction Module
//!
//! Lays out independently drawn 2D structure depictions in a grid and
//! composes them, with optional labels, into a single SVG document.

pub mod config;
pub mod error;
pub mod models;
pub mod grid;
pub mod renderers;
pub mod api;

// Re-export commonly used types
pub use config::{render_config, set_render_config, RenderConfig};
pub use error::{ConfigError, GridError, RenderError};
pub use grid::{compose_grid, compose_grid_with, ComposedGrid, GridDisplayList, DEFAULT_COLUMNS, NO_LABELS};
pub use models::{BoundingBox, Depictable, Depiction, Fragment, Plane, Point, Viewport};
pub use renderers::{ElementEmitter, GraphEmitter};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    let logger_ready = console_log::init_with_level(log::Level::Debug).is_ok();
    #[cfg(not(feature = "console_log"))]
    let logger_ready = false;

    if logger_ready {
        log::info!("Grid depiction WASM module initialized");
    }
}
