//! Grid Depiction WASM API
//!
//! Thin JavaScript-facing layer over the grid engine: a displayable
//! `GridDepict` object plus free functions for one-shot composition and
//! render configuration.
//!
//! # Module Structure
//!
//! - `helpers`: serialization and error conversion shared by the bindings
//! - `grid`: `GridDepict` and the free functions

pub mod helpers;
pub mod grid;

pub use grid::{get_render_config_js, grid_depict, set_render_config_js, GridDepict};
