//! Renderers module for grid depiction
//!
//! This module contains the output side of composition: SVG element
//! emission for fragments and the composed document writer.

pub mod svg;

// Re-export commonly used types
pub use svg::{ElementEmitter, GraphEmitter, SvgDocument};
