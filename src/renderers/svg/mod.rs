//! SVG rendering output
//!
//! This module turns fragments and label elements into one composed SVG
//! document.

pub mod elements;
pub mod document;

pub use elements::{ElementEmitter, GraphEmitter};
pub use document::{label_element, SvgDocument};

use std::borrow::Cow;

/// Format a coordinate with two decimals; values that round to zero print as `0.00`
pub fn svg_number(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    match formatted.as_str() {
        "-0.00" => "0.00".to_string(),
        _ => formatted,
    }
}

/// Escape text for use in SVG content or attribute values
pub fn escape(raw: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(raw)
}
