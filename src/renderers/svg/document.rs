//! SVG document generation
//!
//! Line-oriented writer for one composed document: header, body elements,
//! a single grouped label layer, and the closing tag.

use super::{escape, svg_number};
use crate::models::Viewport;

pub struct SvgDocument {
    lines: Vec<String>,
}

impl SvgDocument {
    /// Start a document sized `width` x `height` cm over the given viewport
    pub fn open(viewport: &Viewport) -> Self {
        let header = format!(
            "<svg width=\"{w}cm\" height=\"{h}cm\" viewBox=\"{} {} {w} {h}\" \
             xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" version=\"1.1\">",
            svg_number(viewport.min_x),
            svg_number(viewport.min_y),
            w = svg_number(viewport.width),
            h = svg_number(viewport.height),
        );
        Self { lines: vec![header] }
    }

    pub fn extend<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.lines.extend(elements);
    }

    /// Write every label in one group sharing a single font declaration
    pub fn label_layer(&mut self, font_size: f64, font_family: &str, labels: &[String]) {
        self.lines.push(format!(
            "  <g font-size=\"{}\" font-family=\"{}\">",
            svg_number(font_size),
            escape(font_family),
        ));
        self.lines.extend(labels.iter().cloned());
        self.lines.push("  </g>".to_string());
    }

    pub fn finish(mut self) -> String {
        self.lines.push("</svg>".to_string());
        self.lines.join("\n")
    }
}

/// A single-line label anchored at its baseline start
pub fn label_element(x: f64, y: f64, text: &str) -> String {
    format!(
        "    <text x=\"{}\" y=\"{}\">{}</text>",
        svg_number(x),
        svg_number(y),
        escape(text)
    )
}
