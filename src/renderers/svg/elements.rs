//! SVG element emission
//!
//! Turns one fragment into the elements it contributes to a shared canvas.

use super::{escape, svg_number};
use crate::config::RenderConfig;
use crate::models::{Fragment, Viewport};

/// Emits the SVG elements of one fragment inside a composed document
pub trait ElementEmitter {
    fn emit(&self, fragment: &Fragment, viewport: &Viewport) -> Vec<String>;
}

/// Default emitter: definitions and masks in `<defs>`, connections in one
/// stroked group, then point elements on top.
#[derive(Clone, Debug)]
pub struct GraphEmitter {
    bond_color: String,
    bond_width: f64,
}

impl GraphEmitter {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            bond_color: config.bond_color.clone(),
            bond_width: config.bond_width,
        }
    }
}

impl ElementEmitter for GraphEmitter {
    fn emit(&self, fragment: &Fragment, viewport: &Viewport) -> Vec<String> {
        let mut svg = Vec::new();
        let uid = escape(&fragment.uid);
        let masked = !fragment.masks.is_empty();

        if masked || !fragment.definitions.is_empty() {
            svg.push("  <defs>".to_string());
            svg.extend(fragment.definitions.iter().cloned());
            if masked {
                // Mask starts fully visible over the whole canvas
                svg.push(format!("    <mask id=\"mask-{}\">", uid));
                svg.push(format!(
                    "      <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"white\"/>",
                    svg_number(viewport.min_x),
                    svg_number(viewport.min_y),
                    svg_number(viewport.width),
                    svg_number(viewport.height),
                ));
                svg.extend(fragment.masks.iter().cloned());
                svg.push("    </mask>".to_string());
            }
            svg.push("  </defs>".to_string());
        }

        if !fragment.connections.is_empty() {
            let mask = if masked {
                format!(" mask=\"url(#mask-{})\"", uid)
            } else {
                String::new()
            };
            svg.push(format!(
                "  <g fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"{}>",
                escape(&self.bond_color),
                svg_number(self.bond_width),
                mask,
            ));
            svg.extend(fragment.connections.iter().cloned());
            svg.push("  </g>".to_string());
        }

        svg.extend(fragment.points.iter().cloned());
        svg
    }
}
