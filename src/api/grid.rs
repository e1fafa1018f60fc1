//! JS-facing grid depiction
//!
//! `GridDepict` holds a set of depictions, optional labels and a column
//! count, and composes them on demand for display.

use wasm_bindgen::prelude::*;
use super::helpers::{deserialize, serialize, to_js_error};
use crate::config::{render_config, set_render_config, RenderConfig};
use crate::error::GridError;
use crate::grid::{compose_grid_with, ComposedGrid, DEFAULT_COLUMNS};
use crate::models::Depiction;
use crate::renderers::svg::GraphEmitter;

/// Grid of depictions ready to be displayed
#[wasm_bindgen]
pub struct GridDepict {
    depictions: Vec<Depiction>,
    labels: Option<Vec<String>>,
    cols: usize,
}

#[wasm_bindgen]
impl GridDepict {
    /// Create a grid from an array of depictions and optional labels
    #[wasm_bindgen(constructor)]
    pub fn new(depictions: JsValue, labels: JsValue, cols: Option<usize>) -> Result<GridDepict, JsValue> {
        let depictions: Vec<Depiction> = deserialize(depictions, "Invalid depictions")?;
        let labels: Option<Vec<String>> = deserialize(labels, "Invalid labels")?;
        Ok(Self::from_parts(depictions, labels, cols.unwrap_or(DEFAULT_COLUMNS)))
    }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Composed SVG document
    #[wasm_bindgen(js_name = renderSvg)]
    pub fn render_svg(&mut self) -> Result<String, JsValue> {
        self.compose().map(|composed| composed.svg).map_err(to_js_error)
    }

    /// Placement of every item, as a plain JS object
    #[wasm_bindgen(js_name = layout)]
    pub fn layout(&mut self) -> Result<JsValue, JsValue> {
        let composed = self.compose().map_err(to_js_error)?;
        serialize(&composed.display, "Failed to serialize layout")
    }
}

impl GridDepict {
    pub fn from_parts(depictions: Vec<Depiction>, labels: Option<Vec<String>>, cols: usize) -> Self {
        Self {
            depictions,
            labels,
            cols,
        }
    }

    pub fn depictions(&self) -> &[Depiction] {
        &self.depictions
    }

    /// Compose with the current global render configuration
    pub fn compose(&mut self) -> Result<ComposedGrid, GridError> {
        let config = render_config();
        compose_grid_with(
            &mut self.depictions,
            self.labels.as_deref(),
            self.cols,
            &config,
            &GraphEmitter::new(&config),
        )
    }
}

/// One-shot composition: depictions and labels in, SVG out
#[wasm_bindgen(js_name = gridDepict)]
pub fn grid_depict(depictions: JsValue, labels: JsValue, cols: Option<usize>) -> Result<String, JsValue> {
    GridDepict::new(depictions, labels, cols)?.render_svg()
}

/// Replace the global render configuration from a JS object
#[wasm_bindgen(js_name = setRenderConfig)]
pub fn set_render_config_js(config: JsValue) -> Result<(), JsValue> {
    let config: RenderConfig = deserialize(config, "Invalid render config")?;
    set_render_config(config).map_err(to_js_error)
}

/// Current global render configuration
#[wasm_bindgen(js_name = getRenderConfig)]
pub fn get_render_config_js() -> Result<JsValue, JsValue> {
    serialize(&render_config(), "Failed to serialize render config")
}
