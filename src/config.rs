//! Render configuration
//!
//! Font metrics and stroke styling shared by every depiction drawn in one
//! process. A single global instance is read once at the start of each
//! composition; callers that need isolation pass a `RenderConfig` explicitly.

use crate::error::ConfigError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{PoisonError, RwLock};

/// Style configuration for depiction and grid rendering
///
/// All lengths are in document units (the composed SVG declares `cm`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Base font size; label gap and canvas margins scale from it
    pub font_size: f64,

    /// Font family of the grid label layer
    pub label_font_family: String,

    /// Font family of point symbols inside a depiction
    pub symbol_font_family: String,

    /// Stroke width of connections
    pub bond_width: f64,

    /// Stroke color of connections
    pub bond_color: String,

    /// Fill color of point symbols
    pub symbol_color: String,

    /// Radius of the mask cut out of connections around a symbol
    pub mask_radius: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_size: 0.5,
            label_font_family: "sans-serif".to_string(),
            symbol_font_family: "sans-serif".to_string(),
            bond_width: 0.04,
            bond_color: "black".to_string(),
            symbol_color: "black".to_string(),
            mask_radius: 0.3,
        }
    }
}

impl RenderConfig {
    /// Vertical space reserved above a labelled structure
    pub fn label_gap(&self) -> f64 {
        1.25 * self.font_size
    }

    /// Font size of the label layer
    pub fn label_font_size(&self) -> f64 {
        0.75 * self.font_size
    }

    /// Horizontal margin added to the content width
    pub fn width_margin(&self) -> f64 {
        3.0 * self.font_size
    }

    /// Vertical margin added to the content height
    pub fn height_margin(&self) -> f64 {
        2.5 * self.font_size
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML config file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&source)
    }

    /// Check that every length is usable for layout
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "font_size must be a positive number, got {}",
                self.font_size
            )));
        }

        for (name, value) in [("bond_width", self.bond_width), ("mask_radius", self.mask_radius)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.label_font_family.trim().is_empty() {
            return Err(ConfigError::Invalid("label_font_family must not be empty".to_string()));
        }

        Ok(())
    }
}

static RENDER_CONFIG: Lazy<RwLock<RenderConfig>> = Lazy::new(|| RwLock::new(RenderConfig::default()));

/// Snapshot of the process-wide render configuration
pub fn render_config() -> RenderConfig {
    RENDER_CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replace the process-wide render configuration
pub fn set_render_config(config: RenderConfig) -> Result<(), ConfigError> {
    config.validate()?;
    log::debug!("render config updated: font_size={}", config.font_size);
    *RENDER_CONFIG.write().unwrap_or_else(PoisonError::into_inner) = config;
    Ok(())
}
