//! Error types for grid composition
//!
//! Defines the error hierarchy for composition failures: input shape errors
//! detected before any item is touched, and render failures reported by an
//! item's own renderer.

use thiserror::Error;

/// Top-level composition error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Labels were supplied but their count differs from the item count
    #[error("Label count {labels} does not match item count {items}")]
    ShapeMismatch { labels: usize, items: usize },

    /// Layout parameters are unusable (e.g. zero columns)
    #[error("Invalid grid configuration: {0}")]
    InvalidConfiguration(String),

    /// An item failed to render; every plane was restored before returning
    #[error("Item {index} failed to render: {source}")]
    RenderFailure {
        index: usize,
        #[source]
        source: RenderError,
    },
}

/// Errors raised while turning one item into a fragment
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// The item has no points to draw
    #[error("Nothing to render: plane is empty")]
    EmptyPlane,

    /// A connection references a point id absent from the plane
    #[error("Connection references unknown point {0}")]
    MissingPoint(usize),

    /// Renderer-specific failure
    #[error("{0}")]
    Failed(String),
}

/// Errors raised while loading or validating a render configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Values parsed but are out of range
    #[error("Invalid config value: {0}")]
    Invalid(String),
}
