//! Error types for the Logomark engine.

use crate::types::{ElementKind, NodeId};
use thiserror::Error;

/// Top-level error type for the Logomark engine.
#[derive(Debug, Error)]
pub enum LogomarkError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors in the input contract or settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid JSON: {reason}")]
    InvalidJson { reason: String },

    #[error("Invalid color format: {value}")]
    InvalidColor { value: String },

    #[error("Invalid {field}: {value} (must be finite and non-negative)")]
    InvalidDimension { field: &'static str, value: f64 },

    /// Recovered by the layout pipeline, which falls back to the stacked placement.
    #[error("Unknown alignment mode: {mode}")]
    InvalidAlignmentMode { mode: String },
}

/// Errors raised by a drawing surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Malformed vector markup: {reason}")]
    MalformedMarkup { reason: String },

    #[error("Unknown surface node {node}")]
    UnknownNode { node: NodeId },
}

/// Errors during layout computation.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The surface could not report a bounding box for an element that should be attached.
    #[error("Missing measurement for {element}: {reason}")]
    MissingMeasurement { element: ElementKind, reason: String },

    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),
}

/// Errors during export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Scene has not been prepared with a container")]
    Unprepared,

    #[error("Unknown node {node} referenced by the scene")]
    UnknownNode { node: NodeId },

    #[error("Write failed: {0}")]
    Fmt(#[from] std::fmt::Error),
}
