//! Core types, configuration, and errors for the Logomark layout engine.
//!
//! This crate provides the foundational types used across all other logomark crates:
//! - Value types (colors, viewboxes, element kinds, placement policies)
//! - The input contract describing a logo composition
//! - Margin settings
//! - Error types

pub mod errors;
pub mod props;
pub mod settings;
pub mod types;

pub use errors::*;
pub use props::*;
pub use settings::*;
pub use types::*;
