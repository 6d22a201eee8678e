//! Shared types for the GKE metrics exporter configuration
//!
//! This crate contains the domain types shared between the configuration
//! crate and the exporter binary.

pub mod error;
pub mod metadata;
pub mod utils;

// Re-export commonly used types
pub use error::{ConfigError, ExporterError, Result};
pub use metadata::GkeMetadata;
