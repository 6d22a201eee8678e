//! Configuration management for the GKE metrics exporter
//!
//! This crate holds the exporter configuration schema, the defaulting rules
//! applied to partially populated records, and the file/environment loader.

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validation;

pub use defaults::*;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validation::*;
