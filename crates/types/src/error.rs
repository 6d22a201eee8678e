//! Error types for the exporter configuration system

use thiserror::Error;

/// Main error type for the exporter
#[derive(Error, Debug)]
pub enum ExporterError {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Platform metadata errors
    #[error("Metadata error: {0}")]
    Metadata(String),
}

/// Result type alias for exporter operations
pub type Result<T> = std::result::Result<T, ExporterError>;

/// Configuration specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Parse error
    #[error("Configuration parse error: {0}")]
    ParseError(String),

    /// File extension has no matching provider
    #[error("Unsupported configuration format: {path}")]
    UnsupportedFormat { path: String },

    /// Validation error
    #[error("Configuration validation error: {field}: {message}")]
    ValidationError { field: String, message: String },
}

impl From<ConfigError> for ExporterError {
    fn from(err: ConfigError) -> Self {
        ExporterError::Config(err.to_string())
    }
}
