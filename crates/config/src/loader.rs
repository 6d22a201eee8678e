//! Configuration loader implementation

use crate::schema::ExporterConfig;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Json, Yaml},
    Figment,
};
use std::path::Path;
use tracing::{debug, info};
use types::ConfigError;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "GKE_EXPORTER_";

/// Configuration loader that handles JSON/YAML files and environment variables
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file and environment variables, then apply defaults
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<ExporterConfig> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            return Err(ConfigError::FileNotFound {
                path: config_path.display().to_string(),
            }
            .into());
        }

        let figment = match config_path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Figment::new().merge(Json::file(config_path)),
            Some("yaml") | Some("yml") => Figment::new().merge(Yaml::file(config_path)),
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: config_path.display().to_string(),
                }
                .into())
            }
        };

        // GKE_EXPORTER_API_ENDPOINT, GKE_EXPORTER_GKE_METADATA__PROJECT_ID, ...
        let config: ExporterConfig = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
            .with_context(|| format!("Failed to parse configuration {}", config_path.display()))?;

        info!(path = %config_path.display(), "Configuration loaded");
        Ok(config.normalized())
    }

    /// Load configuration from a JSON string (for testing)
    pub fn load_from_str(json_content: &str) -> Result<ExporterConfig> {
        let config: ExporterConfig = Figment::new()
            .merge(Json::string(json_content))
            .extract()
            .context("Failed to parse configuration from string")?;

        debug!("Configuration loaded from string");
        Ok(config.normalized())
    }

    /// Get default configuration
    pub fn default() -> ExporterConfig {
        ExporterConfig::default().normalized()
    }

    /// Create example configuration file
    pub fn create_example<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let json_content = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default configuration")?;

        std::fs::write(path.as_ref(), json_content)
            .context("Failed to write example configuration file")?;

        Ok(())
    }
}
