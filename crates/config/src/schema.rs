//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use types::utils::deserialize_lenient_string;
use types::GkeMetadata;

/// Exporter configuration
///
/// Durations are kept as duration-literal strings (`"60s"`, `"1m0s"`); they
/// are parsed by the export pipeline, not here. A freshly constructed value
/// has every field empty; see [`ExporterConfig::apply_configuration`] for the
/// defaults filled in afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExporterConfig {
    /// How often metrics are pushed
    #[serde(alias = "exportPeriod", deserialize_with = "deserialize_lenient_string")]
    pub export_period: String,
    /// Timeout for retrieving platform metadata
    #[serde(alias = "metadataFetchTimeout", deserialize_with = "deserialize_lenient_string")]
    pub metadata_fetch_timeout: String,
    /// How often metadata is refreshed
    #[serde(alias = "metadataFetchInterval", deserialize_with = "deserialize_lenient_string")]
    pub metadata_fetch_interval: String,
    /// Monitoring service address
    #[serde(alias = "apiEndpoint", deserialize_with = "deserialize_lenient_string")]
    pub api_endpoint: String,
    /// Node metadata attached to every exported series
    #[serde(alias = "gkeMetadata")]
    pub gke_metadata: GkeMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero_value() {
        let config = ExporterConfig::default();
        assert!(config.export_period.is_empty());
        assert!(config.metadata_fetch_timeout.is_empty());
        assert!(config.metadata_fetch_interval.is_empty());
        assert!(config.api_endpoint.is_empty());
        assert_eq!(config.gke_metadata, GkeMetadata::default());
    }

    #[test]
    fn test_deserialize_partial_document() {
        let json = r#"{"exportPeriod": "30s", "gkeMetadata": {"zone": "us-east1-b"}}"#;
        let config: ExporterConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.export_period, "30s");
        assert!(config.api_endpoint.is_empty());
        assert_eq!(config.gke_metadata.zone, "us-east1-b");
    }

    #[test]
    fn test_deserialize_numeric_values() {
        let json = r#"{"export_period": 60, "gke_metadata": {"instance_id": 56781234}}"#;
        let config: ExporterConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.export_period, "60");
        assert_eq!(config.gke_metadata.instance_id, "56781234");
    }

    #[test]
    fn test_serialize_uses_snake_case() {
        let value = serde_json::to_value(ExporterConfig::default()).unwrap();
        assert!(value.get("export_period").is_some());
        assert!(value.get("api_endpoint").is_some());
        assert!(value["gke_metadata"].get("project_id").is_some());
    }
}
