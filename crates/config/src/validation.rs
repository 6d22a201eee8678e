//! Configuration validation utilities

use crate::defaults::{is_recognized_endpoint, STAGING_API_ENDPOINT};
use crate::schema::ExporterConfig;
use std::fmt;
use types::{ConfigError, Result};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration.
    ///
    /// Meant to run after [`ExporterConfig::apply_configuration`]; a normalized
    /// configuration never produces errors, only warnings.
    pub fn validate(config: &ExporterConfig) -> ValidationReport {
        let mut report = ValidationReport::default();

        Self::validate_durations(config, &mut report);
        Self::validate_endpoint(config, &mut report);
        Self::validate_metadata(config, &mut report);

        report
    }

    fn validate_durations(config: &ExporterConfig, report: &mut ValidationReport) {
        let durations = [
            ("export_period", &config.export_period),
            ("metadata_fetch_timeout", &config.metadata_fetch_timeout),
            ("metadata_fetch_interval", &config.metadata_fetch_interval),
        ];

        for (field, value) in durations {
            if value.is_empty() {
                report.add_error(field, "Duration cannot be empty");
            }
        }
    }

    fn validate_endpoint(config: &ExporterConfig, report: &mut ValidationReport) {
        if config.api_endpoint.is_empty() {
            report.add_error("api_endpoint", "API endpoint cannot be empty");
        } else if !is_recognized_endpoint(&config.api_endpoint) {
            report.add_error(
                "api_endpoint",
                &format!("Unrecognized API endpoint: {}", config.api_endpoint),
            );
        } else if config.api_endpoint == STAGING_API_ENDPOINT {
            report.add_warning("api_endpoint", "Exporting to the staging monitoring endpoint");
        }
    }

    fn validate_metadata(config: &ExporterConfig, report: &mut ValidationReport) {
        let missing = config.gke_metadata.missing_fields();
        if !missing.is_empty() {
            report.add_warning(
                "gke_metadata",
                &format!("Metadata fields not set: {}", missing.join(", ")),
            );
        }
    }
}

/// Errors and warnings collected by [`ConfigValidator`]
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

/// A single finding, keyed by the configuration field it concerns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationReport {
    fn add_error(&mut self, field: &str, message: &str) {
        self.errors.push(ValidationIssue::new(field, message));
    }

    fn add_warning(&mut self, field: &str, message: &str) {
        self.warnings.push(ValidationIssue::new(field, message));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn summary(&self) -> String {
        format!("Validation: {} errors, {} warnings", self.errors.len(), self.warnings.len())
    }

    /// Turn the first error, if any, into a [`ConfigError::ValidationError`]
    pub fn into_result(self) -> Result<()> {
        match self.errors.into_iter().next() {
            Some(issue) => Err(ConfigError::ValidationError {
                field: issue.field,
                message: issue.message,
            }
            .into()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::GkeMetadata;

    fn full_metadata() -> GkeMetadata {
        GkeMetadata {
            project_id: "some-gcp-project".to_string(),
            zone: "us-central1-a".to_string(),
            instance_id: "56781234".to_string(),
            instance_name: "some-gce-instance".to_string(),
            cluster_name: "foo-cluster".to_string(),
            cluster_hash: "a1b2c3d4".to_string(),
            node_pool_name: "cl1m4te-ch4ng3".to_string(),
            os_version: "cos-85-1234".to_string(),
            kernel_version: "5.4.0".to_string(),
        }
    }

    #[test]
    fn test_normalized_config_is_valid() {
        let config = ExporterConfig {
            gke_metadata: full_metadata(),
            ..Default::default()
        }
        .normalized();

        let report = ConfigValidator::validate(&config);
        assert!(!report.has_errors());
        assert!(report.warnings.is_empty());
        assert_eq!(report.summary(), "Validation: 0 errors, 0 warnings");
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_unnormalized_config_has_errors() {
        let report = ConfigValidator::validate(&ExporterConfig::default());
        assert!(report.has_errors());
        assert_eq!(report.errors.len(), 4);
        assert_eq!(report.errors[0].field, "export_period");
        assert_eq!(report.errors[3].field, "api_endpoint");

        let err = report.into_result().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Configuration validation error: export_period: Duration cannot be empty"
        );
    }

    #[test]
    fn test_custom_endpoint_is_error() {
        let config = ExporterConfig {
            api_endpoint: "example.com:443".to_string(),
            ..Default::default()
        };
        let report = ConfigValidator::validate(&config);
        assert!(report
            .errors
            .iter()
            .any(|issue| issue.field == "api_endpoint" && issue.message.contains("example.com:443")));
    }

    #[test]
    fn test_staging_endpoint_warns() {
        let config = ExporterConfig {
            api_endpoint: STAGING_API_ENDPOINT.to_string(),
            gke_metadata: full_metadata(),
            ..Default::default()
        }
        .normalized();

        let report = ConfigValidator::validate(&config);
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(
            report.warnings[0].to_string(),
            "api_endpoint: Exporting to the staging monitoring endpoint"
        );
    }

    #[test]
    fn test_missing_metadata_warns() {
        let mut metadata = full_metadata();
        metadata.cluster_hash.clear();
        let config = ExporterConfig {
            gke_metadata: metadata,
            ..Default::default()
        }
        .normalized();

        let report = ConfigValidator::validate(&config);
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].message, "Metadata fields not set: cluster_hash");
    }
}
