//! Default values and the normalization applied to a loaded configuration

use crate::schema::ExporterConfig;
use tracing::{debug, warn};

/// Default metrics export period
pub const DEFAULT_EXPORT_PERIOD: &str = "1m0s";

/// Default timeout for the platform metadata fetch
pub const DEFAULT_METADATA_FETCH_TIMEOUT: &str = "10m0s";

/// Default metadata refresh interval
pub const DEFAULT_METADATA_FETCH_INTERVAL: &str = "10s";

/// Production monitoring endpoint
pub const DEFAULT_API_ENDPOINT: &str = "monitoring.googleapis.com:443";

/// Staging monitoring endpoint, the one non-default address that is kept
pub const STAGING_API_ENDPOINT: &str = "staging-monitoring.sandbox.googleapis.com:443";

/// Endpoints accepted as-is. Anything else is replaced by [`DEFAULT_API_ENDPOINT`].
pub const RECOGNIZED_API_ENDPOINTS: &[&str] = &[DEFAULT_API_ENDPOINT, STAGING_API_ENDPOINT];

/// Whether `endpoint` is kept unchanged by normalization
pub fn is_recognized_endpoint(endpoint: &str) -> bool {
    RECOGNIZED_API_ENDPOINTS.contains(&endpoint)
}

impl ExporterConfig {
    /// Fill unset fields with their defaults, in place.
    ///
    /// Duration fields are only touched when empty. The API endpoint is reset
    /// to [`DEFAULT_API_ENDPOINT`] unless it already holds one of
    /// [`RECOGNIZED_API_ENDPOINTS`]; custom endpoints are discarded. The GKE
    /// metadata is never modified. Applying this twice is the same as
    /// applying it once.
    pub fn apply_configuration(&mut self) {
        fill_if_empty("export_period", &mut self.export_period, DEFAULT_EXPORT_PERIOD);
        fill_if_empty(
            "metadata_fetch_timeout",
            &mut self.metadata_fetch_timeout,
            DEFAULT_METADATA_FETCH_TIMEOUT,
        );
        fill_if_empty(
            "metadata_fetch_interval",
            &mut self.metadata_fetch_interval,
            DEFAULT_METADATA_FETCH_INTERVAL,
        );

        if !is_recognized_endpoint(&self.api_endpoint) {
            if self.api_endpoint.is_empty() {
                debug!(field = "api_endpoint", default = DEFAULT_API_ENDPOINT, "Applying default");
            } else {
                warn!(
                    endpoint = %self.api_endpoint,
                    replacement = DEFAULT_API_ENDPOINT,
                    "Unrecognized API endpoint, using production endpoint"
                );
            }
            self.api_endpoint = DEFAULT_API_ENDPOINT.to_string();
        }
    }

    /// By-value form of [`ExporterConfig::apply_configuration`]
    pub fn normalized(mut self) -> Self {
        self.apply_configuration();
        self
    }
}

fn fill_if_empty(field: &'static str, value: &mut String, default: &str) {
    if value.is_empty() {
        debug!(field, default, "Applying default");
        *value = default.to_string();
    }
}
