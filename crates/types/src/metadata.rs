//! Platform metadata attached to exported metrics

use crate::error::{ExporterError, Result};
use crate::utils::deserialize_lenient_string;
use serde::{Deserialize, Serialize};

/// Identity of the GKE node the exporter runs on.
///
/// All fields are opaque strings. The zero value (every field empty) is a
/// valid record; it simply means nothing has been fetched yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GkeMetadata {
    /// GCP project ID
    #[serde(alias = "projectID", deserialize_with = "deserialize_lenient_string")]
    pub project_id: String,
    /// Compute zone
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub zone: String,
    /// GCE instance ID
    #[serde(alias = "instanceID", deserialize_with = "deserialize_lenient_string")]
    pub instance_id: String,
    /// GCE instance name
    #[serde(alias = "instanceName", deserialize_with = "deserialize_lenient_string")]
    pub instance_name: String,
    /// Cluster name
    #[serde(alias = "clusterName", deserialize_with = "deserialize_lenient_string")]
    pub cluster_name: String,
    /// Cluster hash
    #[serde(alias = "clusterHash", deserialize_with = "deserialize_lenient_string")]
    pub cluster_hash: String,
    /// Node pool name
    #[serde(alias = "nodePoolName", deserialize_with = "deserialize_lenient_string")]
    pub node_pool_name: String,
    /// Node OS image version
    #[serde(alias = "osVersion", deserialize_with = "deserialize_lenient_string")]
    pub os_version: String,
    /// Node kernel version
    #[serde(alias = "kernelVersion", deserialize_with = "deserialize_lenient_string")]
    pub kernel_version: String,
}

impl GkeMetadata {
    /// Names of the fields that are still empty, in declaration order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("project_id", &self.project_id),
            ("zone", &self.zone),
            ("instance_id", &self.instance_id),
            ("instance_name", &self.instance_name),
            ("cluster_name", &self.cluster_name),
            ("cluster_hash", &self.cluster_hash),
            ("node_pool_name", &self.node_pool_name),
            ("os_version", &self.os_version),
            ("kernel_version", &self.kernel_version),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Whether any field is still empty
    pub fn has_missing_field(&self) -> bool {
        !self.missing_fields().is_empty()
    }

    /// Fail with [`ExporterError::Metadata`] when any field is empty
    pub fn ensure_complete(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ExporterError::Metadata(format!(
                "missing fields: {}",
                missing.join(", ")
            )))
        }
    }
}
