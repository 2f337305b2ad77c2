use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::aggregate::aggregate_partitions;
use crate::entities::{DocCategory, LanguageConfig};

/// On-disk description of a language: its metadata plus the ordered list of
/// partition files holding its categories.
///
/// ```toml
/// id = "kubernetes"
/// label = "Kubernetes"
/// icon = "☸"
/// color = "#326CE5"
/// officialUrl = "https://kubernetes.io/docs/"
/// tagline = "Container orchestration"
/// partitions = ["basics.yaml", "workloads.yaml"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LanguageManifest {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub color: String,
    pub official_url: String,
    pub tagline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_api_id: Option<String>,
    /// Paths relative to the manifest, in aggregation order.
    pub partitions: Vec<String>,
}

impl LanguageManifest {
    /// Build the full config by concatenating `partitions` in order.
    #[must_use]
    pub fn into_config(self, partitions: Vec<Vec<DocCategory>>) -> LanguageConfig {
        LanguageConfig {
            id: self.id,
            label: self.label,
            icon: self.icon,
            color: self.color,
            official_url: self.official_url,
            tagline: self.tagline,
            execution_api_id: self.execution_api_id,
            categories: aggregate_partitions(partitions),
        }
    }
}
