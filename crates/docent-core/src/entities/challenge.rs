use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A hands-on exercise. `solution_code` is expected to complete `starter_code`;
/// that relationship is not checked.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Challenge {
    pub prompt: String,
    pub starter_code: String,
    pub solution_code: String,
    /// Revealed one at a time, in order.
    #[serde(default)]
    pub hints: Vec<String>,
}
