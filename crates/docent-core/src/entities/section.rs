use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A titled block of instructional prose, optionally paired with example code.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Section {
    pub heading: String,
    pub content: String,
    /// Example code, shown verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Syntax tag for `code` (e.g. `yaml`, `bash`, `typescript`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_language: Option<String>,
    /// Expected output of running `code`. Display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analogy: Option<String>,
}

impl Section {
    /// A section whose code can be run and compared against its expected output.
    #[must_use]
    pub const fn is_runnable(&self) -> bool {
        self.code.is_some() && self.output.is_some()
    }
}
