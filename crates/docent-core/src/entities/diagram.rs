use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DiagramKind;

/// Diagram-as-text attached to a lesson.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Diagram {
    #[serde(rename = "type")]
    pub kind: DiagramKind,
    pub code: String,
    pub caption: String,
}
