use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::DocEntry;

/// A named grouping of lessons within a language.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocCategory {
    /// Unique within the parent language.
    pub id: String,
    pub label: String,
    pub icon: String,
    /// Display order.
    pub entries: Vec<DocEntry>,
}

impl DocCategory {
    /// First entry with the given id.
    #[must_use]
    pub fn find_entry(&self, id: &str) -> Option<&DocEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}
