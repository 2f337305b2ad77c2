use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{DocCategory, DocEntry};
use crate::enums::Difficulty;

/// One documented technology and its full content tree.
///
/// This is the unit handed to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LanguageConfig {
    /// Unique across the registry.
    pub id: String,
    pub label: String,
    pub icon: String,
    pub color: String,
    pub official_url: String,
    pub tagline: String,
    /// Identity of the code-execution backend that runs this language's samples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_api_id: Option<String>,
    /// Display order.
    pub categories: Vec<DocCategory>,
}

impl LanguageConfig {
    #[must_use]
    pub fn find_category(&self, id: &str) -> Option<&DocCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn find_entry(&self, category_id: &str, entry_id: &str) -> Option<&DocEntry> {
        self.find_category(category_id)
            .and_then(|c| c.find_entry(entry_id))
    }

    /// Every entry paired with its category, in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&DocCategory, &DocEntry)> {
        self.categories
            .iter()
            .flat_map(|c| c.entries.iter().map(move |e| (c, e)))
    }

    pub fn entries_by_tag<'a>(
        &'a self,
        tag: &'a str,
    ) -> impl Iterator<Item = (&'a DocCategory, &'a DocEntry)> {
        self.entries().filter(move |(_, e)| e.has_tag(tag))
    }

    pub fn entries_by_difficulty(
        &self,
        difficulty: Difficulty,
    ) -> impl Iterator<Item = (&DocCategory, &DocEntry)> {
        self.entries().filter(move |(_, e)| e.difficulty == difficulty)
    }

    #[must_use]
    pub fn is_runnable(&self) -> bool {
        self.execution_api_id.is_some()
    }
}
