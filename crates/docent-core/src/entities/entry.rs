use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Challenge, Diagram, QuizQuestion, Section};
use crate::enums::Difficulty;

/// A single lesson.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocEntry {
    /// Unique within the parent category.
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Reading order.
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Vec<QuizQuestion>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<Challenge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram: Option<Diagram>,
}

impl DocEntry {
    /// Case-insensitive tag match.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    #[must_use]
    pub fn quiz_len(&self) -> usize {
        self.quiz.as_ref().map_or(0, Vec::len)
    }

    pub fn runnable_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.is_runnable())
    }
}
