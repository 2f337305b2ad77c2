//! Closed enumerations used by the content schema and reports.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! so authored content files and exported JSON share one spelling.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Difficulty classification of a lesson.
///
/// Ordered from easiest to hardest, so `Difficulty::Beginner < Difficulty::Advanced`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Every variant, easiest first.
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::Validation(format!("unknown difficulty: {s}")))
    }
}

// ---------------------------------------------------------------------------
// DiagramKind
// ---------------------------------------------------------------------------

/// Diagram-as-text dialect. Only Mermaid is rendered today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DiagramKind {
    Mermaid,
}

impl DiagramKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mermaid => "mermaid",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// How serious a content-integrity issue is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LintRule
// ---------------------------------------------------------------------------

/// Content-integrity rule identifiers reported by `docent-lint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LintRule {
    DuplicateLanguageId,
    DuplicateCategoryId,
    DuplicateEntryId,
    BlankIdentifier,
    EmptySections,
    EmptyQuiz,
    EmptyQuizOptions,
    CorrectIndexOutOfRange,
    EmptyHints,
    DanglingExecutionApi,
}

impl LintRule {
    /// Default severity of an issue raised under this rule.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::EmptyQuiz => Severity::Warning,
            Self::DuplicateLanguageId
            | Self::DuplicateCategoryId
            | Self::DuplicateEntryId
            | Self::BlankIdentifier
            | Self::EmptySections
            | Self::EmptyQuizOptions
            | Self::CorrectIndexOutOfRange
            | Self::EmptyHints
            | Self::DanglingExecutionApi => Severity::Error,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DuplicateLanguageId => "duplicate_language_id",
            Self::DuplicateCategoryId => "duplicate_category_id",
            Self::DuplicateEntryId => "duplicate_entry_id",
            Self::BlankIdentifier => "blank_identifier",
            Self::EmptySections => "empty_sections",
            Self::EmptyQuiz => "empty_quiz",
            Self::EmptyQuizOptions => "empty_quiz_options",
            Self::CorrectIndexOutOfRange => "correct_index_out_of_range",
            Self::EmptyHints => "empty_hints",
            Self::DanglingExecutionApi => "dangling_execution_api",
        }
    }
}

impl fmt::Display for LintRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
