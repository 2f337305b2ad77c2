//! Report types returned as JSON by `docent` commands.
//!
//! These structs define the shape of JSON output for `docent stats`,
//! `docent lint`, and `docent verify`.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::LanguageConfig;
use crate::enums::{Difficulty, LintRule, Severity};

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Entry counts per difficulty.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DifficultyCounts {
    pub beginner: u32,
    pub intermediate: u32,
    pub advanced: u32,
}

impl DifficultyCounts {
    fn bump(&mut self, difficulty: Difficulty) {
        match difficulty {
            Difficulty::Beginner => self.beginner += 1,
            Difficulty::Intermediate => self.intermediate += 1,
            Difficulty::Advanced => self.advanced += 1,
        }
    }
}

/// Response from `docent stats`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContentStats {
    pub language: String,
    pub categories: u32,
    pub entries: u32,
    pub sections: u32,
    pub runnable_sections: u32,
    pub quiz_questions: u32,
    pub challenges: u32,
    pub diagrams: u32,
    pub by_difficulty: DifficultyCounts,
}

impl ContentStats {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn for_language(config: &LanguageConfig) -> Self {
        let mut stats = Self {
            language: config.id.clone(),
            categories: config.categories.len() as u32,
            entries: 0,
            sections: 0,
            runnable_sections: 0,
            quiz_questions: 0,
            challenges: 0,
            diagrams: 0,
            by_difficulty: DifficultyCounts::default(),
        };

        for (_, entry) in config.entries() {
            stats.entries += 1;
            stats.sections += entry.sections.len() as u32;
            stats.runnable_sections += entry.runnable_sections().count() as u32;
            stats.quiz_questions += entry.quiz_len() as u32;
            stats.challenges += u32::from(entry.challenge.is_some());
            stats.diagrams += u32::from(entry.diagram.is_some());
            stats.by_difficulty.bump(entry.difficulty);
        }

        stats
    }
}

// ---------------------------------------------------------------------------
// Lint
// ---------------------------------------------------------------------------

/// A single content-integrity finding.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LintIssue {
    pub rule: LintRule,
    pub severity: Severity,
    /// Slash-separated location, e.g. `kubernetes/pods/pod-basics/quiz[1]`.
    pub path: String,
    pub message: String,
}

impl LintIssue {
    pub fn new(rule: LintRule, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: rule.severity(),
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Response from `docent lint`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LintReport {
    pub languages_checked: u32,
    pub categories_checked: u32,
    pub entries_checked: u32,
    pub issues: Vec<LintIssue>,
    pub checked_at: DateTime<Utc>,
}

impl LintReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    pub fn issues_for(&self, rule: LintRule) -> impl Iterator<Item = &LintIssue> {
        self.issues.iter().filter(move |i| i.rule == rule)
    }
}

// ---------------------------------------------------------------------------
// Verify
// ---------------------------------------------------------------------------

/// Which kind of sample was executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SampleKind {
    Section,
    ChallengeSolution,
}

/// A sample whose execution did not match what the lesson shows.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SampleMismatch {
    pub path: String,
    pub kind: SampleKind,
    pub expected: Option<String>,
    pub actual: Option<String>,
    pub reason: String,
}

/// Response from `docent verify`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VerifyReport {
    pub language: String,
    pub execution_api_id: Option<String>,
    pub checked: u32,
    pub passed: u32,
    pub mismatches: Vec<SampleMismatch>,
    pub checked_at: DateTime<Utc>,
}

impl VerifyReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}
