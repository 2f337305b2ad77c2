//! # docent-lint
//!
//! Content-integrity checks run at authoring/CI time.
//!
//! Aggregation never rejects anything, so the invariants the renderer relies
//! on are enforced here instead:
//! - ids unique per scope (language in the registry, category in a language,
//!   entry in a category) and never blank
//! - every entry has at least one section
//! - quiz questions have options and a `correctIndex` inside them
//! - challenges carry at least one hint
//! - `executionApiId` names a registered execution backend

use std::collections::HashMap;

use chrono::Utc;
use docent_core::entities::{DocCategory, DocEntry, LanguageConfig};
use docent_core::enums::LintRule;
use docent_core::responses::{LintIssue, LintReport};

/// Knobs for rules that depend on the host application.
#[derive(Debug, Clone, Default)]
pub struct LintOptions {
    /// Execution backend ids the host registers.
    pub registered_backends: Vec<String>,
    /// Check `executionApiId` even when `registered_backends` is empty,
    /// which makes every linked language dangling.
    pub require_registered_backends: bool,
}

impl LintOptions {
    #[must_use]
    pub fn with_backends<I, S>(backends: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            registered_backends: backends.into_iter().map(Into::into).collect(),
            require_registered_backends: false,
        }
    }

    fn checks_backends(&self) -> bool {
        self.require_registered_backends || !self.registered_backends.is_empty()
    }
}

/// Lint every language and the registry-level id uniqueness.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn lint_registry(languages: &[LanguageConfig], options: &LintOptions) -> LintReport {
    let mut issues = Vec::new();

    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    for (index, language) in languages.iter().enumerate() {
        if let Some(first) = first_seen.get(language.id.as_str()) {
            issues.push(LintIssue::new(
                LintRule::DuplicateLanguageId,
                &language.id,
                format!(
                    "language id '{}' at position {index} duplicates position {first}",
                    language.id
                ),
            ));
        } else {
            first_seen.insert(&language.id, index);
        }
    }

    for language in languages {
        issues.extend(lint_language(language, options));
    }

    let categories_checked = languages.iter().map(|l| l.categories.len()).sum::<usize>();
    let entries_checked = languages.iter().map(|l| l.entries().count()).sum::<usize>();

    let report = LintReport {
        languages_checked: languages.len() as u32,
        categories_checked: categories_checked as u32,
        entries_checked: entries_checked as u32,
        issues,
        checked_at: Utc::now(),
    };

    tracing::debug!(
        languages = report.languages_checked,
        errors = report.error_count(),
        warnings = report.warning_count(),
        "lint finished"
    );
    report
}

/// Lint one language tree.
#[must_use]
pub fn lint_language(language: &LanguageConfig, options: &LintOptions) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    let path = language.id.as_str();

    if is_blank(&language.id) {
        issues.push(LintIssue::new(
            LintRule::BlankIdentifier,
            path,
            "language id is blank",
        ));
    }

    if let Some(api) = &language.execution_api_id {
        if options.checks_backends() && !options.registered_backends.contains(api) {
            issues.push(LintIssue::new(
                LintRule::DanglingExecutionApi,
                path,
                format!("executionApiId '{api}' is not a registered execution backend"),
            ));
        }
    }

    check_unique(
        language.categories.iter().map(|c| c.id.as_str()),
        path,
        LintRule::DuplicateCategoryId,
        "category",
        &mut issues,
    );

    for category in &language.categories {
        lint_category(category, path, &mut issues);
    }

    issues
}

fn lint_category(category: &DocCategory, parent: &str, issues: &mut Vec<LintIssue>) {
    let path = format!("{parent}/{}", category.id);

    if is_blank(&category.id) {
        issues.push(LintIssue::new(
            LintRule::BlankIdentifier,
            &path,
            "category id is blank",
        ));
    }

    check_unique(
        category.entries.iter().map(|e| e.id.as_str()),
        &path,
        LintRule::DuplicateEntryId,
        "entry",
        issues,
    );

    for entry in &category.entries {
        lint_entry(entry, &path, issues);
    }
}

fn lint_entry(entry: &DocEntry, parent: &str, issues: &mut Vec<LintIssue>) {
    let path = format!("{parent}/{}", entry.id);

    if is_blank(&entry.id) {
        issues.push(LintIssue::new(
            LintRule::BlankIdentifier,
            &path,
            "entry id is blank",
        ));
    }

    if entry.sections.is_empty() {
        issues.push(LintIssue::new(
            LintRule::EmptySections,
            &path,
            "entry has no sections",
        ));
    }

    if let Some(quiz) = &entry.quiz {
        if quiz.is_empty() {
            issues.push(LintIssue::new(
                LintRule::EmptyQuiz,
                &path,
                "quiz is present but has no questions",
            ));
        }

        for (index, question) in quiz.iter().enumerate() {
            let question_path = format!("{path}/quiz[{index}]");
            if question.options.is_empty() {
                issues.push(LintIssue::new(
                    LintRule::EmptyQuizOptions,
                    &question_path,
                    "quiz question has no options",
                ));
            } else if !question.has_valid_answer() {
                issues.push(LintIssue::new(
                    LintRule::CorrectIndexOutOfRange,
                    &question_path,
                    format!(
                        "correctIndex {} is out of range for {} options",
                        question.correct_index,
                        question.options.len()
                    ),
                ));
            }
        }
    }

    if let Some(challenge) = &entry.challenge {
        if challenge.hints.is_empty() {
            issues.push(LintIssue::new(
                LintRule::EmptyHints,
                format!("{path}/challenge"),
                "challenge has no hints",
            ));
        }
    }
}

/// Flag every id after its first occurrence.
fn check_unique<'a>(
    ids: impl Iterator<Item = &'a str>,
    parent: &str,
    rule: LintRule,
    noun: &str,
    issues: &mut Vec<LintIssue>,
) {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    for (index, id) in ids.enumerate() {
        if let Some(first) = first_seen.get(id) {
            issues.push(LintIssue::new(
                rule,
                format!("{parent}/{id}"),
                format!("{noun} id '{id}' at position {index} duplicates position {first}"),
            ));
        } else {
            first_seen.insert(id, index);
        }
    }
}

fn is_blank(id: &str) -> bool {
    id.trim().is_empty()
}
