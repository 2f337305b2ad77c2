//! Central schema registry for all Docent content and report types.
//!
//! The `SchemaRegistry` builds JSON Schemas from docent-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Central store of all JSON Schemas in the Docent system.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert(
            $name,
            serde_json::to_value(schema_for!($ty)).expect("schemars output is plain JSON"),
        );
    };
}

impl SchemaRegistry {
    /// Build a new registry containing all content, manifest, and report
    /// schemas from docent-core.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. `schemars` always produces JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Content tree (7) ---
        register!(
            schemas,
            "language_config",
            docent_core::entities::LanguageConfig
        );
        register!(schemas, "doc_category", docent_core::entities::DocCategory);
        register!(schemas, "doc_entry", docent_core::entities::DocEntry);
        register!(schemas, "section", docent_core::entities::Section);
        register!(schemas, "quiz_question", docent_core::entities::QuizQuestion);
        register!(schemas, "challenge", docent_core::entities::Challenge);
        register!(schemas, "diagram", docent_core::entities::Diagram);

        // --- Authoring files (2) ---
        register!(
            schemas,
            "language_manifest",
            docent_core::entities::LanguageManifest
        );
        register!(
            schemas,
            "partition",
            Vec<docent_core::entities::DocCategory>
        );

        // --- CLI response types (3) ---
        register!(schemas, "content_stats", docent_core::responses::ContentStats);
        register!(schemas, "lint_report", docent_core::responses::LintReport);
        register!(schemas, "verify_report", docent_core::responses::VerifyReport);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use docent_core::entities::{QuizQuestion, Section};
    use docent_core::responses::LintReport;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn registry_has_expected_count() {
        // 7 content + 2 authoring + 3 responses = 12
        assert_eq!(registry().schema_count(), 12);
    }

    #[test]
    fn registry_list_is_sorted() {
        let names = registry().list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn get_nonexistent_schema() {
        assert!(registry().get("nonexistent").is_none());
    }

    #[test]
    fn validate_valid_section() {
        let section = Section {
            heading: "Selectors".into(),
            content: "Locators find elements.".into(),
            code: Some("await page.getByRole('button').click();".into()),
            code_language: Some("typescript".into()),
            ..Section::default()
        };
        let json = serde_json::to_value(&section).unwrap();
        assert!(registry().validate("section", &json).is_ok());
    }

    #[test]
    fn validate_rejects_missing_required_field() {
        let invalid = serde_json::json!({
            "question": "Which?",
            "options": ["a", "b"],
            // "correctIndex" is missing
            "explanation": "because"
        });
        let result = registry().validate("quiz_question", &invalid);
        if let Err(SchemaError::ValidationFailed { errors }) = result {
            assert!(!errors.is_empty());
        } else {
            panic!("Expected ValidationFailed");
        }
    }

    #[test]
    fn validate_rejects_negative_correct_index() {
        let invalid = serde_json::json!({
            "question": "Which?",
            "options": ["a", "b"],
            "correctIndex": -1,
            "explanation": "because"
        });
        assert!(registry().validate("quiz_question", &invalid).is_err());
    }

    #[test]
    fn schema_does_not_bound_correct_index() {
        // Range against `options` is a lint rule, not a schema rule.
        let question = QuizQuestion {
            question: "Which?".into(),
            options: vec!["a".into()],
            correct_index: 5,
            explanation: "n/a".into(),
        };
        let json = serde_json::to_value(&question).unwrap();
        assert!(registry().validate("quiz_question", &json).is_ok());
    }

    #[test]
    fn validate_rejects_invalid_difficulty() {
        let invalid = serde_json::json!({
            "id": "locators",
            "title": "Locators",
            "difficulty": "expert",
            "sections": []
        });
        assert!(registry().validate("doc_entry", &invalid).is_err());
    }

    #[test]
    fn validate_rejects_unknown_field() {
        let invalid = serde_json::json!({
            "id": "pods",
            "label": "Pods",
            "icon": "*",
            "entries": [],
            "colour": "red"
        });
        assert!(registry().validate("doc_category", &invalid).is_err());
    }

    #[test]
    fn validate_partition_array() {
        let partition = serde_json::json!([
            { "id": "pods", "label": "Pods", "icon": "*", "entries": [] },
            { "id": "services", "label": "Services", "icon": "*", "entries": [] }
        ]);
        assert!(registry().validate("partition", &partition).is_ok());
        assert!(
            registry()
                .validate("partition", &serde_json::json!({"id": "pods"}))
                .is_err()
        );
    }

    #[test]
    fn validate_lint_report() {
        let report = LintReport {
            languages_checked: 0,
            categories_checked: 0,
            entries_checked: 0,
            issues: Vec::new(),
            checked_at: Utc::now(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(registry().validate("lint_report", &json).is_ok());
    }

    #[test]
    fn validate_nonexistent_schema_returns_not_found() {
        let result = registry().validate("bogus", &serde_json::json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }

    #[test]
    fn all_expected_schemas_present() {
        let reg = registry();
        let expected = [
            "language_config",
            "doc_category",
            "doc_entry",
            "section",
            "quiz_question",
            "challenge",
            "diagram",
            "language_manifest",
            "partition",
            "content_stats",
            "lint_report",
            "verify_report",
        ];
        for name in &expected {
            assert!(reg.get(name).is_some(), "Missing expected schema: {name}");
        }
    }
}
