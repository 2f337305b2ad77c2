use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A multiple-choice check with exactly one correct option.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`. Must be in `0..options.len()`.
    pub correct_index: usize,
    /// Shown after the learner answers.
    pub explanation: String,
}

impl QuizQuestion {
    /// The correct option, or `None` when `correct_index` is out of range.
    #[must_use]
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }

    #[must_use]
    pub fn has_valid_answer(&self) -> bool {
        self.correct_index < self.options.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct_index: usize) -> QuizQuestion {
        QuizQuestion {
            question: "Pick one".into(),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_index,
            explanation: "c is correct".into(),
        }
    }

    #[test]
    fn last_index_is_valid() {
        let q = question(2);
        assert!(q.has_valid_answer());
        assert_eq!(q.correct_option(), Some("c"));
    }

    #[test]
    fn one_past_the_end_is_invalid() {
        let q = question(3);
        assert!(!q.has_valid_answer());
        assert_eq!(q.correct_option(), None);
    }
}
