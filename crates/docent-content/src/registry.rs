//! The set of loaded languages, keyed by id.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use docent_core::entities::LanguageConfig;

use crate::error::ContentError;
use crate::loader::{ContentLoader, discover_language_dirs};

/// Every language under a content root, in directory-name order.
#[derive(Debug, Clone, Default)]
pub struct ContentRegistry {
    languages: Vec<LanguageConfig>,
}

impl ContentRegistry {
    /// Load every language directory under `root`.
    ///
    /// # Errors
    ///
    /// Returns the first loader error, or [`ContentError::DuplicateLanguage`]
    /// when two directories declare the same language id.
    pub fn load(root: &Path) -> Result<Self, ContentError> {
        let loader = ContentLoader::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();
        let mut languages = Vec::new();

        for dir in discover_language_dirs(root)? {
            let config = loader.load_language(&dir)?;
            if let Some(first) = seen.get(&config.id) {
                return Err(ContentError::DuplicateLanguage {
                    id: config.id,
                    first: first.clone(),
                    second: dir,
                });
            }
            seen.insert(config.id.clone(), dir);
            languages.push(config);
        }

        tracing::debug!(root = %root.display(), languages = languages.len(), "content registry ready");
        Ok(Self { languages })
    }

    /// Wrap configs built elsewhere. Order is kept; duplicate ids are allowed
    /// here and reported by the lint.
    #[must_use]
    pub const fn from_languages(languages: Vec<LanguageConfig>) -> Self {
        Self { languages }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|l| l.id == id)
    }

    /// Like [`Self::get`] but an error for unknown ids.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::UnknownLanguage`].
    pub fn require(&self, id: &str) -> Result<&LanguageConfig, ContentError> {
        self.get(id)
            .ok_or_else(|| ContentError::UnknownLanguage(id.to_string()))
    }

    #[must_use]
    pub fn languages(&self) -> &[LanguageConfig] {
        &self.languages
    }

    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.languages.iter().map(|l| l.id.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn language(id: &str) -> LanguageConfig {
        LanguageConfig {
            id: id.into(),
            label: id.into(),
            icon: "*".into(),
            color: "#000000".into(),
            official_url: "https://example.com".into(),
            tagline: "t".into(),
            execution_api_id: None,
            categories: Vec::new(),
        }
    }

    #[test]
    fn from_languages_keeps_order_and_duplicates() {
        let registry =
            ContentRegistry::from_languages(vec![language("b"), language("a"), language("b")]);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.ids(), vec!["b", "a", "b"]);
        assert!(registry.require("a").is_ok());
    }

    #[test]
    fn default_is_empty() {
        let registry = ContentRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.get("a").is_none());
    }
}
