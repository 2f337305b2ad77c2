//! # docent-config
//!
//! Layered configuration loading for Docent using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DOCENT_*` prefix, `__` as separator)
//! 2. Project-level `.docent/config.toml`
//! 3. User-level `~/.config/docent/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `DOCENT_CONTENT__ROOT` -> `content.root`,
//! `DOCENT_EXECUTOR__ENDPOINT` -> `executor.endpoint`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use docent_config::DocentConfig;
//!
//! let config = DocentConfig::load_with_dotenv().expect("config");
//! println!("content root: {}", config.content.root.display());
//! ```

mod content;
mod error;
mod executor;

pub use content::ContentConfig;
pub use error::ConfigError;
pub use executor::ExecutorConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DocentConfig {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub executor: ExecutorConfig,
}

impl DocentConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is normal.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".docent/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("DOCENT_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("docent").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = DocentConfig::default();
        assert_eq!(config.content.root, PathBuf::from("content"));
        assert!(!config.executor.is_configured());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: DocentConfig = DocentConfig::figment().extract()?;
            assert!(!config.content.strict);
            assert_eq!(config.executor.timeout_secs, 10);
            Ok(())
        });
    }
}
