//! Content source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_root() -> PathBuf {
    PathBuf::from("content")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Directory holding one subdirectory per language.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Treat lint warnings as failures.
    #[serde(default)]
    pub strict: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            strict: false,
        }
    }
}
