//! Content loading error types.

use std::path::PathBuf;

use docent_schema::SchemaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("io error at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest '{}': {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid JSON in '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid YAML in '{}': {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("schema violation in '{}': {source}", .path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },

    #[error("unsupported partition format '{}' (expected .json, .yaml, or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("content root '{}' does not exist or is not a directory", .0.display())]
    MissingRoot(PathBuf),

    #[error("language '{id}' is defined twice ('{}' and '{}')", .first.display(), .second.display())]
    DuplicateLanguage {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
