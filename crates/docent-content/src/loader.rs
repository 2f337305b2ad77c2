//! Reading manifests and partition files from disk.
//!
//! A language directory holds a `language.toml` manifest plus the partition
//! files it lists. Partitions are JSON or YAML arrays of categories; each is
//! checked against the `partition` JSON Schema before it is deserialized so
//! authoring mistakes are reported with the offending file.

use std::fs;
use std::path::{Path, PathBuf};

use docent_core::entities::{DocCategory, LanguageConfig, LanguageManifest};
use docent_schema::SchemaRegistry;

use crate::error::ContentError;

/// File name of the per-language manifest.
pub const MANIFEST_FILE: &str = "language.toml";

/// Serialization format of a partition file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionFormat {
    Json,
    Yaml,
}

impl PartitionFormat {
    /// # Errors
    ///
    /// Returns [`ContentError::UnsupportedFormat`] for any extension other
    /// than `json`, `yaml`, or `yml`.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(ContentError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Loads content files, validating partitions against the schema registry.
pub struct ContentLoader {
    schemas: SchemaRegistry,
}

impl Default for ContentLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            schemas: SchemaRegistry::new(),
        }
    }

    /// Read and parse a `language.toml` manifest.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Io`] if the file cannot be read, or
    /// [`ContentError::Manifest`] if it is not a valid manifest.
    pub fn load_manifest(&self, path: &Path) -> Result<LanguageManifest, ContentError> {
        let raw = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
        toml::from_str(&raw).map_err(|source| ContentError::Manifest {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read one partition file into its ordered list of categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is unsupported, the file cannot be
    /// read or parsed, or the content violates the partition schema.
    pub fn load_partition(&self, path: &Path) -> Result<Vec<DocCategory>, ContentError> {
        let format = PartitionFormat::from_path(path)?;
        let raw = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
        let value = parse_value(&raw, format, path)?;

        self.schemas
            .validate("partition", &value)
            .map_err(|source| ContentError::Schema {
                path: path.to_path_buf(),
                source,
            })?;

        let categories: Vec<DocCategory> =
            serde_json::from_value(value).map_err(|source| ContentError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(
            path = %path.display(),
            categories = categories.len(),
            "loaded partition"
        );
        Ok(categories)
    }

    /// Load a language directory: manifest first, then every partition in
    /// manifest order, concatenated into one config.
    ///
    /// # Errors
    ///
    /// Propagates the first manifest or partition error.
    pub fn load_language(&self, dir: &Path) -> Result<LanguageConfig, ContentError> {
        let manifest = self.load_manifest(&dir.join(MANIFEST_FILE))?;

        let partitions = manifest
            .partitions
            .iter()
            .map(|relative| self.load_partition(&dir.join(relative)))
            .collect::<Result<Vec<_>, _>>()?;

        let config = manifest.into_config(partitions);
        tracing::info!(
            language = %config.id,
            categories = config.categories.len(),
            "loaded language"
        );
        Ok(config)
    }
}

fn parse_value(
    raw: &str,
    format: PartitionFormat,
    path: &Path,
) -> Result<serde_json::Value, ContentError> {
    match format {
        PartitionFormat::Json => serde_json::from_str(raw).map_err(|source| ContentError::Json {
            path: path.to_path_buf(),
            source,
        }),
        PartitionFormat::Yaml => serde_yaml::from_str(raw).map_err(|source| ContentError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Subdirectories of `root` that contain a manifest, sorted by path.
///
/// # Errors
///
/// Returns [`ContentError::MissingRoot`] if `root` is not a directory, or
/// [`ContentError::Io`] if it cannot be listed.
pub fn discover_language_dirs(root: &Path) -> Result<Vec<PathBuf>, ContentError> {
    if !root.is_dir() {
        return Err(ContentError::MissingRoot(root.to_path_buf()));
    }

    let mut dirs = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| ContentError::io(root, e))? {
        let path = entry.map_err(|e| ContentError::io(root, e))?.path();
        if path.is_dir() && path.join(MANIFEST_FILE).is_file() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}
