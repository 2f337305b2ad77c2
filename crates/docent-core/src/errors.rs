//! Cross-cutting error types for Docent.
//!
//! Domain-specific errors (e.g., `ContentError`, `ExecError`) are defined in
//! their respective crates. The `docent` binary converges them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Docent crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Lookup by identifier returned no result.
    #[error("Not found: {kind} {id}")]
    NotFound { kind: String, id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    #[must_use]
    pub fn not_found(kind: &str, id: &str) -> Self {
        Self::NotFound {
            kind: kind.to_string(),
            id: id.to_string(),
        }
    }
}
