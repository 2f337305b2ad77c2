//! Code-execution backend configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExecutorConfig {
    /// Base URL of a Piston-compatible execution API
    /// (e.g., `https://emkc.org/api/v2/piston`).
    #[serde(default)]
    pub endpoint: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Execution backend identities the host application registers.
    /// A language's `executionApiId` must be one of these.
    #[serde(default)]
    pub backends: Vec<String>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
            backends: Vec::new(),
        }
    }
}

impl ExecutorConfig {
    /// Whether an endpoint has been set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty()
    }

    /// Whether `id` names a registered backend.
    #[must_use]
    pub fn is_registered(&self, id: &str) -> bool {
        self.backends.iter().any(|b| b == id)
    }

    /// Check the fields needed to reach the execution API.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when `endpoint` is empty, or
    /// [`ConfigError::InvalidValue`] for a non-HTTP endpoint or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "executor".to_string(),
            });
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "executor.endpoint".to_string(),
                reason: format!("expected an http(s) URL, got '{}'", self.endpoint),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "executor.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
