//! The execution backend seam.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::ExecError;

/// Captured result of running one code sample.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
}

impl ExecutionOutput {
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }

    /// stdout followed by stderr, the way a terminal would show them.
    #[must_use]
    pub fn combined(&self) -> String {
        match (self.stdout.is_empty(), self.stderr.is_empty()) {
            (_, true) => self.stdout.clone(),
            (true, false) => self.stderr.clone(),
            (false, false) => format!("{}\n{}", self.stdout.trim_end(), self.stderr),
        }
    }
}

/// Runs code for a language identified by its `executionApiId`.
pub trait CodeExecutor {
    /// Execute `code` with the backend registered as `language`.
    fn execute(
        &self,
        language: &str,
        code: &str,
    ) -> impl Future<Output = Result<ExecutionOutput, ExecError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_joins_streams() {
        let out = ExecutionOutput {
            stdout: "ok\n".into(),
            stderr: "warn".into(),
            exit_code: Some(0),
        };
        assert_eq!(out.combined(), "ok\nwarn");
        assert!(out.succeeded());
    }

    #[test]
    fn signal_kill_is_not_success() {
        let out = ExecutionOutput {
            exit_code: None,
            ..ExecutionOutput::default()
        };
        assert!(!out.succeeded());
    }
}
