//! Client for Piston-compatible execution APIs.
//!
//! `POST {endpoint}/execute` with a single source file; the `run` stage of
//! the response is mapped to [`ExecutionOutput`]. A failed `compile` stage is
//! reported in place of the run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ExecError;
use crate::executor::{CodeExecutor, ExecutionOutput};
use crate::http::check_response;

#[derive(Serialize)]
struct ExecuteRequest<'a> {
    language: &'a str,
    version: &'a str,
    files: [SourceFile<'a>; 1],
}

#[derive(Serialize)]
struct SourceFile<'a> {
    content: &'a str,
}

#[derive(Deserialize)]
struct ExecuteResponse {
    run: Stage,
    #[serde(default)]
    compile: Option<Stage>,
}

#[derive(Deserialize)]
struct Stage {
    #[serde(default)]
    stdout: String,
    #[serde(default)]
    stderr: String,
    code: Option<i32>,
}

impl From<Stage> for ExecutionOutput {
    fn from(stage: Stage) -> Self {
        Self {
            stdout: stage.stdout,
            stderr: stage.stderr,
            exit_code: stage.code,
        }
    }
}

/// HTTP executor backed by a Piston-style API.
pub struct PistonExecutor {
    http: reqwest::Client,
    endpoint: String,
}

impl PistonExecutor {
    /// # Errors
    ///
    /// Returns [`ExecError::Http`] if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ExecError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("docent/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CodeExecutor for PistonExecutor {
    async fn execute(&self, language: &str, code: &str) -> Result<ExecutionOutput, ExecError> {
        let url = format!("{}/execute", self.endpoint);
        let request = ExecuteRequest {
            language,
            version: "*",
            files: [SourceFile { content: code }],
        };

        tracing::debug!(%url, language, bytes = code.len(), "executing sample");
        let resp = check_response(self.http.post(&url).json(&request).send().await?).await?;
        let body = resp.text().await?;
        parse_response(&body)
    }
}

fn parse_response(body: &str) -> Result<ExecutionOutput, ExecError> {
    let response: ExecuteResponse =
        serde_json::from_str(body).map_err(|e| ExecError::Parse(e.to_string()))?;

    if let Some(compile) = response.compile {
        if compile.code.is_some_and(|code| code != 0) {
            return Ok(compile.into());
        }
    }
    Ok(response.run.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_run_stage() {
        let body = r#"{
            "language": "python",
            "version": "3.12.0",
            "run": { "stdout": "hello\n", "stderr": "", "code": 0, "signal": null, "output": "hello\n" }
        }"#;
        let out = parse_response(body).unwrap();
        assert_eq!(out.stdout, "hello\n");
        assert_eq!(out.exit_code, Some(0));
    }

    #[test]
    fn failed_compile_stage_wins() {
        let body = r#"{
            "language": "typescript",
            "version": "5.0.3",
            "compile": { "stdout": "", "stderr": "error TS2304", "code": 2 },
            "run": { "stdout": "", "stderr": "", "code": null }
        }"#;
        let out = parse_response(body).unwrap();
        assert_eq!(out.stderr, "error TS2304");
        assert_eq!(out.exit_code, Some(2));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(
            parse_response("<html>"),
            Err(ExecError::Parse(_))
        ));
    }

    #[test]
    fn request_shape_matches_api() {
        let request = ExecuteRequest {
            language: "python",
            version: "*",
            files: [SourceFile {
                content: "print(1)",
            }],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "language": "python",
                "version": "*",
                "files": [{ "content": "print(1)" }]
            })
        );
    }

    #[test]
    fn endpoint_trailing_slash_is_trimmed() {
        let executor =
            PistonExecutor::new("https://emkc.org/api/v2/piston/", Duration::from_secs(5))
                .unwrap();
        assert_eq!(executor.endpoint(), "https://emkc.org/api/v2/piston");
    }
}
