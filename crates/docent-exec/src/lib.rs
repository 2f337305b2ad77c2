//! # docent-exec
//!
//! Code execution for Docent lessons.
//!
//! A language's `executionApiId` names the backend that runs its samples.
//! [`CodeExecutor`] is the single-operation seam (`execute(language, code)`);
//! [`PistonExecutor`] talks to a Piston-compatible HTTP API. The
//! [`verify_language`] pass runs every sample and reports where the output a
//! lesson shows has drifted from what the code actually prints.

mod error;
mod executor;
mod http;
mod piston;
mod verify;

pub use error::ExecError;
pub use executor::{CodeExecutor, ExecutionOutput};
pub use piston::PistonExecutor;
pub use verify::{
    Sample, collect_samples, empty_report, verify_language, verify_language_with,
};
