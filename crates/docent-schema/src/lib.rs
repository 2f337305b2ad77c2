//! # docent-schema
//!
//! JSON Schema generation, validation, and registry for Docent.
//!
//! Content types are defined in `docent-core` with `#[derive(JsonSchema)]`.
//! This crate builds the registry over those types and validates raw JSON
//! against it. `docent-content` validates every partition file here before
//! deserializing, and `docent schema` exports schemas for editor tooling.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
