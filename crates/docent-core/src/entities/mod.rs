//! Content schema types.
//!
//! The tree is `LanguageConfig → DocCategory → DocEntry → {Section, QuizQuestion,
//! Challenge, Diagram}`. Every struct derives `Serialize`, `Deserialize`, and
//! `JsonSchema`; field names use `camelCase` to match the renderer contract and
//! unknown fields are rejected so authoring typos surface at load time.

mod category;
mod challenge;
mod diagram;
mod entry;
mod language;
mod manifest;
mod quiz;
mod section;

pub use category::DocCategory;
pub use challenge::Challenge;
pub use diagram::Diagram;
pub use entry::DocEntry;
pub use language::LanguageConfig;
pub use manifest::LanguageManifest;
pub use quiz::QuizQuestion;
pub use section::Section;
