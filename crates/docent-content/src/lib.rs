//! # docent-content
//!
//! File-based content loading for Docent.
//!
//! A content root holds one directory per language:
//!
//! ```text
//! content/
//!   kubernetes/
//!     language.toml      # metadata + ordered partition list
//!     basics.yaml
//!     workloads.yaml
//!   playwright/
//!     language.toml
//!     locators.json
//! ```
//!
//! [`ContentLoader`] reads a single language; [`ContentRegistry`] loads a
//! whole root and looks languages up by id.

mod error;
mod loader;
mod registry;

pub use error::ContentError;
pub use loader::{ContentLoader, MANIFEST_FILE, PartitionFormat, discover_language_dirs};
pub use registry::ContentRegistry;
