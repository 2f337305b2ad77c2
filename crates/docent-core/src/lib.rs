//! # docent-core
//!
//! Content schema types, aggregation, and error types for Docent.
//!
//! This crate provides the foundational types shared across all Docent crates:
//! - Schema structs for the lesson tree (language, category, entry, section, quiz, ...)
//! - Closed enums for difficulty, diagram kind, and lint rules
//! - Order-preserving partition aggregation
//! - Cross-cutting error types
//! - Report types for CLI responses

pub mod aggregate;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;

pub use aggregate::aggregate_partitions;
