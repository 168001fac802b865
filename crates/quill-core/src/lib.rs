//! # quill-core
//!
//! Core types, ID generation, and error types for Quill.
//!
//! This crate provides the foundational types shared across all Quill crates:
//! - Entity structs for the four persisted collections (articles, references,
//!   tasks, goals) and the drafts they are created from
//! - The closed `CitationStyle` enum and reference sub-types
//! - ID prefix constants and generation
//! - Cross-cutting error types (validation, not-found)
//! - The per-invocation `RequestState` machine
//! - Citation formatting and task ordering rules

pub mod citation;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod ordering;
pub mod request;
