#![forbid(unsafe_code)]
//! sharpkind: inspection tooling over the syntax kind vocabulary.
//!
//! The vocabulary itself (kind space, keyword tables, operator kind resolution, canonical text) lives
//! in [`sharpkind_core`]. This crate adds the pieces a developer reaches for when working on the
//! front end: a CLI to classify spellings and kinds, a Markdown reference generator, and miette
//! rendering of kind-space invariant violations.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod diagnostics;
pub mod report;
pub mod version;

pub use report::{OutputFormat, ReportConfig};
pub use sharpkind_core::{SyntaxKind, text::get_text};
