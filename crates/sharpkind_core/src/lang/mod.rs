//! Spelling and operator vocabulary registries.
//!
//! This module is the front door for everything that maps between source text and
//! [`SyntaxKind`](crate::SyntaxKind): keyword spellings (with alternate-script synonyms), the
//! preprocessor subset, punctuation, pseudo-keywords, operator derivation, and operator metadata
//! names.
//!
//! ## Notes
//! - Registries are **pure**: no IO, no mutation after the one-time index build.
//! - The lexer and parser enforce syntax; registries answer lookups.
//!
//! ## Examples
//! ```rust
//! use sharpkind_core::lang::{keywords, operators};
//! use sharpkind_core::SyntaxKind;
//!
//! assert_eq!(keywords::resolve("int"), Some(SyntaxKind::IntKeyword));
//! assert_eq!(operators::assignment(SyntaxKind::PlusEqualsToken), Some(SyntaxKind::AddAssignmentExpression));
//! ```
//!
//! ## See also
//! - `sharpkind reference` generates Markdown reference tables from these registries.

pub mod keywords;
pub mod metadata;
pub mod operators;
pub mod preprocessor;
pub mod pseudo;
pub mod punctuation;
pub mod registry;
