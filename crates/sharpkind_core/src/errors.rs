//! Error types for the few fallible entry points of the kind vocabulary.
//!
//! Classification itself never fails: lookups return `Option` or an empty spelling. The types here
//! cover parsing a kind from user input and reporting kind-space invariant violations.

use thiserror::Error;

/// Error returned by `SyntaxKind::from_str`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKindError {
    /// The input is neither a variant name nor a number.
    #[error("unknown syntax kind `{0}`")]
    UnknownName(String),
    /// The input is a number that falls between kind blocks.
    #[error("no syntax kind has discriminant {0}")]
    UnassignedValue(u16),
}
