//! Syntax kind vocabulary for a C#-family front end with alternate-script keyword spellings.
//!
//! This crate is the contract shared by the lexer, the parser, and the diagnostics layer:
//! - [`SyntaxKind`]: the classification tag, laid out in gap-separated category blocks.
//! - [`space`]: closed-range category predicates and lazy, restartable enumerations.
//! - [`lang`]: spelling registries (keywords with Chinese synonyms, preprocessor keywords,
//!   punctuation, pseudo-keywords) and operator derivation tables.
//! - [`text`]: canonical spelling of a kind.
//! - [`validate`]: the startup invariant check over all of the above.
//!
//! ## Notes
//! - Pure vocabulary: **no IO** and no mutable state. The only shared state is the one-time
//!   construction of the spelling indexes, which [`warm_up`] forces ahead of the hot path after
//!   running the startup invariant check.
//! - Lookups never fail. Absence is `None` (or `""` from [`text::get_text`]); callers interpret
//!   it (e.g. "not a keyword" means "identifier").
//!
//! ## Examples
//! ```rust
//! use sharpkind_core::lang::{keywords, operators};
//! use sharpkind_core::{text, SyntaxKind};
//!
//! let kind = keywords::resolve("类").unwrap();
//! assert_eq!(kind, SyntaxKind::ClassKeyword);
//! assert_eq!(text::get_text(kind), "class");
//! assert_eq!(operators::binary(SyntaxKind::PlusToken), Some(SyntaxKind::AddExpression));
//! ```

pub mod errors;
pub mod kind;
pub mod lang;
pub mod space;
pub mod text;
pub mod validate;

pub use errors::ParseKindError;
pub use kind::SyntaxKind;
pub use space::{KindCategory, KindRange};
pub use validate::{KindSpaceError, Violation, validate_kind_space};

/// Validate the kind space, then build every spelling index now instead of on first lookup.
///
/// ## Returns
/// - `Ok(())` when the layout and registries are consistent.
/// - `Err(KindSpaceError)` with every violation, each also logged at error level. The indexes are
///   built either way so lookups keep working.
pub fn warm_up() -> Result<(), KindSpaceError> {
    let validated = validate_kind_space();
    if let Err(err) = &validated {
        for violation in &err.violations {
            tracing::error!(%violation, "kind space failed startup validation");
        }
    }

    lang::keywords::warm_up();
    lang::preprocessor::warm_up();
    lang::punctuation::warm_up();
    validated
}
