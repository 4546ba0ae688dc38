//! Canonical source text for a kind.
//!
//! [`get_text`] is what diagnostics use to render "expected `;`" and what re-emission uses to print
//! a token whose text is fixed by its kind.

use crate::kind::SyntaxKind;
use crate::lang::{keywords, preprocessor, punctuation};
use crate::space::{self, KindCategory};

/// Canonical spelling of `kind`.
///
/// ## Returns
/// - The fixed spelling for punctuation, compound operators, reserved, contextual, and
///   directive keywords, `_`, and the interpolated-string delimiters.
/// - `""` for kinds with no fixed spelling (identifiers, literals, trivia, directives, nodes).
///   The empty string means "no canonical spelling", not failure.
///
/// ## Notes
/// - Never allocates. Synonyms are never returned: the canonical spelling is the ASCII one.
pub fn get_text(kind: SyntaxKind) -> &'static str {
    let text = match space::category_of(kind) {
        Some(KindCategory::SimplePunctuation | KindCategory::CompoundPunctuation) => punctuation::as_str(kind),
        Some(KindCategory::ReservedKeyword | KindCategory::ContextualKeyword) => keywords::as_str(kind),
        Some(KindCategory::PreprocessorKeyword) => preprocessor::as_str(kind),
        Some(KindCategory::InterpolatedToken) => interpolated_text(kind),
        _ => None,
    };
    text.unwrap_or("")
}

/// Whether [`get_text`] yields a non-empty spelling for `kind`.
pub fn has_fixed_text(kind: SyntaxKind) -> bool {
    !get_text(kind).is_empty()
}

fn interpolated_text(kind: SyntaxKind) -> Option<&'static str> {
    match kind {
        SyntaxKind::InterpolatedStringStartToken => Some("$\""),
        SyntaxKind::InterpolatedVerbatimStringStartToken => Some("$@\""),
        SyntaxKind::InterpolatedStringEndToken => Some("\""),
        _ => None,
    }
}
