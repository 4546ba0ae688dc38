//! Punctuation vocabulary.
//!
//! Two registries cover the punctuation blocks of the kind space: [`SIMPLE_PUNCTUATION`] (single
//! tokens such as `+`, `(`, and the XML documentation delimiters) and [`COMPOUND_PUNCTUATION`]
//! (multi-character operators and compound assignments such as `&&` and `+=`).
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact: it does not tokenize source text,
//!   so `"+="` resolves while `"+ ="` does not.
//! - Punctuation has no alternate-script spellings.
//!
//! ## Examples
//! ```rust
//! use sharpkind_core::lang::punctuation;
//! use sharpkind_core::SyntaxKind;
//!
//! assert_eq!(punctuation::from_str("::"), Some(SyntaxKind::ColonColonToken));
//! assert_eq!(punctuation::as_str(SyntaxKind::EqualsGreaterThanToken), Some("=>"));
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

use self::PunctuationCategory as P;
use super::registry::{self, SpellingEntry};
use crate::kind::SyntaxKind;
use crate::kind::SyntaxKind as K;
use crate::space;

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets, braces, parentheses, and quotes.
    Delimiter,
    /// Separators like `,` and `;`.
    Separator,
    /// Access/path markers like `.`, `::`, and `->`.
    Access,
    /// Arithmetic, logical, bitwise, relational, and shift operators.
    Operator,
    /// `=` and the compound assignments.
    Assignment,
    /// Misc markers like `?`, `#`, `$`, and `=>`.
    Marker,
    /// Delimiters that only occur inside XML documentation comments.
    Xml,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub kind: SyntaxKind,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
}

impl SpellingEntry for PunctuationInfo {
    fn kind(&self) -> SyntaxKind {
        self.kind
    }

    fn canonical(&self) -> &'static str {
        self.canonical
    }

    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Single punctuation tokens, in kind order.
pub const SIMPLE_PUNCTUATION: &[PunctuationInfo] = &[
    info(K::TildeToken, "~", P::Operator),
    info(K::ExclamationToken, "!", P::Operator),
    info(K::DollarToken, "$", P::Marker),
    info(K::PercentToken, "%", P::Operator),
    info(K::CaretToken, "^", P::Operator),
    info(K::AmpersandToken, "&", P::Operator),
    info(K::AsteriskToken, "*", P::Operator),
    info(K::OpenParenToken, "(", P::Delimiter),
    info(K::CloseParenToken, ")", P::Delimiter),
    info(K::MinusToken, "-", P::Operator),
    info(K::PlusToken, "+", P::Operator),
    info(K::EqualsToken, "=", P::Assignment),
    info(K::OpenBraceToken, "{", P::Delimiter),
    info(K::CloseBraceToken, "}", P::Delimiter),
    info(K::OpenBracketToken, "[", P::Delimiter),
    info(K::CloseBracketToken, "]", P::Delimiter),
    info(K::BarToken, "|", P::Operator),
    info(K::BackslashToken, "\\", P::Marker),
    info(K::ColonToken, ":", P::Separator),
    info(K::SemicolonToken, ";", P::Separator),
    info(K::DoubleQuoteToken, "\"", P::Delimiter),
    info(K::SingleQuoteToken, "'", P::Delimiter),
    info(K::LessThanToken, "<", P::Operator),
    info(K::CommaToken, ",", P::Separator),
    info(K::GreaterThanToken, ">", P::Operator),
    info(K::DotToken, ".", P::Access),
    info(K::QuestionToken, "?", P::Marker),
    info(K::HashToken, "#", P::Marker),
    info(K::SlashToken, "/", P::Operator),
    info(K::SlashGreaterThanToken, "/>", P::Xml),
    info(K::LessThanSlashToken, "</", P::Xml),
    info(K::XmlCommentStartToken, "<!--", P::Xml),
    info(K::XmlCommentEndToken, "-->", P::Xml),
    info(K::XmlCDataStartToken, "<![CDATA[", P::Xml),
    info(K::XmlCDataEndToken, "]]>", P::Xml),
    info(K::XmlProcessingInstructionStartToken, "<?", P::Xml),
    info(K::XmlProcessingInstructionEndToken, "?>", P::Xml),
];

/// Multi-character operators and compound assignments, in kind order.
pub const COMPOUND_PUNCTUATION: &[PunctuationInfo] = &[
    info(K::BarBarToken, "||", P::Operator),
    info(K::AmpersandAmpersandToken, "&&", P::Operator),
    info(K::MinusMinusToken, "--", P::Operator),
    info(K::PlusPlusToken, "++", P::Operator),
    info(K::ColonColonToken, "::", P::Access),
    info(K::QuestionQuestionToken, "??", P::Operator),
    info(K::MinusGreaterThanToken, "->", P::Access),
    info(K::ExclamationEqualsToken, "!=", P::Operator),
    info(K::EqualsEqualsToken, "==", P::Operator),
    info(K::EqualsGreaterThanToken, "=>", P::Marker),
    info(K::LessThanEqualsToken, "<=", P::Operator),
    info(K::LessThanLessThanToken, "<<", P::Operator),
    info(K::LessThanLessThanEqualsToken, "<<=", P::Assignment),
    info(K::GreaterThanEqualsToken, ">=", P::Operator),
    info(K::GreaterThanGreaterThanToken, ">>", P::Operator),
    info(K::GreaterThanGreaterThanEqualsToken, ">>=", P::Assignment),
    info(K::SlashEqualsToken, "/=", P::Assignment),
    info(K::AsteriskEqualsToken, "*=", P::Assignment),
    info(K::BarEqualsToken, "|=", P::Assignment),
    info(K::AmpersandEqualsToken, "&=", P::Assignment),
    info(K::PlusEqualsToken, "+=", P::Assignment),
    info(K::MinusEqualsToken, "-=", P::Assignment),
    info(K::CaretEqualsToken, "^=", P::Assignment),
    info(K::PercentEqualsToken, "%=", P::Assignment),
];

static INDEX: Lazy<HashMap<&'static str, SyntaxKind>> =
    Lazy::new(|| registry::build_index("punctuation", &[SIMPLE_PUNCTUATION, COMPOUND_PUNCTUATION], false));

/// Lookup by exact spelling.
///
/// ## Returns
/// - `Some(kind)` for a simple or compound punctuation spelling.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<SyntaxKind> {
    INDEX.get(s).copied()
}

/// Registry entry for a punctuation kind.
pub fn info_for(kind: SyntaxKind) -> Option<&'static PunctuationInfo> {
    registry::entry_at(SIMPLE_PUNCTUATION, space::SIMPLE_PUNCTUATION, kind)
        .or_else(|| registry::entry_at(COMPOUND_PUNCTUATION, space::COMPOUND_PUNCTUATION, kind))
}

/// Canonical spelling.
pub fn as_str(kind: SyntaxKind) -> Option<&'static str> {
    info_for(kind).map(|p| p.canonical)
}

pub fn category(kind: SyntaxKind) -> Option<PunctuationCategory> {
    info_for(kind).map(|p| p.category)
}

pub(crate) fn warm_up() {
    Lazy::force(&INDEX);
}

const fn info(kind: SyntaxKind, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo {
        kind,
        canonical,
        category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registries_follow_block_order() {
        let simple: Vec<_> = SIMPLE_PUNCTUATION.iter().map(|p| p.kind).collect();
        assert_eq!(simple, space::SIMPLE_PUNCTUATION.kinds().collect::<Vec<_>>());
        let compound: Vec<_> = COMPOUND_PUNCTUATION.iter().map(|p| p.kind).collect();
        assert_eq!(compound, space::COMPOUND_PUNCTUATION.kinds().collect::<Vec<_>>());
    }

    #[test]
    fn lookup_round_trips() {
        for entry in SIMPLE_PUNCTUATION.iter().chain(COMPOUND_PUNCTUATION) {
            assert_eq!(from_str(entry.canonical), Some(entry.kind), "{}", entry.canonical);
            assert_eq!(as_str(entry.kind), Some(entry.canonical));
        }
    }

    #[test]
    fn exact_match_only() {
        assert_eq!(from_str("+="), Some(K::PlusEqualsToken));
        assert_eq!(from_str("+ ="), None);
        assert_eq!(from_str("**"), None);
        assert_eq!(from_str(""), None);
    }

    #[test]
    fn categories() {
        assert_eq!(category(K::OpenParenToken), Some(PunctuationCategory::Delimiter));
        assert_eq!(category(K::PlusEqualsToken), Some(PunctuationCategory::Assignment));
        assert_eq!(category(K::XmlCDataStartToken), Some(PunctuationCategory::Xml));
        assert_eq!(category(K::IntKeyword), None);
    }
}
