//! Keywords recognized immediately after a `#` directive marker.
//!
//! The preprocessor vocabulary is the directive-only block ([`PREPROCESSOR_KEYWORDS`]) plus five
//! reserved keywords that double as directive keywords: `true`, `false`, `default`, `if`, `else`.
//!
//! ## Notes
//! - [`resolve`] matches canonical spellings only. Alternate-script keyword spellings are not
//!   recognized inside directives.
//! - Two predicates answer different questions and must not be merged:
//!   - [`is_preprocessor_keyword`]: the spelling is valid after `#` at all.
//!   - [`is_preprocessor_contextual_keyword`]: the kind is contextual to directive lines. The seven
//!     kinds in [`NOT_CONTEXTUAL`] are preprocessor keywords but not preprocessor-contextual.
//!
//! ## Examples
//! ```rust
//! use sharpkind_core::lang::preprocessor;
//! use sharpkind_core::SyntaxKind;
//!
//! assert_eq!(preprocessor::resolve("true"), Some(SyntaxKind::TrueKeyword));
//! assert!(preprocessor::is_preprocessor_keyword(SyntaxKind::TrueKeyword));
//! assert!(!preprocessor::is_preprocessor_contextual_keyword(SyntaxKind::TrueKeyword));
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::keywords::{self, KeywordCategory, KeywordInfo};
use super::registry;
use crate::kind::SyntaxKind;
use crate::kind::SyntaxKind as K;
use crate::space;

/// Directive-only keywords, in kind order.
pub const PREPROCESSOR_KEYWORDS: &[KeywordInfo] = &[
    directive(K::ElifKeyword, "elif"),
    directive(K::EndIfKeyword, "endif"),
    directive(K::RegionKeyword, "region"),
    directive(K::EndRegionKeyword, "endregion"),
    directive(K::DefineKeyword, "define"),
    directive(K::UndefKeyword, "undef"),
    directive(K::WarningKeyword, "warning"),
    directive(K::ErrorKeyword, "error"),
    directive(K::LineKeyword, "line"),
    directive(K::PragmaKeyword, "pragma"),
    directive(K::HiddenKeyword, "hidden"),
    directive(K::ChecksumKeyword, "checksum"),
    directive(K::DisableKeyword, "disable"),
    directive(K::RestoreKeyword, "restore"),
    directive(K::ReferenceKeyword, "r"),
    directive(K::LoadKeyword, "load"),
];

/// Reserved keywords that are also valid directive keywords.
pub const SHARED_WITH_RESERVED: &[SyntaxKind] =
    &[K::TrueKeyword, K::FalseKeyword, K::DefaultKeyword, K::IfKeyword, K::ElseKeyword];

/// Preprocessor keywords that are deliberately not preprocessor-contextual.
///
/// This is a fixed exception list.
pub const NOT_CONTEXTUAL: &[SyntaxKind] = &[
    K::TrueKeyword,
    K::FalseKeyword,
    K::DefaultKeyword,
    K::HiddenKeyword,
    K::ChecksumKeyword,
    K::DisableKeyword,
    K::RestoreKeyword,
];

static INDEX: Lazy<HashMap<&'static str, SyntaxKind>> = Lazy::new(|| {
    let mut index = registry::build_index("preprocessor keywords", &[PREPROCESSOR_KEYWORDS], false);
    for &kind in SHARED_WITH_RESERVED {
        if let Some(spelling) = keywords::as_str(kind) {
            index.entry(spelling).or_insert(kind);
        }
    }
    index
});

/// Resolve a spelling that appears right after `#`.
///
/// ## Returns
/// - `Some(kind)` for directive keywords and the five shared reserved keywords.
/// - `None` otherwise, including for alternate-script spellings.
pub fn resolve(spelling: &str) -> Option<SyntaxKind> {
    INDEX.get(spelling).copied()
}

/// Whether `kind` is valid as a directive keyword.
pub fn is_preprocessor_keyword(kind: SyntaxKind) -> bool {
    space::PREPROCESSOR_KEYWORDS.contains(kind) || SHARED_WITH_RESERVED.contains(&kind)
}

/// Whether `kind` is contextual to directive lines.
///
/// ## Notes
/// - `if` and `else` are contextual here; the seven kinds in [`NOT_CONTEXTUAL`] are not, even
///   though every one of them resolves through [`resolve`].
pub fn is_preprocessor_contextual_keyword(kind: SyntaxKind) -> bool {
    if NOT_CONTEXTUAL.contains(&kind) {
        return false;
    }
    is_preprocessor_keyword(kind)
}

/// Registry entry for a directive-only keyword kind.
pub fn info_for(kind: SyntaxKind) -> Option<&'static KeywordInfo> {
    registry::entry_at(PREPROCESSOR_KEYWORDS, space::PREPROCESSOR_KEYWORDS, kind)
}

/// Canonical spelling of a directive-only keyword.
pub fn as_str(kind: SyntaxKind) -> Option<&'static str> {
    info_for(kind).map(|k| k.canonical)
}

pub(crate) fn warm_up() {
    Lazy::force(&INDEX);
}

const fn directive(kind: SyntaxKind, canonical: &'static str) -> KeywordInfo {
    KeywordInfo {
        kind,
        canonical,
        aliases: &[],
        category: KeywordCategory::Directive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_follows_block_order() {
        let kinds: Vec<_> = PREPROCESSOR_KEYWORDS.iter().map(|k| k.kind).collect();
        assert_eq!(kinds, space::PREPROCESSOR_KEYWORDS.kinds().collect::<Vec<_>>());
    }

    #[test]
    fn resolves_directive_and_shared_spellings() {
        assert_eq!(resolve("region"), Some(K::RegionKeyword));
        assert_eq!(resolve("r"), Some(K::ReferenceKeyword));
        assert_eq!(resolve("if"), Some(K::IfKeyword));
        assert_eq!(resolve("default"), Some(K::DefaultKeyword));
        assert_eq!(resolve("hidden"), Some(K::HiddenKeyword));
        assert_eq!(resolve("class"), None);
        assert_eq!(resolve("Region"), None);
    }

    #[test]
    fn synonyms_are_not_directive_spellings() {
        assert_eq!(resolve("若"), None);
        assert_eq!(resolve("真"), None);
    }

    #[test]
    fn excluded_kinds_still_resolve() {
        for &kind in NOT_CONTEXTUAL {
            assert!(is_preprocessor_keyword(kind), "{kind:?}");
            assert!(!is_preprocessor_contextual_keyword(kind), "{kind:?}");
            let spelling = keywords::as_str(kind).or_else(|| as_str(kind));
            assert_eq!(spelling.and_then(resolve), Some(kind));
        }
    }

    #[test]
    fn contextual_subset() {
        assert!(is_preprocessor_contextual_keyword(K::IfKeyword));
        assert!(is_preprocessor_contextual_keyword(K::ElseKeyword));
        assert!(is_preprocessor_contextual_keyword(K::RegionKeyword));
        assert!(is_preprocessor_contextual_keyword(K::LoadKeyword));
        assert!(!is_preprocessor_contextual_keyword(K::ClassKeyword));
        assert_eq!(NOT_CONTEXTUAL.len(), 7);
    }

    #[test]
    fn enumeration_matches_predicate() {
        let kinds: Vec<_> = space::preprocessor_keyword_kinds().collect();
        assert_eq!(kinds.len(), SHARED_WITH_RESERVED.len() + PREPROCESSOR_KEYWORDS.len());
        assert_eq!(kinds.first(), Some(&K::TrueKeyword));
        assert_eq!(kinds.last(), Some(&K::LoadKeyword));
        assert!(kinds.windows(2).all(|w| w[0] < w[1]));
    }
}
