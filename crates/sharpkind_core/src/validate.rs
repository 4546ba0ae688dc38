//! Startup invariant check for the kind space and its registries.
//!
//! Category predicates are interval comparisons, so a kind added in the wrong place is silently
//! misclassified. [`validate_kind_space`] turns that into a reported failure: it checks the kind
//! table, the block bounds, every registry, every derivation table, and spelling disjointness.
//!
//! ## Notes
//! - The individual checks take their inputs as parameters so they can be exercised against
//!   deliberately broken tables.
//! - A failed validation is a defect in this crate, never a property of user input.

use std::collections::HashMap;

use thiserror::Error;

use crate::kind::SyntaxKind;
use crate::lang::operators::{OperatorCategory, OperatorMapping};
use crate::lang::registry::SpellingEntry;
use crate::lang::{keywords, preprocessor, punctuation};
use crate::space::{self, KindCategory, KindRange};

/// One broken invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("`{next:?}` follows `{prev:?}` in the kind table but does not sort after it")]
    Unordered { prev: SyntaxKind, next: SyntaxKind },

    #[error("`{0:?}` lies outside every category block")]
    Uncategorized(SyntaxKind),

    #[error("block {second:?} does not start after block {first:?} ends")]
    OverlappingBlocks { first: KindCategory, second: KindCategory },

    #[error("registry `{registry}` has {found} entries for a block of {expected} kinds")]
    RegistryLength {
        registry: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("registry `{registry}` entry `{kind:?}` lies outside its block")]
    EntryOutOfBounds { registry: &'static str, kind: SyntaxKind },

    #[error("registry `{registry}` has `{found:?}` where `{expected:?}` belongs")]
    EntryMisplaced {
        registry: &'static str,
        expected: SyntaxKind,
        found: SyntaxKind,
    },

    #[error("{category:?} mapping `{token:?}` -> `{derived:?}` lies outside the category block")]
    DerivedOutOfBounds {
        category: OperatorCategory,
        token: SyntaxKind,
        derived: SyntaxKind,
    },

    #[error("spelling `{spelling}` is claimed by both `{first:?}` and `{second:?}`")]
    SharedSpelling {
        spelling: &'static str,
        first: SyntaxKind,
        second: SyntaxKind,
    },
}

/// Every violation found by one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("kind space has {} invariant violation(s)", .violations.len())]
pub struct KindSpaceError {
    pub violations: Vec<Violation>,
}

/// Run every kind-space check.
///
/// ## Returns
/// - `Ok(())` if every invariant holds.
/// - `Err(KindSpaceError)` listing every violation otherwise (validation does not stop at the
///   first failure).
pub fn validate_kind_space() -> Result<(), KindSpaceError> {
    let mut violations = Vec::new();

    violations.extend(check_ordering(SyntaxKind::ALL));
    violations.extend(check_categorized(SyntaxKind::ALL));
    violations.extend(check_blocks(space::CATEGORY_BOUNDS));

    violations.extend(check_registry(
        "reserved keywords",
        keywords::RESERVED_KEYWORDS,
        space::RESERVED_KEYWORDS,
    ));
    violations.extend(check_registry(
        "contextual keywords",
        keywords::CONTEXTUAL_KEYWORDS,
        space::CONTEXTUAL_KEYWORDS,
    ));
    violations.extend(check_registry(
        "preprocessor keywords",
        preprocessor::PREPROCESSOR_KEYWORDS,
        space::PREPROCESSOR_KEYWORDS,
    ));
    violations.extend(check_registry(
        "simple punctuation",
        punctuation::SIMPLE_PUNCTUATION,
        space::SIMPLE_PUNCTUATION,
    ));
    violations.extend(check_registry(
        "compound punctuation",
        punctuation::COMPOUND_PUNCTUATION,
        space::COMPOUND_PUNCTUATION,
    ));

    for &category in OperatorCategory::ALL {
        violations.extend(check_derivations(category, category.table(), category.bounds()));
    }

    violations.extend(check_spellings(
        keywords::RESERVED_KEYWORDS
            .iter()
            .chain(keywords::CONTEXTUAL_KEYWORDS)
            .flat_map(|k| k.spellings().map(move |s| (s, k.kind))),
    ));
    violations.extend(check_spellings(
        preprocessor::PREPROCESSOR_KEYWORDS
            .iter()
            .map(|k| (k.canonical, k.kind))
            .chain(
                preprocessor::SHARED_WITH_RESERVED
                    .iter()
                    .filter_map(|&kind| keywords::as_str(kind).map(|s| (s, kind))),
            ),
    ));
    violations.extend(check_spellings(
        punctuation::SIMPLE_PUNCTUATION
            .iter()
            .chain(punctuation::COMPOUND_PUNCTUATION)
            .map(|p| (p.canonical, p.kind)),
    ));

    if violations.is_empty() {
        tracing::debug!(kinds = SyntaxKind::ALL.len(), "kind space validated");
        return Ok(());
    }
    for violation in &violations {
        tracing::warn!(%violation, "kind space invariant violated");
    }
    Err(KindSpaceError { violations })
}

/// Adjacent entries of `kinds` must be strictly ascending.
pub fn check_ordering(kinds: &[SyntaxKind]) -> Vec<Violation> {
    kinds
        .windows(2)
        .filter(|w| w[0] >= w[1])
        .map(|w| Violation::Unordered { prev: w[0], next: w[1] })
        .collect()
}

/// Every kind must fall inside a declared block.
pub fn check_categorized(kinds: &[SyntaxKind]) -> Vec<Violation> {
    kinds
        .iter()
        .copied()
        .filter(|&k| space::category_of(k).is_none())
        .map(Violation::Uncategorized)
        .collect()
}

/// Blocks must be listed in ascending order with no overlap.
pub fn check_blocks(bounds: &[(KindCategory, KindRange)]) -> Vec<Violation> {
    bounds
        .windows(2)
        .filter(|w| w[0].1.last >= w[1].1.first)
        .map(|w| Violation::OverlappingBlocks {
            first: w[0].0,
            second: w[1].0,
        })
        .collect()
}

/// A registry must list exactly the kinds of its block, in block order.
pub fn check_registry<E: SpellingEntry>(registry: &'static str, entries: &[E], block: KindRange) -> Vec<Violation> {
    let mut violations = Vec::new();
    let expected = block.len();
    if entries.len() != expected {
        violations.push(Violation::RegistryLength {
            registry,
            expected,
            found: entries.len(),
        });
    }
    for (entry, expected) in entries.iter().zip(block.kinds()) {
        let found = entry.kind();
        if !block.contains(found) {
            violations.push(Violation::EntryOutOfBounds { registry, kind: found });
        } else if found != expected {
            violations.push(Violation::EntryMisplaced {
                registry,
                expected,
                found,
            });
        }
    }
    violations
}

/// Every derived kind of a table must lie inside its category block.
pub fn check_derivations(category: OperatorCategory, table: &[OperatorMapping], bounds: KindRange) -> Vec<Violation> {
    table
        .iter()
        .filter(|m| !bounds.contains(m.derived))
        .map(|m| Violation::DerivedOutOfBounds {
            category,
            token: m.token,
            derived: m.derived,
        })
        .collect()
}

/// No spelling may be claimed by two different kinds.
pub fn check_spellings(spellings: impl IntoIterator<Item = (&'static str, SyntaxKind)>) -> Vec<Violation> {
    let mut seen: HashMap<&'static str, SyntaxKind> = HashMap::new();
    let mut violations = Vec::new();
    for (spelling, kind) in spellings {
        match seen.get(spelling) {
            Some(&first) if first != kind => violations.push(Violation::SharedSpelling {
                spelling,
                first,
                second: kind,
            }),
            Some(_) => {}
            None => {
                seen.insert(spelling, kind);
            }
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::keywords::{KeywordCategory, KeywordInfo};

    #[test]
    fn shipped_tables_are_valid() {
        assert_eq!(validate_kind_space(), Ok(()));
    }

    #[test]
    fn detects_unordered_kinds() {
        let kinds = [SyntaxKind::IntKeyword, SyntaxKind::BoolKeyword, SyntaxKind::CharKeyword];
        assert_eq!(
            check_ordering(&kinds),
            vec![Violation::Unordered {
                prev: SyntaxKind::IntKeyword,
                next: SyntaxKind::BoolKeyword
            }]
        );
    }

    #[test]
    fn detects_overlapping_blocks() {
        let bounds = [
            (
                KindCategory::ReservedKeyword,
                KindRange::new(SyntaxKind::BoolKeyword, SyntaxKind::ElifKeyword),
            ),
            (
                KindCategory::PreprocessorKeyword,
                KindRange::new(SyntaxKind::ElifKeyword, SyntaxKind::LoadKeyword),
            ),
        ];
        assert_eq!(check_blocks(&bounds).len(), 1);
    }

    #[test]
    fn detects_misplaced_registry_entries() {
        static SWAPPED: &[KeywordInfo] = &[
            KeywordInfo {
                kind: SyntaxKind::EndIfKeyword,
                canonical: "endif",
                aliases: &[],
                category: KeywordCategory::Directive,
            },
            KeywordInfo {
                kind: SyntaxKind::ElifKeyword,
                canonical: "elif",
                aliases: &[],
                category: KeywordCategory::Directive,
            },
        ];
        let block = KindRange::new(SyntaxKind::ElifKeyword, SyntaxKind::EndIfKeyword);
        let violations = check_registry("swapped", SWAPPED, block);
        assert_eq!(violations.len(), 2);
        assert!(matches!(violations[0], Violation::EntryMisplaced { .. }));

        let too_small = KindRange::new(SyntaxKind::ElifKeyword, SyntaxKind::ElifKeyword);
        let violations = check_registry("swapped", SWAPPED, too_small);
        assert!(violations.contains(&Violation::RegistryLength {
            registry: "swapped",
            expected: 1,
            found: 2
        }));
        assert!(violations.contains(&Violation::EntryOutOfBounds {
            registry: "swapped",
            kind: SyntaxKind::EndIfKeyword
        }));
    }

    #[test]
    fn detects_derivation_outside_block() {
        let table = [OperatorMapping {
            token: SyntaxKind::PlusToken,
            derived: SyntaxKind::AddAssignmentExpression,
        }];
        let violations = check_derivations(OperatorCategory::Binary, &table, space::BINARY_EXPRESSIONS);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn detects_shared_spelling() {
        let violations = check_spellings([
            ("类型", SyntaxKind::TypeOfKeyword),
            ("类型", SyntaxKind::TypeKeyword),
            ("int", SyntaxKind::IntKeyword),
            ("int", SyntaxKind::IntKeyword),
        ]);
        assert_eq!(
            violations,
            vec![Violation::SharedSpelling {
                spelling: "类型",
                first: SyntaxKind::TypeOfKeyword,
                second: SyntaxKind::TypeKeyword
            }]
        );
    }

    #[test]
    fn error_message_counts_violations() {
        let err = KindSpaceError {
            violations: vec![Violation::Uncategorized(SyntaxKind::None)],
        };
        assert_eq!(err.to_string(), "kind space has 1 invariant violation(s)");
    }
}
