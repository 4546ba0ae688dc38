use std::collections::{BTreeSet, HashMap};

use sharpkind_core::lang::operators::{self, OperatorCategory};
use sharpkind_core::lang::{keywords, metadata, preprocessor, pseudo, punctuation};
use sharpkind_core::{KindCategory, SyntaxKind, space, text};

#[test]
fn keyword_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, SyntaxKind> = HashMap::new();

    for info in keywords::RESERVED_KEYWORDS.iter().chain(keywords::CONTEXTUAL_KEYWORDS) {
        assert_eq!(
            keywords::resolve(info.canonical),
            Some(info.kind),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.kind),
            Some(info.canonical),
            "keyword as_str mismatch for {:?}",
            info.kind
        );

        if let Some(prev) = seen.insert(info.canonical, info.kind) {
            panic!("duplicate keyword spelling {:?}: {:?} and {:?}", info.canonical, prev, info.kind);
        }

        for &alias in info.aliases {
            if let Some(prev) = seen.insert(alias, info.kind) {
                panic!("duplicate keyword alias spelling {:?}: {:?} and {:?}", alias, prev, info.kind);
            }
        }
    }
}

#[test]
fn keyword_text_round_trips_through_resolve() {
    for kind in space::keyword_kinds() {
        let spelling = text::get_text(kind);
        assert!(!spelling.is_empty(), "{kind:?} has no text");
        assert_eq!(keywords::resolve(spelling), Some(kind), "{spelling}");
    }
}

#[test]
fn synonyms_resolve_like_their_canonical_spelling() {
    for info in keywords::RESERVED_KEYWORDS.iter().chain(keywords::CONTEXTUAL_KEYWORDS) {
        for &alias in info.aliases {
            assert_eq!(
                keywords::resolve(alias),
                keywords::resolve(info.canonical),
                "synonym {alias} of {}",
                info.canonical
            );
        }
    }
}

#[test]
fn reserved_and_contextual_lookups_are_disjoint() {
    for info in keywords::RESERVED_KEYWORDS {
        assert_eq!(keywords::resolve_contextual(info.canonical), None, "{}", info.canonical);
    }
    for info in keywords::CONTEXTUAL_KEYWORDS {
        assert_eq!(keywords::resolve_reserved(info.canonical), None, "{}", info.canonical);
    }
}

#[test]
fn keywords_without_synonyms_resolve_only_canonically() {
    // `__arglist` has no declared synonym; nothing else may resolve to it.
    let claims: Vec<&str> = keywords::RESERVED_KEYWORDS
        .iter()
        .chain(keywords::CONTEXTUAL_KEYWORDS)
        .flat_map(|k| k.aliases.iter().copied())
        .filter(|alias| keywords::resolve(alias) == Some(SyntaxKind::ArgListKeyword))
        .collect();
    assert!(claims.is_empty(), "{claims:?}");
    assert!(keywords::aliases(SyntaxKind::ArgListKeyword).is_empty());
}

// ============================================================================
// Range coverage
// ============================================================================

fn predicate_set(pred: fn(SyntaxKind) -> bool) -> BTreeSet<SyntaxKind> {
    SyntaxKind::ALL.iter().copied().filter(|&k| pred(k)).collect()
}

#[test]
fn reserved_enumeration_matches_predicate() {
    let enumerated: BTreeSet<_> = space::reserved_keyword_kinds().collect();
    assert_eq!(enumerated, predicate_set(space::is_reserved_keyword));
    assert_eq!(enumerated.len(), keywords::RESERVED_KEYWORDS.len());
}

#[test]
fn contextual_enumeration_matches_predicate() {
    let enumerated: BTreeSet<_> = space::contextual_keyword_kinds().collect();
    assert_eq!(enumerated, predicate_set(space::is_contextual_keyword));
    assert_eq!(enumerated.len(), keywords::CONTEXTUAL_KEYWORDS.len());
}

#[test]
fn punctuation_enumeration_matches_predicate() {
    let enumerated: BTreeSet<_> = space::punctuation_kinds().collect();
    assert_eq!(enumerated, predicate_set(space::is_punctuation));
    assert_eq!(
        enumerated.len(),
        punctuation::SIMPLE_PUNCTUATION.len() + punctuation::COMPOUND_PUNCTUATION.len()
    );
}

#[test]
fn preprocessor_enumeration_matches_predicate() {
    let enumerated: BTreeSet<_> = space::preprocessor_keyword_kinds().collect();
    assert_eq!(enumerated, predicate_set(preprocessor::is_preprocessor_keyword));
}

#[test]
fn enumerations_are_ascending_and_restartable() {
    let first: Vec<_> = space::keyword_kinds().collect();
    let second: Vec<_> = space::keyword_kinds().collect();
    assert_eq!(first, second);

    let reserved = space::reserved_keyword_kinds().count();
    assert!(first[..reserved].windows(2).all(|w| w[0] < w[1]));
    assert!(first[reserved..].windows(2).all(|w| w[0] < w[1]));
    assert_eq!(first.len(), reserved + space::contextual_keyword_kinds().count());
}

#[test]
fn every_kind_has_a_block() {
    for &kind in SyntaxKind::ALL {
        assert!(space::category_of(kind).is_some(), "{kind:?}");
    }
    assert_eq!(space::category_of(SyntaxKind::IntKeyword), Some(KindCategory::ReservedKeyword));
}

// ============================================================================
// Operator derivation
// ============================================================================

#[test]
fn operator_derivation_is_total_over_punctuation() {
    let derivers: [(OperatorCategory, fn(SyntaxKind) -> Option<SyntaxKind>); 4] = [
        (OperatorCategory::PrefixUnary, operators::prefix_unary),
        (OperatorCategory::PostfixUnary, operators::postfix_unary),
        (OperatorCategory::Binary, operators::binary),
        (OperatorCategory::Assignment, operators::assignment),
    ];
    for token in space::punctuation_kinds() {
        for (category, derive) in derivers {
            if let Some(derived) = derive(token) {
                assert!(
                    category.bounds().contains(derived),
                    "{token:?} -> {derived:?} crosses out of {category:?}"
                );
                assert_eq!(operators::category_of_expression(derived), Some(category));
            }
        }
    }
}

#[test]
fn operator_derivation_is_total_over_every_kind() {
    for &kind in SyntaxKind::ALL {
        for (category, derived) in operators::derivations(kind) {
            assert!(category.bounds().contains(derived), "{kind:?} -> {derived:?}");
        }
    }
}

#[test]
fn overloadable_operators_are_derivable() {
    for &token in operators::OVERLOADABLE_UNARY {
        assert!(operators::prefix_unary(token).is_some() || matches!(token, SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword));
    }
    for &token in operators::OVERLOADABLE_BINARY {
        assert!(operators::binary(token).is_some(), "{token:?}");
    }
}

#[test]
fn metadata_tokens_have_text() {
    for entry in metadata::OPERATOR_METADATA {
        if let Some(token) = entry.token {
            assert!(text::has_fixed_text(token), "{}", entry.name);
            assert_eq!(metadata::operator_from_metadata_name(entry.name), Some(token));
        }
    }
}

// ============================================================================
// Preprocessor asymmetry
// ============================================================================

#[test]
fn preprocessor_true_is_a_keyword_but_not_contextual() {
    assert_eq!(preprocessor::resolve("true"), Some(SyntaxKind::TrueKeyword));
    assert!(preprocessor::is_preprocessor_keyword(SyntaxKind::TrueKeyword));
    assert!(!preprocessor::is_preprocessor_contextual_keyword(SyntaxKind::TrueKeyword));
}

#[test]
fn excluded_directive_kinds_all_resolve() {
    for &kind in preprocessor::NOT_CONTEXTUAL {
        let spelling = text::get_text(kind);
        assert_eq!(preprocessor::resolve(spelling), Some(kind), "{spelling}");
        assert!(!preprocessor::is_preprocessor_contextual_keyword(kind));
    }
    assert_eq!(preprocessor::NOT_CONTEXTUAL.len(), 7);
}

#[test]
fn preprocessor_ignores_synonyms() {
    for &kind in preprocessor::SHARED_WITH_RESERVED {
        for &alias in keywords::aliases(kind) {
            assert_eq!(preprocessor::resolve(alias), None, "{alias}");
        }
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn scenario_int_keyword() {
    let kind = keywords::resolve("int");
    assert_eq!(kind, Some(SyntaxKind::IntKeyword));
    assert!(space::is_reserved_keyword(SyntaxKind::IntKeyword));
    assert_eq!(text::get_text(SyntaxKind::IntKeyword), "int");
}

#[test]
fn scenario_class_and_its_synonym() {
    let synonym = keywords::aliases(SyntaxKind::ClassKeyword)[0];
    assert_eq!(keywords::resolve("class"), Some(SyntaxKind::ClassKeyword));
    assert_eq!(keywords::resolve(synonym), Some(SyntaxKind::ClassKeyword));
}

#[test]
fn scenario_plus_derivations() {
    assert_eq!(operators::binary(SyntaxKind::PlusToken), Some(SyntaxKind::AddExpression));
    assert_eq!(
        operators::assignment(SyntaxKind::PlusEqualsToken),
        Some(SyntaxKind::AddAssignmentExpression)
    );
    assert_eq!(text::get_text(SyntaxKind::PlusEqualsToken), "+=");
}

#[test]
fn scenario_overloadable_binary() {
    assert!(operators::is_overloadable_binary_operator(SyntaxKind::PercentToken));
    assert!(!operators::is_overloadable_binary_operator(SyntaxKind::BarBarToken));
}

#[test]
fn scenario_region_and_true() {
    assert_eq!(preprocessor::resolve("region"), Some(SyntaxKind::RegionKeyword));
    assert!(preprocessor::is_preprocessor_keyword(SyntaxKind::TrueKeyword));
    assert!(!preprocessor::is_preprocessor_contextual_keyword(SyntaxKind::TrueKeyword));
}

#[test]
fn scenario_pseudo_keywords_are_identifiers() {
    assert!(pseudo::is_var("var"));
    assert_eq!(keywords::resolve("var"), None);
    assert!(pseudo::is_unmanaged("unmanaged"));
    assert_eq!(keywords::resolve("unmanaged"), None);
}

#[test]
fn scenario_borrowed_metadata_names() {
    assert_eq!(metadata::operator_from_metadata_name("op_Addition"), Some(SyntaxKind::PlusToken));
    assert_eq!(metadata::operator_from_metadata_name("op_Exponent"), None);
    assert_eq!(metadata::operator_from_metadata_name("op_Concatenate"), None);
}

#[test]
fn shipped_kind_space_validates() {
    assert_eq!(sharpkind_core::validate_kind_space(), Ok(()));
}
