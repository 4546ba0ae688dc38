//! Derive expression and statement kinds from raw operator or keyword tokens.
//!
//! The parser sees a token (`+`, `++`, `this`, `typeof`, …) and needs the kind of the node it
//! reduces to. This module holds one mapping table per [`OperatorCategory`] and a total lookup
//! function per table: every function accepts any [`SyntaxKind`] and answers `None` for tokens
//! outside its table.
//!
//! ## Notes
//! - The same token may appear in several tables (`+` is prefix unary and binary, `++` is prefix
//!   and postfix). Each *derived* kind belongs to exactly one category, so
//!   [`category_of_expression`] always decodes a derived kind unambiguously.
//! - Overloadability is declarative membership only. Pairing rules (`==` with `!=`, `true` with
//!   `false`) belong to the binder.
//!
//! ## Examples
//! ```rust
//! use sharpkind_core::lang::operators;
//! use sharpkind_core::SyntaxKind;
//!
//! assert_eq!(operators::binary(SyntaxKind::PlusToken), Some(SyntaxKind::AddExpression));
//! assert_eq!(operators::prefix_unary(SyntaxKind::PlusToken), Some(SyntaxKind::UnaryPlusExpression));
//! assert_eq!(operators::assignment(SyntaxKind::PlusToken), None);
//! ```
//!
//! ## See also
//! - [`crate::lang::metadata`] for operator metadata names.

use crate::kind::SyntaxKind;
use crate::kind::SyntaxKind as K;
use crate::space::{self, KindRange};

/// The shape a derived kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    PrefixUnary,
    PostfixUnary,
    Binary,
    Assignment,
    Literal,
    Instance,
    PrimaryFunction,
}

impl OperatorCategory {
    pub const ALL: &'static [OperatorCategory] = &[
        OperatorCategory::PrefixUnary,
        OperatorCategory::PostfixUnary,
        OperatorCategory::Binary,
        OperatorCategory::Assignment,
        OperatorCategory::Literal,
        OperatorCategory::Instance,
        OperatorCategory::PrimaryFunction,
    ];

    /// Block of the kind space that every derived kind of this category must lie in.
    pub const fn bounds(self) -> KindRange {
        match self {
            OperatorCategory::PrefixUnary => space::PREFIX_UNARY_EXPRESSIONS,
            OperatorCategory::PostfixUnary => space::POSTFIX_UNARY_EXPRESSIONS,
            OperatorCategory::Binary => space::BINARY_EXPRESSIONS,
            OperatorCategory::Assignment => space::ASSIGNMENT_EXPRESSIONS,
            OperatorCategory::Literal => space::LITERAL_EXPRESSIONS,
            OperatorCategory::Instance => space::INSTANCE_EXPRESSIONS,
            OperatorCategory::PrimaryFunction => space::PRIMARY_FUNCTION_EXPRESSIONS,
        }
    }

    pub const fn table(self) -> &'static [OperatorMapping] {
        match self {
            OperatorCategory::PrefixUnary => PREFIX_UNARY,
            OperatorCategory::PostfixUnary => POSTFIX_UNARY,
            OperatorCategory::Binary => BINARY,
            OperatorCategory::Assignment => ASSIGNMENT,
            OperatorCategory::Literal => LITERAL,
            OperatorCategory::Instance => INSTANCE,
            OperatorCategory::PrimaryFunction => PRIMARY_FUNCTION,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            OperatorCategory::PrefixUnary => "prefix unary",
            OperatorCategory::PostfixUnary => "postfix unary",
            OperatorCategory::Binary => "binary",
            OperatorCategory::Assignment => "assignment",
            OperatorCategory::Literal => "literal",
            OperatorCategory::Instance => "instance",
            OperatorCategory::PrimaryFunction => "primary function",
        }
    }
}

/// One row of a derivation table: `token` reduces to a node of kind `derived`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorMapping {
    pub token: SyntaxKind,
    pub derived: SyntaxKind,
}

const fn map(token: SyntaxKind, derived: SyntaxKind) -> OperatorMapping {
    OperatorMapping { token, derived }
}

pub const PREFIX_UNARY: &[OperatorMapping] = &[
    map(K::PlusToken, K::UnaryPlusExpression),
    map(K::MinusToken, K::UnaryMinusExpression),
    map(K::TildeToken, K::BitwiseNotExpression),
    map(K::ExclamationToken, K::LogicalNotExpression),
    map(K::PlusPlusToken, K::PreIncrementExpression),
    map(K::MinusMinusToken, K::PreDecrementExpression),
    map(K::AmpersandToken, K::AddressOfExpression),
    map(K::AsteriskToken, K::PointerIndirectionExpression),
];

pub const POSTFIX_UNARY: &[OperatorMapping] = &[
    map(K::PlusPlusToken, K::PostIncrementExpression),
    map(K::MinusMinusToken, K::PostDecrementExpression),
];

pub const BINARY: &[OperatorMapping] = &[
    map(K::QuestionQuestionToken, K::CoalesceExpression),
    map(K::IsKeyword, K::IsExpression),
    map(K::AsKeyword, K::AsExpression),
    map(K::BarToken, K::BitwiseOrExpression),
    map(K::CaretToken, K::ExclusiveOrExpression),
    map(K::AmpersandToken, K::BitwiseAndExpression),
    map(K::EqualsEqualsToken, K::EqualsExpression),
    map(K::ExclamationEqualsToken, K::NotEqualsExpression),
    map(K::LessThanToken, K::LessThanExpression),
    map(K::LessThanEqualsToken, K::LessThanOrEqualExpression),
    map(K::GreaterThanToken, K::GreaterThanExpression),
    map(K::GreaterThanEqualsToken, K::GreaterThanOrEqualExpression),
    map(K::LessThanLessThanToken, K::LeftShiftExpression),
    map(K::GreaterThanGreaterThanToken, K::RightShiftExpression),
    map(K::PlusToken, K::AddExpression),
    map(K::MinusToken, K::SubtractExpression),
    map(K::AsteriskToken, K::MultiplyExpression),
    map(K::SlashToken, K::DivideExpression),
    map(K::PercentToken, K::ModuloExpression),
    map(K::AmpersandAmpersandToken, K::LogicalAndExpression),
    map(K::BarBarToken, K::LogicalOrExpression),
];

pub const ASSIGNMENT: &[OperatorMapping] = &[
    map(K::BarEqualsToken, K::OrAssignmentExpression),
    map(K::AmpersandEqualsToken, K::AndAssignmentExpression),
    map(K::CaretEqualsToken, K::ExclusiveOrAssignmentExpression),
    map(K::LessThanLessThanEqualsToken, K::LeftShiftAssignmentExpression),
    map(K::GreaterThanGreaterThanEqualsToken, K::RightShiftAssignmentExpression),
    map(K::PlusEqualsToken, K::AddAssignmentExpression),
    map(K::MinusEqualsToken, K::SubtractAssignmentExpression),
    map(K::AsteriskEqualsToken, K::MultiplyAssignmentExpression),
    map(K::SlashEqualsToken, K::DivideAssignmentExpression),
    map(K::PercentEqualsToken, K::ModuloAssignmentExpression),
    map(K::EqualsToken, K::SimpleAssignmentExpression),
];

pub const LITERAL: &[OperatorMapping] = &[
    map(K::StringLiteralToken, K::StringLiteralExpression),
    map(K::CharacterLiteralToken, K::CharacterLiteralExpression),
    map(K::NumericLiteralToken, K::NumericLiteralExpression),
    map(K::NullKeyword, K::NullLiteralExpression),
    map(K::TrueKeyword, K::TrueLiteralExpression),
    map(K::FalseKeyword, K::FalseLiteralExpression),
    map(K::ArgListKeyword, K::ArgListExpression),
];

pub const INSTANCE: &[OperatorMapping] = &[
    map(K::ThisKeyword, K::ThisExpression),
    map(K::BaseKeyword, K::BaseExpression),
];

pub const PRIMARY_FUNCTION: &[OperatorMapping] = &[
    map(K::MakeRefKeyword, K::MakeRefExpression),
    map(K::RefTypeKeyword, K::RefTypeExpression),
    map(K::RefValueKeyword, K::RefValueExpression),
    map(K::CheckedKeyword, K::CheckedExpression),
    map(K::UncheckedKeyword, K::UncheckedExpression),
    map(K::DefaultKeyword, K::DefaultExpression),
    map(K::TypeOfKeyword, K::TypeOfExpression),
    map(K::SizeOfKeyword, K::SizeOfExpression),
];

#[inline]
fn lookup(table: &'static [OperatorMapping], token: SyntaxKind) -> Option<SyntaxKind> {
    table.iter().find(|m| m.token == token).map(|m| m.derived)
}

/// Derive the node kind `token` reduces to in `category`.
pub fn derive(category: OperatorCategory, token: SyntaxKind) -> Option<SyntaxKind> {
    lookup(category.table(), token)
}

/// Every `(category, derived kind)` pair a token participates in, in [`OperatorCategory::ALL`] order.
pub fn derivations(token: SyntaxKind) -> impl Iterator<Item = (OperatorCategory, SyntaxKind)> {
    OperatorCategory::ALL
        .iter()
        .filter_map(move |&category| derive(category, token).map(|derived| (category, derived)))
}

pub fn prefix_unary(token: SyntaxKind) -> Option<SyntaxKind> {
    lookup(PREFIX_UNARY, token)
}

pub fn postfix_unary(token: SyntaxKind) -> Option<SyntaxKind> {
    lookup(POSTFIX_UNARY, token)
}

pub fn binary(token: SyntaxKind) -> Option<SyntaxKind> {
    lookup(BINARY, token)
}

pub fn assignment(token: SyntaxKind) -> Option<SyntaxKind> {
    lookup(ASSIGNMENT, token)
}

pub fn literal_expression(token: SyntaxKind) -> Option<SyntaxKind> {
    lookup(LITERAL, token)
}

pub fn instance_expression(token: SyntaxKind) -> Option<SyntaxKind> {
    lookup(INSTANCE, token)
}

/// Keyword-headed primary forms: `typeof(T)`, `sizeof(T)`, `default(T)`, `checked(e)`, …
pub fn primary_function(keyword: SyntaxKind) -> Option<SyntaxKind> {
    lookup(PRIMARY_FUNCTION, keyword)
}

pub fn is_prefix_unary_expression_token(token: SyntaxKind) -> bool {
    prefix_unary(token).is_some()
}

pub fn is_postfix_unary_expression_token(token: SyntaxKind) -> bool {
    postfix_unary(token).is_some()
}

pub fn is_binary_expression_operator_token(token: SyntaxKind) -> bool {
    binary(token).is_some()
}

pub fn is_assignment_operator_token(token: SyntaxKind) -> bool {
    assignment(token).is_some()
}

pub fn is_literal_expression_token(token: SyntaxKind) -> bool {
    literal_expression(token).is_some()
}

pub fn is_instance_expression_token(token: SyntaxKind) -> bool {
    instance_expression(token).is_some()
}

pub fn is_primary_function_keyword(keyword: SyntaxKind) -> bool {
    primary_function(keyword).is_some()
}

/// True if `token` starts a prefix or a postfix unary expression.
pub fn is_any_unary_expression(token: SyntaxKind) -> bool {
    is_prefix_unary_expression_token(token) || is_postfix_unary_expression_token(token)
}

pub fn is_increment_or_decrement_operator(token: SyntaxKind) -> bool {
    matches!(token, K::PlusPlusToken | K::MinusMinusToken)
}

/// Tokens that may follow `operator` in a unary operator declaration.
pub fn is_unary_operator_declaration_token(token: SyntaxKind) -> bool {
    is_prefix_unary_expression_token(token) || matches!(token, K::TrueKeyword | K::FalseKeyword)
}

/// Decode a derived kind back to its category.
///
/// ## Returns
/// - `Some(category)` if `kind` lies in one of the derived expression blocks.
/// - `None` for tokens, trivia, declarations, and every other kind.
pub fn category_of_expression(kind: SyntaxKind) -> Option<OperatorCategory> {
    OperatorCategory::ALL
        .iter()
        .copied()
        .find(|category| category.bounds().contains(kind))
}

// --- overloadable operators --------------------------------------------------

pub const OVERLOADABLE_UNARY: &[SyntaxKind] = &[
    K::PlusToken,
    K::MinusToken,
    K::TildeToken,
    K::ExclamationToken,
    K::PlusPlusToken,
    K::MinusMinusToken,
    K::TrueKeyword,
    K::FalseKeyword,
];

pub const OVERLOADABLE_BINARY: &[SyntaxKind] = &[
    K::PlusToken,
    K::MinusToken,
    K::AsteriskToken,
    K::SlashToken,
    K::PercentToken,
    K::CaretToken,
    K::AmpersandToken,
    K::BarToken,
    K::EqualsEqualsToken,
    K::LessThanToken,
    K::LessThanEqualsToken,
    K::LessThanLessThanToken,
    K::GreaterThanToken,
    K::GreaterThanEqualsToken,
    K::GreaterThanGreaterThanToken,
    K::ExclamationEqualsToken,
];

pub fn is_overloadable_unary_operator(kind: SyntaxKind) -> bool {
    OVERLOADABLE_UNARY.contains(&kind)
}

pub fn is_overloadable_binary_operator(kind: SyntaxKind) -> bool {
    OVERLOADABLE_BINARY.contains(&kind)
}

pub fn is_any_overloadable_operator(kind: SyntaxKind) -> bool {
    is_overloadable_binary_operator(kind) || is_overloadable_unary_operator(kind)
}

// --- keyword-driven statement and declaration forms ---------------------------

/// `checked { … }` / `unchecked { … }`.
pub fn check_statement(keyword: SyntaxKind) -> Option<SyntaxKind> {
    match keyword {
        K::CheckedKeyword => Some(K::CheckedStatement),
        K::UncheckedKeyword => Some(K::UncheckedStatement),
        _ => None,
    }
}

pub fn accessor_declaration(keyword: SyntaxKind) -> Option<SyntaxKind> {
    match keyword {
        K::GetKeyword => Some(K::GetAccessorDeclaration),
        K::SetKeyword => Some(K::SetAccessorDeclaration),
        K::AddKeyword => Some(K::AddAccessorDeclaration),
        K::RemoveKeyword => Some(K::RemoveAccessorDeclaration),
        _ => None,
    }
}

pub fn switch_label(keyword: SyntaxKind) -> Option<SyntaxKind> {
    match keyword {
        K::CaseKeyword => Some(K::CaseSwitchLabel),
        K::DefaultKeyword => Some(K::DefaultSwitchLabel),
        _ => None,
    }
}

/// Declarations that may carry members: `class`, `struct`, `interface`.
pub fn type_declaration(keyword: SyntaxKind) -> Option<SyntaxKind> {
    match keyword {
        K::ClassKeyword => Some(K::ClassDeclaration),
        K::StructKeyword => Some(K::StructDeclaration),
        K::InterfaceKeyword => Some(K::InterfaceDeclaration),
        _ => None,
    }
}

/// [`type_declaration`] plus `enum`.
pub fn base_type_declaration(keyword: SyntaxKind) -> Option<SyntaxKind> {
    match keyword {
        K::EnumKeyword => Some(K::EnumDeclaration),
        other => type_declaration(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_derived_kind_sits_in_its_category_block() {
        for &category in OperatorCategory::ALL {
            for mapping in category.table() {
                assert!(
                    category.bounds().contains(mapping.derived),
                    "{:?} -> {:?} escapes {:?}",
                    mapping.token,
                    mapping.derived,
                    category
                );
                assert_eq!(category_of_expression(mapping.derived), Some(category));
            }
        }
    }

    #[test]
    fn tables_cover_their_blocks() {
        for &category in OperatorCategory::ALL {
            let mut derived: Vec<_> = category.table().iter().map(|m| m.derived).collect();
            derived.sort();
            let block: Vec<_> = category.bounds().kinds().collect();
            assert_eq!(derived, block, "{category:?}");
        }
    }

    #[test]
    fn tokens_are_unique_within_a_table() {
        for &category in OperatorCategory::ALL {
            let table = category.table();
            for (i, a) in table.iter().enumerate() {
                assert!(table[i + 1..].iter().all(|b| b.token != a.token), "{:?}", a.token);
            }
        }
    }

    #[test]
    fn shared_tokens_derive_per_category() {
        assert_eq!(prefix_unary(K::PlusPlusToken), Some(K::PreIncrementExpression));
        assert_eq!(postfix_unary(K::PlusPlusToken), Some(K::PostIncrementExpression));
        assert_eq!(prefix_unary(K::AmpersandToken), Some(K::AddressOfExpression));
        assert_eq!(binary(K::AmpersandToken), Some(K::BitwiseAndExpression));
        let all: Vec<_> = derivations(K::MinusToken).collect();
        assert_eq!(
            all,
            vec![
                (OperatorCategory::PrefixUnary, K::UnaryMinusExpression),
                (OperatorCategory::Binary, K::SubtractExpression),
            ]
        );
    }

    #[test]
    fn keyword_operators() {
        assert_eq!(binary(K::IsKeyword), Some(K::IsExpression));
        assert_eq!(binary(K::AsKeyword), Some(K::AsExpression));
        assert_eq!(literal_expression(K::ArgListKeyword), Some(K::ArgListExpression));
        assert_eq!(instance_expression(K::BaseKeyword), Some(K::BaseExpression));
        assert_eq!(primary_function(K::DefaultKeyword), Some(K::DefaultExpression));
        assert_eq!(primary_function(K::NameOfKeyword), None);
    }

    #[test]
    fn non_operators_answer_none() {
        assert_eq!(binary(K::IdentifierToken), None);
        assert_eq!(assignment(K::PlusToken), None);
        assert_eq!(prefix_unary(K::SlashToken), None);
        assert_eq!(derivations(K::SemicolonToken).count(), 0);
        assert_eq!(category_of_expression(K::PlusToken), None);
        assert_eq!(category_of_expression(K::CheckedStatement), None);
    }

    #[test]
    fn overloadable_sets() {
        assert!(is_overloadable_binary_operator(K::PercentToken));
        assert!(!is_overloadable_binary_operator(K::BarBarToken));
        assert!(!is_overloadable_binary_operator(K::QuestionQuestionToken));
        assert!(is_overloadable_unary_operator(K::TrueKeyword));
        assert!(!is_overloadable_unary_operator(K::AmpersandToken));
        assert!(is_any_overloadable_operator(K::ExclamationEqualsToken));
        assert!(!is_any_overloadable_operator(K::EqualsToken));
    }

    #[test]
    fn unary_helpers() {
        assert!(is_any_unary_expression(K::MinusMinusToken));
        assert!(!is_any_unary_expression(K::SlashToken));
        assert!(is_increment_or_decrement_operator(K::PlusPlusToken));
        assert!(is_unary_operator_declaration_token(K::FalseKeyword));
        assert!(is_unary_operator_declaration_token(K::AsteriskToken));
        assert!(!is_unary_operator_declaration_token(K::SlashToken));
        assert!(is_assignment_operator_token(K::EqualsToken));
    }

    #[test]
    fn keyword_driven_forms() {
        assert_eq!(check_statement(K::CheckedKeyword), Some(K::CheckedStatement));
        assert_eq!(accessor_declaration(K::RemoveKeyword), Some(K::RemoveAccessorDeclaration));
        assert_eq!(switch_label(K::DefaultKeyword), Some(K::DefaultSwitchLabel));
        assert_eq!(type_declaration(K::EnumKeyword), None);
        assert_eq!(base_type_declaration(K::EnumKeyword), Some(K::EnumDeclaration));
        assert_eq!(base_type_declaration(K::StructKeyword), Some(K::StructDeclaration));
        assert_eq!(type_declaration(K::DelegateKeyword), None);
    }
}
