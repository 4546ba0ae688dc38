//! Operator metadata names (`op_Addition`, `op_Implicit`, …) and their surface tokens.
//!
//! A user-defined operator compiles to a method with a well-known metadata name. The binder uses
//! [`operator_from_metadata_name`] to relate such a method back to the token that declares it, and
//! [`metadata_name`] for the opposite direction.
//!
//! ## Notes
//! - Some names come from other languages on the same runtime (`op_Concatenate`, `op_Exponent`,
//!   `op_IntegerDivision`, `op_Like`). They are recognized as names but have no surface token, so
//!   the lookup returns `None` for them.
//! - `+` and `-` each back two names (binary and unary); [`MetadataFixity`] disambiguates the
//!   reverse lookup.

use self::MetadataFixity as F;
use crate::kind::SyntaxKind;
use crate::kind::SyntaxKind as K;

/// How an operator method is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataFixity {
    Unary,
    Binary,
    /// `implicit` / `explicit` conversion operators.
    Conversion,
}

/// One well-known operator method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorMetadataInfo {
    pub name: &'static str,
    /// Surface token, or `None` for names that have no spelling in this language.
    pub token: Option<SyntaxKind>,
    pub fixity: MetadataFixity,
}

const fn meta(name: &'static str, token: Option<SyntaxKind>, fixity: MetadataFixity) -> OperatorMetadataInfo {
    OperatorMetadataInfo { name, token, fixity }
}

/// Every well-known operator metadata name, sorted by name.
pub const OPERATOR_METADATA: &[OperatorMetadataInfo] = &[
    meta("op_Addition", Some(K::PlusToken), F::Binary),
    meta("op_BitwiseAnd", Some(K::AmpersandToken), F::Binary),
    meta("op_BitwiseOr", Some(K::BarToken), F::Binary),
    meta("op_Concatenate", None, F::Binary),
    meta("op_Decrement", Some(K::MinusMinusToken), F::Unary),
    meta("op_Division", Some(K::SlashToken), F::Binary),
    meta("op_Equality", Some(K::EqualsEqualsToken), F::Binary),
    meta("op_ExclusiveOr", Some(K::CaretToken), F::Binary),
    meta("op_Explicit", Some(K::ExplicitKeyword), F::Conversion),
    meta("op_Exponent", None, F::Binary),
    meta("op_False", Some(K::FalseKeyword), F::Unary),
    meta("op_GreaterThan", Some(K::GreaterThanToken), F::Binary),
    meta("op_GreaterThanOrEqual", Some(K::GreaterThanEqualsToken), F::Binary),
    meta("op_Implicit", Some(K::ImplicitKeyword), F::Conversion),
    meta("op_Increment", Some(K::PlusPlusToken), F::Unary),
    meta("op_Inequality", Some(K::ExclamationEqualsToken), F::Binary),
    meta("op_IntegerDivision", None, F::Binary),
    meta("op_LeftShift", Some(K::LessThanLessThanToken), F::Binary),
    meta("op_LessThan", Some(K::LessThanToken), F::Binary),
    meta("op_LessThanOrEqual", Some(K::LessThanEqualsToken), F::Binary),
    meta("op_Like", None, F::Binary),
    meta("op_LogicalNot", Some(K::ExclamationToken), F::Unary),
    meta("op_Modulus", Some(K::PercentToken), F::Binary),
    meta("op_Multiply", Some(K::AsteriskToken), F::Binary),
    meta("op_OnesComplement", Some(K::TildeToken), F::Unary),
    meta("op_RightShift", Some(K::GreaterThanGreaterThanToken), F::Binary),
    meta("op_Subtraction", Some(K::MinusToken), F::Binary),
    meta("op_True", Some(K::TrueKeyword), F::Unary),
    meta("op_UnaryNegation", Some(K::MinusToken), F::Unary),
    meta("op_UnaryPlus", Some(K::PlusToken), F::Unary),
];

/// Registry entry for a metadata name.
pub fn info_for(name: &str) -> Option<&'static OperatorMetadataInfo> {
    OPERATOR_METADATA
        .binary_search_by(|m| m.name.cmp(name))
        .ok()
        .map(|idx| &OPERATOR_METADATA[idx])
}

/// Resolve a metadata name to the token that declares the operator.
///
/// ## Returns
/// - `Some(token)` for names with a surface spelling.
/// - `None` for unknown names and for the names borrowed from other languages.
pub fn operator_from_metadata_name(name: &str) -> Option<SyntaxKind> {
    info_for(name).and_then(|m| m.token)
}

/// Metadata name of the operator method declared with `token`.
pub fn metadata_name(token: SyntaxKind, fixity: MetadataFixity) -> Option<&'static str> {
    OPERATOR_METADATA
        .iter()
        .find(|m| m.token == Some(token) && m.fixity == fixity)
        .map(|m| m.name)
}
