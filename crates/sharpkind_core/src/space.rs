//! Category layout of the kind space: closed ranges, membership predicates, and enumerations.
//!
//! Every predicate here is either a closed-interval comparison over discriminants or a membership
//! test against a tiny fixed set. The interval bounds live in one explicit table
//! ([`CATEGORY_BOUNDS`]) that [`crate::validate`] checks against the registries at startup.
//!
//! ## Notes
//! - New kinds must be appended at the end of their block. Inserting a kind in a gap between blocks
//!   leaves it uncategorized, and `validate_kind_space` reports it.
//! - Enumerations return [`KindIter`], a borrowing iterator over [`SyntaxKind::ALL`]. Calling an
//!   enumeration again restarts it from the beginning.
//!
//! ## Examples
//! ```rust
//! use sharpkind_core::space;
//! use sharpkind_core::SyntaxKind;
//!
//! assert!(space::is_reserved_keyword(SyntaxKind::IntKeyword));
//! assert!(!space::is_reserved_keyword(SyntaxKind::YieldKeyword));
//! assert_eq!(space::reserved_keyword_kinds().next(), Some(SyntaxKind::BoolKeyword));
//! ```

use std::iter::{Chain, Copied, Filter};
use std::slice;

use crate::kind::SyntaxKind;

/// Borrowing iterator over a contiguous slice of [`SyntaxKind::ALL`].
pub type KindIter = Copied<slice::Iter<'static, SyntaxKind>>;

/// A closed interval `[first, last]` over kind discriminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KindRange {
    pub first: SyntaxKind,
    pub last: SyntaxKind,
}

impl KindRange {
    pub const fn new(first: SyntaxKind, last: SyntaxKind) -> Self {
        Self { first, last }
    }

    /// Check whether `kind` lies inside the interval.
    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let raw = kind as u16;
        self.first as u16 <= raw && raw <= self.last as u16
    }

    /// Check whether two intervals share at least one discriminant.
    pub const fn overlaps(&self, other: &KindRange) -> bool {
        (self.first as u16) <= (other.last as u16) && (other.first as u16) <= (self.last as u16)
    }

    /// Walk every assigned kind inside the interval in ascending order.
    ///
    /// ## Notes
    /// - Gaps between blocks hold no kinds, so a range spanning a gap yields only real members.
    pub fn kinds(&self) -> KindIter {
        let start = SyntaxKind::ALL.partition_point(|k| *k < self.first);
        let end = SyntaxKind::ALL.partition_point(|k| *k <= self.last);
        SyntaxKind::ALL[start..end.max(start)].iter().copied()
    }

    /// Number of assigned kinds inside the interval.
    pub fn len(&self) -> usize {
        self.kinds().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The top-level blocks of the kind space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KindCategory {
    Sentinel,
    SimplePunctuation,
    CompoundPunctuation,
    ReservedKeyword,
    PreprocessorKeyword,
    ContextualKeyword,
    StructuralToken,
    LiteralToken,
    InterpolatedToken,
    Trivia,
    DirectiveTrivia,
    Name,
    Type,
    PrefixUnaryExpression,
    PostfixUnaryExpression,
    BinaryExpression,
    AssignmentExpression,
    LiteralExpression,
    InstanceExpression,
    PrimaryFunctionExpression,
    Statement,
    SwitchLabel,
    MemberDeclaration,
    AccessorDeclaration,
}

impl KindCategory {
    /// Human-readable label used by tooling output.
    pub const fn label(self) -> &'static str {
        match self {
            KindCategory::Sentinel => "sentinel",
            KindCategory::SimplePunctuation => "simple punctuation",
            KindCategory::CompoundPunctuation => "compound punctuation",
            KindCategory::ReservedKeyword => "reserved keyword",
            KindCategory::PreprocessorKeyword => "preprocessor keyword",
            KindCategory::ContextualKeyword => "contextual keyword",
            KindCategory::StructuralToken => "structural token",
            KindCategory::LiteralToken => "literal token",
            KindCategory::InterpolatedToken => "interpolated string token",
            KindCategory::Trivia => "trivia",
            KindCategory::DirectiveTrivia => "directive trivia",
            KindCategory::Name => "name",
            KindCategory::Type => "type",
            KindCategory::PrefixUnaryExpression => "prefix unary expression",
            KindCategory::PostfixUnaryExpression => "postfix unary expression",
            KindCategory::BinaryExpression => "binary expression",
            KindCategory::AssignmentExpression => "assignment expression",
            KindCategory::LiteralExpression => "literal expression",
            KindCategory::InstanceExpression => "instance expression",
            KindCategory::PrimaryFunctionExpression => "primary function expression",
            KindCategory::Statement => "statement",
            KindCategory::SwitchLabel => "switch label",
            KindCategory::MemberDeclaration => "member declaration",
            KindCategory::AccessorDeclaration => "accessor declaration",
        }
    }
}

// --- block bounds ------------------------------------------------------------

pub const SENTINELS: KindRange = KindRange::new(SyntaxKind::None, SyntaxKind::List);
pub const SIMPLE_PUNCTUATION: KindRange =
    KindRange::new(SyntaxKind::TildeToken, SyntaxKind::XmlProcessingInstructionEndToken);
pub const COMPOUND_PUNCTUATION: KindRange = KindRange::new(SyntaxKind::BarBarToken, SyntaxKind::PercentEqualsToken);
pub const RESERVED_KEYWORDS: KindRange = KindRange::new(SyntaxKind::BoolKeyword, SyntaxKind::ImplicitKeyword);
pub const PREPROCESSOR_KEYWORDS: KindRange = KindRange::new(SyntaxKind::ElifKeyword, SyntaxKind::LoadKeyword);
pub const CONTEXTUAL_KEYWORDS: KindRange = KindRange::new(SyntaxKind::YieldKeyword, SyntaxKind::UnderscoreToken);
pub const STRUCTURAL_TOKENS: KindRange = KindRange::new(SyntaxKind::EndOfDirectiveToken, SyntaxKind::BadToken);
pub const LITERAL_TOKENS: KindRange =
    KindRange::new(SyntaxKind::IdentifierToken, SyntaxKind::XmlTextLiteralNewLineToken);
pub const INTERPOLATED_TOKENS: KindRange =
    KindRange::new(SyntaxKind::InterpolatedStringStartToken, SyntaxKind::InterpolatedStringToken);
pub const TRIVIA: KindRange = KindRange::new(SyntaxKind::EndOfLineTrivia, SyntaxKind::ConflictMarkerTrivia);
pub const DIRECTIVE_TRIVIA: KindRange =
    KindRange::new(SyntaxKind::IfDirectiveTrivia, SyntaxKind::ShebangDirectiveTrivia);
pub const NAMES: KindRange = KindRange::new(SyntaxKind::IdentifierName, SyntaxKind::AliasQualifiedName);
pub const TYPES: KindRange = KindRange::new(SyntaxKind::PredefinedType, SyntaxKind::TupleType);
pub const PREFIX_UNARY_EXPRESSIONS: KindRange =
    KindRange::new(SyntaxKind::UnaryPlusExpression, SyntaxKind::PointerIndirectionExpression);
pub const POSTFIX_UNARY_EXPRESSIONS: KindRange =
    KindRange::new(SyntaxKind::PostIncrementExpression, SyntaxKind::PostDecrementExpression);
pub const BINARY_EXPRESSIONS: KindRange = KindRange::new(SyntaxKind::AddExpression, SyntaxKind::CoalesceExpression);
pub const ASSIGNMENT_EXPRESSIONS: KindRange =
    KindRange::new(SyntaxKind::SimpleAssignmentExpression, SyntaxKind::RightShiftAssignmentExpression);
pub const LITERAL_EXPRESSIONS: KindRange =
    KindRange::new(SyntaxKind::ArgListExpression, SyntaxKind::NullLiteralExpression);
pub const INSTANCE_EXPRESSIONS: KindRange = KindRange::new(SyntaxKind::ThisExpression, SyntaxKind::BaseExpression);
pub const PRIMARY_FUNCTION_EXPRESSIONS: KindRange =
    KindRange::new(SyntaxKind::MakeRefExpression, SyntaxKind::SizeOfExpression);
pub const STATEMENTS: KindRange = KindRange::new(SyntaxKind::CheckedStatement, SyntaxKind::UncheckedStatement);
pub const SWITCH_LABELS: KindRange = KindRange::new(SyntaxKind::CaseSwitchLabel, SyntaxKind::DefaultSwitchLabel);
pub const MEMBER_DECLARATIONS: KindRange =
    KindRange::new(SyntaxKind::NamespaceDeclaration, SyntaxKind::EventDeclaration);
pub const ACCESSOR_DECLARATIONS: KindRange =
    KindRange::new(SyntaxKind::GetAccessorDeclaration, SyntaxKind::RemoveAccessorDeclaration);

/// Explicit bounds of every top-level block, in ascending order.
///
/// ## Notes
/// - Blocks are pairwise disjoint; [`category_of`] relies on it.
/// - Union ranges used by predicates (punctuation, any trivia, type syntax, …) are derived below and
///   are not listed here.
pub const CATEGORY_BOUNDS: &[(KindCategory, KindRange)] = &[
    (KindCategory::Sentinel, SENTINELS),
    (KindCategory::SimplePunctuation, SIMPLE_PUNCTUATION),
    (KindCategory::CompoundPunctuation, COMPOUND_PUNCTUATION),
    (KindCategory::ReservedKeyword, RESERVED_KEYWORDS),
    (KindCategory::PreprocessorKeyword, PREPROCESSOR_KEYWORDS),
    (KindCategory::ContextualKeyword, CONTEXTUAL_KEYWORDS),
    (KindCategory::StructuralToken, STRUCTURAL_TOKENS),
    (KindCategory::LiteralToken, LITERAL_TOKENS),
    (KindCategory::InterpolatedToken, INTERPOLATED_TOKENS),
    (KindCategory::Trivia, TRIVIA),
    (KindCategory::DirectiveTrivia, DIRECTIVE_TRIVIA),
    (KindCategory::Name, NAMES),
    (KindCategory::Type, TYPES),
    (KindCategory::PrefixUnaryExpression, PREFIX_UNARY_EXPRESSIONS),
    (KindCategory::PostfixUnaryExpression, POSTFIX_UNARY_EXPRESSIONS),
    (KindCategory::BinaryExpression, BINARY_EXPRESSIONS),
    (KindCategory::AssignmentExpression, ASSIGNMENT_EXPRESSIONS),
    (KindCategory::LiteralExpression, LITERAL_EXPRESSIONS),
    (KindCategory::InstanceExpression, INSTANCE_EXPRESSIONS),
    (KindCategory::PrimaryFunctionExpression, PRIMARY_FUNCTION_EXPRESSIONS),
    (KindCategory::Statement, STATEMENTS),
    (KindCategory::SwitchLabel, SWITCH_LABELS),
    (KindCategory::MemberDeclaration, MEMBER_DECLARATIONS),
    (KindCategory::AccessorDeclaration, ACCESSOR_DECLARATIONS),
];

// --- derived ranges ----------------------------------------------------------

pub const PUNCTUATION: KindRange = KindRange::new(SIMPLE_PUNCTUATION.first, COMPOUND_PUNCTUATION.last);
/// Punctuation through the structural end-of-input tokens, so every keyword block lies inside.
pub const PUNCTUATION_OR_KEYWORD: KindRange = KindRange::new(PUNCTUATION.first, SyntaxKind::EndOfFileToken);
pub const ANY_TRIVIA: KindRange = KindRange::new(TRIVIA.first, DIRECTIVE_TRIVIA.last);
pub const ANY_TOKEN: KindRange = KindRange::new(SIMPLE_PUNCTUATION.first, INTERPOLATED_TOKENS.last);
pub const PREDEFINED_TYPE_KEYWORDS: KindRange = KindRange::new(SyntaxKind::BoolKeyword, SyntaxKind::ObjectKeyword);
pub const TYPE_SYNTAX: KindRange = KindRange::new(NAMES.first, TYPES.last);
pub const TYPE_DECLARATIONS: KindRange =
    KindRange::new(SyntaxKind::ClassDeclaration, SyntaxKind::DelegateDeclaration);
pub const NAMESPACE_MEMBER_DECLARATIONS: KindRange =
    KindRange::new(SyntaxKind::NamespaceDeclaration, SyntaxKind::DelegateDeclaration);
pub const GLOBAL_MEMBER_DECLARATIONS: KindRange =
    KindRange::new(SyntaxKind::GlobalStatement, SyntaxKind::EventDeclaration);

/// Report which top-level block `kind` belongs to.
///
/// ## Returns
/// - `Some(category)` for every kind listed in [`SyntaxKind::ALL`] when the layout is valid.
/// - `None` for a kind outside every block (a layout defect).
pub fn category_of(kind: SyntaxKind) -> Option<KindCategory> {
    let idx = CATEGORY_BOUNDS.partition_point(|(_, range)| (range.last as u16) < kind.raw());
    CATEGORY_BOUNDS
        .get(idx)
        .filter(|(_, range)| range.contains(kind))
        .map(|(category, _)| *category)
}

/// Look up the declared bounds of a block.
pub fn bounds_of(category: KindCategory) -> Option<KindRange> {
    CATEGORY_BOUNDS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, range)| *range)
}

// --- range predicates --------------------------------------------------------

#[inline]
pub fn is_reserved_keyword(kind: SyntaxKind) -> bool {
    RESERVED_KEYWORDS.contains(kind)
}

#[inline]
pub fn is_contextual_keyword(kind: SyntaxKind) -> bool {
    CONTEXTUAL_KEYWORDS.contains(kind)
}

/// Reserved or contextual keyword. Directive-only keywords are not included.
#[inline]
pub fn is_keyword_kind(kind: SyntaxKind) -> bool {
    is_reserved_keyword(kind) || is_contextual_keyword(kind)
}

/// Simple or compound punctuation, including the XML documentation delimiters.
#[inline]
pub fn is_punctuation(kind: SyntaxKind) -> bool {
    PUNCTUATION.contains(kind)
}

#[inline]
pub fn is_compound_punctuation(kind: SyntaxKind) -> bool {
    COMPOUND_PUNCTUATION.contains(kind)
}

/// Anything from `~` up to end-of-file, which includes directive keywords and the end-of-directive
/// and end-of-file tokens. `BadToken` sits just past the range.
#[inline]
pub fn is_punctuation_or_keyword(kind: SyntaxKind) -> bool {
    PUNCTUATION_OR_KEYWORD.contains(kind)
}

/// Punctuation that may appear in ordinary source text.
///
/// `$` is only meaningful to the debugger expression evaluator and is excluded.
#[inline]
pub fn is_language_punctuation(kind: SyntaxKind) -> bool {
    is_punctuation(kind) && !is_debugger_special_punctuation(kind)
}

#[inline]
pub fn is_debugger_special_punctuation(kind: SyntaxKind) -> bool {
    kind == SyntaxKind::DollarToken
}

#[inline]
pub fn is_preprocessor_punctuation(kind: SyntaxKind) -> bool {
    kind == SyntaxKind::HashToken
}

/// Whitespace, comments, disabled text, conflict markers, and every directive.
#[inline]
pub fn is_trivia(kind: SyntaxKind) -> bool {
    ANY_TRIVIA.contains(kind)
}

#[inline]
pub fn is_preprocessor_directive(kind: SyntaxKind) -> bool {
    DIRECTIVE_TRIVIA.contains(kind)
}

#[inline]
pub fn is_documentation_comment_trivia(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::SingleLineDocumentationCommentTrivia | SyntaxKind::MultiLineDocumentationCommentTrivia
    )
}

/// Identifier and literal tokens (the tokens whose text is not fixed by their kind).
#[inline]
pub fn is_literal(kind: SyntaxKind) -> bool {
    LITERAL_TOKENS.contains(kind)
}

#[inline]
pub fn is_any_token(kind: SyntaxKind) -> bool {
    ANY_TOKEN.contains(kind)
}

#[inline]
pub fn is_name(kind: SyntaxKind) -> bool {
    NAMES.contains(kind)
}

/// Keyword kinds that name a built-in type (`bool` … `object`, including `void`).
#[inline]
pub fn is_predefined_type(kind: SyntaxKind) -> bool {
    PREDEFINED_TYPE_KEYWORDS.contains(kind)
}

/// Names plus array, pointer, nullable, predefined, and tuple type nodes.
#[inline]
pub fn is_type_syntax(kind: SyntaxKind) -> bool {
    TYPE_SYNTAX.contains(kind)
}

#[inline]
pub fn is_type_declaration(kind: SyntaxKind) -> bool {
    TYPE_DECLARATIONS.contains(kind)
}

#[inline]
pub fn is_namespace_member_declaration(kind: SyntaxKind) -> bool {
    NAMESPACE_MEMBER_DECLARATIONS.contains(kind)
}

#[inline]
pub fn is_global_member_declaration(kind: SyntaxKind) -> bool {
    GLOBAL_MEMBER_DECLARATIONS.contains(kind)
}

#[inline]
pub fn is_accessor_declaration(kind: SyntaxKind) -> bool {
    ACCESSOR_DECLARATIONS.contains(kind)
}

#[inline]
pub fn is_assignment_expression(kind: SyntaxKind) -> bool {
    ASSIGNMENT_EXPRESSIONS.contains(kind)
}

// --- fixed sets --------------------------------------------------------------

/// `assembly` and `module`, the global attribute targets.
pub fn is_attribute_target_specifier(kind: SyntaxKind) -> bool {
    matches!(kind, SyntaxKind::AssemblyKeyword | SyntaxKind::ModuleKeyword)
}

pub fn is_accessibility_modifier(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::PublicKeyword | SyntaxKind::PrivateKeyword | SyntaxKind::InternalKeyword | SyntaxKind::ProtectedKeyword
    )
}

/// Contextual keywords that only act as keywords inside a query expression.
pub fn is_query_contextual_keyword(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::FromKeyword
            | SyntaxKind::WhereKeyword
            | SyntaxKind::SelectKeyword
            | SyntaxKind::GroupKeyword
            | SyntaxKind::IntoKeyword
            | SyntaxKind::OrderByKeyword
            | SyntaxKind::JoinKeyword
            | SyntaxKind::LetKeyword
            | SyntaxKind::OnKeyword
            | SyntaxKind::EqualsKeyword
            | SyntaxKind::ByKeyword
            | SyntaxKind::AscendingKeyword
            | SyntaxKind::DescendingKeyword
    )
}

pub fn is_type_parameter_variance_keyword(kind: SyntaxKind) -> bool {
    matches!(kind, SyntaxKind::InKeyword | SyntaxKind::OutKeyword)
}

pub fn is_accessor_declaration_keyword(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::GetKeyword | SyntaxKind::SetKeyword | SyntaxKind::AddKeyword | SyntaxKind::RemoveKeyword
    )
}

// --- enumerations ------------------------------------------------------------

pub fn reserved_keyword_kinds() -> KindIter {
    RESERVED_KEYWORDS.kinds()
}

pub fn contextual_keyword_kinds() -> KindIter {
    CONTEXTUAL_KEYWORDS.kinds()
}

/// Reserved keywords followed by contextual keywords.
pub fn keyword_kinds() -> Chain<KindIter, KindIter> {
    reserved_keyword_kinds().chain(contextual_keyword_kinds())
}

/// Simple then compound punctuation.
pub fn punctuation_kinds() -> KindIter {
    PUNCTUATION.kinds()
}

/// Every kind accepted by [`crate::lang::preprocessor::is_preprocessor_keyword`], ascending.
///
/// This includes the reserved keywords that double as directive keywords (`true`, `false`, `if`,
/// `else`, `default`) ahead of the directive-only block.
pub fn preprocessor_keyword_kinds() -> Filter<KindIter, fn(&SyntaxKind) -> bool> {
    fn keep(kind: &SyntaxKind) -> bool {
        crate::lang::preprocessor::is_preprocessor_keyword(*kind)
    }
    SyntaxKind::ALL.iter().copied().filter(keep as fn(&SyntaxKind) -> bool)
}
