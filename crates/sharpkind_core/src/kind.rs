//! The `SyntaxKind` tag shared by the lexer, parser, and diagnostics.
//!
//! Every lexical and syntactic unit carries one `SyntaxKind`. Kinds are grouped into contiguous,
//! gap-separated blocks of discriminants, and every category predicate in [`crate::space`] is a
//! closed-interval comparison over those blocks.
//!
//! # Discriminant Layout
//!
//! | Range   | Category                         |
//! |---------|----------------------------------|
//! | 0-1     | Sentinels                        |
//! | 100-136 | Simple punctuation               |
//! | 200-223 | Compound punctuation             |
//! | 300-380 | Reserved keywords                |
//! | 400-415 | Preprocessor keywords            |
//! | 450-483 | Contextual keywords              |
//! | 500-503 | Structural tokens                |
//! | 520-526 | Identifier and literal tokens    |
//! | 540-544 | Interpolated string tokens       |
//! | 600-608 | Trivia                           |
//! | 620-636 | Directive trivia                 |
//! | 700-714 | Names and types                  |
//! | 750-877 | Expressions                      |
//! | 900-911 | Statements and switch labels     |
//! | 950-983 | Declarations                     |
//!
//! ## Notes
//! - Discriminants are a compatibility surface: new kinds go at the end of their block, never in
//!   the middle of another block.
//! - [`SyntaxKind::ALL`] lists every kind in ascending order; enumeration walks it.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::errors::ParseKindError;

/// Classification tag for a token, trivia, or syntax node.
///
/// `#[repr(u16)]` keeps the tag two bytes wide; the derived `Ord` follows the discriminants, so
/// `a < b` compares block positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    // === Sentinels (0-1) ===
    None = 0,
    List = 1,

    // === Simple punctuation (100-136) ===
    TildeToken = 100,
    ExclamationToken = 101,
    DollarToken = 102,
    PercentToken = 103,
    CaretToken = 104,
    AmpersandToken = 105,
    AsteriskToken = 106,
    OpenParenToken = 107,
    CloseParenToken = 108,
    MinusToken = 109,
    PlusToken = 110,
    EqualsToken = 111,
    OpenBraceToken = 112,
    CloseBraceToken = 113,
    OpenBracketToken = 114,
    CloseBracketToken = 115,
    BarToken = 116,
    BackslashToken = 117,
    ColonToken = 118,
    SemicolonToken = 119,
    DoubleQuoteToken = 120,
    SingleQuoteToken = 121,
    LessThanToken = 122,
    CommaToken = 123,
    GreaterThanToken = 124,
    DotToken = 125,
    QuestionToken = 126,
    HashToken = 127,
    SlashToken = 128,
    SlashGreaterThanToken = 129,
    LessThanSlashToken = 130,
    XmlCommentStartToken = 131,
    XmlCommentEndToken = 132,
    XmlCDataStartToken = 133,
    XmlCDataEndToken = 134,
    XmlProcessingInstructionStartToken = 135,
    XmlProcessingInstructionEndToken = 136,

    // === Compound punctuation (200-223) ===
    BarBarToken = 200,
    AmpersandAmpersandToken = 201,
    MinusMinusToken = 202,
    PlusPlusToken = 203,
    ColonColonToken = 204,
    QuestionQuestionToken = 205,
    MinusGreaterThanToken = 206,
    ExclamationEqualsToken = 207,
    EqualsEqualsToken = 208,
    EqualsGreaterThanToken = 209,
    LessThanEqualsToken = 210,
    LessThanLessThanToken = 211,
    LessThanLessThanEqualsToken = 212,
    GreaterThanEqualsToken = 213,
    GreaterThanGreaterThanToken = 214,
    GreaterThanGreaterThanEqualsToken = 215,
    SlashEqualsToken = 216,
    AsteriskEqualsToken = 217,
    BarEqualsToken = 218,
    AmpersandEqualsToken = 219,
    PlusEqualsToken = 220,
    MinusEqualsToken = 221,
    CaretEqualsToken = 222,
    PercentEqualsToken = 223,

    // === Reserved keywords (300-380) ===
    BoolKeyword = 300,
    ByteKeyword = 301,
    SByteKeyword = 302,
    ShortKeyword = 303,
    UShortKeyword = 304,
    IntKeyword = 305,
    UIntKeyword = 306,
    LongKeyword = 307,
    ULongKeyword = 308,
    DoubleKeyword = 309,
    FloatKeyword = 310,
    DecimalKeyword = 311,
    StringKeyword = 312,
    CharKeyword = 313,
    VoidKeyword = 314,
    ObjectKeyword = 315,
    TypeOfKeyword = 316,
    SizeOfKeyword = 317,
    NullKeyword = 318,
    TrueKeyword = 319,
    FalseKeyword = 320,
    IfKeyword = 321,
    ElseKeyword = 322,
    WhileKeyword = 323,
    ForKeyword = 324,
    ForEachKeyword = 325,
    DoKeyword = 326,
    SwitchKeyword = 327,
    CaseKeyword = 328,
    DefaultKeyword = 329,
    TryKeyword = 330,
    CatchKeyword = 331,
    FinallyKeyword = 332,
    LockKeyword = 333,
    GotoKeyword = 334,
    BreakKeyword = 335,
    ContinueKeyword = 336,
    ReturnKeyword = 337,
    ThrowKeyword = 338,
    PublicKeyword = 339,
    PrivateKeyword = 340,
    InternalKeyword = 341,
    ProtectedKeyword = 342,
    StaticKeyword = 343,
    ReadOnlyKeyword = 344,
    SealedKeyword = 345,
    ConstKeyword = 346,
    FixedKeyword = 347,
    StackAllocKeyword = 348,
    VolatileKeyword = 349,
    NewKeyword = 350,
    OverrideKeyword = 351,
    AbstractKeyword = 352,
    VirtualKeyword = 353,
    EventKeyword = 354,
    ExternKeyword = 355,
    RefKeyword = 356,
    OutKeyword = 357,
    InKeyword = 358,
    IsKeyword = 359,
    AsKeyword = 360,
    ParamsKeyword = 361,
    ArgListKeyword = 362,
    MakeRefKeyword = 363,
    RefTypeKeyword = 364,
    RefValueKeyword = 365,
    ThisKeyword = 366,
    BaseKeyword = 367,
    NamespaceKeyword = 368,
    UsingKeyword = 369,
    ClassKeyword = 370,
    StructKeyword = 371,
    InterfaceKeyword = 372,
    EnumKeyword = 373,
    DelegateKeyword = 374,
    CheckedKeyword = 375,
    UncheckedKeyword = 376,
    UnsafeKeyword = 377,
    OperatorKeyword = 378,
    ExplicitKeyword = 379,
    ImplicitKeyword = 380,

    // === Preprocessor keywords (400-415) ===
    ElifKeyword = 400,
    EndIfKeyword = 401,
    RegionKeyword = 402,
    EndRegionKeyword = 403,
    DefineKeyword = 404,
    UndefKeyword = 405,
    WarningKeyword = 406,
    ErrorKeyword = 407,
    LineKeyword = 408,
    PragmaKeyword = 409,
    HiddenKeyword = 410,
    ChecksumKeyword = 411,
    DisableKeyword = 412,
    RestoreKeyword = 413,
    ReferenceKeyword = 414,
    LoadKeyword = 415,

    // === Contextual keywords (450-483) ===
    YieldKeyword = 450,
    PartialKeyword = 451,
    AliasKeyword = 452,
    GlobalKeyword = 453,
    AssemblyKeyword = 454,
    ModuleKeyword = 455,
    TypeKeyword = 456,
    FieldKeyword = 457,
    MethodKeyword = 458,
    ParamKeyword = 459,
    PropertyKeyword = 460,
    TypeVarKeyword = 461,
    GetKeyword = 462,
    SetKeyword = 463,
    AddKeyword = 464,
    RemoveKeyword = 465,
    WhereKeyword = 466,
    FromKeyword = 467,
    GroupKeyword = 468,
    JoinKeyword = 469,
    IntoKeyword = 470,
    LetKeyword = 471,
    ByKeyword = 472,
    SelectKeyword = 473,
    OrderByKeyword = 474,
    OnKeyword = 475,
    EqualsKeyword = 476,
    AscendingKeyword = 477,
    DescendingKeyword = 478,
    NameOfKeyword = 479,
    AsyncKeyword = 480,
    AwaitKeyword = 481,
    WhenKeyword = 482,
    /// `_`: lexed like a contextual keyword (discard designation).
    UnderscoreToken = 483,

    // === Structural tokens (500-503) ===
    EndOfDirectiveToken = 500,
    EndOfDocumentationCommentToken = 501,
    EndOfFileToken = 502,
    BadToken = 503,

    // === Identifier and literal tokens (520-526) ===
    IdentifierToken = 520,
    NumericLiteralToken = 521,
    CharacterLiteralToken = 522,
    StringLiteralToken = 523,
    XmlEntityLiteralToken = 524,
    XmlTextLiteralToken = 525,
    XmlTextLiteralNewLineToken = 526,

    // === Interpolated string tokens (540-544) ===
    InterpolatedStringStartToken = 540,
    InterpolatedVerbatimStringStartToken = 541,
    InterpolatedStringTextToken = 542,
    InterpolatedStringEndToken = 543,
    InterpolatedStringToken = 544,

    // === Trivia (600-608) ===
    EndOfLineTrivia = 600,
    WhitespaceTrivia = 601,
    SingleLineCommentTrivia = 602,
    MultiLineCommentTrivia = 603,
    DocumentationCommentExteriorTrivia = 604,
    SingleLineDocumentationCommentTrivia = 605,
    MultiLineDocumentationCommentTrivia = 606,
    DisabledTextTrivia = 607,
    ConflictMarkerTrivia = 608,

    // === Directive trivia (620-636) ===
    IfDirectiveTrivia = 620,
    ElifDirectiveTrivia = 621,
    ElseDirectiveTrivia = 622,
    EndIfDirectiveTrivia = 623,
    RegionDirectiveTrivia = 624,
    EndRegionDirectiveTrivia = 625,
    DefineDirectiveTrivia = 626,
    UndefDirectiveTrivia = 627,
    ErrorDirectiveTrivia = 628,
    WarningDirectiveTrivia = 629,
    LineDirectiveTrivia = 630,
    PragmaWarningDirectiveTrivia = 631,
    PragmaChecksumDirectiveTrivia = 632,
    ReferenceDirectiveTrivia = 633,
    LoadDirectiveTrivia = 634,
    BadDirectiveTrivia = 635,
    ShebangDirectiveTrivia = 636,

    // === Names (700-703) ===
    IdentifierName = 700,
    QualifiedName = 701,
    GenericName = 702,
    AliasQualifiedName = 703,

    // === Types (710-714) ===
    PredefinedType = 710,
    ArrayType = 711,
    PointerType = 712,
    NullableType = 713,
    TupleType = 714,

    // === Prefix unary expressions (750-757) ===
    UnaryPlusExpression = 750,
    UnaryMinusExpression = 751,
    BitwiseNotExpression = 752,
    LogicalNotExpression = 753,
    PreIncrementExpression = 754,
    PreDecrementExpression = 755,
    AddressOfExpression = 756,
    PointerIndirectionExpression = 757,

    // === Postfix unary expressions (770-771) ===
    PostIncrementExpression = 770,
    PostDecrementExpression = 771,

    // === Binary expressions (780-800) ===
    AddExpression = 780,
    SubtractExpression = 781,
    MultiplyExpression = 782,
    DivideExpression = 783,
    ModuloExpression = 784,
    LeftShiftExpression = 785,
    RightShiftExpression = 786,
    LogicalOrExpression = 787,
    LogicalAndExpression = 788,
    BitwiseOrExpression = 789,
    BitwiseAndExpression = 790,
    ExclusiveOrExpression = 791,
    EqualsExpression = 792,
    NotEqualsExpression = 793,
    LessThanExpression = 794,
    LessThanOrEqualExpression = 795,
    GreaterThanExpression = 796,
    GreaterThanOrEqualExpression = 797,
    IsExpression = 798,
    AsExpression = 799,
    CoalesceExpression = 800,

    // === Assignment expressions (820-830) ===
    SimpleAssignmentExpression = 820,
    AddAssignmentExpression = 821,
    SubtractAssignmentExpression = 822,
    MultiplyAssignmentExpression = 823,
    DivideAssignmentExpression = 824,
    ModuloAssignmentExpression = 825,
    AndAssignmentExpression = 826,
    ExclusiveOrAssignmentExpression = 827,
    OrAssignmentExpression = 828,
    LeftShiftAssignmentExpression = 829,
    RightShiftAssignmentExpression = 830,

    // === Literal expressions (840-846) ===
    ArgListExpression = 840,
    NumericLiteralExpression = 841,
    StringLiteralExpression = 842,
    CharacterLiteralExpression = 843,
    TrueLiteralExpression = 844,
    FalseLiteralExpression = 845,
    NullLiteralExpression = 846,

    // === Instance expressions (860-861) ===
    ThisExpression = 860,
    BaseExpression = 861,

    // === Primary-function expressions (870-877) ===
    MakeRefExpression = 870,
    RefTypeExpression = 871,
    RefValueExpression = 872,
    CheckedExpression = 873,
    UncheckedExpression = 874,
    DefaultExpression = 875,
    TypeOfExpression = 876,
    SizeOfExpression = 877,

    // === Statements (900-901) ===
    CheckedStatement = 900,
    UncheckedStatement = 901,

    // === Switch labels (910-911) ===
    CaseSwitchLabel = 910,
    DefaultSwitchLabel = 911,

    // === Member declarations (950-961) ===
    NamespaceDeclaration = 950,
    ClassDeclaration = 951,
    StructDeclaration = 952,
    InterfaceDeclaration = 953,
    EnumDeclaration = 954,
    DelegateDeclaration = 955,
    GlobalStatement = 956,
    FieldDeclaration = 957,
    EventFieldDeclaration = 958,
    MethodDeclaration = 959,
    PropertyDeclaration = 960,
    EventDeclaration = 961,

    // === Accessor declarations (980-983) ===
    GetAccessorDeclaration = 980,
    SetAccessorDeclaration = 981,
    AddAccessorDeclaration = 982,
    RemoveAccessorDeclaration = 983,
}

impl SyntaxKind {
    /// Every kind, in ascending discriminant order.
    ///
    /// Range enumeration in [`crate::space`] walks this table, so it must stay sorted and complete.
    pub const ALL: &'static [SyntaxKind] = &[
        SyntaxKind::None,
        SyntaxKind::List,
        // simple punctuation
        SyntaxKind::TildeToken,
        SyntaxKind::ExclamationToken,
        SyntaxKind::DollarToken,
        SyntaxKind::PercentToken,
        SyntaxKind::CaretToken,
        SyntaxKind::AmpersandToken,
        SyntaxKind::AsteriskToken,
        SyntaxKind::OpenParenToken,
        SyntaxKind::CloseParenToken,
        SyntaxKind::MinusToken,
        SyntaxKind::PlusToken,
        SyntaxKind::EqualsToken,
        SyntaxKind::OpenBraceToken,
        SyntaxKind::CloseBraceToken,
        SyntaxKind::OpenBracketToken,
        SyntaxKind::CloseBracketToken,
        SyntaxKind::BarToken,
        SyntaxKind::BackslashToken,
        SyntaxKind::ColonToken,
        SyntaxKind::SemicolonToken,
        SyntaxKind::DoubleQuoteToken,
        SyntaxKind::SingleQuoteToken,
        SyntaxKind::LessThanToken,
        SyntaxKind::CommaToken,
        SyntaxKind::GreaterThanToken,
        SyntaxKind::DotToken,
        SyntaxKind::QuestionToken,
        SyntaxKind::HashToken,
        SyntaxKind::SlashToken,
        SyntaxKind::SlashGreaterThanToken,
        SyntaxKind::LessThanSlashToken,
        SyntaxKind::XmlCommentStartToken,
        SyntaxKind::XmlCommentEndToken,
        SyntaxKind::XmlCDataStartToken,
        SyntaxKind::XmlCDataEndToken,
        SyntaxKind::XmlProcessingInstructionStartToken,
        SyntaxKind::XmlProcessingInstructionEndToken,
        // compound punctuation
        SyntaxKind::BarBarToken,
        SyntaxKind::AmpersandAmpersandToken,
        SyntaxKind::MinusMinusToken,
        SyntaxKind::PlusPlusToken,
        SyntaxKind::ColonColonToken,
        SyntaxKind::QuestionQuestionToken,
        SyntaxKind::MinusGreaterThanToken,
        SyntaxKind::ExclamationEqualsToken,
        SyntaxKind::EqualsEqualsToken,
        SyntaxKind::EqualsGreaterThanToken,
        SyntaxKind::LessThanEqualsToken,
        SyntaxKind::LessThanLessThanToken,
        SyntaxKind::LessThanLessThanEqualsToken,
        SyntaxKind::GreaterThanEqualsToken,
        SyntaxKind::GreaterThanGreaterThanToken,
        SyntaxKind::GreaterThanGreaterThanEqualsToken,
        SyntaxKind::SlashEqualsToken,
        SyntaxKind::AsteriskEqualsToken,
        SyntaxKind::BarEqualsToken,
        SyntaxKind::AmpersandEqualsToken,
        SyntaxKind::PlusEqualsToken,
        SyntaxKind::MinusEqualsToken,
        SyntaxKind::CaretEqualsToken,
        SyntaxKind::PercentEqualsToken,
        // reserved keywords
        SyntaxKind::BoolKeyword,
        SyntaxKind::ByteKeyword,
        SyntaxKind::SByteKeyword,
        SyntaxKind::ShortKeyword,
        SyntaxKind::UShortKeyword,
        SyntaxKind::IntKeyword,
        SyntaxKind::UIntKeyword,
        SyntaxKind::LongKeyword,
        SyntaxKind::ULongKeyword,
        SyntaxKind::DoubleKeyword,
        SyntaxKind::FloatKeyword,
        SyntaxKind::DecimalKeyword,
        SyntaxKind::StringKeyword,
        SyntaxKind::CharKeyword,
        SyntaxKind::VoidKeyword,
        SyntaxKind::ObjectKeyword,
        SyntaxKind::TypeOfKeyword,
        SyntaxKind::SizeOfKeyword,
        SyntaxKind::NullKeyword,
        SyntaxKind::TrueKeyword,
        SyntaxKind::FalseKeyword,
        SyntaxKind::IfKeyword,
        SyntaxKind::ElseKeyword,
        SyntaxKind::WhileKeyword,
        SyntaxKind::ForKeyword,
        SyntaxKind::ForEachKeyword,
        SyntaxKind::DoKeyword,
        SyntaxKind::SwitchKeyword,
        SyntaxKind::CaseKeyword,
        SyntaxKind::DefaultKeyword,
        SyntaxKind::TryKeyword,
        SyntaxKind::CatchKeyword,
        SyntaxKind::FinallyKeyword,
        SyntaxKind::LockKeyword,
        SyntaxKind::GotoKeyword,
        SyntaxKind::BreakKeyword,
        SyntaxKind::ContinueKeyword,
        SyntaxKind::ReturnKeyword,
        SyntaxKind::ThrowKeyword,
        SyntaxKind::PublicKeyword,
        SyntaxKind::PrivateKeyword,
        SyntaxKind::InternalKeyword,
        SyntaxKind::ProtectedKeyword,
        SyntaxKind::StaticKeyword,
        SyntaxKind::ReadOnlyKeyword,
        SyntaxKind::SealedKeyword,
        SyntaxKind::ConstKeyword,
        SyntaxKind::FixedKeyword,
        SyntaxKind::StackAllocKeyword,
        SyntaxKind::VolatileKeyword,
        SyntaxKind::NewKeyword,
        SyntaxKind::OverrideKeyword,
        SyntaxKind::AbstractKeyword,
        SyntaxKind::VirtualKeyword,
        SyntaxKind::EventKeyword,
        SyntaxKind::ExternKeyword,
        SyntaxKind::RefKeyword,
        SyntaxKind::OutKeyword,
        SyntaxKind::InKeyword,
        SyntaxKind::IsKeyword,
        SyntaxKind::AsKeyword,
        SyntaxKind::ParamsKeyword,
        SyntaxKind::ArgListKeyword,
        SyntaxKind::MakeRefKeyword,
        SyntaxKind::RefTypeKeyword,
        SyntaxKind::RefValueKeyword,
        SyntaxKind::ThisKeyword,
        SyntaxKind::BaseKeyword,
        SyntaxKind::NamespaceKeyword,
        SyntaxKind::UsingKeyword,
        SyntaxKind::ClassKeyword,
        SyntaxKind::StructKeyword,
        SyntaxKind::InterfaceKeyword,
        SyntaxKind::EnumKeyword,
        SyntaxKind::DelegateKeyword,
        SyntaxKind::CheckedKeyword,
        SyntaxKind::UncheckedKeyword,
        SyntaxKind::UnsafeKeyword,
        SyntaxKind::OperatorKeyword,
        SyntaxKind::ExplicitKeyword,
        SyntaxKind::ImplicitKeyword,
        // preprocessor keywords
        SyntaxKind::ElifKeyword,
        SyntaxKind::EndIfKeyword,
        SyntaxKind::RegionKeyword,
        SyntaxKind::EndRegionKeyword,
        SyntaxKind::DefineKeyword,
        SyntaxKind::UndefKeyword,
        SyntaxKind::WarningKeyword,
        SyntaxKind::ErrorKeyword,
        SyntaxKind::LineKeyword,
        SyntaxKind::PragmaKeyword,
        SyntaxKind::HiddenKeyword,
        SyntaxKind::ChecksumKeyword,
        SyntaxKind::DisableKeyword,
        SyntaxKind::RestoreKeyword,
        SyntaxKind::ReferenceKeyword,
        SyntaxKind::LoadKeyword,
        // contextual keywords
        SyntaxKind::YieldKeyword,
        SyntaxKind::PartialKeyword,
        SyntaxKind::AliasKeyword,
        SyntaxKind::GlobalKeyword,
        SyntaxKind::AssemblyKeyword,
        SyntaxKind::ModuleKeyword,
        SyntaxKind::TypeKeyword,
        SyntaxKind::FieldKeyword,
        SyntaxKind::MethodKeyword,
        SyntaxKind::ParamKeyword,
        SyntaxKind::PropertyKeyword,
        SyntaxKind::TypeVarKeyword,
        SyntaxKind::GetKeyword,
        SyntaxKind::SetKeyword,
        SyntaxKind::AddKeyword,
        SyntaxKind::RemoveKeyword,
        SyntaxKind::WhereKeyword,
        SyntaxKind::FromKeyword,
        SyntaxKind::GroupKeyword,
        SyntaxKind::JoinKeyword,
        SyntaxKind::IntoKeyword,
        SyntaxKind::LetKeyword,
        SyntaxKind::ByKeyword,
        SyntaxKind::SelectKeyword,
        SyntaxKind::OrderByKeyword,
        SyntaxKind::OnKeyword,
        SyntaxKind::EqualsKeyword,
        SyntaxKind::AscendingKeyword,
        SyntaxKind::DescendingKeyword,
        SyntaxKind::NameOfKeyword,
        SyntaxKind::AsyncKeyword,
        SyntaxKind::AwaitKeyword,
        SyntaxKind::WhenKeyword,
        SyntaxKind::UnderscoreToken,
        // structural tokens
        SyntaxKind::EndOfDirectiveToken,
        SyntaxKind::EndOfDocumentationCommentToken,
        SyntaxKind::EndOfFileToken,
        SyntaxKind::BadToken,
        // identifier and literal tokens
        SyntaxKind::IdentifierToken,
        SyntaxKind::NumericLiteralToken,
        SyntaxKind::CharacterLiteralToken,
        SyntaxKind::StringLiteralToken,
        SyntaxKind::XmlEntityLiteralToken,
        SyntaxKind::XmlTextLiteralToken,
        SyntaxKind::XmlTextLiteralNewLineToken,
        // interpolated string tokens
        SyntaxKind::InterpolatedStringStartToken,
        SyntaxKind::InterpolatedVerbatimStringStartToken,
        SyntaxKind::InterpolatedStringTextToken,
        SyntaxKind::InterpolatedStringEndToken,
        SyntaxKind::InterpolatedStringToken,
        // trivia
        SyntaxKind::EndOfLineTrivia,
        SyntaxKind::WhitespaceTrivia,
        SyntaxKind::SingleLineCommentTrivia,
        SyntaxKind::MultiLineCommentTrivia,
        SyntaxKind::DocumentationCommentExteriorTrivia,
        SyntaxKind::SingleLineDocumentationCommentTrivia,
        SyntaxKind::MultiLineDocumentationCommentTrivia,
        SyntaxKind::DisabledTextTrivia,
        SyntaxKind::ConflictMarkerTrivia,
        // directive trivia
        SyntaxKind::IfDirectiveTrivia,
        SyntaxKind::ElifDirectiveTrivia,
        SyntaxKind::ElseDirectiveTrivia,
        SyntaxKind::EndIfDirectiveTrivia,
        SyntaxKind::RegionDirectiveTrivia,
        SyntaxKind::EndRegionDirectiveTrivia,
        SyntaxKind::DefineDirectiveTrivia,
        SyntaxKind::UndefDirectiveTrivia,
        SyntaxKind::ErrorDirectiveTrivia,
        SyntaxKind::WarningDirectiveTrivia,
        SyntaxKind::LineDirectiveTrivia,
        SyntaxKind::PragmaWarningDirectiveTrivia,
        SyntaxKind::PragmaChecksumDirectiveTrivia,
        SyntaxKind::ReferenceDirectiveTrivia,
        SyntaxKind::LoadDirectiveTrivia,
        SyntaxKind::BadDirectiveTrivia,
        SyntaxKind::ShebangDirectiveTrivia,
        // names
        SyntaxKind::IdentifierName,
        SyntaxKind::QualifiedName,
        SyntaxKind::GenericName,
        SyntaxKind::AliasQualifiedName,
        // types
        SyntaxKind::PredefinedType,
        SyntaxKind::ArrayType,
        SyntaxKind::PointerType,
        SyntaxKind::NullableType,
        SyntaxKind::TupleType,
        // prefix unary expressions
        SyntaxKind::UnaryPlusExpression,
        SyntaxKind::UnaryMinusExpression,
        SyntaxKind::BitwiseNotExpression,
        SyntaxKind::LogicalNotExpression,
        SyntaxKind::PreIncrementExpression,
        SyntaxKind::PreDecrementExpression,
        SyntaxKind::AddressOfExpression,
        SyntaxKind::PointerIndirectionExpression,
        // postfix unary expressions
        SyntaxKind::PostIncrementExpression,
        SyntaxKind::PostDecrementExpression,
        // binary expressions
        SyntaxKind::AddExpression,
        SyntaxKind::SubtractExpression,
        SyntaxKind::MultiplyExpression,
        SyntaxKind::DivideExpression,
        SyntaxKind::ModuloExpression,
        SyntaxKind::LeftShiftExpression,
        SyntaxKind::RightShiftExpression,
        SyntaxKind::LogicalOrExpression,
        SyntaxKind::LogicalAndExpression,
        SyntaxKind::BitwiseOrExpression,
        SyntaxKind::BitwiseAndExpression,
        SyntaxKind::ExclusiveOrExpression,
        SyntaxKind::EqualsExpression,
        SyntaxKind::NotEqualsExpression,
        SyntaxKind::LessThanExpression,
        SyntaxKind::LessThanOrEqualExpression,
        SyntaxKind::GreaterThanExpression,
        SyntaxKind::GreaterThanOrEqualExpression,
        SyntaxKind::IsExpression,
        SyntaxKind::AsExpression,
        SyntaxKind::CoalesceExpression,
        // assignment expressions
        SyntaxKind::SimpleAssignmentExpression,
        SyntaxKind::AddAssignmentExpression,
        SyntaxKind::SubtractAssignmentExpression,
        SyntaxKind::MultiplyAssignmentExpression,
        SyntaxKind::DivideAssignmentExpression,
        SyntaxKind::ModuloAssignmentExpression,
        SyntaxKind::AndAssignmentExpression,
        SyntaxKind::ExclusiveOrAssignmentExpression,
        SyntaxKind::OrAssignmentExpression,
        SyntaxKind::LeftShiftAssignmentExpression,
        SyntaxKind::RightShiftAssignmentExpression,
        // literal expressions
        SyntaxKind::ArgListExpression,
        SyntaxKind::NumericLiteralExpression,
        SyntaxKind::StringLiteralExpression,
        SyntaxKind::CharacterLiteralExpression,
        SyntaxKind::TrueLiteralExpression,
        SyntaxKind::FalseLiteralExpression,
        SyntaxKind::NullLiteralExpression,
        // instance expressions
        SyntaxKind::ThisExpression,
        SyntaxKind::BaseExpression,
        // primary-function expressions
        SyntaxKind::MakeRefExpression,
        SyntaxKind::RefTypeExpression,
        SyntaxKind::RefValueExpression,
        SyntaxKind::CheckedExpression,
        SyntaxKind::UncheckedExpression,
        SyntaxKind::DefaultExpression,
        SyntaxKind::TypeOfExpression,
        SyntaxKind::SizeOfExpression,
        // statements
        SyntaxKind::CheckedStatement,
        SyntaxKind::UncheckedStatement,
        // switch labels
        SyntaxKind::CaseSwitchLabel,
        SyntaxKind::DefaultSwitchLabel,
        // member declarations
        SyntaxKind::NamespaceDeclaration,
        SyntaxKind::ClassDeclaration,
        SyntaxKind::StructDeclaration,
        SyntaxKind::InterfaceDeclaration,
        SyntaxKind::EnumDeclaration,
        SyntaxKind::DelegateDeclaration,
        SyntaxKind::GlobalStatement,
        SyntaxKind::FieldDeclaration,
        SyntaxKind::EventFieldDeclaration,
        SyntaxKind::MethodDeclaration,
        SyntaxKind::PropertyDeclaration,
        SyntaxKind::EventDeclaration,
        // accessor declarations
        SyntaxKind::GetAccessorDeclaration,
        SyntaxKind::SetAccessorDeclaration,
        SyntaxKind::AddAccessorDeclaration,
        SyntaxKind::RemoveAccessorDeclaration,
    ];

    /// Return the raw discriminant.
    #[inline]
    pub const fn raw(self) -> u16 {
        self as u16
    }

    /// Look up a kind by its raw discriminant.
    ///
    /// ## Returns
    /// - `Some(kind)` if `raw` is an assigned discriminant.
    /// - `None` for values that fall in a gap between blocks.
    pub fn from_raw(raw: u16) -> Option<SyntaxKind> {
        Self::ALL
            .binary_search_by_key(&raw, |k| k.raw())
            .ok()
            .map(|idx| Self::ALL[idx])
    }

    /// Look up a kind by its variant name (e.g. `"PlusEqualsToken"`). Case-sensitive.
    pub fn from_name(name: &str) -> Option<SyntaxKind> {
        NAME_INDEX.get(name).copied()
    }
}

/// Variant name -> kind, built once on first name lookup.
static NAME_INDEX: Lazy<HashMap<String, SyntaxKind>> =
    Lazy::new(|| SyntaxKind::ALL.iter().map(|&k| (format!("{k:?}"), k)).collect());

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for SyntaxKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(kind) = SyntaxKind::from_name(s) {
            return Ok(kind);
        }
        match s.parse::<u16>() {
            Ok(raw) => SyntaxKind::from_raw(raw).ok_or(ParseKindError::UnassignedValue(raw)),
            Err(_) => Err(ParseKindError::UnknownName(s.to_string())),
        }
    }
}
