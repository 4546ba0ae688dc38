//! Reserved and contextual keyword vocabulary, including alternate-script spellings.
//!
//! This module is the single source of truth for keyword spellings: two const registries
//! ([`RESERVED_KEYWORDS`], [`CONTEXTUAL_KEYWORDS`]) that record each keyword's [`SyntaxKind`], its
//! canonical ASCII spelling, its declared Chinese synonyms, and a documentation category.
//!
//! ## Notes
//! - Lookup via [`resolve`] is **case-sensitive**. Synonyms resolve to the same kind as the
//!   canonical spelling.
//! - Synonyms are a curated per-keyword list, not a transliteration rule. Keywords without a
//!   declared synonym (e.g. `__arglist`, `_`) resolve only through their canonical spelling.
//! - `类型` is the synonym of `typeof`. The contextual `type` attribute target has no synonym so that
//!   every spelling maps to exactly one kind.
//! - Directive-only keywords (`region`, `pragma`, …) live in [`crate::lang::preprocessor`].
//!
//! ## Examples
//! ```rust
//! use sharpkind_core::lang::keywords;
//! use sharpkind_core::SyntaxKind;
//!
//! assert_eq!(keywords::resolve("class"), Some(SyntaxKind::ClassKeyword));
//! assert_eq!(keywords::resolve("类"), Some(SyntaxKind::ClassKeyword));
//! assert_eq!(keywords::as_str(SyntaxKind::ClassKeyword), Some("class"));
//! assert_eq!(keywords::resolve("Class"), None);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::registry::{self, SpellingEntry};
use self::KeywordCategory as C;
use crate::kind::SyntaxKind;
use crate::kind::SyntaxKind as K;
use crate::space;

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; the parser owns context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    PredefinedType,
    Literal,
    ControlFlow,
    Modifier,
    Declaration,
    Parameter,
    Operator,
    Expression,
    Query,
    Accessor,
    AttributeTarget,
    Directive,
}

impl KeywordCategory {
    pub const fn label(self) -> &'static str {
        match self {
            KeywordCategory::PredefinedType => "predefined type",
            KeywordCategory::Literal => "literal",
            KeywordCategory::ControlFlow => "control flow",
            KeywordCategory::Modifier => "modifier",
            KeywordCategory::Declaration => "declaration",
            KeywordCategory::Parameter => "parameter",
            KeywordCategory::Operator => "operator",
            KeywordCategory::Expression => "expression",
            KeywordCategory::Query => "query",
            KeywordCategory::Accessor => "accessor",
            KeywordCategory::AttributeTarget => "attribute target",
            KeywordCategory::Directive => "directive",
        }
    }
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `canonical` is the preferred spelling for docs and emission.
/// - `aliases` are the declared alternate-script spellings.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub kind: SyntaxKind,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub category: KeywordCategory,
}

impl SpellingEntry for KeywordInfo {
    fn kind(&self) -> SyntaxKind {
        self.kind
    }

    fn canonical(&self) -> &'static str {
        self.canonical
    }

    fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }
}

/// Reserved keywords, in kind order.
///
/// ## Notes
/// - Entry `i` is for the kind at offset `i` of the reserved keyword block.
pub const RESERVED_KEYWORDS: &[KeywordInfo] = &[
    info(K::BoolKeyword, "bool", &["布"], C::PredefinedType),
    info(K::ByteKeyword, "byte", &["字节"], C::PredefinedType),
    info(K::SByteKeyword, "sbyte", &["符字节"], C::PredefinedType),
    info(K::ShortKeyword, "short", &["短"], C::PredefinedType),
    info(K::UShortKeyword, "ushort", &["无短"], C::PredefinedType),
    info(K::IntKeyword, "int", &["整"], C::PredefinedType),
    info(K::UIntKeyword, "uint", &["无整"], C::PredefinedType),
    info(K::LongKeyword, "long", &["长"], C::PredefinedType),
    info(K::ULongKeyword, "ulong", &["无长"], C::PredefinedType),
    info(K::DoubleKeyword, "double", &["双"], C::PredefinedType),
    info(K::FloatKeyword, "float", &["浮"], C::PredefinedType),
    info(K::DecimalKeyword, "decimal", &["十浮"], C::PredefinedType),
    info(K::StringKeyword, "string", &["字符串"], C::PredefinedType),
    info(K::CharKeyword, "char", &["字符"], C::PredefinedType),
    info(K::VoidKeyword, "void", &["无"], C::PredefinedType),
    info(K::ObjectKeyword, "object", &["对象"], C::PredefinedType),
    info(K::TypeOfKeyword, "typeof", &["类型"], C::Expression),
    info(K::SizeOfKeyword, "sizeof", &["大小"], C::Expression),
    info(K::NullKeyword, "null", &["空"], C::Literal),
    info(K::TrueKeyword, "true", &["真"], C::Literal),
    info(K::FalseKeyword, "false", &["假"], C::Literal),
    info(K::IfKeyword, "if", &["若"], C::ControlFlow),
    info(K::ElseKeyword, "else", &["否则"], C::ControlFlow),
    info(K::WhileKeyword, "while", &["当"], C::ControlFlow),
    info(K::ForKeyword, "for", &["对于"], C::ControlFlow),
    info(K::ForEachKeyword, "foreach", &["对于每"], C::ControlFlow),
    info(K::DoKeyword, "do", &["做"], C::ControlFlow),
    info(K::SwitchKeyword, "switch", &["开关"], C::ControlFlow),
    info(K::CaseKeyword, "case", &["情形"], C::ControlFlow),
    info(K::DefaultKeyword, "default", &["默认"], C::ControlFlow),
    info(K::TryKeyword, "try", &["试"], C::ControlFlow),
    info(K::CatchKeyword, "catch", &["接"], C::ControlFlow),
    info(K::FinallyKeyword, "finally", &["最后"], C::ControlFlow),
    info(K::LockKeyword, "lock", &["锁"], C::ControlFlow),
    info(K::GotoKeyword, "goto", &["转至"], C::ControlFlow),
    info(K::BreakKeyword, "break", &["断"], C::ControlFlow),
    info(K::ContinueKeyword, "continue", &["继"], C::ControlFlow),
    info(K::ReturnKeyword, "return", &["返回"], C::ControlFlow),
    info(K::ThrowKeyword, "throw", &["丢"], C::ControlFlow),
    info(K::PublicKeyword, "public", &["公"], C::Modifier),
    info(K::PrivateKeyword, "private", &["私"], C::Modifier),
    info(K::InternalKeyword, "internal", &["内"], C::Modifier),
    info(K::ProtectedKeyword, "protected", &["护"], C::Modifier),
    info(K::StaticKeyword, "static", &["静"], C::Modifier),
    info(K::ReadOnlyKeyword, "readonly", &["只读"], C::Modifier),
    info(K::SealedKeyword, "sealed", &["密封"], C::Modifier),
    info(K::ConstKeyword, "const", &["常"], C::Modifier),
    info(K::FixedKeyword, "fixed", &["固定"], C::Modifier),
    info(K::StackAllocKeyword, "stackalloc", &["栈分配"], C::Expression),
    info(K::VolatileKeyword, "volatile", &["易变"], C::Modifier),
    info(K::NewKeyword, "new", &["新"], C::Expression),
    info(K::OverrideKeyword, "override", &["取代"], C::Modifier),
    info(K::AbstractKeyword, "abstract", &["抽象"], C::Modifier),
    info(K::VirtualKeyword, "virtual", &["虚"], C::Modifier),
    info(K::EventKeyword, "event", &["事件"], C::Declaration),
    info(K::ExternKeyword, "extern", &["外"], C::Modifier),
    info(K::RefKeyword, "ref", &["引"], C::Parameter),
    info(K::OutKeyword, "out", &["出"], C::Parameter),
    info(K::InKeyword, "in", &["入", "于"], C::Parameter),
    info(K::IsKeyword, "is", &["是"], C::Operator),
    info(K::AsKeyword, "as", &["作为"], C::Operator),
    info(K::ParamsKeyword, "params", &["变参"], C::Parameter),
    info(K::ArgListKeyword, "__arglist", &[], C::Expression),
    info(K::MakeRefKeyword, "__makeref", &[], C::Expression),
    info(K::RefTypeKeyword, "__reftype", &[], C::Expression),
    info(K::RefValueKeyword, "__refvalue", &[], C::Expression),
    info(K::ThisKeyword, "this", &["此"], C::Expression),
    info(K::BaseKeyword, "base", &["基"], C::Expression),
    info(K::NamespaceKeyword, "namespace", &["命名空间"], C::Declaration),
    info(K::UsingKeyword, "using", &["用"], C::Declaration),
    info(K::ClassKeyword, "class", &["类"], C::Declaration),
    info(K::StructKeyword, "struct", &["结构"], C::Declaration),
    info(K::InterfaceKeyword, "interface", &["接口"], C::Declaration),
    info(K::EnumKeyword, "enum", &["枚举"], C::Declaration),
    info(K::DelegateKeyword, "delegate", &["委托"], C::Declaration),
    info(K::CheckedKeyword, "checked", &["检查"], C::Expression),
    info(K::UncheckedKeyword, "unchecked", &["未检查"], C::Expression),
    info(K::UnsafeKeyword, "unsafe", &["不安全"], C::Modifier),
    info(K::OperatorKeyword, "operator", &["算符"], C::Declaration),
    info(K::ExplicitKeyword, "explicit", &["显式"], C::Declaration),
    info(K::ImplicitKeyword, "implicit", &["隐式"], C::Declaration),
];

/// Contextual keywords, in kind order.
///
/// ## Notes
/// - Entry `i` is for the kind at offset `i` of the contextual keyword block.
/// - `_` sits at the end of the block: it is lexed like a contextual keyword but is a token, not a
///   keyword, in the grammar.
pub const CONTEXTUAL_KEYWORDS: &[KeywordInfo] = &[
    info(K::YieldKeyword, "yield", &["生成"], C::ControlFlow),
    info(K::PartialKeyword, "partial", &["部分"], C::Modifier),
    info(K::AliasKeyword, "alias", &["别名"], C::Declaration),
    info(K::GlobalKeyword, "global", &["全局"], C::Declaration),
    info(K::AssemblyKeyword, "assembly", &["程序集"], C::AttributeTarget),
    info(K::ModuleKeyword, "module", &["模块"], C::AttributeTarget),
    info(K::TypeKeyword, "type", &[], C::AttributeTarget),
    info(K::FieldKeyword, "field", &["字段"], C::AttributeTarget),
    info(K::MethodKeyword, "method", &["方法"], C::AttributeTarget),
    info(K::ParamKeyword, "param", &["参数"], C::AttributeTarget),
    info(K::PropertyKeyword, "property", &["属性"], C::AttributeTarget),
    info(K::TypeVarKeyword, "typevar", &["类型参数"], C::AttributeTarget),
    info(K::GetKeyword, "get", &["取"], C::Accessor),
    info(K::SetKeyword, "set", &["设"], C::Accessor),
    info(K::AddKeyword, "add", &["添加"], C::Accessor),
    info(K::RemoveKeyword, "remove", &["删除"], C::Accessor),
    info(K::WhereKeyword, "where", &["其中"], C::Query),
    info(K::FromKeyword, "from", &["从"], C::Query),
    info(K::GroupKeyword, "group", &["分组"], C::Query),
    info(K::JoinKeyword, "join", &["加入"], C::Query),
    info(K::IntoKeyword, "into", &["至"], C::Query),
    info(K::LetKeyword, "let", &["令"], C::Query),
    info(K::ByKeyword, "by", &["以"], C::Query),
    info(K::SelectKeyword, "select", &["选出"], C::Query),
    info(K::OrderByKeyword, "orderby", &["排序"], C::Query),
    info(K::OnKeyword, "on", &["在"], C::Query),
    info(K::EqualsKeyword, "equals", &["等于"], C::Query),
    info(K::AscendingKeyword, "ascending", &["升序"], C::Query),
    info(K::DescendingKeyword, "descending", &["降序"], C::Query),
    info(K::NameOfKeyword, "nameof", &["名称"], C::Expression),
    info(K::AsyncKeyword, "async", &["异步"], C::Modifier),
    info(K::AwaitKeyword, "await", &["等候"], C::Expression),
    info(K::WhenKeyword, "when", &["若有"], C::ControlFlow),
    info(K::UnderscoreToken, "_", &[], C::Expression),
];

static RESERVED_INDEX: Lazy<HashMap<&'static str, SyntaxKind>> =
    Lazy::new(|| registry::build_index("reserved keywords", &[RESERVED_KEYWORDS], true));

static CONTEXTUAL_INDEX: Lazy<HashMap<&'static str, SyntaxKind>> =
    Lazy::new(|| registry::build_index("contextual keywords", &[CONTEXTUAL_KEYWORDS], true));

/// Resolve an identifier-shaped spelling to a reserved or contextual keyword.
///
/// ## Parameters
/// - `spelling`: candidate text, canonical or synonym.
///
/// ## Returns
/// - `Some(kind)` if the spelling is a declared keyword spelling.
/// - `None` otherwise; the caller treats the text as an ordinary identifier.
pub fn resolve(spelling: &str) -> Option<SyntaxKind> {
    resolve_reserved(spelling).or_else(|| resolve_contextual(spelling))
}

/// Resolve against reserved keywords only.
pub fn resolve_reserved(spelling: &str) -> Option<SyntaxKind> {
    RESERVED_INDEX.get(spelling).copied()
}

/// Resolve against contextual keywords only (including `_`).
pub fn resolve_contextual(spelling: &str) -> Option<SyntaxKind> {
    CONTEXTUAL_INDEX.get(spelling).copied()
}

/// Registry entry for a keyword kind.
///
/// ## Returns
/// - `Some(info)` for reserved and contextual keyword kinds.
/// - `None` for every other kind.
pub fn info_for(kind: SyntaxKind) -> Option<&'static KeywordInfo> {
    registry::entry_at(RESERVED_KEYWORDS, space::RESERVED_KEYWORDS, kind)
        .or_else(|| registry::entry_at(CONTEXTUAL_KEYWORDS, space::CONTEXTUAL_KEYWORDS, kind))
}

/// Canonical spelling.
pub fn as_str(kind: SyntaxKind) -> Option<&'static str> {
    info_for(kind).map(|k| k.canonical)
}

/// Declared synonyms; empty for keywords without one and for non-keyword kinds.
pub fn aliases(kind: SyntaxKind) -> &'static [&'static str] {
    info_for(kind).map(|k| k.aliases).unwrap_or(&[])
}

pub fn category(kind: SyntaxKind) -> Option<KeywordCategory> {
    info_for(kind).map(|k| k.category)
}

/// Force construction of both spelling indexes.
pub(crate) fn warm_up() {
    Lazy::force(&RESERVED_INDEX);
    Lazy::force(&CONTEXTUAL_INDEX);
}

// --- helpers -----------------------------------------------------------------

const fn info(
    kind: SyntaxKind,
    canonical: &'static str,
    aliases: &'static [&'static str],
    category: KeywordCategory,
) -> KeywordInfo {
    KeywordInfo {
        kind,
        canonical,
        aliases,
        category,
    }
}
