//! Pseudo-keywords: identifier spellings the parser treats specially in one position.
//!
//! `var` (implicitly typed local) and `unmanaged` (type parameter constraint) are not keywords. The
//! lexer produces an identifier for them and the parser asks these predicates when it reaches the
//! one position where the spelling matters. Everywhere else they stay ordinary identifiers.

/// Spellings of the implicit-type marker.
pub const VAR_SPELLINGS: &[&str] = &["var", "变"];

/// Spellings of the unmanaged-constraint marker.
pub const UNMANAGED_SPELLINGS: &[&str] = &["unmanaged"];

pub fn is_var(spelling: &str) -> bool {
    VAR_SPELLINGS.contains(&spelling)
}

pub fn is_unmanaged(spelling: &str) -> bool {
    UNMANAGED_SPELLINGS.contains(&spelling)
}
