//! Shared shape and helpers for the spelling registries.
//!
//! Every spelling registry in [`crate::lang`] is a `const` slice of entries that pair a
//! [`SyntaxKind`] with its canonical spelling and any alternate spellings. This module holds the
//! trait those entries implement plus the two generic operations built on it:
//! - block-offset lookup ([`entry_at`]), which makes `kind -> entry` O(1), and
//! - spelling index construction ([`build_index`]), which backs `spelling -> kind`.
//!
//! ## Notes
//! - Registries are ordered exactly like their kind block. [`crate::validate`] checks this.
//! - Index construction keeps the first kind for a spelling; duplicates are a validation failure,
//!   never a silent override.
//!
//! ## See also
//! - [`crate::lang::keywords`]
//! - [`crate::lang::punctuation`]
//! - [`crate::lang::preprocessor`]

use std::collections::HashMap;
use std::iter::{Chain, Copied, Once};
use std::slice;

use crate::kind::SyntaxKind;
use crate::space::KindRange;

/// Iterator over the canonical spelling followed by the aliases of an entry.
pub type Spellings = Chain<Once<&'static str>, Copied<slice::Iter<'static, &'static str>>>;

/// A registry entry that maps one kind to one or more spellings.
pub trait SpellingEntry: 'static {
    fn kind(&self) -> SyntaxKind;

    /// Preferred spelling for docs and emission.
    fn canonical(&self) -> &'static str;

    /// Additional accepted spellings (alternate-script synonyms).
    fn aliases(&self) -> &'static [&'static str];

    fn spellings(&self) -> Spellings {
        std::iter::once(self.canonical()).chain(self.aliases().iter().copied())
    }
}

/// Find the entry for `kind` by its offset inside `block`.
///
/// ## Parameters
/// - `registry`: entries ordered exactly like the kinds of `block`.
/// - `block`: the kind block the registry covers.
/// - `kind`: kind to look up.
///
/// ## Returns
/// - `Some(entry)` if `kind` is in `block` and the entry at its offset is for `kind`.
/// - `None` otherwise.
#[inline]
pub fn entry_at<E: SpellingEntry>(registry: &'static [E], block: KindRange, kind: SyntaxKind) -> Option<&'static E> {
    if !block.contains(kind) {
        return None;
    }
    let offset = usize::from(kind.raw() - block.first.raw());
    registry.get(offset).filter(|e| e.kind() == kind)
}

/// Build a `spelling -> kind` index over one or more registries.
///
/// ## Parameters
/// - `label`: name used in the construction log line.
/// - `registries`: registries to index, in priority order.
/// - `include_aliases`: whether alternate spellings are indexed alongside canonical ones.
///
/// ## Notes
/// - The first registry that claims a spelling wins.
pub fn build_index<E: SpellingEntry>(
    label: &str,
    registries: &[&'static [E]],
    include_aliases: bool,
) -> HashMap<&'static str, SyntaxKind> {
    let mut index = HashMap::new();
    for registry in registries {
        for entry in registry.iter() {
            index.entry(entry.canonical()).or_insert(entry.kind());
            if include_aliases {
                for alias in entry.aliases() {
                    index.entry(*alias).or_insert(entry.kind());
                }
            }
        }
    }
    tracing::debug!(index = label, spellings = index.len(), "built spelling index");
    index
}
