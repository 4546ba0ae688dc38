//! Fuzz target for the spelling lookups.
//!
//! Every lookup must accept arbitrary UTF-8 without panicking, and a resolved keyword must
//! round-trip through its canonical text.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sharpkind_core::lang::{keywords, preprocessor, pseudo, punctuation};
use sharpkind_core::{SyntaxKind, text};

fuzz_target!(|data: &[u8]| {
    if let Ok(spelling) = std::str::from_utf8(data) {
        if let Some(kind) = keywords::resolve(spelling) {
            assert_eq!(keywords::resolve(text::get_text(kind)), Some(kind));
        }
        if let Some(kind) = preprocessor::resolve(spelling) {
            assert_eq!(text::get_text(kind), spelling);
        }
        if let Some(kind) = punctuation::from_str(spelling) {
            assert_eq!(text::get_text(kind), spelling);
        }
        let _ = pseudo::is_var(spelling);
        let _ = spelling.parse::<SyntaxKind>();
    }
});
