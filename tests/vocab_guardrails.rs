//! Keyword spellings belong to the registries in `sharpkind_core::lang`.
//!
//! Outside those registries, code resolves spellings with `keywords::resolve` and friends. A literal
//! comparison such as `s == "class"` or a match arm on `"类"` silently ignores synonyms, so the
//! scan below rejects both shapes in library and CLI sources.

use std::fs;
use std::path::{Path, PathBuf};

use sharpkind_core::lang::registry::SpellingEntry;
use sharpkind_core::lang::{keywords, preprocessor};

/// Source trees that own spellings or may quote them freely.
const EXEMPT_PREFIXES: &[&str] = &["crates/sharpkind_core/src/lang/", "tests/"];

struct Hit {
    file: PathBuf,
    line: usize,
    text: String,
}

#[test]
fn sources_resolve_keywords_through_the_registries() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let patterns = literal_patterns();

    let mut hits = Vec::new();
    for dir in ["src", "crates"] {
        collect_hits(&root, &root.join(dir), &patterns, &mut hits);
    }

    let report: Vec<String> = hits
        .iter()
        .map(|h| format!("{}:{}: {}", relative(&root, &h.file), h.line, h.text.trim()))
        .collect();
    assert!(
        report.is_empty(),
        "literal keyword checks found; use sharpkind_core::lang lookups:\n{}",
        report.join("\n")
    );
}

#[test]
fn patterns_cover_synonyms_and_directive_keywords() {
    let patterns = literal_patterns();
    for needle in ["== \"class\"", "\"类\" =>", "== \"pragma\"", "\"yield\" =>"] {
        assert!(patterns.iter().any(|p| p == needle), "missing pattern {needle}");
    }
}

#[test]
fn flags_comparisons_but_not_comments() {
    let patterns = literal_patterns();
    assert!(is_literal_check("    if word == \"class\" {", &patterns));
    assert!(is_literal_check("        \"类\" => Some(kind),", &patterns));
    assert!(!is_literal_check("    // word == \"class\" would skip synonyms", &patterns));
    assert!(!is_literal_check("    keywords::resolve(word)", &patterns));
}

/// `== "<spelling>"` and `"<spelling>" =>` for every canonical spelling and synonym.
fn literal_patterns() -> Vec<String> {
    let mut spellings: Vec<&'static str> = keywords::RESERVED_KEYWORDS
        .iter()
        .chain(keywords::CONTEXTUAL_KEYWORDS)
        .flat_map(|k| k.spellings())
        .chain(preprocessor::PREPROCESSOR_KEYWORDS.iter().map(|k| k.canonical))
        .collect();
    spellings.sort_unstable();
    spellings.dedup();

    spellings
        .into_iter()
        .flat_map(|s| [format!("== \"{s}\""), format!("\"{s}\" =>")])
        .collect()
}

fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).to_string_lossy().replace('\\', "/")
}

fn collect_hits(root: &Path, dir: &Path, patterns: &[String], hits: &mut Vec<Hit>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            collect_hits(root, &path, patterns, hits);
            continue;
        }
        let rel = relative(root, &path);
        if !rel.ends_with(".rs") || EXEMPT_PREFIXES.iter().any(|p| rel.starts_with(p)) || rel.contains("/tests/") {
            continue;
        }
        let Ok(source) = fs::read_to_string(&path) else { continue };
        // Inline test modules close out a file and may quote spellings.
        let lines = source.lines().take_while(|l| !l.starts_with("#[cfg(test)]"));
        for (idx, text) in lines.enumerate() {
            if is_literal_check(text, patterns) {
                hits.push(Hit { file: path.clone(), line: idx + 1, text: text.to_string() });
            }
        }
    }
}

fn is_literal_check(line: &str, patterns: &[String]) -> bool {
    !line.trim_start().starts_with("//") && patterns.iter().any(|p| line.contains(p.as_str()))
}
