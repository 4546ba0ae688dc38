//! Markdown reference generated from the `sharpkind_core` registries.
//!
//! One consolidated document: the kind-space block layout, every keyword table (with synonyms),
//! punctuation, operator derivations, and operator metadata names.
//!
//! ## Notes
//! - The output is a derived artifact. Fix the registries, not the generated Markdown.
//! - With `include_synonyms` off, the synonym column is dropped entirely.

use sharpkind_core::lang::keywords::{self, KeywordInfo};
use sharpkind_core::lang::operators::{self, OperatorCategory};
use sharpkind_core::lang::{metadata, preprocessor, pseudo, punctuation};
use sharpkind_core::{SyntaxKind, space, text};

use super::config::ReportConfig;
use super::writer::{MarkdownWriter, code_span};
use crate::version::SHARPKIND_VERSION;

/// Render the full reference document.
#[tracing::instrument(skip_all, fields(heading_level = config.heading_level, synonyms = config.include_synonyms))]
pub fn render_reference(config: &ReportConfig) -> String {
    let mut w = MarkdownWriter::new(config.clone());
    w.title("sharpkind syntax kind reference");
    w.paragraph(&format!(
        "Generated by sharpkind {SHARPKIND_VERSION}. Do not edit by hand; regenerate with `sharpkind reference`."
    ));

    w.paragraph("Contents:");
    for section in SECTIONS {
        w.bullet(section);
    }

    render_kind_space(&mut w);
    render_keywords(&mut w, SECTIONS[1], keywords::RESERVED_KEYWORDS);
    render_keywords(&mut w, SECTIONS[2], keywords::CONTEXTUAL_KEYWORDS);
    render_preprocessor(&mut w);
    render_pseudo_keywords(&mut w);
    render_punctuation(&mut w);
    render_operators(&mut w);
    render_metadata(&mut w);

    w.finish()
}

const SECTIONS: &[&str] = &[
    "Kind space",
    "Reserved keywords",
    "Contextual keywords",
    "Preprocessor keywords",
    "Pseudo-keywords",
    "Punctuation",
    "Operators",
    "Operator metadata names",
];

fn render_kind_space(w: &mut MarkdownWriter) {
    w.section(SECTIONS[0]);
    w.table_header(&["Block", "First", "Last", "Kinds"]);
    for (category, range) in space::CATEGORY_BOUNDS {
        let first = format!("{} ({})", range.first, range.first.raw());
        let last = format!("{} ({})", range.last, range.last.raw());
        let count = range.len().to_string();
        w.row([category.label(), first.as_str(), last.as_str(), count.as_str()]);
    }
}

fn render_keywords(w: &mut MarkdownWriter, heading: &str, registry: &[KeywordInfo]) {
    let synonyms = w.config().include_synonyms;
    w.section(heading);
    if synonyms {
        w.table_header(&["Kind", "Text", "Synonyms", "Category"]);
    } else {
        w.table_header(&["Kind", "Text", "Category"]);
    }
    for k in registry {
        let kind = k.kind.to_string();
        let canonical = code_span(k.canonical);
        if synonyms {
            let aliases = join_spellings(k.aliases);
            w.row([kind.as_str(), canonical.as_str(), aliases.as_str(), k.category.label()]);
        } else {
            w.row([kind.as_str(), canonical.as_str(), k.category.label()]);
        }
    }
}

fn render_preprocessor(w: &mut MarkdownWriter) {
    w.section(SECTIONS[3]);
    w.paragraph(
        "Directive spellings match canonical text only. `true`, `false`, `default`, `if`, and `else` are shared \
         with the reserved keyword table.",
    );
    w.table_header(&["Kind", "Text", "Directive-contextual"]);
    for kind in space::preprocessor_keyword_kinds() {
        let name = kind.to_string();
        let spelling = code_span(text::get_text(kind));
        let contextual = yes_no(preprocessor::is_preprocessor_contextual_keyword(kind));
        w.row([name.as_str(), spelling.as_str(), contextual]);
    }
}

fn render_pseudo_keywords(w: &mut MarkdownWriter) {
    let synonyms = w.config().include_synonyms;
    w.section(SECTIONS[4]);
    w.paragraph("Identifiers the parser treats specially in one position. They have no kind of their own.");
    w.table_header(&["Role", "Spellings"]);
    let var = if synonyms {
        join_spellings(pseudo::VAR_SPELLINGS)
    } else {
        join_spellings(&pseudo::VAR_SPELLINGS[..1])
    };
    let unmanaged = join_spellings(pseudo::UNMANAGED_SPELLINGS);
    w.row(["implicitly typed local", var.as_str()]);
    w.row(["unmanaged constraint", unmanaged.as_str()]);
}

fn render_punctuation(w: &mut MarkdownWriter) {
    w.section(SECTIONS[5]);
    w.table_header(&["Kind", "Text", "Category", "Compound"]);
    for p in punctuation::SIMPLE_PUNCTUATION.iter().chain(punctuation::COMPOUND_PUNCTUATION) {
        let kind = p.kind.to_string();
        let spelling = code_span(p.canonical);
        let category = format!("{:?}", p.category);
        let compound = yes_no(space::is_compound_punctuation(p.kind));
        w.row([kind.as_str(), spelling.as_str(), category.as_str(), compound]);
    }
}

fn render_operators(w: &mut MarkdownWriter) {
    w.section(SECTIONS[6]);
    w.table_header(&["Token", "Text", "Category", "Expression kind", "Overloadable"]);
    for category in OperatorCategory::ALL {
        for mapping in category.table() {
            let token = mapping.token.to_string();
            let spelling = text_cell(mapping.token);
            let derived = mapping.derived.to_string();
            let overloadable = yes_no(overloadable_as(*category, mapping.token));
            w.row([
                token.as_str(),
                spelling.as_str(),
                category.label(),
                derived.as_str(),
                overloadable,
            ]);
        }
    }
}

fn render_metadata(w: &mut MarkdownWriter) {
    w.section(SECTIONS[7]);
    w.table_header(&["Name", "Token", "Text", "Fixity"]);
    for m in metadata::OPERATOR_METADATA {
        let (token, spelling) = match m.token {
            Some(token) => (token.to_string(), text_cell(token)),
            None => (String::from("(none)"), String::new()),
        };
        let fixity = format!("{:?}", m.fixity);
        w.row([m.name, token.as_str(), spelling.as_str(), fixity.as_str()]);
    }
}

fn overloadable_as(category: OperatorCategory, token: SyntaxKind) -> bool {
    match category {
        OperatorCategory::PrefixUnary | OperatorCategory::PostfixUnary => operators::is_overloadable_unary_operator(token),
        OperatorCategory::Binary => operators::is_overloadable_binary_operator(token),
        _ => false,
    }
}

/// Code span of the kind's fixed text; empty for kinds whose text varies (literals).
fn text_cell(kind: SyntaxKind) -> String {
    match text::get_text(kind) {
        "" => String::new(),
        spelling => code_span(spelling),
    }
}

fn join_spellings(spellings: &[&str]) -> String {
    spellings.iter().map(|s| code_span(s)).collect::<Vec<_>>().join(", ")
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
