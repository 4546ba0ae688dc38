//! CLI command implementations
//!
//! All command functions return `CliResult<String>` (the text to print) instead of printing or
//! calling `process::exit`. Output and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use serde_json::{Value, json};
use sharpkind_core::lang::{keywords, metadata, operators, preprocessor, pseudo, punctuation};
use sharpkind_core::{SyntaxKind, space, text, validate_kind_space};

use super::{CliError, CliResult, KindSet};
use crate::diagnostics;
use crate::report::{self, OutputFormat, ReportConfig};

// ============================================================================
// Shared helpers
// ============================================================================

fn parse_kind(arg: &str) -> CliResult<SyntaxKind> {
    arg.parse::<SyntaxKind>().map_err(|e| CliError::usage(format!("Error: {e}")))
}

fn to_json(value: &Value) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::failure(format!("Error serializing output: {e}")))
}

fn text_or_placeholder(kind: SyntaxKind) -> &'static str {
    match text::get_text(kind) {
        "" => "(no fixed text)",
        spelling => spelling,
    }
}

fn kind_json(kind: SyntaxKind) -> Value {
    json!({
        "kind": kind.to_string(),
        "value": kind.raw(),
        "text": text::get_text(kind),
    })
}

// ============================================================================
// classify
// ============================================================================

/// How one spelling is classified by each lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification<'a> {
    pub spelling: &'a str,
    /// Reserved or contextual keyword kind
    pub keyword: Option<SyntaxKind>,
    /// Kind when the spelling follows `#`
    pub directive: Option<SyntaxKind>,
    pub punctuation: Option<SyntaxKind>,
    /// `var` or `unmanaged`
    pub pseudo: Option<&'static str>,
}

impl Classification<'_> {
    pub fn is_identifier(&self) -> bool {
        self.keyword.is_none() && self.directive.is_none() && self.punctuation.is_none() && self.pseudo.is_none()
    }
}

/// Classify one spelling; with `synonyms` off only canonical keyword spellings are accepted.
pub fn classify_spelling(spelling: &str, synonyms: bool) -> Classification<'_> {
    let keyword = keywords::resolve(spelling).filter(|&kind| synonyms || keywords::as_str(kind) == Some(spelling));
    let canonical_var = pseudo::VAR_SPELLINGS.first() == Some(&spelling);
    let pseudo = if pseudo::is_var(spelling) && (synonyms || canonical_var) {
        Some("var")
    } else if pseudo::is_unmanaged(spelling) {
        Some("unmanaged")
    } else {
        None
    };
    Classification {
        spelling,
        keyword,
        directive: preprocessor::resolve(spelling),
        punctuation: punctuation::from_str(spelling),
        pseudo,
    }
}

/// Classify spellings as keywords, directive keywords, punctuation, or pseudo-keywords.
#[tracing::instrument(skip_all, fields(count = spellings.len()))]
pub fn classify(spellings: &[String], config: &ReportConfig) -> CliResult<String> {
    let results: Vec<Classification<'_>> = spellings
        .iter()
        .map(|s| classify_spelling(s, config.include_synonyms))
        .collect();

    match config.format {
        OutputFormat::Json => {
            let items: Vec<Value> = results.iter().map(classification_json).collect();
            to_json(&Value::Array(items))
        }
        OutputFormat::Text => Ok(results
            .iter()
            .map(classification_line)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn classification_line(c: &Classification<'_>) -> String {
    let mut parts = Vec::new();
    if let Some(kind) = c.keyword {
        let block = space::category_of(kind).map(|cat| cat.label()).unwrap_or("keyword");
        let mut part = format!("{block} {kind}");
        if let Some(canonical) = keywords::as_str(kind).filter(|&canonical| canonical != c.spelling) {
            part.push_str(&format!(" (synonym of `{canonical}`)"));
        }
        parts.push(part);
    }
    if let Some(kind) = c.directive {
        parts.push(format!("directive keyword {kind}"));
    }
    if let Some(kind) = c.punctuation {
        parts.push(format!("punctuation {kind}"));
    }
    if let Some(role) = c.pseudo {
        let mut part = format!("pseudo-keyword {role}");
        if role != c.spelling {
            part.push_str(&format!(" (synonym of `{role}`)"));
        }
        parts.push(part);
    }
    if parts.is_empty() {
        parts.push(String::from("identifier"));
    }
    format!("{}: {}", c.spelling, parts.join("; "))
}

fn classification_json(c: &Classification<'_>) -> Value {
    let keyword = c.keyword.map(|kind| {
        json!({
            "kind": kind.to_string(),
            "block": space::category_of(kind).map(|cat| cat.label()),
            "canonical": keywords::as_str(kind),
            "category": keywords::category(kind).map(|cat| cat.label()),
        })
    });
    json!({
        "spelling": c.spelling,
        "keyword": keyword,
        "directive": c.directive.map(|k| k.to_string()),
        "punctuation": c.punctuation.map(|k| k.to_string()),
        "pseudo": c.pseudo,
        "identifier": c.is_identifier(),
    })
}

// ============================================================================
// text
// ============================================================================

/// Print the canonical text of each kind.
#[tracing::instrument(skip_all, fields(count = kinds.len()))]
pub fn text(kinds: &[String], config: &ReportConfig) -> CliResult<String> {
    let parsed = kinds.iter().map(|k| parse_kind(k)).collect::<CliResult<Vec<_>>>()?;
    match config.format {
        OutputFormat::Json => to_json(&Value::Array(parsed.into_iter().map(kind_json).collect())),
        OutputFormat::Text => Ok(parsed
            .iter()
            .map(|&kind| format!("{kind}: {}", text_or_placeholder(kind)))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

// ============================================================================
// operators
// ============================================================================

const KEYWORD_FORMS: &[(&str, fn(SyntaxKind) -> Option<SyntaxKind>)] = &[
    ("statement", operators::check_statement),
    ("accessor", operators::accessor_declaration),
    ("switch label", operators::switch_label),
    ("declaration", operators::base_type_declaration),
];

/// Show every kind a token derives, its overloadability, and its metadata names.
#[tracing::instrument(skip(config))]
pub fn operators(kind: &str, config: &ReportConfig) -> CliResult<String> {
    let token = parse_kind(kind)?;
    let derived: Vec<(&'static str, SyntaxKind)> = operators::derivations(token)
        .map(|(category, kind)| (category.label(), kind))
        .chain(KEYWORD_FORMS.iter().filter_map(|(label, form)| form(token).map(|kind| (*label, kind))))
        .collect();
    let unary = operators::is_overloadable_unary_operator(token);
    let binary = operators::is_overloadable_binary_operator(token);
    let names: Vec<&'static str> = metadata::OPERATOR_METADATA
        .iter()
        .filter(|m| m.token == Some(token))
        .map(|m| m.name)
        .collect();
    tracing::debug!(%token, derived = derived.len(), "resolved operator derivations");

    if config.format == OutputFormat::Json {
        let derivations: Vec<Value> = derived
            .iter()
            .map(|(label, kind)| json!({ "category": label, "kind": kind.to_string() }))
            .collect();
        let mut value = kind_json(token);
        value["derivations"] = Value::Array(derivations);
        value["overloadable"] = json!({ "unary": unary, "binary": binary });
        value["metadata"] = json!(names);
        return to_json(&value);
    }

    let mut lines = vec![format!("{token}: {}", text_or_placeholder(token))];
    if derived.is_empty() {
        lines.push(String::from("  (no derived kinds)"));
    }
    for (label, kind) in &derived {
        lines.push(format!("  {label}: {kind}"));
    }
    let overloadable = match (unary, binary) {
        (true, true) => "unary, binary",
        (true, false) => "unary",
        (false, true) => "binary",
        (false, false) => "no",
    };
    lines.push(format!("  overloadable: {overloadable}"));
    if !names.is_empty() {
        lines.push(format!("  metadata: {}", names.join(", ")));
    }
    Ok(lines.join("\n"))
}

// ============================================================================
// metadata
// ============================================================================

/// Resolve an operator metadata name.
#[tracing::instrument(skip(config))]
pub fn metadata(name: &str, config: &ReportConfig) -> CliResult<String> {
    let info = metadata::info_for(name)
        .ok_or_else(|| CliError::usage(format!("Error: unknown operator metadata name `{name}`")))?;
    let fixity = format!("{:?}", info.fixity).to_lowercase();

    match config.format {
        OutputFormat::Json => to_json(&json!({
            "name": info.name,
            "token": info.token.map(|k| k.to_string()),
            "text": info.token.map(text::get_text),
            "fixity": fixity,
        })),
        OutputFormat::Text => Ok(match info.token {
            Some(token) => format!("{}: {token} `{}` ({fixity})", info.name, text::get_text(token)),
            None => format!("{}: no token in this language ({fixity})", info.name),
        }),
    }
}

// ============================================================================
// list
// ============================================================================

/// Kinds of a set, ascending.
pub fn kinds_of(set: KindSet) -> Vec<SyntaxKind> {
    match set {
        KindSet::Reserved => space::reserved_keyword_kinds().collect(),
        KindSet::Contextual => space::contextual_keyword_kinds().collect(),
        KindSet::Keywords => space::keyword_kinds().collect(),
        KindSet::Punctuation => space::punctuation_kinds().collect(),
        KindSet::Preprocessor => space::preprocessor_keyword_kinds().collect(),
    }
}

/// Enumerate a kind set.
#[tracing::instrument(skip(config))]
pub fn list(set: KindSet, config: &ReportConfig) -> CliResult<String> {
    let kinds = kinds_of(set);
    let synonyms = |kind: SyntaxKind| -> &'static [&'static str] {
        if config.include_synonyms { keywords::aliases(kind) } else { &[] }
    };

    match config.format {
        OutputFormat::Json => {
            let items: Vec<Value> = kinds
                .iter()
                .map(|&kind| {
                    let mut value = kind_json(kind);
                    value["synonyms"] = json!(synonyms(kind));
                    value
                })
                .collect();
            to_json(&Value::Array(items))
        }
        OutputFormat::Text => {
            let width = kinds.iter().map(|k| k.to_string().len()).max().unwrap_or(0);
            let lines: Vec<String> = kinds
                .iter()
                .map(|&kind| {
                    let name = kind.to_string();
                    let mut line = format!("{name:<width$}  {}", text::get_text(kind));
                    let aliases = synonyms(kind);
                    if !aliases.is_empty() {
                        line.push_str(&format!("  ({})", aliases.join(", ")));
                    }
                    line
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

// ============================================================================
// check
// ============================================================================

/// Validate the kind space; violations become a failing `CliError`.
#[tracing::instrument(skip_all)]
pub fn check(config: &ReportConfig) -> CliResult<String> {
    let kinds = SyntaxKind::ALL.len();
    let blocks = space::CATEGORY_BOUNDS.len();
    match (validate_kind_space(), config.format) {
        (Ok(()), OutputFormat::Json) => to_json(&json!({ "ok": true, "kinds": kinds, "blocks": blocks })),
        (Ok(()), OutputFormat::Text) => Ok(format!("kind space OK: {kinds} kinds in {blocks} blocks")),
        (Err(err), OutputFormat::Json) => {
            let violations: Vec<String> = err.violations.iter().map(|v| v.to_string()).collect();
            let rendered = to_json(&json!({ "ok": false, "violations": violations }))?;
            Err(CliError::failure(rendered))
        }
        (Err(err), OutputFormat::Text) => {
            let fallback = err.to_string();
            let rendered = diagnostics::render(err).unwrap_or(fallback);
            Err(CliError::failure(rendered))
        }
    }
}

// ============================================================================
// reference
// ============================================================================

/// Generate the Markdown reference, to `out` or as the command output.
///
/// The reference is always Markdown; `--format` does not apply.
#[tracing::instrument(skip(config))]
pub fn reference(out: Option<&Path>, config: &ReportConfig) -> CliResult<String> {
    let doc = report::render_reference(config);
    let Some(path) = out else {
        return Ok(doc);
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| CliError::failure(format!("Error creating {}: {e}", parent.display())))?;
    }
    fs::write(path, doc).map_err(|e| CliError::failure(format!("Error writing {}: {e}", path.display())))?;
    tracing::info!(path = %path.display(), "wrote syntax kind reference");
    Ok(format!("Wrote reference to {}", path.display()))
}

// ============================================================================
// Tests
// ============================================================================
