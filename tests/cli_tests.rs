//! End-to-end tests for the sharpkind CLI
//!
//! Arguments go through clap exactly as on the command line; output is what `run()` would print.

use clap::Parser;
use serde_json::Value;
use sharpkind::cli::{Cli, CliResult, ExitCode, execute};

fn run_cli(args: &[&str]) -> CliResult<String> {
    let mut argv = vec!["sharpkind"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).expect("arguments should parse");
    execute(cli)
}

#[test]
fn text_command_prints_canonical_spellings() {
    let out = run_cli(&["text", "PlusEqualsToken", "ClassKeyword", "InterpolatedVerbatimStringStartToken"]).unwrap();
    insta::assert_snapshot!(out, @r#"
    PlusEqualsToken: +=
    ClassKeyword: class
    InterpolatedVerbatimStringStartToken: $@"
    "#);
}

#[test]
fn text_command_rejects_unassigned_discriminant() {
    let err = run_cli(&["text", "99"]).unwrap_err();
    assert_eq!(err.exit_code, ExitCode::USAGE);
    assert_eq!(err.message, "Error: no syntax kind has discriminant 99");
}

#[test]
fn classify_honours_no_synonyms() {
    let with = run_cli(&["classify", "类"]).unwrap();
    assert!(with.contains("ClassKeyword"));

    let without = run_cli(&["classify", "类", "--no-synonyms"]).unwrap();
    assert_eq!(without, "类: identifier");
}

#[test]
fn classify_json_is_an_array() {
    let out = run_cli(&["--format", "json", "classify", "class", "region", "foo"]).unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[1]["directive"], "RegionKeyword");
    assert_eq!(items[1]["keyword"], Value::Null);
    assert_eq!(items[2]["identifier"], true);
}

#[test]
fn operators_command_covers_assignment() {
    let out = run_cli(&["operators", "PlusEqualsToken"]).unwrap();
    assert!(out.starts_with("PlusEqualsToken: +="));
    assert!(out.contains("assignment: AddAssignmentExpression"));
    assert!(out.contains("overloadable: no"));
}

#[test]
fn metadata_command() {
    let out = run_cli(&["metadata", "op_Implicit"]).unwrap();
    assert_eq!(out, "op_Implicit: ImplicitKeyword `implicit` (conversion)");

    let err = run_cli(&["metadata", "op_Unknown"]).unwrap_err();
    assert_eq!(err.exit_code, ExitCode::USAGE);
}

#[test]
fn list_preprocessor_starts_with_shared_keywords() {
    let out = run_cli(&["list", "preprocessor"]).unwrap();
    let kinds: Vec<&str> = out.lines().filter_map(|l| l.split_whitespace().next()).collect();
    assert_eq!(
        &kinds[..5],
        &["TrueKeyword", "FalseKeyword", "IfKeyword", "ElseKeyword", "DefaultKeyword"]
    );
    assert_eq!(kinds.last(), Some(&"LoadKeyword"));
}

#[test]
fn list_keywords_json_has_synonyms() {
    let out = run_cli(&["list", "keywords", "--format", "json"]).unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 115);
    let class = items.iter().find(|i| i["kind"] == "ClassKeyword").unwrap();
    assert_eq!(class["synonyms"][0], "类");
}

#[test]
fn check_command_succeeds() {
    let out = run_cli(&["check"]).unwrap();
    assert!(out.starts_with("kind space OK:"));
}

#[test]
fn reference_command_respects_heading_level() {
    let out = run_cli(&["reference", "--heading-level", "2", "--no-synonyms"]).unwrap();
    assert!(out.starts_with("## sharpkind syntax kind reference\n"));
    assert!(out.contains("\n### Preprocessor keywords\n"));
    assert!(!out.contains("| Synonyms |"));
}
