//! miette rendering of kind-space invariant violations.
//!
//! [`KindSpaceError`] is a plain `thiserror` type in the core crate (no rendering dependency there).
//! This module wraps it in a [`Diagnostic`] with one related diagnostic per violation, each carrying
//! a stable code such as `sharpkind::shared_spelling`.

use std::fmt::{self, Display};

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};
use sharpkind_core::{KindSpaceError, Violation};
use thiserror::Error;

/// Top-level report for a failed validation run.
#[derive(Debug, Error, Diagnostic)]
#[error("kind space has {} invariant violation(s)", .related.len())]
#[diagnostic(
    code(sharpkind::kind_space),
    help("a kind, block bound, registry, or derivation table is out of step; fix the tables in sharpkind_core")
)]
pub struct KindSpaceReport {
    #[related]
    pub related: Vec<ViolationDiagnostic>,
}

/// One violation as a diagnostic.
#[derive(Debug, Error)]
#[error("{violation}")]
pub struct ViolationDiagnostic {
    pub violation: Violation,
}

impl ViolationDiagnostic {
    /// Stable code for the violation variant.
    pub fn code_str(&self) -> &'static str {
        match self.violation {
            Violation::Unordered { .. } => "sharpkind::unordered",
            Violation::Uncategorized(_) => "sharpkind::uncategorized",
            Violation::OverlappingBlocks { .. } => "sharpkind::overlapping_blocks",
            Violation::RegistryLength { .. } => "sharpkind::registry_length",
            Violation::EntryOutOfBounds { .. } => "sharpkind::entry_out_of_bounds",
            Violation::EntryMisplaced { .. } => "sharpkind::entry_misplaced",
            Violation::DerivedOutOfBounds { .. } => "sharpkind::derived_out_of_bounds",
            Violation::SharedSpelling { .. } => "sharpkind::shared_spelling",
        }
    }

    fn help_str(&self) -> &'static str {
        match self.violation {
            Violation::Unordered { .. } => "keep `SyntaxKind::ALL` in ascending discriminant order",
            Violation::Uncategorized(_) => "add the kind to a block or widen a bound in `CATEGORY_BOUNDS`",
            Violation::OverlappingBlocks { .. } => "blocks must be listed in ascending order without overlap",
            Violation::RegistryLength { .. }
            | Violation::EntryOutOfBounds { .. }
            | Violation::EntryMisplaced { .. } => "registries list every kind of their block, in kind order",
            Violation::DerivedOutOfBounds { .. } => "point the mapping at a kind inside the category block",
            Violation::SharedSpelling { .. } => "a spelling may resolve to one kind only; drop one of the claims",
        }
    }
}

impl Diagnostic for ViolationDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(self.code_str()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(self.help_str()))
    }
}

impl From<KindSpaceError> for KindSpaceReport {
    fn from(err: KindSpaceError) -> Self {
        Self {
            related: err
                .violations
                .into_iter()
                .map(|violation| ViolationDiagnostic { violation })
                .collect(),
        }
    }
}

/// Render a failed validation without colors (stable for logs and tests).
pub fn render(err: KindSpaceError) -> Result<String, fmt::Error> {
    let report = KindSpaceReport::from(err);
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor()).with_width(120);
    let mut out = String::new();
    handler.render_report(&mut out, &report)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sharpkind_core::SyntaxKind;

    fn sample() -> KindSpaceError {
        KindSpaceError {
            violations: vec![
                Violation::Uncategorized(SyntaxKind::List),
                Violation::SharedSpelling {
                    spelling: "类型",
                    first: SyntaxKind::TypeOfKeyword,
                    second: SyntaxKind::TypeKeyword,
                },
            ],
        }
    }

    #[test]
    fn test_report_collects_related() {
        let report = KindSpaceReport::from(sample());
        assert_eq!(report.related.len(), 2);
        assert_eq!(report.to_string(), "kind space has 2 invariant violation(s)");
        assert_eq!(report.related[1].code_str(), "sharpkind::shared_spelling");
    }

    #[test]
    fn test_related_diagnostics_are_exposed() {
        let report = KindSpaceReport::from(sample());
        let related: Vec<String> = report
            .related()
            .into_iter()
            .flatten()
            .map(|d| d.code().map(|c| c.to_string()).unwrap_or_default())
            .collect();
        assert_eq!(related, vec!["sharpkind::uncategorized", "sharpkind::shared_spelling"]);
    }

    #[test]
    fn test_render_mentions_every_violation() {
        let rendered = render(sample()).unwrap();
        assert!(rendered.contains("sharpkind::kind_space"));
        assert!(rendered.contains("kind space has 2 invariant violation(s)"));
        assert!(rendered.contains("`List` lies outside every category block"));
        assert!(rendered.contains("spelling `类型` is claimed by both `TypeOfKeyword` and `TypeKeyword`"));
    }
}
