//! Markdown output writer
//!
//! Keeps exactly one blank line between blocks and renders pipe tables.

use super::config::ReportConfig;

/// Writer that builds a Markdown document section by section
pub struct MarkdownWriter {
    /// The output buffer
    output: String,
    /// Configuration
    config: ReportConfig,
}

impl MarkdownWriter {
    /// Create a new writer with the given config
    pub fn new(config: ReportConfig) -> Self {
        Self {
            output: String::new(),
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Get the document, ending in exactly one newline
    pub fn finish(mut self) -> String {
        trim_trailing_newlines_to_at_most_two(&mut self.output);
        while self.output.ends_with('\n') {
            self.output.pop();
        }
        self.output.push('\n');
        self.output
    }

    /// Write the document title
    pub fn title(&mut self, text: &str) {
        let prefix = self.config.title_prefix();
        self.heading(&prefix, text);
    }

    /// Start a section one level below the title
    pub fn section(&mut self, text: &str) {
        let prefix = self.config.section_prefix();
        self.heading(&prefix, text);
    }

    fn heading(&mut self, prefix: &str, text: &str) {
        self.ensure_single_blank_line();
        self.output.push_str(prefix);
        self.output.push(' ');
        self.output.push_str(text);
        self.output.push_str("\n\n");
    }

    /// Write a paragraph
    pub fn paragraph(&mut self, text: &str) {
        self.ensure_single_blank_line();
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Write a bullet line (consecutive bullets form one list)
    pub fn bullet(&mut self, text: &str) {
        self.output.push_str("- ");
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Write a table header and its separator row
    pub fn table_header(&mut self, headers: &[&str]) {
        self.ensure_single_blank_line();
        self.row(headers.iter().copied());
        let separator = headers.iter().map(|_| "---");
        self.row(separator);
    }

    /// Write one table row
    pub fn row<'a>(&mut self, cells: impl IntoIterator<Item = &'a str>) {
        self.output.push('|');
        for cell in cells {
            self.output.push(' ');
            self.output.push_str(&escape_cell(cell));
            self.output.push_str(" |");
        }
        self.output.push('\n');
    }

    fn ensure_single_blank_line(&mut self) {
        trim_trailing_newlines_to_at_most_two(&mut self.output);
        if self.output.is_empty() || self.output.ends_with("\n\n") {
            return;
        }
        if self.output.ends_with('\n') {
            self.output.push('\n');
        } else {
            self.output.push_str("\n\n");
        }
    }
}

/// Wrap a spelling in backticks, choosing a fence the spelling cannot close.
pub fn code_span(spelling: &str) -> String {
    if spelling.contains('`') {
        format!("`` {spelling} ``")
    } else {
        format!("`{spelling}`")
    }
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}

fn trim_trailing_newlines_to_at_most_two(out: &mut String) {
    let count = out.chars().rev().take_while(|&ch| ch == '\n').count();
    for _ in 2..count {
        out.pop();
    }
}
