//! Output configuration for inspection commands and the generated reference.

use clap::ValueEnum;

/// Rendering of command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Report configuration
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// How command output is rendered
    pub format: OutputFormat,
    /// Whether alternate-script keyword spellings are accepted and shown
    pub include_synonyms: bool,
    /// Markdown heading level of the reference title (sections go one deeper)
    pub heading_level: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            include_synonyms: true,
            heading_level: 1,
        }
    }
}

impl ReportConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Accept and show keyword synonyms (or not)
    pub fn with_synonyms(mut self, include: bool) -> Self {
        self.include_synonyms = include;
        self
    }

    /// Set the reference title heading level, clamped to `1..=5` so sections stay valid Markdown
    pub fn with_heading_level(mut self, level: usize) -> Self {
        self.heading_level = level.clamp(1, 5);
        self
    }

    /// `#` prefix for the title.
    pub fn title_prefix(&self) -> String {
        "#".repeat(self.heading_level)
    }

    /// `#` prefix for sections under the title.
    pub fn section_prefix(&self) -> String {
        "#".repeat(self.heading_level + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Default config tests
    // ========================================

    #[test]
    fn test_default_config_format() {
        let config = ReportConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_default_config_includes_synonyms() {
        let config = ReportConfig::default();
        assert!(config.include_synonyms);
    }

    #[test]
    fn test_default_config_heading_level() {
        let config = ReportConfig::default();
        assert_eq!(config.heading_level, 1);
    }

    #[test]
    fn test_default_output_format() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    // ========================================
    // Constructor tests
    // ========================================

    #[test]
    fn test_new_equals_default() {
        let new_config = ReportConfig::new();
        let default_config = ReportConfig::default();
        assert_eq!(new_config.format, default_config.format);
        assert_eq!(new_config.include_synonyms, default_config.include_synonyms);
        assert_eq!(new_config.heading_level, default_config.heading_level);
    }

    // ========================================
    // Builder method tests
    // ========================================

    #[test]
    fn test_with_format_json() {
        let config = ReportConfig::new().with_format(OutputFormat::Json);
        assert_eq!(config.format, OutputFormat::Json);
        // Other fields unchanged
        assert!(config.include_synonyms);
    }

    #[test]
    fn test_without_synonyms() {
        let config = ReportConfig::new().with_synonyms(false);
        assert!(!config.include_synonyms);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_with_heading_level() {
        let config = ReportConfig::new().with_heading_level(3);
        assert_eq!(config.heading_level, 3);
    }

    #[test]
    fn test_with_heading_level_zero_clamps() {
        let config = ReportConfig::new().with_heading_level(0);
        assert_eq!(config.heading_level, 1);
    }

    #[test]
    fn test_with_heading_level_large_clamps() {
        let config = ReportConfig::new().with_heading_level(9);
        assert_eq!(config.heading_level, 5);
    }

    #[test]
    fn test_chained_builders() {
        let config = ReportConfig::new()
            .with_format(OutputFormat::Json)
            .with_synonyms(false)
            .with_heading_level(2);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.include_synonyms);
        assert_eq!(config.heading_level, 2);
    }

    // ========================================
    // Heading prefix tests
    // ========================================

    #[test]
    fn test_heading_prefixes() {
        let config = ReportConfig::new().with_heading_level(2);
        assert_eq!(config.title_prefix(), "##");
        assert_eq!(config.section_prefix(), "###");
    }

    #[test]
    fn test_config_clone() {
        let config = ReportConfig::new().with_synonyms(false);
        let cloned = config.clone();
        assert_eq!(cloned.include_synonyms, config.include_synonyms);
    }
}
