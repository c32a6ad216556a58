//! Analyzer configuration loading, parsing, and validation.
//!
//! Every knob has a default, so running without a config file works. A TOML
//! file can override any subset; unknown values fail at parse time and
//! out-of-range values fail validation before any work starts.

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::parser::DateOrder;
use crate::stats::engine::{DEFAULT_TOP_USERS, DEFAULT_TOP_WORDS};
use crate::wordcloud::WordcloudConfig;

/// Error type for configuration loading failures.
#[derive(Debug)]
pub enum ConfigError {
    FileReadError(String),
    ParseError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::FileReadError(msg) => write!(f, "Failed to read file: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse TOML: {}", msg),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Transcript parsing settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ParserSettings {
    /// Component order of the numeric dates in the export.
    pub date_order: DateOrder,
}

impl Default for ParserSettings {
    fn default() -> Self {
        ParserSettings {
            date_order: DateOrder::DayFirst,
        }
    }
}

/// Statistics engine settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct StatsSettings {
    /// Number of ranked senders in the busy-users output.
    pub top_users: usize,
    /// Number of entries in the common-words output.
    pub top_words: usize,
    /// Optional stopword file replacing the built-in English list.
    pub stopword_file: Option<String>,
}

impl Default for StatsSettings {
    fn default() -> Self {
        StatsSettings {
            top_users: DEFAULT_TOP_USERS,
            top_words: DEFAULT_TOP_WORDS,
            stopword_file: None,
        }
    }
}

/// Root structure covering every analyzer knob.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AnalyzerConfig {
    pub parser: ParserSettings,
    pub stats: StatsSettings,
    pub wordcloud: WordcloudConfig,
}

impl AnalyzerConfig {
    /// Load and validate configuration from a TOML file.
    ///
    /// # Parameters
    ///
    /// * `path` - Path to the config TOML file
    ///
    /// # Returns
    ///
    /// Parsed and validated configuration or an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;

        let config: AnalyzerConfig = toml::from_str(&data)
            .context("Invalid TOML format")
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        validate_config(&config).map_err(ConfigError::ValidationError)?;

        Ok(config)
    }
}

/// Validate a parsed configuration.
///
/// # Returns
///
/// `Ok(())` if validation passes, `Err(String)` with error description otherwise.
pub fn validate_config(config: &AnalyzerConfig) -> Result<(), String> {
    const MAX_CANVAS_DIMENSION: u32 = 4096;
    // Smallest font the built-in 5x7 glyphs can draw.
    const MIN_FONT_PIXELS: u32 = 7;

    let cloud = &config.wordcloud;

    if cloud.width == 0 || cloud.width > MAX_CANVAS_DIMENSION {
        return Err(format!("Canvas width {} outside allowed range (1-{})", cloud.width, MAX_CANVAS_DIMENSION));
    }
    if cloud.height == 0 || cloud.height > MAX_CANVAS_DIMENSION {
        return Err(format!("Canvas height {} outside allowed range (1-{})", cloud.height, MAX_CANVAS_DIMENSION));
    }
    if cloud.min_font_size < MIN_FONT_PIXELS {
        return Err(format!("Minimum font size {} below smallest drawable size {}", cloud.min_font_size, MIN_FONT_PIXELS));
    }
    if cloud.max_font_size < cloud.min_font_size {
        return Err(format!(
            "Maximum font size {} smaller than minimum font size {}",
            cloud.max_font_size, cloud.min_font_size
        ));
    }
    if cloud.max_words == 0 {
        return Err("Word cap must be at least 1".to_string());
    }

    if config.stats.top_users == 0 {
        return Err("Busy-users limit must be at least 1".to_string());
    }
    if config.stats.top_words == 0 {
        return Err("Common-words limit must be at least 1".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_yields_defaults() {
        let config: AnalyzerConfig = toml::from_str("").unwrap();

        assert_eq!(config.parser.date_order, DateOrder::DayFirst);
        assert_eq!(config.stats.top_users, 5);
        assert_eq!(config.stats.top_words, 20);
        assert!(config.stats.stopword_file.is_none());
        assert_eq!(config.wordcloud.width, 500);
        assert_eq!(config.wordcloud.height, 500);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_sections_override_defaults() {
        let source = r#"
            [parser]
            date-order = "month-first"

            [stats]
            top-users = 3
            top-words = 10
            stopword-file = "custom-stopwords.txt"

            [wordcloud]
            width = 300
            height = 200
            max-words = 25
        "#;
        let config: AnalyzerConfig = toml::from_str(source).unwrap();

        assert_eq!(config.parser.date_order, DateOrder::MonthFirst);
        assert_eq!(config.stats.top_users, 3);
        assert_eq!(config.stats.top_words, 10);
        assert_eq!(config.stats.stopword_file.as_deref(), Some("custom-stopwords.txt"));
        assert_eq!(config.wordcloud.width, 300);
        assert_eq!(config.wordcloud.height, 200);
        assert_eq!(config.wordcloud.max_words, 25);
        // Untouched knobs keep their defaults.
        assert_eq!(config.wordcloud.min_font_size, 10);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_partial_section_keeps_other_fields() {
        let source = "[stats]\ntop-users = 7\n";
        let config: AnalyzerConfig = toml::from_str(source).unwrap();

        assert_eq!(config.stats.top_users, 7);
        assert_eq!(config.stats.top_words, 20);
    }

    #[test]
    fn test_invalid_date_order_is_rejected() {
        let source = "[parser]\ndate-order = \"year-first\"\n";

        assert!(toml::from_str::<AnalyzerConfig>(source).is_err());
    }

    #[test]
    fn test_validation_rejects_zero_canvas() {
        let mut config = AnalyzerConfig::default();
        config.wordcloud.width = 0;

        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_rejects_inverted_font_bounds() {
        let mut config = AnalyzerConfig::default();
        config.wordcloud.min_font_size = 40;
        config.wordcloud.max_font_size = 12;

        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_rejects_tiny_font() {
        let mut config = AnalyzerConfig::default();
        config.wordcloud.min_font_size = 3;

        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_rejects_zero_limits() {
        let mut config = AnalyzerConfig::default();
        config.stats.top_users = 0;
        assert!(validate_config(&config).is_err());

        let mut config = AnalyzerConfig::default();
        config.stats.top_words = 0;
        assert!(validate_config(&config).is_err());

        let mut config = AnalyzerConfig::default();
        config.wordcloud.max_words = 0;
        assert!(validate_config(&config).is_err());
    }
}
