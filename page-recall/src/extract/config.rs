//! Configuration types for page extraction.

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, RecallError};
use crate::markdown::{MarkdownConverter, MarkdownOptions};

/// Configuration for the readability engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadabilityConfig {
    /// Minimum characters an article must have to be accepted.
    #[serde(default = "default_min_char_count")]
    pub min_char_count: usize,
    /// Whether to keep `class` attributes in the article HTML.
    #[serde(default)]
    pub keep_classes: bool,
    /// Maximum number of elements to analyse (0 = unlimited).
    #[serde(default)]
    pub max_elements_to_parse: usize,
}

fn default_min_char_count() -> usize {
    200
}

impl Default for ReadabilityConfig {
    fn default() -> Self {
        Self {
            min_char_count: default_min_char_count(),
            keep_classes: false,
            max_elements_to_parse: 0,
        }
    }
}

impl ReadabilityConfig {
    /// Sets the minimum article length.
    #[must_use]
    pub fn with_min_char_count(mut self, count: usize) -> Self {
        self.min_char_count = count;
        self
    }

    /// Sets whether class attributes are kept.
    #[must_use]
    pub fn with_keep_classes(mut self, keep: bool) -> Self {
        self.keep_classes = keep;
        self
    }

    /// Sets the element budget.
    #[must_use]
    pub fn with_max_elements_to_parse(mut self, max: usize) -> Self {
        self.max_elements_to_parse = max;
        self
    }
}

/// Configuration for Markdown conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownConfig {
    /// Output style.
    #[serde(flatten)]
    pub options: MarkdownOptions,
    /// Tag names dropped, with their subtrees, before conversion.
    #[serde(default = "default_removed_elements")]
    pub removed_elements: Vec<String>,
}

fn default_removed_elements() -> Vec<String> {
    [
        "head", "meta", "link", "style", "script", "noscript", "iframe", "embed", "object",
        "header", "footer", "nav", "aside",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            options: MarkdownOptions::default(),
            removed_elements: default_removed_elements(),
        }
    }
}

impl MarkdownConfig {
    /// Sets the output style.
    #[must_use]
    pub fn with_options(mut self, options: MarkdownOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the removal list.
    #[must_use]
    pub fn with_removed_elements<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.removed_elements = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builds a converter with these options and removals, and no custom rules.
    #[must_use]
    pub fn converter(&self) -> MarkdownConverter {
        MarkdownConverter::new(self.options).remove(&self.removed_elements)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.removed_elements.iter().any(|tag| tag.trim().is_empty()) {
            return Err(ConfigError::invalid("removed_elements must not contain empty tag names"));
        }
        Ok(())
    }
}

/// Configuration for [`PageExtractor`](super::PageExtractor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Below this share of the body's text, readability output is discarded
    /// in favour of converting the whole page.
    #[serde(default = "default_min_content_ratio")]
    pub min_content_ratio: f64,
    /// Readability settings.
    #[serde(default)]
    pub readability: ReadabilityConfig,
    /// Markdown settings.
    #[serde(default)]
    pub markdown: MarkdownConfig,
}

fn default_min_content_ratio() -> f64 {
    0.2
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_content_ratio: default_min_content_ratio(),
            readability: ReadabilityConfig::default(),
            markdown: MarkdownConfig::default(),
        }
    }
}

impl ExtractorConfig {
    /// Loads and validates a configuration from JSON. Missing fields take
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, RecallError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the minimum content ratio.
    #[must_use]
    pub fn with_min_content_ratio(mut self, ratio: f64) -> Self {
        self.min_content_ratio = ratio;
        self
    }

    /// Sets the readability settings.
    #[must_use]
    pub fn with_readability(mut self, readability: ReadabilityConfig) -> Self {
        self.readability = readability;
        self
    }

    /// Sets the Markdown settings.
    #[must_use]
    pub fn with_markdown(mut self, markdown: MarkdownConfig) -> Self {
        self.markdown = markdown;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_content_ratio.is_finite() || !(0.0..=1.0).contains(&self.min_content_ratio) {
            return Err(ConfigError::InvalidRatio(self.min_content_ratio));
        }
        self.markdown.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::{BulletListMarker, CodeBlockFence, CodeBlockStyle, HeadingStyle, LinkStyle};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::default();
        assert!((config.min_content_ratio - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.readability.min_char_count, 200);
        assert!(!config.readability.keep_classes);
        assert_eq!(config.readability.max_elements_to_parse, 0);
        assert_eq!(config.markdown.options.heading_style, HeadingStyle::Atx);
        assert_eq!(config.markdown.options.bullet_list_marker, BulletListMarker::Dash);
        assert_eq!(config.markdown.options.code_block_style, CodeBlockStyle::Fenced);
        assert_eq!(config.markdown.options.code_block_fence, CodeBlockFence::Backticks);
        assert_eq!(config.markdown.options.link_style, LinkStyle::Inlined);
        assert_eq!(config.markdown.removed_elements.len(), 13);
        assert!(config.markdown.removed_elements.contains(&"nav".to_string()));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = ExtractorConfig::from_json(
            r#"{"min_content_ratio": 0.5, "readability": {"min_char_count": 50}}"#,
        )
        .unwrap();
        assert!((config.min_content_ratio - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.readability.min_char_count, 50);
        assert!(!config.readability.keep_classes);
        assert_eq!(config.markdown, MarkdownConfig::default());
    }

    #[test]
    fn test_from_json_flattened_markdown_options() {
        let config = ExtractorConfig::from_json(
            r#"{"markdown": {"heading_style": "setext", "bullet_list_marker": "asterisk", "removed_elements": ["nav"]}}"#,
        )
        .unwrap();
        assert_eq!(config.markdown.options.heading_style, HeadingStyle::Setext);
        assert_eq!(config.markdown.options.bullet_list_marker, BulletListMarker::Asterisk);
        assert_eq!(config.markdown.options.code_block_fence, CodeBlockFence::Backticks);
        assert_eq!(config.markdown.removed_elements, vec!["nav".to_string()]);
    }

    #[test]
    fn test_from_json_rejects_bad_ratio() {
        let err = ExtractorConfig::from_json(r#"{"min_content_ratio": 1.5}"#).unwrap_err();
        assert!(matches!(
            err,
            RecallError::Config(ConfigError::InvalidRatio(r)) if (r - 1.5).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn test_from_json_rejects_unknown_style() {
        let err = ExtractorConfig::from_json(r#"{"markdown": {"bullet_list_marker": "+"}}"#).unwrap_err();
        assert!(matches!(err, RecallError::Serialization(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = ExtractorConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, RecallError::Serialization(_)));
    }

    #[test]
    fn test_validate() {
        assert!(ExtractorConfig::default().validate().is_ok());
        assert!(ExtractorConfig::default().with_min_content_ratio(0.0).validate().is_ok());
        assert!(ExtractorConfig::default().with_min_content_ratio(1.0).validate().is_ok());
        assert!(ExtractorConfig::default().with_min_content_ratio(-0.1).validate().is_err());
        assert!(ExtractorConfig::default().with_min_content_ratio(f64::NAN).validate().is_err());

        let markdown = MarkdownConfig::default().with_removed_elements(["nav", " "]);
        let err = ExtractorConfig::default().with_markdown(markdown).validate().unwrap_err();
        assert_eq!(err, ConfigError::invalid("removed_elements must not contain empty tag names"));
    }

    #[test]
    fn test_converter_applies_removals() {
        let converter = MarkdownConfig::default()
            .with_removed_elements(["footer"])
            .converter();
        assert!(converter.is_removed("footer"));
        assert!(!converter.is_removed("nav"));
    }
}
