//! The extraction orchestrator.

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, debug_span, info};

use crate::document::PageDocument;
use crate::errors::{ConfigError, ParseError};
use crate::parsers::{MarkdownParser, PlainTextParser, ReadabilityParser};

use super::config::ExtractorConfig;
use super::models::PageContent;
use super::protocols::{DocumentParser, TotalParser};

/// Which input the final Markdown conversion ran on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionPath {
    /// The parsed content, reparsed as a standalone document.
    Fragment,
    /// The original page; parsed content was too sparse.
    FullPage,
}

/// Details of a single extraction run.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// The final result.
    pub page: PageContent,
    /// Which input was converted to Markdown.
    pub path: ExtractionPath,
    /// Why the primary parser failed, if it did.
    pub primary_error: Option<ParseError>,
    /// Characters in the body's rendered text.
    pub original_length: usize,
    /// Parsed content length over `original_length`. `None` for an empty body.
    pub content_ratio: Option<f64>,
    /// Wall time spent in milliseconds.
    pub duration_ms: f64,
}

/// Extracts the main content of a page and converts it to Markdown.
///
/// Runs the primary parser (readability by default) on a copy of the
/// document and falls back to the plain-text parser when it fails. If the
/// parsed content covers less than `min_content_ratio` of the body's text,
/// the whole page is converted instead; otherwise only the parsed content is.
pub struct PageExtractor {
    primary: Box<dyn DocumentParser>,
    fallback: Box<dyn TotalParser>,
    markdown: Box<dyn TotalParser>,
    min_content_ratio: f64,
}

impl PageExtractor {
    /// Creates an extractor from its three strategies, with the default ratio.
    pub fn new(
        primary: impl DocumentParser + 'static,
        fallback: impl TotalParser + 'static,
        markdown: impl TotalParser + 'static,
    ) -> Self {
        Self {
            primary: Box::new(primary),
            fallback: Box::new(fallback),
            markdown: Box::new(markdown),
            min_content_ratio: ExtractorConfig::default().min_content_ratio,
        }
    }

    /// Creates an extractor with the built-in parsers configured from `config`.
    pub fn from_config(config: &ExtractorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            ReadabilityParser::new(config.readability.clone()),
            PlainTextParser::new(),
            MarkdownParser::new(&config.markdown),
        )
        .with_min_content_ratio(config.min_content_ratio))
    }

    /// Sets the minimum content ratio.
    #[must_use]
    pub fn with_min_content_ratio(mut self, ratio: f64) -> Self {
        self.min_content_ratio = ratio;
        self
    }

    /// The minimum content ratio.
    #[must_use]
    pub fn min_content_ratio(&self) -> f64 {
        self.min_content_ratio
    }

    /// Extracts `document`. Never fails.
    #[must_use]
    pub fn extract(&self, document: PageDocument) -> PageContent {
        self.extract_with_report(document).page
    }

    /// Extracts `document` and reports how the result was reached.
    #[must_use]
    pub fn extract_with_report(&self, document: PageDocument) -> Extraction {
        let _span = debug_span!("page_extract", url = %document.url()).entered();
        let started = Instant::now();
        let original_length = document.body_text().chars().count();

        let (parsed, primary_error) = self.parse_with_fallback(&document);
        let parsed_length = parsed.content_len();

        #[allow(clippy::cast_precision_loss)]
        let content_ratio =
            (original_length > 0).then(|| parsed_length as f64 / original_length as f64);
        let sparse = content_ratio
            .map_or(true, |ratio| !ratio.is_finite() || ratio < self.min_content_ratio);

        let (path, markdown) = if sparse {
            info!(
                url = %document.url(),
                original_length,
                parsed_length,
                "Extraction content ratio too low ({:.2}), using Markdown conversion directly",
                content_ratio.unwrap_or(0.0)
            );
            (ExtractionPath::FullPage, self.markdown.parse_total(document))
        } else {
            let fragment = PageDocument::from_fragment(document.url(), &parsed.content);
            (ExtractionPath::Fragment, self.markdown.parse_total(fragment))
        };

        let page = parsed.with_content(markdown.content);
        let duration_ms = started.elapsed().as_secs_f64() * 1000.0;
        debug!(
            url = %page.metadata.url,
            path = ?path,
            ratio = content_ratio,
            content_length = page.content_len(),
            duration_ms,
            "Extraction finished"
        );

        Extraction {
            page,
            path,
            primary_error,
            original_length,
            content_ratio,
            duration_ms,
        }
    }

    /// Runs the primary parser on a clone of `document`, falling back to the
    /// total parser on failure.
    pub fn parse_with_fallback(&self, document: &PageDocument) -> (PageContent, Option<ParseError>) {
        match self.primary.parse(document.clone()) {
            Ok(parsed) => {
                debug!(parser = self.primary.name(), url = %document.url(), "Primary parser succeeded");
                (parsed, None)
            }
            Err(err) => {
                debug!(
                    parser = self.primary.name(),
                    fallback = self.fallback.name(),
                    code = err.code(),
                    error = %err,
                    "Primary parser failed, falling back"
                );
                (self.fallback.parse_total(document.clone()), Some(err))
            }
        }
    }
}

impl Default for PageExtractor {
    fn default() -> Self {
        Self::new(
            ReadabilityParser::default(),
            PlainTextParser::new(),
            MarkdownParser::default(),
        )
    }
}

impl std::fmt::Debug for PageExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageExtractor")
            .field("primary", &self.primary.name())
            .field("fallback", &self.fallback.name())
            .field("markdown", &self.markdown.name())
            .field("min_content_ratio", &self.min_content_ratio)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::models::PageMetadata;
    use crate::testing::{FailingParser, StaticParser};
    use pretty_assertions::assert_eq;

    const URL: &str = "https://example.com/a";

    fn long_page() -> PageDocument {
        let body = "word ".repeat(100);
        PageDocument::parse(
            URL,
            &format!("<html><head><title>Long</title></head><body><h1>Heading</h1><p>{body}</p></body></html>"),
        )
    }

    fn static_primary(content: &str) -> StaticParser {
        StaticParser::new(PageContent::new(
            PageMetadata::new(URL, "Primary Title").with_site_name("Primary Site"),
            content,
        ))
    }

    #[test]
    fn test_failure_falls_back_to_plain_text() {
        let primary = FailingParser::new(ParseError::no_article("nothing found"));
        let markdown = StaticParser::named("markdown", PageContent::default());
        let extractor = PageExtractor::new(primary.clone(), PlainTextParser::new(), markdown.clone());

        let (parsed, error) = extractor.parse_with_fallback(&long_page());
        assert_eq!(error, Some(ParseError::no_article("nothing found")));
        assert!(parsed.content.starts_with("Heading\nword word"));
        assert_eq!(parsed.metadata.title, "Long");
        assert_eq!(primary.calls(), 1);
        assert_eq!(markdown.calls(), 0);
    }

    #[test]
    fn test_fragment_path_converts_parsed_content() {
        let content = format!("<p>{}</p><p>Hello <b>there</b></p>", "word ".repeat(30));
        let extractor = PageExtractor::new(
            static_primary(&content),
            PlainTextParser::new(),
            MarkdownParser::default(),
        );

        let report = extractor.extract_with_report(long_page());
        assert_eq!(report.path, ExtractionPath::Fragment);
        assert_eq!(report.primary_error, None);
        assert!(report.page.content.ends_with("Hello **there**"));
        assert!(!report.page.content.contains("Heading"));
        assert!(report.duration_ms.is_finite() && report.duration_ms >= 0.0);
        assert_eq!(report.page.metadata.title, "Primary Title");
        assert_eq!(report.page.metadata.site_name, "Primary Site");
    }

    #[test]
    fn test_sparse_content_converts_full_page() {
        let extractor = PageExtractor::new(
            static_primary("<p>tiny</p>"),
            PlainTextParser::new(),
            MarkdownParser::default(),
        );

        let report = extractor.extract_with_report(long_page());
        assert_eq!(report.path, ExtractionPath::FullPage);
        assert!(report.content_ratio.is_some_and(|r| r < 0.2));
        assert!(report.page.content.starts_with("# Heading\nword word"));
        assert_eq!(report.page.metadata.title, "Primary Title");
    }

    #[test]
    fn test_ratio_at_threshold_keeps_fragment() {
        // Body text is exactly 10 characters.
        let document = PageDocument::parse(URL, "<body><p>abcdefghij</p></body>");
        let markdown = StaticParser::named("markdown", PageContent::default());
        let extractor =
            PageExtractor::new(static_primary("ab"), PlainTextParser::new(), markdown.clone());

        let report = extractor.extract_with_report(document);
        assert_eq!(report.original_length, 10);
        assert_eq!(report.path, ExtractionPath::Fragment);
        assert_eq!(markdown.received(), vec!["ab".to_string()]);
    }

    #[test]
    fn test_empty_body_takes_full_page_path() {
        let document = PageDocument::parse(URL, "<html><head><title>Empty</title></head><body></body></html>");
        let markdown = StaticParser::named("markdown", PageContent::default());
        let extractor = PageExtractor::new(
            static_primary("<p>anything at all</p>"),
            PlainTextParser::new(),
            markdown.clone(),
        );

        let report = extractor.extract_with_report(document);
        assert_eq!(report.original_length, 0);
        assert_eq!(report.content_ratio, None);
        assert_eq!(report.path, ExtractionPath::FullPage);
        assert_eq!(markdown.received(), vec![String::new()]);
    }

    #[test]
    fn test_zero_ratio_threshold_always_keeps_parsed_content() {
        let extractor = PageExtractor::new(
            static_primary(""),
            PlainTextParser::new(),
            MarkdownParser::default(),
        )
        .with_min_content_ratio(0.0);

        let report = extractor.extract_with_report(long_page());
        assert_eq!(report.path, ExtractionPath::Fragment);
        assert_eq!(report.page.content, "");
    }

    #[test]
    fn test_from_config_validates() {
        let config = ExtractorConfig::default().with_min_content_ratio(2.0);
        assert!(matches!(
            PageExtractor::from_config(&config),
            Err(ConfigError::InvalidRatio(_))
        ));

        let extractor =
            PageExtractor::from_config(&ExtractorConfig::default().with_min_content_ratio(0.5)).unwrap();
        assert!((extractor.min_content_ratio() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extractor_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PageExtractor>();
    }
}
