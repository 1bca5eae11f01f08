//! Whole-document Markdown parser.

use tracing::warn;

use crate::document::PageDocument;
use crate::errors::ParseError;
use crate::extract::{build_metadata, DocumentParser, MarkdownConfig, MetadataHints, PageContent, TotalParser};
use crate::markdown::{Element, MarkdownConverter, Rule};
use crate::text::normalize_whitespace;

/// Renders links only when they have both a target and visible text.
#[must_use]
pub fn drop_empty_links() -> Rule {
    Rule::new("drop_empty_links", &["a"], |element: Element<'_>| {
        let href = element
            .attrs
            .iter()
            .find(|attr| &*attr.name.local == "href")
            .map(|attr| attr.value.trim())
            .unwrap_or_default();
        let text = element.content.trim();
        if href.is_empty() || text.is_empty() {
            return None;
        }
        Some(format!("[{text}]({href})"))
    })
}

/// Converts the body of a document to Markdown. Never fails.
#[derive(Debug, Clone)]
pub struct MarkdownParser {
    converter: MarkdownConverter,
}

impl MarkdownParser {
    /// Creates a parser from `config`, with the empty-link rule installed.
    #[must_use]
    pub fn new(config: &MarkdownConfig) -> Self {
        Self::with_converter(config.converter().add_rule(drop_empty_links()))
    }

    /// Creates a parser around a preconfigured converter.
    #[must_use]
    pub fn with_converter(converter: MarkdownConverter) -> Self {
        Self { converter }
    }

    /// The converter in use.
    #[must_use]
    pub fn converter(&self) -> &MarkdownConverter {
        &self.converter
    }

    /// Converts the body of `document`, unnormalized. Empty without a body.
    ///
    /// A conversion error falls back to the rendered body text.
    #[must_use]
    pub fn to_markdown(&self, document: &PageDocument) -> String {
        let Some(body) = document.body() else {
            return String::new();
        };
        match self.converter.convert(&body.html()) {
            Ok(markdown) => markdown,
            Err(err) => {
                warn!(url = %document.url(), error = %err, "Markdown conversion failed, using body text");
                document.body_text()
            }
        }
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new(&MarkdownConfig::default())
    }
}

impl DocumentParser for MarkdownParser {
    fn name(&self) -> &str {
        "markdown"
    }

    fn parse(&self, document: PageDocument) -> Result<PageContent, ParseError> {
        Ok(self.parse_total(document))
    }
}

impl TotalParser for MarkdownParser {
    fn parse_total(&self, document: PageDocument) -> PageContent {
        let markdown = self.to_markdown(&document);
        let metadata = build_metadata(&document, MetadataHints::none());
        PageContent::new(metadata, normalize_whitespace(&markdown))
    }
}
