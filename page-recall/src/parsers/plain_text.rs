//! Rendered-text fallback parser.

use crate::document::PageDocument;
use crate::errors::ParseError;
use crate::extract::{build_metadata, DocumentParser, MetadataHints, PageContent, TotalParser};
use crate::text::normalize_whitespace;

/// Returns the rendered text of the body. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextParser;

impl PlainTextParser {
    /// Creates a plain-text parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DocumentParser for PlainTextParser {
    fn name(&self) -> &str {
        "plain_text"
    }

    fn parse(&self, document: PageDocument) -> Result<PageContent, ParseError> {
        Ok(self.parse_total(document))
    }
}

impl TotalParser for PlainTextParser {
    fn parse_total(&self, document: PageDocument) -> PageContent {
        let metadata = build_metadata(&document, MetadataHints::none());
        PageContent::new(metadata, normalize_whitespace(&document.body_text()))
    }
}
