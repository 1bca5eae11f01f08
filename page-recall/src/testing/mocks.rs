//! Mock parsers for testing.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::document::PageDocument;
use crate::errors::ParseError;
use crate::extract::{DocumentParser, PageContent, TotalParser};

/// A parser that always fails with the configured error.
///
/// Clones share their call counter.
#[derive(Debug, Clone)]
pub struct FailingParser {
    error: ParseError,
    calls: Arc<Mutex<usize>>,
}

impl FailingParser {
    /// Creates a parser failing with `error`.
    #[must_use]
    pub fn new(error: ParseError) -> Self {
        Self {
            error,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Returns the number of times the parser was called.
    #[must_use]
    pub fn calls(&self) -> usize {
        *self.calls.lock()
    }
}

impl DocumentParser for FailingParser {
    fn name(&self) -> &str {
        "failing"
    }

    fn parse(&self, _document: PageDocument) -> Result<PageContent, ParseError> {
        *self.calls.lock() += 1;
        Err(self.error.clone())
    }
}

/// A parser that returns fixed content and records the body text of every
/// document it is handed.
///
/// Clones share their recordings.
#[derive(Debug, Clone)]
pub struct StaticParser {
    name: String,
    output: PageContent,
    received: Arc<Mutex<Vec<String>>>,
}

impl StaticParser {
    /// Creates a parser returning `output`.
    #[must_use]
    pub fn new(output: PageContent) -> Self {
        Self::named("static", output)
    }

    /// Creates a named parser returning `output`.
    #[must_use]
    pub fn named(name: impl Into<String>, output: PageContent) -> Self {
        Self {
            name: name.into(),
            output,
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns the number of times the parser was called.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.received.lock().len()
    }

    /// Returns the body text of each document received, in call order.
    #[must_use]
    pub fn received(&self) -> Vec<String> {
        self.received.lock().clone()
    }
}

impl DocumentParser for StaticParser {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self, document: PageDocument) -> Result<PageContent, ParseError> {
        Ok(self.parse_total(document))
    }
}

impl TotalParser for StaticParser {
    fn parse_total(&self, document: PageDocument) -> PageContent {
        self.received.lock().push(document.body_text());
        self.output.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failing_parser_counts_calls() {
        let parser = FailingParser::new(ParseError::EmptyContent);
        let shared = parser.clone();
        let document = PageDocument::parse("https://example.com/", "<p>x</p>");

        assert_eq!(parser.parse(document.clone()), Err(ParseError::EmptyContent));
        assert_eq!(parser.parse(document), Err(ParseError::EmptyContent));
        assert_eq!(shared.calls(), 2);
    }

    #[test]
    fn test_static_parser_records_body_text() {
        let parser = StaticParser::new(PageContent::default());
        let document = PageDocument::parse("https://example.com/", "<p>hello</p>");

        let page = parser.parse_total(document);
        assert_eq!(page, PageContent::default());
        assert_eq!(parser.received(), vec!["hello".to_string()]);
    }
}
