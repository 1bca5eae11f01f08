//! Protocol traits for document parsers.
//!
//! These traits define the interface between [`PageExtractor`](super::PageExtractor)
//! and the parsing strategies it orchestrates, allowing for pluggable
//! implementations.

use crate::document::PageDocument;
use crate::errors::ParseError;

use super::models::PageContent;

/// A strategy that turns a page snapshot into [`PageContent`].
///
/// The document is taken by value: implementations are free to mutate or
/// consume it.
pub trait DocumentParser: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Parses the document.
    fn parse(&self, document: PageDocument) -> Result<PageContent, ParseError>;
}

/// A parser that always produces content.
pub trait TotalParser: DocumentParser {
    /// Parses the document. Never fails.
    fn parse_total(&self, document: PageDocument) -> PageContent;
}
