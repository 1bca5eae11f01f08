//! # Page Recall
//!
//! Extracts the readable content and metadata of a web page snapshot and
//! renders it as Markdown.
//!
//! Extraction runs in three steps:
//!
//! - **Article detection**: a readability pass isolates the main article,
//!   falling back to the page's rendered text when no article is found
//! - **Sparse check**: if the detected content covers too little of the
//!   page's text, the whole page is converted instead
//! - **Markdown conversion**: navigation, headers, footers and scripts are
//!   dropped and the rest becomes CommonMark
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use page_recall::prelude::*;
//!
//! let document = PageDocument::parse("https://example.com/post", &html);
//! let page = PageExtractor::default().extract(document);
//!
//! println!("{} ({})", page.metadata.title, page.metadata.site_name);
//! println!("{}", page.content);
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod document;
pub mod errors;
pub mod extract;
pub mod markdown;
pub mod observability;
pub mod parsers;
pub mod testing;
pub mod text;

#[cfg(feature = "host")]
pub mod host;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::document::PageDocument;
    pub use crate::errors::{ConfigError, ParseError, RecallError};
    pub use crate::extract::{
        DocumentParser, Extraction, ExtractionPath, ExtractorConfig, MarkdownConfig,
        PageContent, PageExtractor, PageMetadata, ReadabilityConfig, TotalParser,
    };
    pub use crate::markdown::{Element, MarkdownConverter, MarkdownOptions, Rule};
    pub use crate::observability::{init_logging, LogFormat};
    pub use crate::parsers::{MarkdownParser, PlainTextParser, ReadabilityParser};
    pub use crate::text::normalize_whitespace;

    #[cfg(feature = "host")]
    pub use crate::host::{
        ContentScriptHost, ContentSink, ExtractionRecord, LoggingContentSink, PageEvent, Trigger,
    };
}
