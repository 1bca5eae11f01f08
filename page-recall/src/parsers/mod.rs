//! Parsing strategies used by [`PageExtractor`](crate::extract::PageExtractor).
//!
//! - [`ReadabilityParser`]: article HTML; fails when no article is found
//! - [`PlainTextParser`]: rendered body text; never fails
//! - [`MarkdownParser`]: body converted to Markdown; never fails

mod markdown;
mod plain_text;
mod readability;

pub use markdown::{drop_empty_links, MarkdownParser};
pub use plain_text::PlainTextParser;
pub use readability::ReadabilityParser;
