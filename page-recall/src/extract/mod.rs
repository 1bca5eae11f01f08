//! Page content extraction.
//!
//! This module provides:
//! - Data models for extracted pages
//! - The metadata fallback chain shared by all parsers
//! - Protocol traits for pluggable parsers
//! - Configuration for extraction and conversion
//! - [`PageExtractor`], which orchestrates the parsers

mod config;
mod extractor;
#[cfg(test)]
mod integration_tests;
mod metadata;
mod models;
mod protocols;

pub use config::{ExtractorConfig, MarkdownConfig, ReadabilityConfig};
pub use extractor::{Extraction, ExtractionPath, PageExtractor};
pub use metadata::{build_metadata, MetadataHints};
pub use models::{PageContent, PageMetadata};
pub use protocols::{DocumentParser, TotalParser};
