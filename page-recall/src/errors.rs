//! Error types for page extraction.
//!
//! Extraction itself has a single failure kind, [`ParseError`], raised only by
//! the readability strategy and always absorbed by
//! [`PageExtractor`](crate::extract::PageExtractor). The remaining types cover
//! the fallible edges around it: configuration, serialization and logging
//! setup, and Markdown conversion.

use std::collections::HashMap;
use thiserror::Error;

/// The main error type for page-recall operations.
#[derive(Debug, Error)]
pub enum RecallError {
    /// A parser could not produce usable content.
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// Configuration was rejected.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// HTML could not be converted to Markdown.
    #[error("Markdown conversion failed: {0}")]
    Conversion(String),

    /// A generic internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for RecallError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Error raised when a document parser could not produce usable content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The readability engine found no article in the document.
    #[error("Failed to parse document with Readability: {0}")]
    NoArticle(String),

    /// An article was found but its content is empty.
    #[error("Parsed content is empty")]
    EmptyContent,
}

impl ParseError {
    /// Creates a no-article error from any engine error.
    #[must_use]
    pub fn no_article(reason: impl std::fmt::Display) -> Self {
        Self::NoArticle(reason.to_string())
    }

    /// Short machine-readable code for logs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NoArticle(_) => "no_article",
            Self::EmptyContent => "empty_content",
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("code".to_string(), serde_json::Value::String(self.code().to_string()));
        map.insert("message".to_string(), serde_json::Value::String(self.to_string()));
        map
    }
}

/// Error raised when configuration is invalid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The minimum content ratio is outside `0.0..=1.0` or not finite.
    #[error("min_content_ratio must be a finite value in 0.0..=1.0, got {0}")]
    InvalidRatio(f64),

    /// Any other invalid setting.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Creates a generic invalid-configuration error.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
