//! Data models for extracted pages.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::RecallError;

/// Metadata extracted from a web page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Source URL of the page.
    pub url: String,
    /// Title of the page.
    pub title: String,
    /// Site name of the page.
    pub site_name: String,
    /// Language of the page (e.g. "ja", "en", "es").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Description or excerpt of the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PageMetadata {
    /// Creates metadata whose site name defaults to the title.
    #[must_use]
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            url: url.into(),
            site_name: title.clone(),
            title,
            language: None,
            description: None,
        }
    }

    /// Sets the site name.
    #[must_use]
    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = site_name.into();
        self
    }

    /// Sets the language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Converts to dictionary.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut dict = HashMap::new();
        dict.insert("url".to_string(), serde_json::json!(self.url));
        dict.insert("title".to_string(), serde_json::json!(self.title));
        dict.insert("siteName".to_string(), serde_json::json!(self.site_name));
        if let Some(ref v) = self.language {
            dict.insert("language".to_string(), serde_json::json!(v));
        }
        if let Some(ref v) = self.description {
            dict.insert("description".to_string(), serde_json::json!(v));
        }
        dict
    }
}

/// Parsed content from a web page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageContent {
    /// Metadata of the page.
    pub metadata: PageMetadata,
    /// Main content of the page, whitespace-normalized.
    pub content: String,
}

impl PageContent {
    /// Creates page content.
    #[must_use]
    pub fn new(metadata: PageMetadata, content: impl Into<String>) -> Self {
        Self {
            metadata,
            content: content.into(),
        }
    }

    /// Keeps the metadata and swaps in different content.
    #[must_use]
    pub fn with_content(self, content: impl Into<String>) -> Self {
        Self {
            metadata: self.metadata,
            content: content.into(),
        }
    }

    /// Content length in characters.
    #[must_use]
    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Whether the content is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Converts to dictionary.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut dict = HashMap::new();
        dict.insert("metadata".to_string(), serde_json::json!(self.metadata.to_dict()));
        dict.insert("content".to_string(), serde_json::json!(self.content));
        dict
    }

    /// Serializes to a JSON string.
    pub fn to_json(&self) -> Result<String, RecallError> {
        Ok(serde_json::to_string(self)?)
    }
}
