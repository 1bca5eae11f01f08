//! Metadata fallback chain shared by all parsers.

use crate::document::PageDocument;

use super::models::PageMetadata;

/// Parser-specific metadata that takes precedence over document signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataHints<'a> {
    /// Article title.
    pub title: Option<&'a str>,
    /// Article site name.
    pub site_name: Option<&'a str>,
    /// Article excerpt.
    pub excerpt: Option<&'a str>,
}

impl<'a> MetadataHints<'a> {
    /// No hints: metadata comes from the document alone.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Sets the title hint.
    #[must_use]
    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets the site name hint.
    #[must_use]
    pub fn with_site_name(mut self, site_name: Option<&'a str>) -> Self {
        self.site_name = site_name;
        self
    }

    /// Sets the excerpt hint.
    #[must_use]
    pub fn with_excerpt(mut self, excerpt: Option<&'a str>) -> Self {
        self.excerpt = excerpt;
        self
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Builds metadata for `document`, preferring `hints` over document signals.
///
/// - title: hint, then document title, then the URL
/// - site name: hint, then `og:site_name`, then document title, then title
/// - language: the root `lang` attribute, `None` when absent or empty
/// - description: hint, then `meta[name="description"]`, then `None`
#[must_use]
pub fn build_metadata(document: &PageDocument, hints: MetadataHints<'_>) -> PageMetadata {
    let url = document.url().to_string();
    let document_title = document.title();

    let title = present(hints.title)
        .map(String::from)
        .or_else(|| Some(document_title.clone()).filter(|t| !t.is_empty()))
        .unwrap_or_else(|| url.clone());

    let site_name = present(hints.site_name)
        .map(String::from)
        .or_else(|| document.og_site_name())
        .or_else(|| Some(document_title).filter(|t| !t.is_empty()))
        .unwrap_or_else(|| title.clone());

    let description = present(hints.excerpt)
        .map(String::from)
        .or_else(|| document.meta_description());

    PageMetadata {
        url,
        title,
        site_name,
        language: document.language(),
        description,
    }
}
