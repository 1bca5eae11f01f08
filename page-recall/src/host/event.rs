//! Page events and extraction records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::PageDocument;
use crate::extract::{Extraction, ExtractionPath, PageContent};

/// What caused an extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// The page finished loading.
    Load,
    /// The URL changed without a reload (history navigation, SPA routing).
    LocationChange,
}

impl Trigger {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::LocationChange => "location_change",
        }
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A page event carrying a snapshot of the page at the time it fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    /// The page finished loading.
    Loaded {
        /// Page URL.
        url: String,
        /// Serialized DOM.
        html: String,
    },
    /// The page URL changed.
    LocationChanged {
        /// New page URL.
        url: String,
        /// Serialized DOM after the change.
        html: String,
    },
}

impl PageEvent {
    /// Creates a load event.
    #[must_use]
    pub fn loaded(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self::Loaded {
            url: url.into(),
            html: html.into(),
        }
    }

    /// Creates a location-change event.
    #[must_use]
    pub fn location_changed(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self::LocationChanged {
            url: url.into(),
            html: html.into(),
        }
    }

    /// What caused this event.
    #[must_use]
    pub fn trigger(&self) -> Trigger {
        match self {
            Self::Loaded { .. } => Trigger::Load,
            Self::LocationChanged { .. } => Trigger::LocationChange,
        }
    }

    /// The page URL.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Loaded { url, .. } | Self::LocationChanged { url, .. } => url,
        }
    }

    /// The serialized DOM.
    #[must_use]
    pub fn html(&self) -> &str {
        match self {
            Self::Loaded { html, .. } | Self::LocationChanged { html, .. } => html,
        }
    }

    /// Parses the snapshot into a fresh document.
    #[must_use]
    pub fn snapshot(&self) -> PageDocument {
        PageDocument::parse(self.url(), self.html())
    }
}

/// The result of handling one page event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    /// Unique, time-ordered record ID.
    pub id: Uuid,
    /// What caused the extraction.
    pub trigger: Trigger,
    /// When extraction finished.
    pub extracted_at: DateTime<Utc>,
    /// Which input was converted to Markdown.
    pub path: ExtractionPath,
    /// Time spent extracting, in milliseconds.
    pub duration_ms: f64,
    /// The extracted page.
    pub page: PageContent,
}

impl ExtractionRecord {
    /// Builds a record from a finished extraction.
    #[must_use]
    pub fn new(trigger: Trigger, extraction: Extraction) -> Self {
        Self {
            id: Uuid::now_v7(),
            trigger,
            extracted_at: Utc::now(),
            path: extraction.path,
            duration_ms: extraction.duration_ms,
            page: extraction.page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_event_accessors() {
        let event = PageEvent::location_changed("https://example.com/b", "<p>b</p>");
        assert_eq!(event.trigger(), Trigger::LocationChange);
        assert_eq!(event.url(), "https://example.com/b");
        assert_eq!(event.html(), "<p>b</p>");
        assert_eq!(event.snapshot().body_text(), "b");
    }

    #[test]
    fn test_event_serde_shape() {
        let event = PageEvent::loaded("https://example.com/", "<p>a</p>");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "loaded", "url": "https://example.com/", "html": "<p>a</p>"})
        );
        let restored: PageEvent = serde_json::from_value(json).unwrap();
        assert_eq!(restored, event);
    }

    #[test]
    fn test_trigger_display() {
        assert_eq!(Trigger::Load.to_string(), "load");
        assert_eq!(Trigger::LocationChange.to_string(), "location_change");
    }
}
