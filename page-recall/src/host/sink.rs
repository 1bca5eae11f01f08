//! Content sink trait and implementations.

use async_trait::async_trait;
use tracing::{debug, info, Level};

use super::event::ExtractionRecord;

/// Receives extraction records from the host.
#[async_trait]
pub trait ContentSink: Send + Sync {
    /// Delivers a record. Never fails; implementations log their own errors.
    async fn deliver(&self, record: ExtractionRecord);
}

/// A no-op sink that discards all records.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpContentSink;

#[async_trait]
impl ContentSink for NoOpContentSink {
    async fn deliver(&self, _record: ExtractionRecord) {}
}

/// A sink that logs each record's metadata and content.
#[derive(Debug, Clone)]
pub struct LoggingContentSink {
    level: Level,
}

impl Default for LoggingContentSink {
    fn default() -> Self {
        Self { level: Level::INFO }
    }
}

impl LoggingContentSink {
    /// Creates a new logging sink with the specified level.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Creates a debug-level logging sink.
    #[must_use]
    pub fn debug() -> Self {
        Self::new(Level::DEBUG)
    }

    /// Creates an info-level logging sink.
    #[must_use]
    pub fn info() -> Self {
        Self::new(Level::INFO)
    }

    fn log_record(&self, record: &ExtractionRecord) {
        let metadata = &record.page.metadata;
        if self.level == Level::DEBUG {
            debug!(
                id = %record.id,
                trigger = %record.trigger,
                url = %metadata.url,
                title = %metadata.title,
                site_name = %metadata.site_name,
                language = ?metadata.language,
                content = %record.page.content,
                "Extracted page content"
            );
        } else {
            info!(
                id = %record.id,
                trigger = %record.trigger,
                url = %metadata.url,
                title = %metadata.title,
                site_name = %metadata.site_name,
                language = ?metadata.language,
                content = %record.page.content,
                "Extracted page content"
            );
        }
    }
}

#[async_trait]
impl ContentSink for LoggingContentSink {
    async fn deliver(&self, record: ExtractionRecord) {
        self.log_record(&record);
    }
}

/// A collecting sink for testing purposes.
#[derive(Debug, Default)]
pub struct CollectingContentSink {
    records: parking_lot::RwLock<Vec<ExtractionRecord>>,
}

impl CollectingContentSink {
    /// Creates a new collecting sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected records.
    #[must_use]
    pub fn records(&self) -> Vec<ExtractionRecord> {
        self.records.read().clone()
    }

    /// Returns the number of collected records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns true if no records have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Clears all collected records.
    pub fn clear(&self) {
        self.records.write().clear();
    }

    /// Returns the URLs of collected records, in delivery order.
    #[must_use]
    pub fn urls(&self) -> Vec<String> {
        self.records
            .read()
            .iter()
            .map(|record| record.page.metadata.url.clone())
            .collect()
    }
}

#[async_trait]
impl ContentSink for CollectingContentSink {
    async fn deliver(&self, record: ExtractionRecord) {
        self.records.write().push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{Extraction, ExtractionPath, PageContent, PageMetadata};
    use crate::host::Trigger;

    fn record(url: &str) -> ExtractionRecord {
        ExtractionRecord::new(
            Trigger::Load,
            Extraction {
                page: PageContent::new(PageMetadata::new(url, "Title"), "# Title"),
                path: ExtractionPath::FullPage,
                primary_error: None,
                original_length: 5,
                content_ratio: Some(1.0),
                duration_ms: 0.5,
            },
        )
    }

    #[tokio::test]
    async fn test_noop_sink() {
        NoOpContentSink.deliver(record("https://example.com/")).await;
    }

    #[tokio::test]
    async fn test_logging_sink() {
        LoggingContentSink::default().deliver(record("https://example.com/")).await;
        LoggingContentSink::debug().deliver(record("https://example.com/")).await;
    }

    #[tokio::test]
    async fn test_collecting_sink() {
        let sink = CollectingContentSink::new();
        assert!(sink.is_empty());

        sink.deliver(record("https://example.com/a")).await;
        sink.deliver(record("https://example.com/b")).await;

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.urls(), vec!["https://example.com/a", "https://example.com/b"]);
        assert_ne!(sink.records()[0].id, sink.records()[1].id);

        sink.clear();
        assert!(sink.is_empty());
    }
}
