//! Event loop feeding page snapshots through the extractor.

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::extract::PageExtractor;

use super::event::{ExtractionRecord, PageEvent};
use super::sink::{ContentSink, LoggingContentSink};

/// Extracts every page event it is given and delivers the result to a sink.
#[derive(Clone)]
pub struct ContentScriptHost {
    extractor: Arc<PageExtractor>,
    sink: Arc<dyn ContentSink>,
}

impl ContentScriptHost {
    /// Creates a host around a shared extractor and sink.
    #[must_use]
    pub fn new(extractor: Arc<PageExtractor>, sink: Arc<dyn ContentSink>) -> Self {
        Self { extractor, sink }
    }

    /// The extractor in use.
    #[must_use]
    pub fn extractor(&self) -> &PageExtractor {
        &self.extractor
    }

    /// Extracts the event's snapshot.
    ///
    /// The snapshot is parsed and dropped within this call.
    #[must_use]
    pub fn handle(&self, event: &PageEvent) -> ExtractionRecord {
        let extraction = self.extractor.extract_with_report(event.snapshot());
        ExtractionRecord::new(event.trigger(), extraction)
    }

    /// Extracts the event and delivers the record. Returns the record ID.
    pub async fn dispatch(&self, event: PageEvent) -> Uuid {
        let record = self.handle(&event);
        let id = record.id;
        debug!(id = %id, trigger = %record.trigger, url = %event.url(), "Delivering extraction");
        self.sink.deliver(record).await;
        id
    }

    /// Processes events in arrival order until the channel closes.
    ///
    /// Returns the number of events processed.
    pub async fn run(&self, mut events: mpsc::Receiver<PageEvent>) -> usize {
        let mut processed = 0;
        while let Some(event) = events.recv().await {
            self.dispatch(event).await;
            processed += 1;
        }
        info!(processed, "Page event channel closed");
        processed
    }
}

impl Default for ContentScriptHost {
    fn default() -> Self {
        Self::new(
            Arc::new(PageExtractor::default()),
            Arc::new(LoggingContentSink::default()),
        )
    }
}

impl std::fmt::Debug for ContentScriptHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentScriptHost")
            .field("extractor", &self.extractor)
            .finish_non_exhaustive()
    }
}
