//! Host adapter.
//!
//! Connects the extractor to a browser-like host: page events arrive on a
//! channel carrying the URL and a serialized DOM snapshot, each is extracted
//! independently and in arrival order, and the resulting records are handed
//! to a [`ContentSink`].

mod content_script;
mod event;
mod sink;

pub use content_script::ContentScriptHost;
pub use event::{ExtractionRecord, PageEvent, Trigger};
pub use sink::{CollectingContentSink, ContentSink, LoggingContentSink, NoOpContentSink};
