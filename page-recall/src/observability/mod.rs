//! Observability utilities.
//!
//! Extraction logs through `tracing`; [`init_logging`] installs a subscriber
//! for binaries and bindings that do not bring their own.

mod logging;

pub use logging::{init_logging, LogFormat};
