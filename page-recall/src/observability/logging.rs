//! Subscriber installation.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::errors::RecallError;

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Installs a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over `filter` when set. Fails if the filter
/// does not parse or a global subscriber is already installed.
pub fn init_logging(filter: &str, format: LogFormat) -> Result<(), RecallError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter)
            .map_err(|e| RecallError::Internal(format!("invalid log filter '{filter}': {e}")))?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    let installed = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| RecallError::Internal(format!("failed to install subscriber: {e}")))
}
