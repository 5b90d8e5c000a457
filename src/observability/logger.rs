//! Structured logging setup
//!
//! Installs the global `tracing` subscriber. Output is either human-readable
//! text or one JSON object per line; the level filter uses `RUST_LOG`
//! directive syntax (e.g. `info` or `flashdeck=debug,tower_http=info`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use super::{ObservabilityError, ObservabilityResult};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(ObservabilityError::InvalidFormat(other.to_string())),
        }
    }
}

/// Parse a level filter
pub fn build_filter(level: &str) -> ObservabilityResult<EnvFilter> {
    EnvFilter::try_new(level).map_err(|e| ObservabilityError::InvalidFilter(e.to_string()))
}

/// Install the global subscriber
///
/// Fails if a subscriber is already installed.
pub fn init_logging(level: &str, format: LogFormat) -> ObservabilityResult<()> {
    let filter = build_filter(level)?;

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true),
            )
            .with(filter)
            .try_init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .with(filter)
            .try_init(),
    }
    .map_err(|e| ObservabilityError::AlreadyInitialized(e.to_string()))
}
