//! Observability subsystem
//!
//! - Structured logging through `tracing` (text or JSON)
//! - Typed lifecycle events
//!
//! # Usage
//!
//! ```ignore
//! use flashdeck::observability::{init_logging, log_event, Event, LogFormat};
//!
//! init_logging("info", LogFormat::Json)?;
//! log_event(Event::BootStart);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{build_filter, init_logging, LogFormat};

use thiserror::Error;

/// Observability errors
///
/// Never fatal on their own; callers decide whether to continue without
/// logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObservabilityError {
    /// Unknown log format name
    #[error("Invalid log format: '{0}' (expected 'text' or 'json')")]
    InvalidFormat(String),

    /// Unparseable level filter
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber is already installed
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Result type for observability operations
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

/// Log a lifecycle event
pub fn log_event(event: Event) {
    if event.is_fatal() {
        tracing::error!(event = event.as_str(), "lifecycle");
    } else {
        tracing::info!(event = event.as_str(), "lifecycle");
    }
}
