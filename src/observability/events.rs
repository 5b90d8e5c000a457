//! Lifecycle events
//!
//! Named, typed events emitted while the service boots and shuts down.

use std::fmt;

/// Observable lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Startup begins
    BootStart,
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Listener bound, ready to serve
    ServerListening,
    /// Server loop exited
    ShutdownComplete,
    /// Startup failed
    BootFailed,
}

impl Event {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::BootFailed => "BOOT_FAILED",
        }
    }

    /// Whether this event ends the process
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::BootStart.as_str(), "BOOT_START");
        assert_eq!(Event::ServerListening.to_string(), "SERVER_LISTENING");
    }

    #[test]
    fn test_only_boot_failure_is_fatal() {
        assert!(Event::BootFailed.is_fatal());
        assert!(!Event::BootStart.is_fatal());
        assert!(!Event::ShutdownComplete.is_fatal());
    }
}
