//! Port for the ingestion audit log.
//!
//! The ingestion service reports each rejection and lookup miss through this
//! port as plain text lines. Logging never fails from the caller's point of
//! view.

/// Sink for human-readable ingestion messages.
#[cfg_attr(test, mockall::automock)]
pub trait IngestionLogger: Send + Sync {
    /// Record one message.
    fn log(&self, message: &str);
}

/// Logger that discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureIngestionLogger;

impl IngestionLogger for FixtureIngestionLogger {
    fn log(&self, _message: &str) {}
}
