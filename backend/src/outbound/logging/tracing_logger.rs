//! [`IngestionLogger`] adapter that forwards to `tracing`.

use crate::domain::ports::IngestionLogger;

/// Emits each ingestion message as an `info` event on the
/// `appointments::ingestion` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingIngestionLogger;

impl IngestionLogger for TracingIngestionLogger {
    fn log(&self, message: &str) {
        tracing::info!(target: "appointments::ingestion", %message);
    }
}
