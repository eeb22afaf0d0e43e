//! Logging adapters implementing the ingestion logger port.

mod tracing_logger;

pub use tracing_logger::TracingIngestionLogger;
