//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: in-memory appointment repository
//! - **logging**: `tracing`-backed ingestion logger
//!
//! Adapters translate between domain types and infrastructure. They contain
//! no business logic.

pub mod logging;
pub mod persistence;
