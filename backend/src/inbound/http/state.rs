//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` and only see the
//! driving ports, so they stay testable without a repository.

use std::sync::Arc;

use crate::domain::ports::{AppointmentIngestionCommand, AppointmentQuery};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use appointments::domain::ports::{
///     FixtureAppointmentIngestionCommand, FixtureAppointmentQuery,
/// };
/// use appointments::inbound::http::state::HttpState;
///
/// let state = HttpState::new(
///     Arc::new(FixtureAppointmentIngestionCommand),
///     Arc::new(FixtureAppointmentQuery),
/// );
/// let _query = state.appointments.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Books new appointments.
    pub ingestion: Arc<dyn AppointmentIngestionCommand>,
    /// Reads stored appointments.
    pub appointments: Arc<dyn AppointmentQuery>,
}

impl HttpState {
    /// Bundle the driving ports for handlers.
    pub fn new(
        ingestion: Arc<dyn AppointmentIngestionCommand>,
        appointments: Arc<dyn AppointmentQuery>,
    ) -> Self {
        Self {
            ingestion,
            appointments,
        }
    }
}
