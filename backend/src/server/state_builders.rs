//! Builders wiring adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use appointments::domain::AppointmentIngestionService;
use appointments::inbound::http::state::HttpState;
use appointments::outbound::logging::TracingIngestionLogger;
use appointments::outbound::persistence::InMemoryAppointmentRepository;

use super::ServerConfig;

/// Build handler state backed by a fresh in-memory repository.
///
/// One service instance serves both driving ports, so every worker shares
/// the same store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let service = Arc::new(AppointmentIngestionService::new(
        Arc::new(InMemoryAppointmentRepository::new()),
        Arc::new(TracingIngestionLogger),
        Arc::new(DefaultClock),
        config.policy,
    ));
    web::Data::new(HttpState::new(service.clone(), service))
}
