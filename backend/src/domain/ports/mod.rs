//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`AppointmentRepository`], [`IngestionLogger`]) are
//! implemented by outbound adapters; driving ports
//! ([`AppointmentIngestionCommand`], [`AppointmentQuery`]) are implemented by
//! domain services and called by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod appointment_ingestion_command;
mod appointment_query;
mod appointment_repository;
mod ingestion_logger;

#[cfg(test)]
pub use appointment_ingestion_command::MockAppointmentIngestionCommand;
pub use appointment_ingestion_command::{
    AppointmentIngestionCommand, AppointmentIngestionOutcome, FixtureAppointmentIngestionCommand,
};
#[cfg(test)]
pub use appointment_query::MockAppointmentQuery;
pub use appointment_query::{AppointmentQuery, AppointmentView, FixtureAppointmentQuery};
#[cfg(test)]
pub use appointment_repository::MockAppointmentRepository;
pub use appointment_repository::{
    AppointmentRepository, AppointmentRepositoryError, FixtureAppointmentRepository,
};
#[cfg(test)]
pub use ingestion_logger::MockIngestionLogger;
pub use ingestion_logger::{FixtureIngestionLogger, IngestionLogger};
