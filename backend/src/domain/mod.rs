//! Appointment domain: entities, rules, ports, and the ingestion service.
//!
//! Public surface:
//! - [`Appointment`], [`ClientName`], [`AppointmentRequest`]: the booking
//!   model and its untrusted input.
//! - [`validate_appointment`] and [`check_overlap`]: pure booking rules.
//! - [`AppointmentIngestionService`]: orchestrates the rules over the ports.
//! - [`Error`] and [`ErrorCode`]: transport-agnostic failures.

pub mod appointment;
pub mod appointment_overlap;
pub mod appointment_service;
pub mod appointment_validation;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::appointment::{
    Appointment, AppointmentRequest, AppointmentValidationError, ClientName,
};
pub use self::appointment_overlap::check_overlap;
pub use self::appointment_service::AppointmentIngestionService;
pub use self::appointment_validation::{
    AppointmentRejection, IngestionPolicy, validate_appointment,
};
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
