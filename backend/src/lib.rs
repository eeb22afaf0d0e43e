//! Appointment booking service library.
//!
//! The [`domain`] module holds the booking rules and ports; [`inbound`] and
//! [`outbound`] hold the HTTP and infrastructure adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
