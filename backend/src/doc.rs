//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the appointment and health endpoints together with
//! the request, response, error envelope and health schemas. The document is served
//! by Swagger UI in debug builds and exported by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::appointments::{
    IngestAppointmentRequestBody, IngestAppointmentResponseBody,
};
use crate::inbound::http::error::ErrorResponseBody;
use crate::inbound::http::health::{HealthBody, HealthPhase};
use crate::inbound::http::schemas::AppointmentViewSchema;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Appointment API",
        description = "API for ingesting and retrieving appointments."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::appointments::ingest_appointment,
        crate::inbound::http::appointments::get_appointment,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        IngestAppointmentRequestBody,
        IngestAppointmentResponseBody,
        AppointmentViewSchema,
        ErrorResponseBody,
        HealthBody,
        HealthPhase,
    )),
    tags(
        (name = "appointments", description = "Booking and lookup of appointments"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
