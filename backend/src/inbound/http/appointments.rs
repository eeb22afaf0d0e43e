//! Appointment HTTP handlers.
//!
//! ```text
//! POST /api/appointment/ingest {"clientName":"Ada","appointmentTime":"2026-03-02T10:30:00Z"}
//! GET /api/appointment/{id}
//! ```

use actix_web::{HttpResponse, Scope, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::AppointmentRequest;
use crate::domain::Error;
use crate::domain::ports::{AppointmentIngestionOutcome, AppointmentView};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{ErrorResponseBody, bad_request, json_error_handler};
use crate::inbound::http::schemas::AppointmentViewSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldErrors, FieldName, check_char_length, parse_rfc3339_timestamp, parse_uuid,
};

/// Confirmation returned with every successful ingestion.
pub const CREATED_MESSAGE: &str = "Appointment created successfully.";
/// Message returned when no appointment has the requested id.
pub const NOT_FOUND_MESSAGE: &str = "Appointment not found";

const CLIENT_NAME: FieldName = FieldName::new("clientName");
const APPOINTMENT_TIME: FieldName = FieldName::new("appointmentTime");
const APPOINTMENT_ID: FieldName = FieldName::new("id");
const CLIENT_NAME_MAX_CHARS: usize = 100;

/// Request payload for `POST /api/appointment/ingest`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngestAppointmentRequestBody {
    /// Client name, 1 to 100 characters.
    #[schema(example = "Ada Lovelace", min_length = 1, max_length = 100)]
    pub client_name: Option<String>,
    /// Start time with an explicit UTC offset.
    #[schema(format = DateTime, example = "2026-03-02T10:30:00+01:00")]
    pub appointment_time: Option<String>,
    /// Defaults to the configured duration when absent or not positive.
    #[schema(example = 45)]
    pub service_duration_minutes: Option<i32>,
}

/// Response payload for a stored appointment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngestAppointmentResponseBody {
    /// Identifier of the stored appointment.
    pub appointment_id: Uuid,
    /// Fixed confirmation text.
    #[schema(example = "Appointment created successfully.")]
    pub message: String,
}

fn parse_ingest_body(
    body: IngestAppointmentRequestBody,
) -> Result<AppointmentRequest, Vec<String>> {
    let mut errors = FieldErrors::default();

    let client_name = errors.require_text(body.client_name, CLIENT_NAME);
    if let Some(name) = &client_name {
        errors.check(check_char_length(name, CLIENT_NAME, 1, CLIENT_NAME_MAX_CHARS));
    }
    let appointment_time = errors
        .require_text(body.appointment_time, APPOINTMENT_TIME)
        .and_then(|raw| errors.check(parse_rfc3339_timestamp(&raw, APPOINTMENT_TIME)));

    match (client_name, appointment_time) {
        (Some(client_name), Some(appointment_time)) if errors.is_empty() => {
            Ok(AppointmentRequest {
                client_name,
                appointment_time,
                service_duration_minutes: body.service_duration_minutes,
            })
        }
        _ => Err(errors.into_messages()),
    }
}

/// Book a new appointment.
#[utoipa::path(
    post,
    path = "/api/appointment/ingest",
    request_body = IngestAppointmentRequestBody,
    responses(
        (status = 200, description = "Appointment stored", body = IngestAppointmentResponseBody),
        (status = 400, description = "Invalid request, rejected or overlapping appointment", body = ErrorResponseBody),
        (status = 500, description = "Internal server error", body = ErrorResponseBody)
    ),
    tags = ["appointments"],
    operation_id = "ingestAppointment"
)]
#[post("/appointment/ingest")]
pub async fn ingest_appointment(
    state: web::Data<HttpState>,
    payload: web::Json<IngestAppointmentRequestBody>,
) -> ApiResult<HttpResponse> {
    let request = match parse_ingest_body(payload.into_inner()) {
        Ok(request) => request,
        Err(errors) => return Ok(bad_request(errors)),
    };

    let outcome = state.ingestion.ingest(request).await?;
    Ok(match outcome {
        AppointmentIngestionOutcome::Accepted { appointment_id } => {
            HttpResponse::Ok().json(IngestAppointmentResponseBody {
                appointment_id,
                message: CREATED_MESSAGE.to_owned(),
            })
        }
        rejected @ AppointmentIngestionOutcome::Rejected { .. } => {
            bad_request(rejected.error_messages())
        }
    })
}

/// Fetch an appointment by id.
#[utoipa::path(
    get,
    path = "/api/appointment/{id}",
    params(("id" = Uuid, Path, description = "Appointment identifier")),
    responses(
        (status = 200, description = "Appointment found", body = AppointmentViewSchema),
        (status = 400, description = "Identifier is not a UUID", body = ErrorResponseBody),
        (status = 404, description = "Appointment not found", body = ErrorResponseBody),
        (status = 500, description = "Internal server error", body = ErrorResponseBody)
    ),
    tags = ["appointments"],
    operation_id = "getAppointment"
)]
#[get("/appointment/{id}")]
pub async fn get_appointment(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<AppointmentView>> {
    let id = parse_uuid(&path.into_inner(), APPOINTMENT_ID)?;
    state
        .appointments
        .get_by_id(id)
        .await?
        .map(web::Json)
        .ok_or_else(|| Error::not_found(NOT_FOUND_MESSAGE))
}

/// Routes mounted under `/api`, with JSON errors mapped to the envelope.
pub fn scope() -> Scope {
    web::scope("/api")
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(ingest_appointment)
        .service(get_appointment)
}

#[cfg(test)]
#[path = "appointments_tests.rs"]
mod tests;
