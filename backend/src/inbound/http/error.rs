//! HTTP mapping for domain errors.
//!
//! Every failure leaves the service as `{"errors": [...]}`. Internal errors
//! are logged with their detail and replaced by a generic message.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Message returned in place of any internal failure detail.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Error envelope shared by every non-success response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponseBody {
    /// Human-readable reasons the request failed.
    #[schema(example = json!(["Appointment time must be in the future."]))]
    pub errors: Vec<String>,
}

impl ErrorResponseBody {
    /// Envelope carrying every message in `errors`.
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    /// Envelope carrying one message.
    pub fn single(message: impl Into<String>) -> Self {
        Self::new(vec![message.into()])
    }
}

/// `400 Bad Request` carrying `errors`.
pub(crate) fn bad_request(errors: Vec<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponseBody::new(errors))
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        let body = if matches!(self.code(), ErrorCode::InternalError) {
            error!(
                code = %self.code(),
                trace_id = self.trace_id().unwrap_or_default(),
                detail = %self.message(),
                "request failed with internal error"
            );
            ErrorResponseBody::single(INTERNAL_ERROR_MESSAGE)
        } else {
            ErrorResponseBody::single(self.message())
        };
        builder.json(body)
    }
}

/// Turn JSON extractor failures into the `400` envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("malformed request body: {err}")).into()
}
