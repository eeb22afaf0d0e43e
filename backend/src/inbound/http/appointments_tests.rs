//! Tests for the appointment HTTP handlers.

use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{App, test};
use chrono::{TimeZone, Utc};
use mockall::predicate::eq;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::AppointmentRejection;
use crate::domain::ports::{
    FixtureAppointmentIngestionCommand, FixtureAppointmentQuery, MockAppointmentIngestionCommand,
    MockAppointmentQuery,
};
use crate::inbound::http::error::INTERNAL_ERROR_MESSAGE;

async fn call(state: HttpState, request: test::TestRequest) -> ServiceResponse {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(scope()),
    )
    .await;
    test::call_service(&app, request.to_request()).await
}

fn with_command(command: MockAppointmentIngestionCommand) -> HttpState {
    HttpState::new(Arc::new(command), Arc::new(FixtureAppointmentQuery))
}

fn with_query(query: MockAppointmentQuery) -> HttpState {
    HttpState::new(Arc::new(FixtureAppointmentIngestionCommand), Arc::new(query))
}

fn ingest(body: Value) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/appointment/ingest")
        .set_json(body)
}

async fn errors_of(response: ServiceResponse) -> Vec<String> {
    let body: ErrorResponseBody = test::read_body_json(response).await;
    body.errors
}

#[rstest]
#[actix_web::test]
async fn ingest_returns_identifier_and_message() {
    let id = Uuid::new_v4();
    let mut command = MockAppointmentIngestionCommand::new();
    command
        .expect_ingest()
        .withf(|request| {
            request.client_name == "Ada"
                && request.appointment_time.to_rfc3339() == "2026-03-02T10:30:00+01:00"
                && request.service_duration_minutes == Some(45)
        })
        .times(1)
        .return_once(move |_| {
            Ok(AppointmentIngestionOutcome::Accepted { appointment_id: id })
        });

    let response = call(
        with_command(command),
        ingest(json!({
            "clientName": "Ada",
            "appointmentTime": "2026-03-02T10:30:00+01:00",
            "serviceDurationMinutes": 45,
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: IngestAppointmentResponseBody = test::read_body_json(response).await;
    assert_eq!(
        body,
        IngestAppointmentResponseBody {
            appointment_id: id,
            message: CREATED_MESSAGE.to_owned(),
        }
    );
}

#[rstest]
#[actix_web::test]
async fn rejected_ingestion_lists_every_reason() {
    let mut command = MockAppointmentIngestionCommand::new();
    command.expect_ingest().times(1).return_once(|_| {
        Ok(AppointmentIngestionOutcome::Rejected {
            errors: vec![
                AppointmentRejection::NotInFuture,
                AppointmentRejection::NotOnSlotBoundary,
            ],
        })
    });

    let response = call(
        with_command(command),
        ingest(json!({
            "clientName": "Ada",
            "appointmentTime": "2020-01-01T10:15:00Z",
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        errors_of(response).await,
        vec![
            "Appointment time must be in the future.".to_owned(),
            "Appointment must start on the hour or half-hour.".to_owned(),
        ]
    );
}

#[rstest]
#[case::missing_both(json!({}), 2)]
#[case::blank_name(json!({"clientName": "  ", "appointmentTime": "2026-03-02T10:30:00Z"}), 1)]
#[case::long_name(
    json!({"clientName": "a".repeat(101), "appointmentTime": "2026-03-02T10:30:00Z"}),
    1
)]
#[case::bad_time(json!({"clientName": "Ada", "appointmentTime": "next tuesday"}), 1)]
#[case::long_name_and_bad_time(
    json!({"clientName": "a".repeat(101), "appointmentTime": "next tuesday"}),
    2
)]
#[actix_web::test]
async fn boundary_validation_short_circuits_the_domain(
    #[case] body: Value,
    #[case] expected_errors: usize,
) {
    let mut command = MockAppointmentIngestionCommand::new();
    command.expect_ingest().times(0);

    let response = call(with_command(command), ingest(body)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(errors_of(response).await.len(), expected_errors);
}

#[rstest]
#[case::truncated_json("{\"clientName\": ")]
#[case::wrong_duration_type(
    r#"{"clientName":"Ada","appointmentTime":"2026-03-02T10:30:00Z","serviceDurationMinutes":"long"}"#
)]
#[case::duration_out_of_range(
    r#"{"clientName":"Ada","appointmentTime":"2026-03-02T10:30:00Z","serviceDurationMinutes":4294967296}"#
)]
#[actix_web::test]
async fn malformed_json_uses_error_envelope(#[case] payload: &'static str) {
    let mut command = MockAppointmentIngestionCommand::new();
    command.expect_ingest().times(0);

    let request = test::TestRequest::post()
        .uri("/api/appointment/ingest")
        .insert_header(ContentType::json())
        .set_payload(payload);
    let response = call(with_command(command), request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(errors_of(response).await.len(), 1);
}

#[rstest]
#[actix_web::test]
async fn ingestion_fault_is_redacted() {
    let mut command = MockAppointmentIngestionCommand::new();
    command
        .expect_ingest()
        .times(1)
        .return_once(|_| Err(Error::internal("appointment repository error: poisoned")));

    let response = call(
        with_command(command),
        ingest(json!({
            "clientName": "Ada",
            "appointmentTime": "2026-03-02T10:30:00Z",
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        errors_of(response).await,
        vec![INTERNAL_ERROR_MESSAGE.to_owned()]
    );
}

#[rstest]
#[actix_web::test]
async fn get_returns_appointment_view() {
    let id = Uuid::new_v4();
    let view = AppointmentView {
        client_name: "Ada".to_owned(),
        appointment_time: Utc
            .with_ymd_and_hms(2026, 3, 2, 9, 30, 0)
            .single()
            .expect("valid fixture timestamp"),
        service_duration_minutes: 30,
    };
    let mut query = MockAppointmentQuery::new();
    query
        .expect_get_by_id()
        .with(eq(id))
        .times(1)
        .return_once(move |_| Ok(Some(view)));

    let response = call(
        with_query(query),
        test::TestRequest::get().uri(&format!("/api/appointment/{id}")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({
            "clientName": "Ada",
            "appointmentTime": "2026-03-02T09:30:00Z",
            "serviceDurationMinutes": 30,
        })
    );
}

#[rstest]
#[actix_web::test]
async fn get_unknown_appointment_is_not_found() {
    let mut query = MockAppointmentQuery::new();
    query.expect_get_by_id().times(1).return_once(|_| Ok(None));

    let response = call(
        with_query(query),
        test::TestRequest::get().uri(&format!("/api/appointment/{}", Uuid::new_v4())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        errors_of(response).await,
        vec![NOT_FOUND_MESSAGE.to_owned()]
    );
}

#[rstest]
#[actix_web::test]
async fn get_with_non_uuid_is_bad_request() {
    let mut query = MockAppointmentQuery::new();
    query.expect_get_by_id().times(0);

    let response = call(
        with_query(query),
        test::TestRequest::get().uri("/api/appointment/not-a-uuid"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        errors_of(response).await,
        vec!["id must be a valid UUID".to_owned()]
    );
}
