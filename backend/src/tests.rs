//! Tests for the service bootstrap, covering settings validation, readiness
//! signalling and shutdown draining.

use std::ffi::OsString;
use std::net::SocketAddr;
use std::num::NonZeroU32;

use actix_web::web;
use env_lock::lock_env;
use ortho_config::OrthoConfig;
use rstest::{fixture, rstest};

use super::{AppointmentSettings, HealthState, ServerConfig, create_server, drain, server_config};
use appointments::domain::IngestionPolicy;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn config() -> ServerConfig {
    ServerConfig::new(
        SocketAddr::from(([127, 0, 0, 1], 0)),
        IngestionPolicy::new(5, NonZeroU32::new(30).expect("non-zero")),
    )
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready(health_state: web::Data<HealthState>, config: ServerConfig) {
    assert!(!health_state.is_ready(), "state should start unready");

    let _server = create_server(health_state.clone(), config).expect("server should build");

    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}

#[rstest]
#[actix_rt::test]
async fn drain_withdraws_readiness_then_liveness(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) {
    let server = create_server(health_state.clone(), config).expect("server should build");
    let handle = server.handle();
    let running = actix_rt::spawn(server);

    drain(health_state.clone(), handle).await;

    assert!(!health_state.is_ready(), "draining withdraws readiness");
    assert!(!health_state.is_alive(), "a stopped server is not live");
    running
        .await
        .expect("server task joins")
        .expect("server stops cleanly");
}

#[rstest]
fn server_config_rejects_zero_default_duration() {
    let settings = AppointmentSettings {
        future_threshold_minutes: 5,
        default_service_duration_minutes: 0,
        bind_address: None,
    };

    let err = server_config(&settings)
        .err()
        .expect("zero duration is invalid");
    assert!(err.to_string().contains("default_service_duration_minutes"));
}

#[rstest]
fn server_config_uses_configured_address() {
    let settings = AppointmentSettings {
        future_threshold_minutes: 10,
        default_service_duration_minutes: 30,
        bind_address: Some("127.0.0.1:8181".to_owned()),
    };

    let config = server_config(&settings).expect("valid settings");
    assert_eq!(config.bind_addr(), SocketAddr::from(([127, 0, 0, 1], 8181)));
}

#[rstest]
fn server_config_builds_from_an_empty_environment() {
    let _guard = lock_env([
        ("APPOINTMENTS_FUTURE_THRESHOLD_MINUTES", None::<String>),
        ("APPOINTMENTS_DEFAULT_SERVICE_DURATION_MINUTES", None::<String>),
        ("APPOINTMENTS_BIND_ADDRESS", None::<String>),
    ]);

    let settings = AppointmentSettings::load_from_iter([OsString::from("appointments")])
        .expect("settings load without any overrides");
    let config = server_config(&settings).expect("defaults are valid");

    assert_eq!(config.bind_addr(), SocketAddr::from(([0, 0, 0, 0], 8080)));
    assert_eq!(
        config.policy,
        IngestionPolicy::new(5, NonZeroU32::new(30).expect("non-zero"))
    );
}
