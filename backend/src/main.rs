//! Appointment service entry-point: loads settings, wires adapters, and serves
//! the REST API with health checks and OpenAPI docs.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use appointments::inbound::http::health::HealthState;
use appointments::settings::AppointmentSettings;
use server::{ServerConfig, create_server, drain, shutdown_signal};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppointmentSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let config = server_config(&settings)?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let handle = server.handle();
    actix_web::rt::spawn(async move {
        match shutdown_signal().await {
            Ok(()) => drain(health_state, handle).await,
            Err(e) => warn!(error = %e, "shutdown signal handler unavailable"),
        }
    });
    server.await
}

fn server_config(settings: &AppointmentSettings) -> std::io::Result<ServerConfig> {
    let policy = settings
        .ingestion_policy()
        .map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_address().map_err(std::io::Error::other)?;
    Ok(ServerConfig::new(bind_addr, policy))
}

#[cfg(test)]
mod tests;
