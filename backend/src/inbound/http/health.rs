//! Liveness and readiness checks for orchestrators and load balancers.
//!
//! The service moves through four phases: `starting` until the listener is
//! bound, `serving`, `draining` once shutdown begins, and `stopped` after
//! in-flight requests finish. Readiness holds only while serving; liveness
//! fails only once stopped. Each check answers with `{"status": <phase>}`.

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;
use utoipa::ToSchema;

/// Lifecycle phase reported by the health checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum HealthPhase {
    /// Listener not yet bound.
    Starting = 0,
    /// Accepting traffic.
    Serving = 1,
    /// Shutdown requested; in-flight requests are finishing.
    Draining = 2,
    /// The server has stopped.
    Stopped = 3,
}

impl HealthPhase {
    fn from_repr(value: u8) -> Self {
        match value {
            0 => Self::Starting,
            1 => Self::Serving,
            2 => Self::Draining,
            _ => Self::Stopped,
        }
    }
}

/// Body returned by both health checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthBody {
    /// Current lifecycle phase.
    pub status: HealthPhase,
}

/// Shared health state.
#[derive(Debug)]
pub struct HealthState {
    phase: AtomicU8,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            phase: AtomicU8::new(HealthPhase::Starting as u8),
        }
    }
}

impl HealthState {
    /// Create a state in the `starting` phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> HealthPhase {
        HealthPhase::from_repr(self.phase.load(Ordering::Acquire))
    }

    /// Move from `starting` to `serving`. Later phases are left untouched.
    pub fn mark_ready(&self) {
        let _ = self.phase.compare_exchange(
            HealthPhase::Starting as u8,
            HealthPhase::Serving as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }

    /// Stop advertising readiness while in-flight requests finish.
    pub fn begin_draining(&self) {
        self.phase
            .fetch_max(HealthPhase::Draining as u8, Ordering::AcqRel);
    }

    /// Fail liveness once the server has stopped.
    pub fn mark_stopped(&self) {
        self.phase.store(HealthPhase::Stopped as u8, Ordering::Release);
    }

    /// Whether new traffic should be routed here.
    pub fn is_ready(&self) -> bool {
        self.phase() == HealthPhase::Serving
    }

    /// Whether the process is still running its server.
    pub fn is_alive(&self) -> bool {
        self.phase() != HealthPhase::Stopped
    }
}

fn health_response(healthy: bool, status: HealthPhase) -> HttpResponse {
    let mut response = if healthy {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(HealthBody { status })
}

/// Readiness check.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Serving traffic", body = HealthBody),
        (status = 503, description = "Starting, draining or stopped", body = HealthBody)
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    health_response(state.is_ready(), state.phase())
}

/// Liveness check.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is running", body = HealthBody),
        (status = 503, description = "Server has stopped", body = HealthBody)
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    health_response(state.is_alive(), state.phase())
}
