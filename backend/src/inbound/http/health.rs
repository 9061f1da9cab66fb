//! Health endpoints: liveness and readiness probes for orchestration and load
//! balancers.
//!
//! The readiness body reports whether the document store and mail relay were
//! wired at startup. The service runs degraded without either, so neither
//! gates readiness.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;
use utoipa::ToSchema;

/// Backing services resolved at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dependencies {
    pub store_connected: bool,
    pub mail_configured: bool,
}

/// Readiness probe payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadinessReport {
    /// `connected` or `unavailable`.
    #[schema(example = "connected")]
    pub store: &'static str,
    /// `configured` or `disabled`.
    #[schema(example = "configured")]
    pub mail: &'static str,
}

impl From<Dependencies> for ReadinessReport {
    fn from(value: Dependencies) -> Self {
        Self {
            store: if value.store_connected {
                "connected"
            } else {
                "unavailable"
            },
            mail: if value.mail_configured {
                "configured"
            } else {
                "disabled"
            },
        }
    }
}

/// Shared health state for readiness and liveness checks.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
    dependencies: Dependencies,
}

impl Default for HealthState {
    fn default() -> Self {
        Self::new(Dependencies::default())
    }
}

impl HealthState {
    /// Create a health state that is live but not yet ready.
    pub fn new(dependencies: Dependencies) -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
            dependencies,
        }
    }

    /// Mark the service as ready once the listener is bound.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as unhealthy so liveness checks fail fast during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// When false, liveness probes emit 503 to trigger restarts.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    pub fn dependencies(&self) -> Dependencies {
        self.dependencies
    }
}

fn probe_response(probe_ok: bool) -> actix_web::HttpResponseBuilder {
    let mut response = if probe_ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response.insert_header((header::CACHE_CONTROL, "no-store"));
    response
}

/// Readiness probe. Return 200 once the server can handle traffic and 503
/// before that.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic", body = ReadinessReport),
        (status = 503, description = "Server is not ready", body = ReadinessReport)
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_ready()).json(ReadinessReport::from(state.dependencies()))
}

/// Liveness probe. Return 200 while the process is marked alive and 503 once
/// draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_alive()).finish()
}
