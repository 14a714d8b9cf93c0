use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::services::pilot::{pilot_new_year, FIRST_CYCLE_YEAR};

/// Body of `GET /health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy` or `unhealthy`
    pub status: String,
    /// When the check ran
    pub timestamp: DateTime<Utc>,
    /// Crate version
    pub version: String,
    /// `ok` when the calculation yields a timestamp
    pub epoch_check: String,
    /// Seconds since the service started
    pub uptime_seconds: u64,
}

#[derive(Clone)]
struct HealthState {
    start_time: DateTime<Utc>,
}

/// Router serving `/health` and `/health/live`
pub struct HealthService {
    /// Routes ready to be merged into the application router
    pub router: Router,
}

impl HealthService {
    /// Builds the health routes, recording the start time for uptime
    pub fn new() -> Self {
        let state = HealthState {
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/live", get(liveness_check))
            .with_state(state);

        Self { router }
    }
}

impl Default for HealthService {
    fn default() -> Self {
        Self::new()
    }
}

async fn health_check(
    State(state): State<HealthState>,
) -> Result<Json<HealthResponse>, StatusCode> {
    let epoch_ok = pilot_new_year(FIRST_CYCLE_YEAR).is_some();
    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds()
        .max(0) as u64;

    let health_response = HealthResponse {
        status: if epoch_ok { "healthy" } else { "unhealthy" }.to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        epoch_check: if epoch_ok { "ok" } else { "failed" }.to_string(),
        uptime_seconds: uptime,
    };

    if epoch_ok {
        Ok(Json(health_response))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}

async fn liveness_check() -> Json<&'static str> {
    // If this responds, the service is alive
    Json("alive")
}
