//! Health endpoint.

use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub time: String,
}

/// GET /health — always 200 with the current RFC3339 timestamp.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthBody> {
    let now = Utc::now();
    tracing::debug!(
        uptime_secs = (now - state.started_at).num_seconds(),
        "health check"
    );
    Json(HealthBody {
        status: "healthy",
        time: now.to_rfc3339(),
    })
}
