//! Liveness and readiness for the baseline service.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when PostgreSQL cannot be reached.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Pool selection settings in effect, so deployments can be checked.
    pub baseline_window_days: i64,
    pub baseline_min_sample_size: usize,
}

/// GET /health. Answers 503 while the submission store is unreachable,
/// since every baseline request would fail with `DATA_UNAVAILABLE`.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_healthy = missionhub_db::health_check(&state.pool).await.is_ok();
    let (status_code, status) = if db_healthy {
        (StatusCode::OK, "ok")
    } else {
        tracing::warn!("Health check found the database unreachable");
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let baseline = &state.config.baseline;
    (
        status_code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            baseline_window_days: baseline.window_days,
            baseline_min_sample_size: baseline.min_sample_size,
        }),
    )
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
