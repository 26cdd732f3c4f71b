//! Route definitions for mission baselines and submissions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{baseline, submission};
use crate::state::AppState;

/// Mission routes mounted at `/missions`.
///
/// ```text
/// GET  /{id}/baseline                 -> get_baseline
/// POST /{id}/baseline/percentiles     -> get_my_percentiles
/// POST /{id}/baseline/summary         -> get_summary
/// POST /{id}/submissions              -> record_submission
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/baseline", get(baseline::get_baseline))
        .route(
            "/{id}/baseline/percentiles",
            post(baseline::get_my_percentiles),
        )
        .route("/{id}/baseline/summary", post(baseline::get_summary))
        .route("/{id}/submissions", post(submission::record_submission))
}
