//! Handlers for peer baseline endpoints.
//!
//! Every endpoint resolves the same baseline (mission pool, then category
//! pool, then design estimate) so the numbers shown and the learner's rank
//! always refer to one distribution.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use missionhub_core::baseline_policy::{resolve_baseline, ResolvedBaseline};
use missionhub_core::comparison::{my_percentiles, summarize};
use missionhub_core::mission::{validate_attempt, SubmissionAttempt};
use missionhub_core::types::DbId;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body of the summary endpoint; the attempt is optional.
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub submission: Option<SubmissionAttempt>,
}

async fn resolve(state: &AppState, mission_id: DbId) -> AppResult<ResolvedBaseline> {
    let resolved = resolve_baseline(
        &state.baseline_source,
        mission_id,
        Utc::now(),
        &state.config.baseline,
    )
    .await?;

    tracing::debug!(
        mission_id,
        completion_rate = resolved.baseline.completion_rate(),
        sample_size = resolved.baseline.sample_size(),
        "Resolved mission baseline",
    );
    Ok(resolved)
}

// ---------------------------------------------------------------------------
// GET /missions/{id}/baseline
// ---------------------------------------------------------------------------

/// Return the baseline a mission is compared against.
pub async fn get_baseline(
    State(state): State<AppState>,
    Path(mission_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let resolved = resolve(&state, mission_id).await?;
    Ok(Json(DataResponse {
        data: resolved.baseline,
    }))
}

// ---------------------------------------------------------------------------
// POST /missions/{id}/baseline/percentiles
// ---------------------------------------------------------------------------

/// Rank one attempt against the mission's baseline.
///
/// Incomplete attempts are reported as 0/0 without ranking.
pub async fn get_my_percentiles(
    State(state): State<AppState>,
    Path(mission_id): Path<DbId>,
    AppJson(attempt): AppJson<SubmissionAttempt>,
) -> AppResult<impl IntoResponse> {
    validate_attempt(&attempt)?;

    let resolved = resolve(&state, mission_id).await?;
    let percentiles = my_percentiles(&resolved, &attempt);

    Ok(Json(DataResponse { data: percentiles }))
}

// ---------------------------------------------------------------------------
// POST /missions/{id}/baseline/summary
// ---------------------------------------------------------------------------

/// Baseline packaged for display, with the learner's rank when an attempt
/// is supplied.
pub async fn get_summary(
    State(state): State<AppState>,
    Path(mission_id): Path<DbId>,
    AppJson(body): AppJson<SummaryRequest>,
) -> AppResult<impl IntoResponse> {
    if let Some(attempt) = &body.submission {
        validate_attempt(attempt)?;
    }

    let resolved = resolve(&state, mission_id).await?;
    let summary = summarize(&resolved, body.submission.as_ref());

    Ok(Json(DataResponse { data: summary }))
}
