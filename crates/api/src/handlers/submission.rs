//! Handler for recording mission submissions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use missionhub_core::error::CoreError;
use missionhub_core::mission::{validate_attempt, SubmissionAttempt};
use missionhub_core::types::DbId;
use missionhub_db::models::submission::CreateSubmission;
use missionhub_db::repositories::{MissionRepo, SubmissionRepo};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /missions/{id}/submissions
// ---------------------------------------------------------------------------

/// Store one submission in the mission's pool.
pub async fn record_submission(
    State(state): State<AppState>,
    Path(mission_id): Path<DbId>,
    AppJson(body): AppJson<CreateSubmission>,
) -> AppResult<impl IntoResponse> {
    validate_attempt(&SubmissionAttempt {
        score: body.score,
        time_minutes: body.time_minutes,
        completed: body.completed,
    })?;

    MissionRepo::find_by_id(&state.pool, mission_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Mission",
            id: mission_id,
        })?;

    let submission = SubmissionRepo::create(&state.pool, mission_id, &body).await?;

    tracing::info!(
        submission_id = submission.id,
        mission_id,
        completed = submission.completed,
        "Submission recorded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: submission })))
}
