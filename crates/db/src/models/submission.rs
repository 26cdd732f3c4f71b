//! Mission submission entity model and DTOs.

use missionhub_core::mission::Submission;
use missionhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A learner attempt from the `mission_submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MissionSubmission {
    pub id: DbId,
    pub mission_id: DbId,
    pub learner_id: Option<String>,
    pub score: f64,
    pub time_minutes: f64,
    pub completed: bool,
    pub created_at: Timestamp,
}

impl From<MissionSubmission> for Submission {
    fn from(row: MissionSubmission) -> Self {
        Submission {
            mission_id: row.mission_id,
            score: row.score,
            time_minutes: row.time_minutes,
            completed: row.completed,
            created_at: row.created_at,
        }
    }
}

/// DTO for recording a submission.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubmission {
    pub learner_id: Option<String>,
    pub score: f64,
    pub time_minutes: f64,
    pub completed: bool,
    /// Defaults to `NOW()` when omitted.
    pub created_at: Option<Timestamp>,
}
