//! Repository for the `mission_submissions` table.
//!
//! Pool queries take an explicit `since` bound so the trailing window is
//! decided by the caller, not by the database clock.

use missionhub_core::mission::Difficulty;
use missionhub_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::submission::{CreateSubmission, MissionSubmission};

/// Column list for `mission_submissions` SELECT queries.
const COLUMNS: &str = "id, mission_id, learner_id, score, time_minutes, completed, created_at";

/// Provides insert and pool queries for mission submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Record a submission for `mission_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        mission_id: DbId,
        input: &CreateSubmission,
    ) -> Result<MissionSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO mission_submissions
                (mission_id, learner_id, score, time_minutes, completed, created_at)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MissionSubmission>(&query)
            .bind(mission_id)
            .bind(&input.learner_id)
            .bind(input.score)
            .bind(input.time_minutes)
            .bind(input.completed)
            .bind(input.created_at)
            .fetch_one(pool)
            .await
    }

    /// All submissions for one mission created at or after `since`, newest
    /// first.
    pub async fn list_for_mission_since(
        pool: &PgPool,
        mission_id: DbId,
        since: Timestamp,
    ) -> Result<Vec<MissionSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM mission_submissions
             WHERE mission_id = $1 AND created_at >= $2
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, MissionSubmission>(&query)
            .bind(mission_id)
            .bind(since)
            .fetch_all(pool)
            .await
    }

    /// All submissions for missions in `category` at `difficulty` created at
    /// or after `since`, newest first.
    pub async fn list_for_category_since(
        pool: &PgPool,
        category: &str,
        difficulty: Difficulty,
        since: Timestamp,
    ) -> Result<Vec<MissionSubmission>, sqlx::Error> {
        sqlx::query_as::<_, MissionSubmission>(
            "SELECT s.id, s.mission_id, s.learner_id, s.score, s.time_minutes,
                    s.completed, s.created_at
             FROM mission_submissions s
             JOIN missions m ON m.id = s.mission_id
             WHERE m.category = $1 AND m.difficulty = $2 AND s.created_at >= $3
             ORDER BY s.created_at DESC",
        )
        .bind(category)
        .bind(difficulty.as_str())
        .bind(since)
        .fetch_all(pool)
        .await
    }
}
