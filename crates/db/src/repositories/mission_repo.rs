//! Repository for the `missions` and `mission_scenes` tables.

use missionhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::mission::{CreateMission, Mission, MissionScene};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, slug, title, category, difficulty, duration_min, created_at, updated_at";

/// Column list for `mission_scenes` SELECT queries.
const SCENE_COLUMNS: &str = "id, mission_id, position, scene_type";

/// Provides query operations for missions and their scenes.
pub struct MissionRepo;

impl MissionRepo {
    /// Insert a mission and its scenes in one transaction, returning the
    /// created mission row.
    pub async fn create(pool: &PgPool, input: &CreateMission) -> Result<Mission, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO missions (slug, title, category, difficulty, duration_min)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let mission = sqlx::query_as::<_, Mission>(&query)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.category)
            .bind(input.difficulty.as_str())
            .bind(input.duration_min)
            .fetch_one(&mut *tx)
            .await?;

        let scene_types: Vec<&str> = input.scenes.iter().map(|s| s.as_str()).collect();
        sqlx::query(
            "INSERT INTO mission_scenes (mission_id, position, scene_type)
             SELECT $1, (t.ord - 1)::INTEGER, t.scene_type
             FROM UNNEST($2::TEXT[]) WITH ORDINALITY AS t(scene_type, ord)",
        )
        .bind(mission.id)
        .bind(&scene_types)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(mission)
    }

    /// Find a mission by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions WHERE id = $1");
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a mission's scenes in authored order.
    pub async fn list_scenes(
        pool: &PgPool,
        mission_id: DbId,
    ) -> Result<Vec<MissionScene>, sqlx::Error> {
        let query = format!(
            "SELECT {SCENE_COLUMNS} FROM mission_scenes
             WHERE mission_id = $1 ORDER BY position"
        );
        sqlx::query_as::<_, MissionScene>(&query)
            .bind(mission_id)
            .fetch_all(pool)
            .await
    }
}
