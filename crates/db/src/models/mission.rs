//! Mission entity models and DTOs.

use missionhub_core::error::CoreError;
use missionhub_core::mission::{Difficulty, MissionDescriptor, SceneType};
use missionhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A mission row from the `missions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mission {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub category: String,
    /// One of `EASY`, `MEDIUM`, `HARD`.
    pub difficulty: String,
    pub duration_min: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A scene row from the `mission_scenes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MissionScene {
    pub id: DbId,
    pub mission_id: DbId,
    pub position: i32,
    pub scene_type: String,
}

impl Mission {
    /// Build the core descriptor from this row and its ordered scenes.
    ///
    /// Stored text that does not parse is reported as an internal error:
    /// the table constraints should make it impossible.
    pub fn descriptor(&self, scenes: &[MissionScene]) -> Result<MissionDescriptor, CoreError> {
        let difficulty: Difficulty = self.difficulty.parse().map_err(|e| {
            CoreError::Internal(format!("mission {} has corrupt difficulty: {e}", self.id))
        })?;
        let scenes = scenes
            .iter()
            .map(|s| {
                s.scene_type.parse::<SceneType>().map_err(|e| {
                    CoreError::Internal(format!("mission scene {} is corrupt: {e}", s.id))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MissionDescriptor {
            id: self.id,
            category: self.category.clone(),
            difficulty,
            duration_min: f64::from(self.duration_min),
            scenes,
        })
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating a mission together with its scenes.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMission {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub duration_min: i32,
    /// Scene types in authored order; positions are assigned from 0.
    pub scenes: Vec<SceneType>,
}
