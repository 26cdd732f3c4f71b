//! PostgreSQL-backed [`BaselineSource`].

use missionhub_core::baseline_policy::BaselineSource;
use missionhub_core::error::CoreError;
use missionhub_core::mission::{MissionDescriptor, PoolScope, Submission};
use missionhub_core::types::{DbId, Timestamp};

use crate::repositories::{MissionRepo, SubmissionRepo};
use crate::DbPool;

/// Reads mission descriptors and submission pools from the database.
///
/// Cheap to clone; holds only the pool handle.
#[derive(Clone)]
pub struct PgBaselineSource {
    pool: DbPool,
}

impl PgBaselineSource {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Storage failures become "data unavailable" so the policy never guesses a
/// baseline from a partial read.
fn unavailable(what: &str) -> impl FnOnce(sqlx::Error) -> CoreError + '_ {
    move |err| {
        tracing::error!(error = %err, what, "Baseline source query failed");
        CoreError::Unavailable(format!("failed to load {what}"))
    }
}

impl BaselineSource for PgBaselineSource {
    async fn fetch_mission(&self, mission_id: DbId) -> Result<Option<MissionDescriptor>, CoreError> {
        let Some(mission) = MissionRepo::find_by_id(&self.pool, mission_id)
            .await
            .map_err(unavailable("mission"))?
        else {
            return Ok(None);
        };

        let scenes = MissionRepo::list_scenes(&self.pool, mission_id)
            .await
            .map_err(unavailable("mission scenes"))?;

        mission.descriptor(&scenes).map(Some)
    }

    async fn fetch_submissions(
        &self,
        scope: &PoolScope,
        since: Timestamp,
    ) -> Result<Vec<Submission>, CoreError> {
        let rows = match scope {
            PoolScope::Mission(mission_id) => {
                SubmissionRepo::list_for_mission_since(&self.pool, *mission_id, since)
                    .await
                    .map_err(unavailable("mission submissions"))?
            }
            PoolScope::Category {
                category,
                difficulty,
            } => SubmissionRepo::list_for_category_since(&self.pool, category, *difficulty, since)
                .await
                .map_err(unavailable("category submissions"))?,
        };

        tracing::debug!(?scope, %since, count = rows.len(), "Loaded submission pool");
        Ok(rows.into_iter().map(Submission::from).collect())
    }
}
