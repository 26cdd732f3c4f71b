//! Baseline selection: mission pool, then category pool, then design estimate.
//!
//! The policy is generic over a [`BaselineSource`] so it can be driven by the
//! database adapter in production and by in-memory fixtures in tests.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::baseline_config::BaselineConfig;
use crate::design_baseline::{estimate_design_baseline, DesignBaseline};
use crate::error::CoreError;
use crate::mission::{MissionDescriptor, PoolScope, Submission};
use crate::real_baseline::{BaselineScope, RealBaseline, SubmissionPool};
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Baseline
// ---------------------------------------------------------------------------

/// Reference distribution a submission is compared against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Baseline {
    /// Synthetic estimate from the mission descriptor (cold start).
    Design(DesignBaseline),
    /// Empirical quartiles from a large enough peer pool.
    Real(RealBaseline),
}

impl Baseline {
    pub fn completion_rate(&self) -> f64 {
        match self {
            Self::Design(b) => b.completion_rate,
            Self::Real(b) => b.completion_rate,
        }
    }

    /// Submissions behind the baseline; zero for design estimates.
    pub fn sample_size(&self) -> usize {
        match self {
            Self::Design(_) => 0,
            Self::Real(b) => b.sample_size,
        }
    }
}

// ---------------------------------------------------------------------------
// Data source
// ---------------------------------------------------------------------------

/// Read access to mission metadata and submission pools.
///
/// Implementations must return only submissions created at or after
/// `since`. Transport or storage failures should surface as
/// [`CoreError::Unavailable`].
pub trait BaselineSource: Send + Sync {
    /// Descriptor for `mission_id`, or `None` if no such mission exists.
    fn fetch_mission(
        &self,
        mission_id: DbId,
    ) -> impl Future<Output = Result<Option<MissionDescriptor>, CoreError>> + Send;

    /// All submissions in `scope` created at or after `since`.
    fn fetch_submissions(
        &self,
        scope: &PoolScope,
        since: Timestamp,
    ) -> impl Future<Output = Result<Vec<Submission>, CoreError>> + Send;
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Outcome of the selection policy for one mission.
#[derive(Debug, Clone)]
pub struct ResolvedBaseline {
    pub mission: MissionDescriptor,
    pub baseline: Baseline,
    /// Sorted samples behind a real baseline; `None` for design estimates.
    pub pool: Option<SubmissionPool>,
}

/// Start of the trailing submission window ending at `now`.
///
/// A window that cannot be represented as a timestamp is a validation error.
pub fn window_start(now: Timestamp, window_days: i64) -> Result<Timestamp, CoreError> {
    chrono::Duration::try_days(window_days)
        .and_then(|window| now.checked_sub_signed(window))
        .ok_or_else(|| {
            CoreError::Validation(format!("window of {window_days} days is out of range"))
        })
}

/// Select the baseline for `mission_id`.
///
/// 1. The mission's own submissions within the window, if there are at
///    least `min_sample_size` of them.
/// 2. Otherwise every submission for missions sharing the category and
///    difficulty, under the same threshold.
/// 3. Otherwise the design estimate.
///
/// An unknown mission is [`CoreError::NotFound`]; it never falls back to a
/// design estimate.
pub async fn resolve_baseline<S: BaselineSource>(
    source: &S,
    mission_id: DbId,
    now: Timestamp,
    config: &BaselineConfig,
) -> Result<ResolvedBaseline, CoreError> {
    let mission = source
        .fetch_mission(mission_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Mission",
            id: mission_id,
        })?;

    let since = window_start(now, config.window_days)?;

    let own = source
        .fetch_submissions(&PoolScope::Mission(mission_id), since)
        .await?;
    if own.len() >= config.min_sample_size {
        return Ok(real(mission, BaselineScope::Mission, &own));
    }

    let category_scope = PoolScope::Category {
        category: mission.category.clone(),
        difficulty: mission.difficulty,
    };
    let peers = source.fetch_submissions(&category_scope, since).await?;
    if peers.len() >= config.min_sample_size {
        return Ok(real(mission, BaselineScope::Category, &peers));
    }

    let design = estimate_design_baseline(&mission, config);
    Ok(ResolvedBaseline {
        mission,
        baseline: Baseline::Design(design),
        pool: None,
    })
}

fn real(mission: MissionDescriptor, scope: BaselineScope, submissions: &[Submission]) -> ResolvedBaseline {
    let pool = SubmissionPool::from_submissions(submissions);
    ResolvedBaseline {
        mission,
        baseline: Baseline::Real(pool.aggregate(scope)),
        pool: Some(pool),
    }
}
