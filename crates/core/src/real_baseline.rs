//! Empirical baseline aggregated from a submission pool.
//!
//! The caller supplies an already scoped and time-windowed pool; nothing
//! here filters by mission, category or date.

use serde::{Deserialize, Serialize};

use crate::mission::Submission;
use crate::percentile::Quartiles;

/// Granularity of the pool a real baseline was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselineScope {
    Mission,
    Category,
}

impl BaselineScope {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mission => "mission",
            Self::Category => "category",
        }
    }
}

/// Empirical quartiles and completion rate of a peer pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealBaseline {
    pub scope: BaselineScope,
    /// Every submission in the pool, completed or not.
    pub sample_size: usize,
    pub completion_rate: f64,
    pub score_percentiles: Quartiles,
    pub time_percentiles: Quartiles,
}

// ---------------------------------------------------------------------------
// Submission pool
// ---------------------------------------------------------------------------

/// Sorted score and time samples of a pool, kept so individual attempts can
/// be ranked against the full sample rather than its quartiles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionPool {
    total: usize,
    /// Ascending scores of completed submissions.
    scores: Vec<f64>,
    /// Ascending completion times of completed submissions.
    times: Vec<f64>,
}

impl SubmissionPool {
    pub fn from_submissions(submissions: &[Submission]) -> Self {
        let completed = || submissions.iter().filter(|s| s.completed);

        let mut scores: Vec<f64> = completed().map(|s| s.score).collect();
        let mut times: Vec<f64> = completed().map(|s| s.time_minutes).collect();
        scores.sort_by(f64::total_cmp);
        times.sort_by(f64::total_cmp);

        Self {
            total: submissions.len(),
            scores,
            times,
        }
    }

    /// Number of submissions in the pool, including incomplete ones.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn completed_count(&self) -> usize {
        self.scores.len()
    }

    pub fn sorted_scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn sorted_times(&self) -> &[f64] {
        &self.times
    }

    /// Completed share of the pool; zero for an empty pool.
    pub fn completion_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed_count() as f64 / self.total as f64
    }

    /// Summarize the pool as a real baseline.
    ///
    /// Performs no sufficiency check; the selection policy only calls this
    /// for pools at or above the configured minimum size.
    pub fn aggregate(&self, scope: BaselineScope) -> RealBaseline {
        RealBaseline {
            scope,
            sample_size: self.total,
            completion_rate: self.completion_rate(),
            score_percentiles: Quartiles::from_sorted(&self.scores),
            time_percentiles: Quartiles::from_sorted(&self.times),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn submission(score: f64, time_minutes: f64, completed: bool) -> Submission {
        Submission {
            mission_id: 7,
            score,
            time_minutes,
            completed,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn incomplete_submissions_only_count_toward_completion_rate() {
        let pool = SubmissionPool::from_submissions(&[
            submission(90.0, 10.0, true),
            submission(70.0, 20.0, true),
            submission(5.0, 100.0, false),
            submission(80.0, 15.0, true),
        ]);

        assert_eq!(pool.len(), 4);
        assert_eq!(pool.completed_count(), 3);
        assert_eq!(pool.sorted_scores(), &[70.0, 80.0, 90.0]);
        assert_eq!(pool.sorted_times(), &[10.0, 15.0, 20.0]);
        assert!((pool.completion_rate() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn aggregate_computes_rounded_quartiles() {
        let pool = SubmissionPool::from_submissions(&[
            submission(10.0, 12.0, true),
            submission(20.0, 9.0, true),
            submission(30.0, 30.0, true),
            submission(40.0, 18.0, true),
        ]);
        let baseline = pool.aggregate(BaselineScope::Mission);

        assert_eq!(baseline.scope, BaselineScope::Mission);
        assert_eq!(baseline.sample_size, 4);
        assert_eq!(baseline.completion_rate, 1.0);
        // p25 index 0.75: 10*0.25 + 20*0.75 = 17.5 -> 18
        assert_eq!(baseline.score_percentiles.p25, 18.0);
        assert_eq!(baseline.score_percentiles.p50, 25.0);
        // p75 index 2.25: 30*0.75 + 40*0.25 = 32.5 -> 33
        assert_eq!(baseline.score_percentiles.p75, 33.0);
        // times sorted: 9, 12, 18, 30
        assert_eq!(baseline.time_percentiles.p50, 15.0);
    }

    #[test]
    fn pool_without_completions_has_zero_quartiles() {
        let pool = SubmissionPool::from_submissions(&[
            submission(40.0, 50.0, false),
            submission(20.0, 60.0, false),
        ]);
        let baseline = pool.aggregate(BaselineScope::Category);

        assert_eq!(baseline.sample_size, 2);
        assert_eq!(baseline.completion_rate, 0.0);
        assert_eq!(baseline.score_percentiles.p50, 0.0);
        assert_eq!(baseline.time_percentiles.p75, 0.0);
    }

    #[test]
    fn empty_pool_does_not_divide_by_zero() {
        let pool = SubmissionPool::from_submissions(&[]);
        assert!(pool.is_empty());
        assert_eq!(pool.completion_rate(), 0.0);
    }
}
