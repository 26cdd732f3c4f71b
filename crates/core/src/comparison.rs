//! Ranking a learner's attempt against a resolved baseline, and packaging the
//! result for display.
//!
//! This layer exposes classifications (provenance, rate bands) rather than
//! UI copy; wording is left to the client.

use serde::Serialize;

use crate::baseline_policy::{Baseline, ResolvedBaseline};
use crate::mission::SubmissionAttempt;
use crate::percentile::{
    log_normal_percentile, normal_percentile, percentile_from_quartiles, percentile_of_value,
};
use crate::real_baseline::{BaselineScope, SubmissionPool};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Rate at or above which a completion rate or percentile is "good".
pub const GOOD_RATE_THRESHOLD: f64 = 0.8;
/// Rate at or above which a completion rate or percentile is "middling".
pub const MIDDLING_RATE_THRESHOLD: f64 = 0.6;

/// Standard score of the quartiles of a normal distribution, rounded.
const QUARTILE_Z: f64 = 0.67;
/// Design time quartiles as multiples of the designed duration.
const DESIGN_TIME_P25_RATIO: f64 = 0.8;
const DESIGN_TIME_P75_RATIO: f64 = 1.4;

// ---------------------------------------------------------------------------
// Classifications
// ---------------------------------------------------------------------------

/// Where a baseline's numbers came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Design estimate; no peer data.
    ColdStart,
    /// The mission's own recent submissions.
    PeerRecent,
    /// Recent submissions across the mission's category and difficulty.
    SameCategory,
}

/// Visual emphasis for the provenance badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Warning,
    Success,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProvenanceBadge {
    pub provenance: Provenance,
    pub variant: BadgeVariant,
    pub sample_size: usize,
}

impl ProvenanceBadge {
    pub fn for_baseline(baseline: &Baseline) -> Self {
        let (provenance, variant) = match baseline {
            Baseline::Design(_) => (Provenance::ColdStart, BadgeVariant::Warning),
            Baseline::Real(real) => match real.scope {
                BaselineScope::Mission => (Provenance::PeerRecent, BadgeVariant::Success),
                BaselineScope::Category => (Provenance::SameCategory, BadgeVariant::Info),
            },
        };
        Self {
            provenance,
            variant,
            sample_size: baseline.sample_size(),
        }
    }
}

/// Three-level banding for rates and percentiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBand {
    Good,
    Middling,
    Poor,
}

impl RateBand {
    /// Band a rate in `0.0..=1.0`.
    pub fn from_rate(rate: f64) -> Self {
        if rate >= GOOD_RATE_THRESHOLD {
            Self::Good
        } else if rate >= MIDDLING_RATE_THRESHOLD {
            Self::Middling
        } else {
            Self::Poor
        }
    }

    /// Band an integer percentile in `0..=100`.
    pub fn from_percentile(percentile: u8) -> Self {
        Self::from_rate(f64::from(percentile) / 100.0)
    }
}

// ---------------------------------------------------------------------------
// Attempt ranking
// ---------------------------------------------------------------------------

/// A learner's rank against a baseline, per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MyPercentiles {
    pub score_percentile: u8,
    pub time_percentile: u8,
}

impl MyPercentiles {
    /// Reported for incomplete attempts.
    pub const INCOMPLETE: Self = Self {
        score_percentile: 0,
        time_percentile: 0,
    };
}

/// Rank `attempt` against `baseline`, or `None` if the attempt is
/// incomplete.
///
/// Real baselines rank against `pool` when it is available and fall back to
/// inverting the quartiles otherwise. Design baselines use the normal
/// approximation for score and the log-normal one for time.
pub fn rank_attempt(
    baseline: &Baseline,
    pool: Option<&SubmissionPool>,
    attempt: &SubmissionAttempt,
) -> Option<MyPercentiles> {
    if !attempt.completed {
        return None;
    }

    let ranks = match (baseline, pool) {
        (Baseline::Real(_), Some(pool)) => MyPercentiles {
            score_percentile: percentile_of_value(attempt.score, pool.sorted_scores()),
            time_percentile: percentile_of_value(attempt.time_minutes, pool.sorted_times()),
        },
        (Baseline::Real(real), None) => MyPercentiles {
            score_percentile: percentile_from_quartiles(attempt.score, &real.score_percentiles),
            time_percentile: percentile_from_quartiles(attempt.time_minutes, &real.time_percentiles),
        },
        (Baseline::Design(design), _) => MyPercentiles {
            score_percentile: normal_percentile(attempt.score, design.score_mean, design.score_std),
            time_percentile: log_normal_percentile(
                attempt.time_minutes,
                design.time_median,
                design.time_std,
            ),
        },
    };
    Some(ranks)
}

/// Percentiles for an attempt, with incomplete attempts reported as zeros.
pub fn my_percentiles(resolved: &ResolvedBaseline, attempt: &SubmissionAttempt) -> MyPercentiles {
    rank_attempt(&resolved.baseline, resolved.pool.as_ref(), attempt)
        .unwrap_or(MyPercentiles::INCOMPLETE)
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Median and quartiles of one dimension, plus the learner's own rank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionSummary {
    pub median: f64,
    pub p25: f64,
    pub p75: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_percentile: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_percentile_band: Option<RateBand>,
}

impl DistributionSummary {
    fn new(median: f64, p25: f64, p75: f64, my_percentile: Option<u8>) -> Self {
        Self {
            median,
            p25,
            p75,
            my_percentile,
            my_percentile_band: my_percentile.map(RateBand::from_percentile),
        }
    }
}

/// Everything a peer-comparison widget needs for one mission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaselineSummary {
    pub badge: ProvenanceBadge,
    /// True when the numbers are a design estimate rather than measured.
    pub is_estimate: bool,
    pub completion_rate: f64,
    pub completion_band: RateBand,
    pub score: DistributionSummary,
    pub time: DistributionSummary,
    pub baseline: Baseline,
}

/// Package a resolved baseline for display, ranking `attempt` if given.
pub fn summarize(resolved: &ResolvedBaseline, attempt: Option<&SubmissionAttempt>) -> BaselineSummary {
    let baseline = &resolved.baseline;
    let mine = attempt.and_then(|a| rank_attempt(baseline, resolved.pool.as_ref(), a));
    let my_score = mine.map(|m| m.score_percentile);
    let my_time = mine.map(|m| m.time_percentile);

    let (score, time) = match baseline {
        Baseline::Design(design) => {
            let spread = QUARTILE_Z * design.score_std;
            (
                DistributionSummary::new(
                    design.score_mean.round(),
                    (design.score_mean - spread).round(),
                    (design.score_mean + spread).round(),
                    my_score,
                ),
                DistributionSummary::new(
                    design.time_median.round(),
                    (design.time_median * DESIGN_TIME_P25_RATIO).round(),
                    (design.time_median * DESIGN_TIME_P75_RATIO).round(),
                    my_time,
                ),
            )
        }
        Baseline::Real(real) => {
            let s = &real.score_percentiles;
            let t = &real.time_percentiles;
            (
                DistributionSummary::new(s.p50, s.p25, s.p75, my_score),
                DistributionSummary::new(t.p50, t.p25, t.p75, my_time),
            )
        }
    };

    let completion_rate = baseline.completion_rate();
    BaselineSummary {
        badge: ProvenanceBadge::for_baseline(baseline),
        is_estimate: matches!(baseline, Baseline::Design(_)),
        completion_rate,
        completion_band: RateBand::from_rate(completion_rate),
        score,
        time,
        baseline: baseline.clone(),
    }
}
