//! Cold-start baseline synthesized from a mission's design parameters.
//!
//! Used when no real submission pool is large enough. The model is a fixed
//! heuristic over difficulty, designed duration and scene composition; it
//! never reads historical data and is fully deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::baseline_config::BaselineConfig;
use crate::mission::{MissionDescriptor, SceneType};

/// Synthetic score/time distribution for a mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignBaseline {
    /// Mean graded-scene weight times graded-scene count. Zero when the
    /// mission has no graded scenes.
    pub complexity: f64,
    pub score_mean: f64,
    pub score_std: f64,
    pub time_median: f64,
    pub time_std: f64,
    pub completion_rate: f64,
    /// Share of attempts expected to fail at each graded scene type. Sums to
    /// `1 - completion_rate` when any graded scene exists.
    pub failure_type_distribution: BTreeMap<SceneType, f64>,
}

/// Estimate a baseline for `mission` from its descriptor alone.
pub fn estimate_design_baseline(
    mission: &MissionDescriptor,
    config: &BaselineConfig,
) -> DesignBaseline {
    let weights = &config.scene_weights;
    let graded: Vec<(SceneType, f64)> = mission
        .scenes
        .iter()
        .map(|&scene| (scene, weights.weight(scene)))
        .filter(|&(_, w)| w > 0.0)
        .collect();

    let total_weight: f64 = graded.iter().map(|&(_, w)| w).sum();
    let complexity = if graded.is_empty() {
        0.0
    } else {
        let avg_weight = total_weight / graded.len() as f64;
        avg_weight * graded.len() as f64
    };

    let score_mean = config
        .difficulty_score_means
        .get(mission.difficulty)
        .clamp(0.0, 100.0);

    let difficulty_penalty = config.difficulty_penalties.get(mission.difficulty);
    let complexity_penalty = config.complexity_penalty_per_unit * (complexity - 1.0);
    let completion_rate = (config.base_completion_rate - difficulty_penalty - complexity_penalty)
        .clamp(config.min_completion_rate, config.max_completion_rate);

    let failure_rate = 1.0 - completion_rate;
    let mut failure_type_distribution = BTreeMap::new();
    for &(scene, weight) in &graded {
        *failure_type_distribution.entry(scene).or_insert(0.0) +=
            weight / total_weight * failure_rate;
    }

    DesignBaseline {
        complexity,
        score_mean,
        score_std: config.score_std,
        time_median: mission.duration_min,
        time_std: config.time_std_ratio * mission.duration_min,
        completion_rate,
        failure_type_distribution,
    }
}
