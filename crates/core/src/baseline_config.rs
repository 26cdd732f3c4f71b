//! Tunable constants for baseline estimation and selection.
//!
//! The defaults are the heuristic model's reference values. They are not
//! derived from data; override them only as deliberate configuration.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::mission::{Difficulty, SceneType};
use crate::threshold_validation::{validate_non_negative, validate_unit_range};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Minimum pool size for an empirical baseline.
pub const DEFAULT_MIN_SAMPLE_SIZE: usize = 30;

/// Trailing window (days) for submission pools.
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Longest accepted trailing window, roughly a century.
pub const MAX_WINDOW_DAYS: i64 = 36_500;

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

/// Per-scene-type grading weight. A weight of zero excludes the type from
/// complexity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneWeights {
    pub code: f64,
    pub sql: f64,
    pub numeric: f64,
    pub branch: f64,
    pub short_text: f64,
    pub mcq: f64,
    pub info: f64,
}

impl SceneWeights {
    pub fn weight(&self, scene: SceneType) -> f64 {
        match scene {
            SceneType::Code => self.code,
            SceneType::Sql => self.sql,
            SceneType::Numeric => self.numeric,
            SceneType::Branch => self.branch,
            SceneType::ShortText => self.short_text,
            SceneType::Mcq => self.mcq,
            SceneType::Info => self.info,
        }
    }
}

impl Default for SceneWeights {
    fn default() -> Self {
        Self {
            code: 1.2,
            sql: 1.2,
            numeric: 1.0,
            branch: 1.1,
            short_text: 0.8,
            mcq: 0.6,
            info: 0.0,
        }
    }
}

/// One value per difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyTable {
    pub easy: f64,
    pub medium: f64,
    pub hard: f64,
}

impl DifficultyTable {
    pub fn get(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    fn values(&self) -> [f64; 3] {
        [self.easy, self.medium, self.hard]
    }
}

// ---------------------------------------------------------------------------
// BaselineConfig
// ---------------------------------------------------------------------------

/// Every constant used by the design estimator and the selection policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineConfig {
    pub scene_weights: SceneWeights,
    /// Expected score per difficulty, clamped to `[0, 100]` on use.
    pub difficulty_score_means: DifficultyTable,
    pub score_std: f64,
    /// Time standard deviation as a fraction of the designed duration.
    pub time_std_ratio: f64,
    pub base_completion_rate: f64,
    pub difficulty_penalties: DifficultyTable,
    /// Completion-rate penalty per unit of complexity above 1.
    pub complexity_penalty_per_unit: f64,
    pub min_completion_rate: f64,
    pub max_completion_rate: f64,
    /// Pools smaller than this never produce an empirical baseline.
    pub min_sample_size: usize,
    pub window_days: i64,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            scene_weights: SceneWeights::default(),
            difficulty_score_means: DifficultyTable {
                easy: 80.0,
                medium: 72.0,
                hard: 64.0,
            },
            score_std: 12.0,
            time_std_ratio: 0.25,
            base_completion_rate: 0.86,
            difficulty_penalties: DifficultyTable {
                easy: 0.0,
                medium: 0.05,
                hard: 0.12,
            },
            complexity_penalty_per_unit: 0.02,
            min_completion_rate: 0.30,
            max_completion_rate: 0.95,
            min_sample_size: DEFAULT_MIN_SAMPLE_SIZE,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl BaselineConfig {
    /// Reject overrides that would make the model meaningless.
    pub fn validate(&self) -> Result<(), CoreError> {
        for scene in SceneType::ALL {
            validate_non_negative(
                self.scene_weights.weight(scene),
                &format!("scene weight for {scene}"),
            )?;
        }
        for mean in self.difficulty_score_means.values() {
            validate_non_negative(mean, "difficulty score mean")?;
        }
        for penalty in self.difficulty_penalties.values() {
            validate_unit_range(penalty, "difficulty penalty")?;
        }
        validate_non_negative(self.score_std, "score_std")?;
        validate_non_negative(self.time_std_ratio, "time_std_ratio")?;
        validate_non_negative(
            self.complexity_penalty_per_unit,
            "complexity_penalty_per_unit",
        )?;
        validate_unit_range(self.base_completion_rate, "base_completion_rate")?;
        validate_unit_range(self.min_completion_rate, "min_completion_rate")?;
        validate_unit_range(self.max_completion_rate, "max_completion_rate")?;
        if self.min_completion_rate > self.max_completion_rate {
            return Err(CoreError::Validation(format!(
                "min_completion_rate ({}) must not exceed max_completion_rate ({})",
                self.min_completion_rate, self.max_completion_rate
            )));
        }
        if self.min_sample_size == 0 {
            return Err(CoreError::Validation(
                "min_sample_size must be at least 1".into(),
            ));
        }
        if !(1..=MAX_WINDOW_DAYS).contains(&self.window_days) {
            return Err(CoreError::Validation(format!(
                "window_days must be between 1 and {MAX_WINDOW_DAYS}, got {}",
                self.window_days
            )));
        }
        Ok(())
    }
}
