//! Mission and submission domain types.
//!
//! A mission is a hands-on exercise made of ordered scenes; a submission is a
//! single learner attempt at a mission. Both are read-only inputs to the
//! baseline computations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Designer-assigned difficulty of a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Text form used for database storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EASY" => Ok(Self::Easy),
            "MEDIUM" => Ok(Self::Medium),
            "HARD" => Ok(Self::Hard),
            other => Err(CoreError::Validation(format!(
                "Unknown difficulty '{other}'. Must be one of: EASY, MEDIUM, HARD"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Scene type
// ---------------------------------------------------------------------------

/// Content unit kind. Every type except `Info` is graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SceneType {
    Code,
    Sql,
    Numeric,
    Branch,
    ShortText,
    Mcq,
    Info,
}

impl SceneType {
    pub const ALL: [SceneType; 7] = [
        Self::Code,
        Self::Sql,
        Self::Numeric,
        Self::Branch,
        Self::ShortText,
        Self::Mcq,
        Self::Info,
    ];

    /// Text form used for database storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Code => "CODE",
            Self::Sql => "SQL",
            Self::Numeric => "NUMERIC",
            Self::Branch => "BRANCH",
            Self::ShortText => "SHORT_TEXT",
            Self::Mcq => "MCQ",
            Self::Info => "INFO",
        }
    }
}

impl fmt::Display for SceneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SceneType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown scene type '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Mission descriptor
// ---------------------------------------------------------------------------

/// Static mission metadata consumed by the design baseline estimator and by
/// the category-level pool lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionDescriptor {
    pub id: DbId,
    pub category: String,
    pub difficulty: Difficulty,
    /// Designer-estimated completion time in minutes.
    pub duration_min: f64,
    /// Scene types in authored order.
    pub scenes: Vec<SceneType>,
}

// ---------------------------------------------------------------------------
// Submissions
// ---------------------------------------------------------------------------

/// A persisted learner attempt, as read from the submission pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub mission_id: DbId,
    /// Outcome on a 0-100 scale.
    pub score: f64,
    pub time_minutes: f64,
    pub completed: bool,
    pub created_at: Timestamp,
}

/// A learner's own attempt, supplied by a client for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubmissionAttempt {
    pub score: f64,
    pub time_minutes: f64,
    pub completed: bool,
}

/// Validate the numeric fields of an attempt before it is stored.
pub fn validate_attempt(attempt: &SubmissionAttempt) -> Result<(), CoreError> {
    if !attempt.score.is_finite() || !(0.0..=100.0).contains(&attempt.score) {
        return Err(CoreError::Validation(format!(
            "score must be between 0 and 100, got {}",
            attempt.score
        )));
    }
    if !attempt.time_minutes.is_finite() || attempt.time_minutes < 0.0 {
        return Err(CoreError::Validation(format!(
            "time_minutes must be non-negative, got {}",
            attempt.time_minutes
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Pool scope
// ---------------------------------------------------------------------------

/// Which submissions make up a pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolScope {
    /// Submissions for a single mission.
    Mission(DbId),
    /// Submissions across every mission sharing a category and difficulty.
    Category {
        category: String,
        difficulty: Difficulty,
    },
}
