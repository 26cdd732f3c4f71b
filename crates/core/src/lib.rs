//! Peer baseline domain logic.
//!
//! Pure computations for comparing a learner's mission submission with peers:
//! percentile math, the cold-start design estimate, empirical pool
//! aggregation, the selection policy that chooses between them, and the
//! comparison layer that ranks an attempt. No I/O happens here; data enters
//! through the [`baseline_policy::BaselineSource`] trait.

pub mod baseline_config;
pub mod baseline_policy;
pub mod comparison;
pub mod design_baseline;
pub mod error;
pub mod mission;
pub mod percentile;
pub mod real_baseline;
pub mod threshold_validation;
pub mod types;
