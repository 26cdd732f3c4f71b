//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod mission_repo;
pub mod submission_repo;

pub use mission_repo::MissionRepo;
pub use submission_repo::SubmissionRepo;
