//! Request handlers.
//!
//! Handlers resolve the mission's baseline through the core selection policy
//! and the database-backed source held in [`AppState`](crate::state::AppState),
//! mapping errors via [`AppError`](crate::error::AppError).

pub mod baseline;
pub mod submission;
