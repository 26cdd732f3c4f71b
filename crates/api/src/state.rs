use std::sync::Arc;

use missionhub_db::PgBaselineSource;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: missionhub_db::DbPool,
    /// Server configuration, including baseline model overrides.
    pub config: Arc<ServerConfig>,
    /// Mission and submission reader used by the baseline policy.
    pub baseline_source: PgBaselineSource,
}

impl AppState {
    pub fn new(pool: missionhub_db::DbPool, config: ServerConfig) -> Self {
        Self {
            baseline_source: PgBaselineSource::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
