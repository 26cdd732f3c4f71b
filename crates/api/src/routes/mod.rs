pub mod health;
pub mod mission;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /missions/{id}/baseline                          get
/// /missions/{id}/baseline/percentiles              rank an attempt (POST)
/// /missions/{id}/baseline/summary                  display summary (POST)
/// /missions/{id}/submissions                       record (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/missions", mission::router())
}
