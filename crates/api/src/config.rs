use missionhub_core::baseline_config::{BaselineConfig, DEFAULT_MIN_SAMPLE_SIZE, DEFAULT_WINDOW_DAYS};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Baseline model tables plus the pool window and sufficiency threshold.
    pub baseline: BaselineConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `BASELINE_WINDOW_DAYS`     | `30`                       |
    /// | `BASELINE_MIN_SAMPLE_SIZE` | `30`                       |
    ///
    /// The remaining design-model constants keep their built-in defaults.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let window_days: i64 = std::env::var("BASELINE_WINDOW_DAYS")
            .unwrap_or_else(|_| DEFAULT_WINDOW_DAYS.to_string())
            .parse()
            .expect("BASELINE_WINDOW_DAYS must be a valid i64");

        let min_sample_size: usize = std::env::var("BASELINE_MIN_SAMPLE_SIZE")
            .unwrap_or_else(|_| DEFAULT_MIN_SAMPLE_SIZE.to_string())
            .parse()
            .expect("BASELINE_MIN_SAMPLE_SIZE must be a valid usize");

        let baseline = BaselineConfig {
            window_days,
            min_sample_size,
            ..BaselineConfig::default()
        };
        if let Err(e) = baseline.validate() {
            panic!("Invalid baseline configuration: {e}");
        }

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            baseline,
        }
    }
}
