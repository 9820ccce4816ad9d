// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Server configuration loaded from environment variables.

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on.
    pub port: u16,
    /// SQLite connection URL for plan storage.
    pub database_url: String,
    /// Maximum number of pooled database connections.
    pub db_max_connections: u32,
    /// Directory holding the frontend (index.html and assets).
    pub static_dir: String,
    /// Maximum request body size in KB.
    pub max_body_kb: usize,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Upper bound on grid candidates a single plan may sweep.
    pub max_plan_points: usize,
    /// Allowed CORS origins (comma-separated, or "*" for all).
    pub cors_origins: Vec<String>,
    /// Emit JSON log lines instead of human-readable output.
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            port: env_or("PORT", 8000),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://robot.db".into()),
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 5),
            static_dir: std::env::var("STATIC_DIR")
                .unwrap_or_else(|_| concat!(env!("CARGO_MANIFEST_DIR"), "/static").into()),
            max_body_kb: env_or("MAX_BODY_KB", 1024),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            max_plan_points: env_or("MAX_PLAN_POINTS", 2_000_000),
            cors_origins: parse_origins(
                &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()),
            ),
            log_json: std::env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }

    /// Whether any origin may call the API.
    pub fn cors_permissive(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Parse an environment variable, falling back to `default` when it is unset
/// or malformed.
fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
