use std::path::PathBuf;

use ayiti_core::upload::DEFAULT_MAX_UPLOAD_BYTES;

use crate::auth::jwt::JwtConfig;

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
    /// Root directory for uploaded photos, served at `/uploads`.
    pub upload_dir: PathBuf,
    /// Largest accepted photo in bytes.
    pub max_upload_bytes: usize,
    /// Mount `/api/v1/dev/*` routes. Never enable in production.
    pub expose_dev_routes: bool,
    /// Attempts made to reach the database at startup.
    pub db_connect_attempts: u32,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `UPLOAD_DIR`           | `uploads`                  |
    /// | `MAX_UPLOAD_BYTES`     | `10485760` (10 MiB)        |
    /// | `EXPOSE_DEV_ROUTES`    | `false`                    |
    /// | `DB_CONNECT_ATTEMPTS`  | `5`                        |
    ///
    /// # Panics
    ///
    /// Panics on unparsable values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upload_dir = PathBuf::from(
            std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into()),
        );

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .map(|v| v.parse().expect("MAX_UPLOAD_BYTES must be a valid usize"))
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        let expose_dev_routes = std::env::var("EXPOSE_DEV_ROUTES")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let db_connect_attempts: u32 = std::env::var("DB_CONNECT_ATTEMPTS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("DB_CONNECT_ATTEMPTS must be a valid u32");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            upload_dir,
            max_upload_bytes,
            expose_dev_routes,
            db_connect_attempts,
            jwt,
        }
    }
}

/// `1`, `true`, `yes` and `on` (any case) enable a flag.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
