//! Runtime configuration.
//!
//! The defaults are insecure on purpose: a hardcoded JWT secret, a database
//! file dropped into the working directory, debug mode on, and a bind on
//! every interface. `/debug/config` serializes the whole struct back to any
//! unauthenticated caller, which is the misconfiguration exhibit.

use serde::Serialize;

/// Hardcoded signing secret. Shipping a secret in source is the point.
pub const DEFAULT_JWT_SECRET: &str = "super_secret_key_dont_share";

/// Database file created in the program directory, world-readable.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://./vulnerable_app.db";

/// Configuration for one process. Serializable so the debug endpoint can
/// disclose it verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub app_name: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub debug_mode: bool,
    pub bind_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "Vulnerable API Demo".to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            debug_mode: true,
            bind_addr: "0.0.0.0:8000".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration, letting the environment override the database
    /// URL and JWT secret. Everything else stays at its insecure default.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        match std::env::var("JWT_SECRET") {
            Ok(secret) => config.jwt_secret = secret,
            Err(_) => tracing::warn!("JWT_SECRET not set; using insecure hardcoded default"),
        }

        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.database_url = url;
        }

        config
    }
}
