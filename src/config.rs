// src/config.rs

use std::env;
use dotenvy::dotenv;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub bind_addr: String,
    pub db_max_connections: u32,

    /// Bootstrap administrator pair, checked before any stored user.
    pub admin_email: String,
    pub admin_password: String,

    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "memory://".to_string(),
            rust_log: "info".to_string(),
            bind_addr: "0.0.0.0:8000".to_string(),
            db_max_connections: 5,
            admin_email: "Admin123".to_string(),
            admin_password: "Admin@123".to_string(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        let database_url = env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set");

        let rust_log = env::var("RUST_LOG").unwrap_or(defaults.rust_log);

        let bind_addr = env::var("BIND_ADDR").unwrap_or(defaults.bind_addr);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.db_max_connections);

        let admin_email = env::var("ADMIN_EMAIL").unwrap_or(defaults.admin_email);
        let admin_password = env::var("ADMIN_PASSWORD").unwrap_or(defaults.admin_password);

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| parse_origins(&v))
            .unwrap_or_default();

        Self {
            database_url,
            rust_log,
            bind_addr,
            db_max_connections,
            admin_email,
            admin_password,
            cors_allowed_origins,
        }
    }

    /// Whether `DATABASE_URL` selects the in-process store.
    pub fn uses_memory_store(&self) -> bool {
        self.database_url.starts_with("memory")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
