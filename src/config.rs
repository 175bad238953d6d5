// src/config.rs

use dotenvy::dotenv;
use std::env;

/// Bounds on how many options a question may offer. The scale tops out at
/// five (option indices 0..=4).
pub const MIN_QUESTION_OPTIONS: usize = 2;
pub const MAX_QUESTION_OPTIONS: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Sessions idle longer than this are swept.
    pub session_ttl_secs: u64,
    pub frontend_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let session_ttl_secs = env::var("SESSION_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        let frontend_origin =
            env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

        Self {
            port,
            rust_log,
            session_ttl_secs,
            frontend_origin,
        }
    }
}
