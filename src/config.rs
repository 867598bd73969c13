//! Startup configuration: the server's base origin.
//!
//! Resolved once, before any client is built. Precedence:
//! `FILEBOX_API_URL` > `API_BASE_URL` > `http://localhost`.

/// Primary environment variable for the base origin.
pub const API_URL_VAR: &str = "FILEBOX_API_URL";

/// Fallback variable, shared with other tooling that talks to the server.
pub const FALLBACK_API_URL_VAR: &str = "API_BASE_URL";

pub const DEFAULT_API_URL: &str = "http://localhost";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Load `.env` (if present) and resolve from the process environment.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve using an arbitrary variable lookup. Blank values are skipped.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = [API_URL_VAR, FALLBACK_API_URL_VAR]
            .iter()
            .filter_map(|key| lookup(*key))
            .find(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { base_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
