//! Process configuration read from the environment (and `.env` when present).

use std::time::Duration;

use url::Url;

use super::errors::ConfigError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
const DEFAULT_SITE_URL: &str = "http://localhost:8080";
const DEFAULT_RENDER_WAIT_MS: u64 = 1500;
const DEFAULT_PENDING_REFRESH_SECS: u64 = 2;
const DEFAULT_STATIC_DIR: &str = "./static";

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    /// Backend API root; endpoint paths are appended to it.
    pub api_base_url: Url,
    /// Public origin of this site, used for canonical links and JSON-LD.
    pub site_url: String,
    /// Upper bound on how long a handler waits for a fetch to settle before
    /// rendering the skeleton instead.
    pub render_wait: Duration,
    pub pending_refresh_secs: u64,
    pub static_dir: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup so tests don't touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_base_url = parse_url(
            "API_BASE_URL",
            get("API_BASE_URL").as_deref().unwrap_or(DEFAULT_API_BASE_URL),
        )?;

        let site_url = get("SITE_URL")
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        parse_url("SITE_URL", &site_url)?;

        let render_wait_ms = parse_u64("RENDER_WAIT_MS", get("RENDER_WAIT_MS"))?
            .unwrap_or(DEFAULT_RENDER_WAIT_MS);
        let pending_refresh_secs = parse_u64("PENDING_REFRESH_SECS", get("PENDING_REFRESH_SECS"))?
            .unwrap_or(DEFAULT_PENDING_REFRESH_SECS);

        Ok(Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            api_base_url,
            site_url,
            render_wait: Duration::from_millis(render_wait_ms),
            pending_refresh_secs,
            static_dir: get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
        })
    }
}

fn parse_url(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    // A base without a trailing slash would have its last segment replaced by `Url::join`.
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized).map_err(|source| ConfigError::InvalidUrl { var, source })
}

fn parse_u64(var: &'static str, raw: Option<String>) -> Result<Option<u64>, ConfigError> {
    raw.map(|value| {
        value
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidNumber { var, value })
    })
    .transpose()
}
