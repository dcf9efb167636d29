//! Engine configuration

use std::time::Duration;

const DEFAULT_MERCHANT_ID: &str = "universo_acai";
const DEFAULT_CACHE_PATH: &str = "flexorder-cache.redb";
/// 15 minutes of merchant record freshness
const DEFAULT_CACHE_TTL_MS: u64 = 15 * 60 * 1000;
/// Opening-status re-evaluation period
const DEFAULT_STATUS_POLL_INTERVAL_MS: u64 = 60_000;

/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | MERCHANT_ID | universo_acai | merchant record to load |
/// | CACHE_PATH | flexorder-cache.redb | durable cache file |
/// | CACHE_TTL_MS | 900000 | merchant cache freshness window |
/// | STATUS_POLL_INTERVAL_MS | 60000 | opening-status poll period |
#[derive(Debug, Clone)]
pub struct Config {
    pub merchant_id: String,
    pub cache_path: String,
    pub cache_ttl_ms: u64,
    pub status_poll_interval_ms: u64,
}

impl Config {
    /// Load from environment variables, keeping defaults for unset ones
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            merchant_id: std::env::var("MERCHANT_ID").unwrap_or(defaults.merchant_id),
            cache_path: std::env::var("CACHE_PATH").unwrap_or(defaults.cache_path),
            cache_ttl_ms: std::env::var("CACHE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl_ms),
            status_poll_interval_ms: std::env::var("STATUS_POLL_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.status_poll_interval_ms),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }

    pub fn status_poll_interval(&self) -> Duration {
        Duration::from_millis(self.status_poll_interval_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            merchant_id: DEFAULT_MERCHANT_ID.to_string(),
            cache_path: DEFAULT_CACHE_PATH.to_string(),
            cache_ttl_ms: DEFAULT_CACHE_TTL_MS,
            status_poll_interval_ms: DEFAULT_STATUS_POLL_INTERVAL_MS,
        }
    }
}
