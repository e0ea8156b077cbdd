//! Environment-backed configuration.
//!
//! Every setting has a default. The provider key comes from `UNSPLASH_ACCESS_KEY`
//! (or `NEXT_PUBLIC_UNSPLASH_ACCESS_KEY`); tuning knobs are `IMAGERY_*` overrides.
//! A missing key is not an error: the engine runs in placeholder-only mode.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{
    DEFAULT_BATCH_CONCURRENCY, DEFAULT_CACHE_CAPACITY, DEFAULT_MAX_RETRIES,
    DEFAULT_MIN_CONFIDENCE_SCORE, DEFAULT_REQUEST_TIMEOUT, DEFAULT_RETRY_BACKOFF,
    DEFAULT_UNSPLASH_BASE_URL,
};

/// Engine configuration loaded from environment variables.
///
/// Use [`ImageryConfig::from_env`] to read overrides on top of defaults.
#[derive(Clone)]
pub struct ImageryConfig {
    /// Unsplash access key. `None` disables remote search.
    pub api_key: Option<String>,

    /// Provider API root. Default: `https://api.unsplash.com`.
    pub api_base_url: String,

    /// Per-attempt HTTP timeout. Default: 5s.
    pub request_timeout: Duration,

    /// Sleep between timed-out attempts. Default: 1s.
    pub retry_backoff: Duration,

    /// Extra attempts allowed after a timeout. Default: `2`.
    pub max_retries: u32,

    /// Score a candidate must reach to be selected. Default: `4.0`.
    pub min_confidence_score: f64,

    /// Max in-flight resolutions per batch. Default: `8`.
    pub batch_concurrency: usize,

    /// Max cached selections. `0` disables the cache. Default: `1_000`.
    pub cache_capacity: u64,
}

impl std::fmt::Debug for ImageryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageryConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout", &self.request_timeout)
            .field("retry_backoff", &self.retry_backoff)
            .field("max_retries", &self.max_retries)
            .field("min_confidence_score", &self.min_confidence_score)
            .field("batch_concurrency", &self.batch_concurrency)
            .field("cache_capacity", &self.cache_capacity)
            .finish()
    }
}

impl Default for ImageryConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_UNSPLASH_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            retry_backoff: DEFAULT_RETRY_BACKOFF,
            max_retries: DEFAULT_MAX_RETRIES,
            min_confidence_score: DEFAULT_MIN_CONFIDENCE_SCORE,
            batch_concurrency: DEFAULT_BATCH_CONCURRENCY,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl ImageryConfig {
    /// Key variables, in priority order. First non-empty value wins.
    pub const ENV_API_KEYS: [&'static str; 2] =
        ["UNSPLASH_ACCESS_KEY", "NEXT_PUBLIC_UNSPLASH_ACCESS_KEY"];
    const ENV_BASE_URL: &'static str = "IMAGERY_UNSPLASH_BASE_URL";
    const ENV_REQUEST_TIMEOUT_MS: &'static str = "IMAGERY_REQUEST_TIMEOUT_MS";
    const ENV_RETRY_BACKOFF_MS: &'static str = "IMAGERY_RETRY_BACKOFF_MS";
    const ENV_MAX_RETRIES: &'static str = "IMAGERY_MAX_RETRIES";
    const ENV_MIN_CONFIDENCE_SCORE: &'static str = "IMAGERY_MIN_CONFIDENCE_SCORE";
    const ENV_BATCH_CONCURRENCY: &'static str = "IMAGERY_BATCH_CONCURRENCY";
    const ENV_CACHE_CAPACITY: &'static str = "IMAGERY_CACHE_CAPACITY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_key = Self::resolve_api_key();
        let api_base_url = Self::parse_string_from_env(Self::ENV_BASE_URL, defaults.api_base_url);
        let request_timeout =
            Self::parse_millis_from_env(Self::ENV_REQUEST_TIMEOUT_MS, defaults.request_timeout)?;
        let retry_backoff =
            Self::parse_millis_from_env(Self::ENV_RETRY_BACKOFF_MS, defaults.retry_backoff)?;
        let max_retries = Self::parse_from_env(Self::ENV_MAX_RETRIES, defaults.max_retries)?;
        let min_confidence_score = Self::parse_from_env(
            Self::ENV_MIN_CONFIDENCE_SCORE,
            defaults.min_confidence_score,
        )?;
        let batch_concurrency =
            Self::parse_from_env(Self::ENV_BATCH_CONCURRENCY, defaults.batch_concurrency)?;
        let cache_capacity =
            Self::parse_from_env(Self::ENV_CACHE_CAPACITY, defaults.cache_capacity)?;

        Ok(Self {
            api_key,
            api_base_url,
            request_timeout,
            retry_backoff,
            max_retries,
            min_confidence_score,
            batch_concurrency,
            cache_capacity,
        })
    }

    /// Validates basic invariants. A missing API key is valid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl {
                value: self.api_base_url.clone(),
            });
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroDuration {
                name: "request timeout",
            });
        }

        if self.batch_concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }

        if !self.min_confidence_score.is_finite() || self.min_confidence_score < 0.0 {
            return Err(ConfigError::InvalidThreshold {
                value: self.min_confidence_score,
            });
        }

        Ok(())
    }

    /// Returns `true` when a provider key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sets the API key (builder style, mainly for tests and library callers).
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key = Some(key).filter(|k| !k.trim().is_empty());
        self
    }

    /// Points the client at a different provider root.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Returns the full search endpoint URL.
    pub fn search_url(&self) -> String {
        format!(
            "{}{}",
            self.api_base_url.trim_end_matches('/'),
            crate::constants::UNSPLASH_SEARCH_PATH
        )
    }

    fn resolve_api_key() -> Option<String> {
        Self::ENV_API_KEYS.iter().find_map(|name| {
            env::var(name)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        })
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_millis_from_env(
        var_name: &'static str,
        default: Duration,
    ) -> Result<Duration, ConfigError> {
        let default_ms = default.as_millis() as u64;
        Self::parse_from_env(var_name, default_ms).map(Duration::from_millis)
    }

    fn parse_from_env<T>(var_name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::InvalidValue {
                    name: var_name,
                    value: value.clone(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    }
}
