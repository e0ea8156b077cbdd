//! Process-wide, advisory rate-limit tracking.
//!
//! The most recent response overwrites the state. Nothing reads it to gate requests;
//! it exists for warnings and monitoring.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use reqwest::header::HeaderMap;
use tracing::warn;

use crate::constants::RATE_LIMIT_WARN_THRESHOLD;

pub const HEADER_LIMIT: &str = "x-ratelimit-limit";
pub const HEADER_REMAINING: &str = "x-ratelimit-remaining";
pub const HEADER_RESET: &str = "x-ratelimit-reset";

/// Quota snapshot from the provider's `X-Ratelimit-*` headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitState {
    pub limit: u64,
    pub remaining: u64,
    pub reset_epoch: i64,
}

impl RateLimitState {
    /// Assumed quota before any response is seen (unauthenticated hourly limit).
    pub const INITIAL: RateLimitState = RateLimitState {
        limit: 50,
        remaining: 50,
        reset_epoch: 0,
    };

    /// Parses all three headers. Returns `None` if any is missing or malformed.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        fn header<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
            headers.get(name)?.to_str().ok()?.trim().parse().ok()
        }

        Some(Self {
            limit: header(headers, HEADER_LIMIT)?,
            remaining: header(headers, HEADER_REMAINING)?,
            reset_epoch: header(headers, HEADER_RESET)?,
        })
    }

    /// Returns `true` when the remaining quota is below the warning threshold.
    pub fn is_low(&self) -> bool {
        self.remaining < RATE_LIMIT_WARN_THRESHOLD
    }

    /// Remaining quota as a rounded percentage of the limit (`0` when the limit is `0`).
    pub fn remaining_percent(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        ((self.remaining as f64 / self.limit as f64) * 100.0).round() as u64
    }

    /// Reset time, if the epoch is a valid timestamp.
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.reset_epoch, 0)
    }
}

impl Default for RateLimitState {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl std::fmt::Display for RateLimitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} ({}%) remaining",
            self.remaining,
            self.limit,
            self.remaining_percent()
        )
    }
}

static RATE_LIMIT: LazyLock<RwLock<RateLimitState>> =
    LazyLock::new(|| RwLock::new(RateLimitState::INITIAL));

/// Returns a copy of the latest known rate-limit state.
pub fn rate_limit_info() -> RateLimitState {
    *RATE_LIMIT.read()
}

/// Formats the latest state as `"{remaining}/{limit} ({pct}%) remaining"`.
pub fn format_rate_limit_info() -> String {
    rate_limit_info().to_string()
}

/// Overwrites the shared state and warns when quota is running low.
pub fn record_rate_limit(state: RateLimitState) {
    *RATE_LIMIT.write() = state;

    if state.is_low() {
        warn!(
            remaining = state.remaining,
            limit = state.limit,
            reset_at = ?state.reset_at(),
            "Unsplash API rate limit running low"
        );
    }
}

/// Records the state carried by `headers`, if all rate-limit headers are present.
pub(crate) fn record_from_headers(headers: &HeaderMap) -> Option<RateLimitState> {
    let state = RateLimitState::from_headers(headers)?;
    record_rate_limit(state);
    Some(state)
}

/// Restores the initial state. Test-only.
#[cfg(any(test, feature = "mock"))]
pub fn reset_rate_limit() {
    *RATE_LIMIT.write() = RateLimitState::INITIAL;
}
