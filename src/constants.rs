//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary constants from primary ones to avoid drift.
//!
//! # Score Scale
//!
//! Relevance scores are built from four capped components plus uncapped penalizations.
//! The positive ceiling is therefore the sum of the caps ([`MAX_POSITIVE_SCORE`]); the
//! confidence bands and the default selection threshold are expressed on that scale.

use std::time::Duration;

pub const DEFAULT_UNSPLASH_BASE_URL: &str = "https://api.unsplash.com";

/// Search path appended to the configured base URL.
pub const UNSPLASH_SEARCH_PATH: &str = "/search/photos";

/// Number of candidates requested per search.
pub const RESULTS_PER_QUERY: u32 = 8;

pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS);

pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 1_000;
pub const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(DEFAULT_RETRY_BACKOFF_MS);

/// Retries apply to timeouts only.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Remaining-quota level below which every response logs a warning.
pub const RATE_LIMIT_WARN_THRESHOLD: u64 = 10;

pub const KEYWORD_MATCH_CAP: f64 = 8.0;
pub const TAGS_MATCH_CAP: f64 = 7.0;
pub const PRODUCT_PHOTOGRAPHY_CAP: f64 = 6.0;
pub const POPULARITY_MAX: f64 = 3.0;

pub const MAX_POSITIVE_SCORE: f64 =
    KEYWORD_MATCH_CAP + TAGS_MATCH_CAP + PRODUCT_PHOTOGRAPHY_CAP + POPULARITY_MAX;

pub const HIGH_CONFIDENCE_SCORE: f64 = 8.0;
pub const MEDIUM_CONFIDENCE_SCORE: f64 = 4.0;

/// Minimum score a candidate needs before it replaces the placeholder.
pub const DEFAULT_MIN_CONFIDENCE_SCORE: f64 = MEDIUM_CONFIDENCE_SCORE;

pub const DEFAULT_BATCH_CONCURRENCY: usize = 8;

pub const DEFAULT_CACHE_CAPACITY: u64 = 1_000;

/// Hostnames that identify provider-hosted images.
pub const UNSPLASH_IMAGE_HOSTS: [&str; 2] = ["images.unsplash.com", "source.unsplash.com"];
