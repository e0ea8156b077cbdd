//! Imagery library crate (used by the CLI and integration tests).
//!
//! Picks a catalog image for a product: builds a photography-oriented search
//! query, fetches candidates from Unsplash, scores them for relevance, and
//! returns the best one or a category placeholder.
//!
//! # Public API Surface
//!
//! ## Entry Points
//! - [`ImageSelector`] - [`ImageSelector::get_product_image`] and
//!   [`ImageSelector::get_batch_product_images`]; both always return results
//! - [`ImageryConfig`], [`ConfigError`] - Environment-backed configuration
//!
//! ## Pipeline Stages
//! - [`enhance_product_query`], [`base_search_term`], [`fallback_query`] - Query building
//! - [`ImageSource`], [`UnsplashClient`] - Candidate search
//! - [`score_image`], [`rank_candidates`], [`select_best_image`] - Relevance scoring
//! - [`placeholder_for`] - Placeholder catalog
//!
//! ## Utilities
//! - [`rate_limit_info`], [`format_rate_limit_info`] - Last observed provider quota
//! - [`is_unsplash_url`] - Origin check for stored URLs
//! - Hashing for result-cache keys
//!
//! ## Test/Mock Support
//! [`MockImageSource`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod hashing;
pub mod query;
pub mod scoring;
pub mod selection;
pub mod unsplash;

pub use config::{ConfigError, ImageryConfig};

pub use query::{
    ContentFilter, EnhancedQuery, Orientation, QueryFilters, base_search_term,
    enhance_product_query, fallback_query,
};

pub use scoring::{Confidence, ScoreBreakdown, ScoringResult, rank_candidates, score_image};

pub use selection::{
    DebugInfo, ImageOrigin, ImageSelector, ProductImageResult, ProductRequest, SelectionError,
    is_unsplash_url, placeholder_for, select_best_image,
};

pub use unsplash::{
    CandidateImage, ImageSource, RateLimitState, SourceError, UnsplashClient,
    format_rate_limit_info, rate_limit_info,
};
#[cfg(any(test, feature = "mock"))]
pub use unsplash::{MockBehavior, MockImageSource};

pub use hashing::hash_product;
