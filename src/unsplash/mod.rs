//! Unsplash image source.
//!
//! [`ImageSource`] is the seam between selection and the network. [`UnsplashClient`]
//! implements it over HTTP; `MockImageSource` (behind `cfg(any(test, feature = "mock"))`)
//! serves scripted results.
//!
//! # Failure Model
//!
//! `search` returns `Ok(vec![])` for soft failures (no key, `401`, `429`, zero results)
//! and `Err` only for failures that are not the caller's configuration: other non-2xx
//! statuses, transport and decode errors, and timeouts that exhausted their retries.
//! [`UnsplashClient::fetch_candidates`] collapses both into a plain list.

pub mod client;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod model;
pub mod rate_limit;


use std::future::Future;

pub use client::UnsplashClient;
pub use error::{SourceError, SourceResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockBehavior, MockImageSource};
pub use model::{CandidateImage, ImageUrls, Photographer, RawPhoto, SearchResponse};
pub use rate_limit::{
    RateLimitState, format_rate_limit_info, rate_limit_info, record_rate_limit,
};

/// Provider of candidate images for a product.
pub trait ImageSource: Send + Sync {
    /// Searches for candidates matching `product_name` within `category`.
    fn search(
        &self,
        product_name: &str,
        category: &str,
    ) -> impl Future<Output = SourceResult<Vec<CandidateImage>>> + Send;
}
