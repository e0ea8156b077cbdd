use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use reqwest::Client as HttpClient;
use reqwest::header::AUTHORIZATION;
use reqwest::{Response, StatusCode};
use tracing::{debug, error, instrument, warn};

use super::ImageSource;
use super::error::{SourceError, SourceResult};
use super::model::{CandidateImage, SearchResponse};
use super::rate_limit::{RateLimitState, record_from_headers};
use crate::config::ImageryConfig;
use crate::constants::RESULTS_PER_QUERY;
use crate::query::{EnhancedQuery, enhance_product_query};

const ACCEPT_VERSION_HEADER: &str = "Accept-Version";
const ACCEPT_VERSION: &str = "v1";
const ORDER_BY: &str = "relevant";
const RATE_LIMIT_QUERY: &str = "product";

/// Unsplash photo-search client.
///
/// Never blocks on the shared rate-limit state; it only records it.
pub struct UnsplashClient {
    /// `None` when the HTTP client could not be built.
    http: Option<HttpClient>,
    api_key: Option<String>,
    search_url: String,
    request_timeout: Duration,
    retry_backoff: Duration,
    max_retries: u32,
    missing_key_warned: AtomicBool,
}

impl std::fmt::Debug for UnsplashClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnsplashClient")
            .field("enabled", &self.is_enabled())
            .field("search_url", &self.search_url)
            .field("request_timeout", &self.request_timeout)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl UnsplashClient {
    /// Creates a client from configuration. A missing API key yields a disabled client.
    pub fn new(config: &ImageryConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(config.request_timeout)
            .build();
        Self::with_http(config, http)
    }

    /// Creates a client around the result of building the HTTP client.
    ///
    /// A build error is logged and leaves the client disabled; searches then fail
    /// with [`SourceError::Unavailable`] instead of running without a timeout.
    pub(crate) fn with_http(config: &ImageryConfig, http: reqwest::Result<HttpClient>) -> Self {
        let http = match http {
            Ok(http) => Some(http),
            Err(err) => {
                error!(error = %err, "Failed to build Unsplash HTTP client");
                None
            }
        };

        Self {
            http,
            api_key: config.api_key.clone(),
            search_url: config.search_url(),
            request_timeout: config.request_timeout,
            retry_backoff: config.retry_backoff,
            max_retries: config.max_retries,
            missing_key_warned: AtomicBool::new(false),
        }
    }

    /// Returns `true` when an API key is configured and the HTTP client was built.
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some() && self.http.is_some()
    }

    /// Returns the search endpoint URL.
    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// Returns the configured retry budget for timeouts.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Fetches candidates, degrading every failure to an empty list.
    pub async fn fetch_candidates(&self, product_name: &str, category: &str) -> Vec<CandidateImage> {
        match self.search(product_name, category).await {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!(product = %product_name, error = %err, "Unsplash fetch failed");
                Vec::new()
            }
        }
    }

    /// Searches with an explicit timeout-retry budget.
    ///
    /// Only [`SourceError::Timeout`] is retried, after a fixed backoff. `401` and `429`
    /// resolve to an empty list immediately.
    #[instrument(skip(self), fields(search_url = %self.search_url))]
    pub async fn search_with_retries(
        &self,
        product_name: &str,
        category: &str,
        max_retries: u32,
    ) -> SourceResult<Vec<CandidateImage>> {
        let Some(api_key) = self.api_key.as_deref() else {
            self.warn_missing_key();
            return Ok(Vec::new());
        };

        let http = self.http()?;
        let query = enhance_product_query(product_name, category);
        let mut retries_left = max_retries;

        loop {
            match self.search_once(http, api_key, &query, product_name).await {
                Err(err) if err.is_retryable() && retries_left > 0 => {
                    warn!(
                        product = %product_name,
                        retries_left,
                        error = %err,
                        "Unsplash request timed out, retrying"
                    );
                    tokio::time::sleep(self.retry_backoff).await;
                    retries_left -= 1;
                }
                other => return other,
            }
        }
    }

    /// Sends one minimal search and returns the rate limit its response reported.
    ///
    /// Yields `Ok(None)` without a request when no key is configured, and when the
    /// response lacks a complete set of rate-limit headers. The shared state is
    /// updated like any other search.
    #[instrument(skip(self), fields(search_url = %self.search_url))]
    pub async fn refresh_rate_limit(&self) -> SourceResult<Option<RateLimitState>> {
        let Some(api_key) = self.api_key.as_deref() else {
            self.warn_missing_key();
            return Ok(None);
        };
        let http = self.http()?;

        let timeout_ms = self.request_timeout.as_millis() as u64;
        let params = [("query", RATE_LIMIT_QUERY), ("per_page", "1")];
        let response = self.send(http, api_key, &params, timeout_ms).await?;
        let state = record_from_headers(response.headers());

        match response.status() {
            status if status.is_success() || status == StatusCode::TOO_MANY_REQUESTS => {
                if state.is_none() {
                    warn!("Unsplash response carried no rate-limit headers");
                }
                Ok(state)
            }
            status => Err(status_error(status)),
        }
    }

    fn http(&self) -> SourceResult<&HttpClient> {
        self.http
            .as_ref()
            .ok_or_else(|| SourceError::Unavailable("HTTP client could not be built".to_string()))
    }

    async fn send(
        &self,
        http: &HttpClient,
        api_key: &str,
        params: &[(&str, &str)],
        timeout_ms: u64,
    ) -> SourceResult<Response> {
        http.get(&self.search_url)
            .query(params)
            .header(AUTHORIZATION, format!("Client-ID {api_key}"))
            .header(ACCEPT_VERSION_HEADER, ACCEPT_VERSION)
            .send()
            .await
            .map_err(|e| SourceError::from_reqwest(e, timeout_ms))
    }

    async fn search_once(
        &self,
        http: &HttpClient,
        api_key: &str,
        query: &EnhancedQuery,
        product_name: &str,
    ) -> SourceResult<Vec<CandidateImage>> {
        let timeout_ms = self.request_timeout.as_millis() as u64;
        let per_page = RESULTS_PER_QUERY.to_string();

        let mut params = vec![
            ("query", query.query.as_str()),
            ("per_page", per_page.as_str()),
            ("order_by", ORDER_BY),
            ("content_filter", query.filters.content_filter.as_str()),
            ("orientation", query.filters.orientation.as_str()),
        ];
        if let Some(color) = query.filters.color.as_deref() {
            params.push(("color", color));
        }

        debug!(query = %query.query, "Sending Unsplash search");

        let response = self.send(http, api_key, &params, timeout_ms).await?;

        record_from_headers(response.headers());

        match response.status() {
            StatusCode::UNAUTHORIZED => {
                error!(product = %product_name, "Unsplash API: invalid or expired API key");
                return Ok(Vec::new());
            }
            StatusCode::TOO_MANY_REQUESTS => {
                error!(product = %product_name, "Unsplash API: rate limit exceeded");
                return Ok(Vec::new());
            }
            status if !status.is_success() => return Err(status_error(status)),
            _ => {}
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| SourceError::from_reqwest(e, timeout_ms))?;

        let total = body.total;
        let candidates = body.into_candidates();
        if candidates.is_empty() {
            warn!(product = %product_name, total = ?total, "No Unsplash results");
        } else {
            debug!(
                product = %product_name,
                count = candidates.len(),
                total = ?total,
                "Unsplash results received"
            );
        }

        Ok(candidates)
    }

    fn warn_missing_key(&self) {
        if !self.missing_key_warned.swap(true, Ordering::Relaxed) {
            warn!(
                "UNSPLASH_ACCESS_KEY not configured; using placeholder images. \
                 Get a key at https://unsplash.com/developers and set UNSPLASH_ACCESS_KEY"
            );
        }
    }
}

fn status_error(status: StatusCode) -> SourceError {
    SourceError::Status {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("unknown").to_string(),
    }
}

impl ImageSource for UnsplashClient {
    async fn search(&self, product_name: &str, category: &str) -> SourceResult<Vec<CandidateImage>> {
        self.search_with_retries(product_name, category, self.max_retries)
            .await
    }
}
