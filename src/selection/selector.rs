use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;
use futures_util::stream::{self, StreamExt};
use moka::sync::Cache;
use tracing::{error, info, instrument, warn};

use super::error::{SelectionError, SelectionResult};
use super::select::select_best_image;
use super::types::{DebugInfo, ProductImageResult, ProductRequest};
use crate::config::ImageryConfig;
use crate::hashing::{hash_product, short_hex};
use crate::query::enhance_product_query;
use crate::scoring::{ScoreBreakdown, log_scoring_details};
use crate::unsplash::{ImageSource, UnsplashClient};

/// Finds the best image for products, falling back to category placeholders.
///
/// Successful (non-placeholder) results are kept in an in-memory cache keyed by
/// [`hash_product`]; placeholders are never cached so a later call can recover
/// from a transient provider failure.
pub struct ImageSelector<S: ImageSource> {
    source: S,
    min_confidence_score: f64,
    batch_concurrency: usize,
    results: Option<Cache<[u8; 32], ProductImageResult>>,
}

impl<S: ImageSource> std::fmt::Debug for ImageSelector<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageSelector")
            .field("min_confidence_score", &self.min_confidence_score)
            .field("batch_concurrency", &self.batch_concurrency)
            .field("cache_enabled", &self.results.is_some())
            .finish()
    }
}

impl ImageSelector<UnsplashClient> {
    /// Builds a selector backed by the Unsplash HTTP client.
    pub fn from_config(config: &ImageryConfig) -> Self {
        Self::new(UnsplashClient::new(config), config)
    }
}

impl<S: ImageSource> ImageSelector<S> {
    pub fn new(source: S, config: &ImageryConfig) -> Self {
        let results = (config.cache_capacity > 0)
            .then(|| Cache::builder().max_capacity(config.cache_capacity).build());

        Self {
            source,
            min_confidence_score: config.min_confidence_score,
            batch_concurrency: config.batch_concurrency.max(1),
            results,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn min_confidence_score(&self) -> f64 {
        self.min_confidence_score
    }

    /// Returns `true` unless the cache was disabled with a zero capacity.
    pub fn cache_enabled(&self) -> bool {
        self.results.is_some()
    }

    /// Drops every cached result.
    pub fn clear_cache(&self) {
        if let Some(results) = &self.results {
            results.invalidate_all();
        }
    }

    /// Returns the best image for a product. Never fails.
    ///
    /// Source errors count as zero candidates. A panic inside the pipeline is logged
    /// and replaced by the category placeholder, without debug info. With `debug` on,
    /// the query, the candidate count and the scoring breakdown are logged and
    /// attached to the result.
    #[instrument(skip(self, debug))]
    pub async fn get_product_image(
        &self,
        product_name: &str,
        category: &str,
        debug: bool,
    ) -> ProductImageResult {
        let key = hash_product(product_name, category);

        if let Some(cached) = self.cached(&key) {
            if debug {
                info!(
                    product = %product_name,
                    key = %short_hex(&key),
                    "Serving image from result cache"
                );
            }
            return cached;
        }

        let outcome: SelectionResult<ProductImageResult> =
            AssertUnwindSafe(self.resolve(product_name, category, debug))
                .catch_unwind()
                .await
                .map_err(SelectionError::from_panic);

        match outcome {
            Ok(result) => {
                if !result.is_placeholder {
                    self.remember(key, &result);
                }
                result
            }
            Err(err) => {
                error!(
                    product = %product_name,
                    category = %category,
                    error = %err,
                    "Error getting product image"
                );
                ProductImageResult::fallback(category)
            }
        }
    }

    /// Resolves every product with debug off, preserving input order and length.
    ///
    /// At most `batch_concurrency` lookups run at once. With `debug` on, a summary
    /// of Unsplash versus fallback results is logged.
    #[instrument(skip(self, items, debug), fields(items = items.len()))]
    pub async fn get_batch_product_images(
        &self,
        items: &[ProductRequest],
        debug: bool,
    ) -> Vec<ProductImageResult> {
        if debug {
            info!(count = items.len(), "Batch processing products");
        }

        let results: Vec<ProductImageResult> = stream::iter(items)
            .map(|item| self.get_product_image(&item.name, &item.category, false))
            .buffered(self.batch_concurrency)
            .collect()
            .await;

        if debug {
            let unsplash = results.iter().filter(|r| r.is_unsplash()).count();
            let fallback = results.len() - unsplash;
            info!(
                unsplash,
                fallback, "Batch complete: {unsplash} unsplash, {fallback} fallback"
            );
        }

        results
    }

    async fn resolve(
        &self,
        product_name: &str,
        category: &str,
        debug: bool,
    ) -> ProductImageResult {
        let query = enhance_product_query(product_name, category).query;
        if debug {
            info!(product = %product_name, category = %category, query = %query, "Getting image");
        }

        let candidates = match self.source.search(product_name, category).await {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!(
                    product = %product_name,
                    category = %category,
                    error = %err,
                    "Image source failed, continuing without candidates"
                );
                Vec::new()
            }
        };
        if debug {
            info!(candidates = candidates.len(), "Fetched candidates from Unsplash");
        }

        let debug_info = |scoring_breakdown: Option<ScoreBreakdown>| {
            debug.then(|| DebugInfo {
                query: query.clone(),
                results_fetched: candidates.len(),
                scoring_breakdown,
            })
        };

        if candidates.is_empty() {
            if debug {
                warn!(product = %product_name, "No results from Unsplash API");
            }
        } else {
            match select_best_image(&candidates, product_name, category, self.min_confidence_score)
            {
                Some(best) => {
                    if debug {
                        log_scoring_details(&best, product_name);
                    }
                    return ProductImageResult::from_scoring(&best)
                        .with_debug_info(debug_info(Some(best.breakdown)));
                }
                None if debug => {
                    warn!(
                        product = %product_name,
                        threshold = self.min_confidence_score,
                        "No candidate reached the confidence threshold"
                    );
                }
                None => {}
            }
        }

        let fallback = ProductImageResult::fallback(category);
        if debug {
            info!(placeholder = %fallback.url, "Using placeholder");
        }

        fallback.with_debug_info(debug_info(None))
    }

    fn cached(&self, key: &[u8; 32]) -> Option<ProductImageResult> {
        self.results.as_ref()?.get(key)
    }

    fn remember(&self, key: [u8; 32], result: &ProductImageResult) {
        if let Some(results) = &self.results {
            results.insert(key, result.clone().with_debug_info(None));
        }
    }
}
