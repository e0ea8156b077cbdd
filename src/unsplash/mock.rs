use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use super::ImageSource;
use super::error::{SourceError, SourceResult};
use super::model::CandidateImage;

/// Scripted outcome for a mock search.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return these candidates.
    Candidates(Vec<CandidateImage>),
    /// Return [`SourceError::Unavailable`] with this message.
    Fail(String),
    /// Panic with this message (exercises unwind containment upstream).
    Panic(String),
}

impl Default for MockBehavior {
    fn default() -> Self {
        MockBehavior::Candidates(Vec::new())
    }
}

/// In-memory [`ImageSource`] keyed by product name.
#[derive(Default, Clone)]
pub struct MockImageSource {
    scripted: Arc<RwLock<HashMap<String, MockBehavior>>>,
    delays: Arc<RwLock<HashMap<String, Duration>>>,
    fallback: MockBehavior,
    calls: Arc<AtomicUsize>,
}

impl MockImageSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Behavior for products without a scripted entry.
    pub fn with_default(mut self, behavior: MockBehavior) -> Self {
        self.fallback = behavior;
        self
    }

    pub fn insert(&self, product_name: &str, behavior: MockBehavior) {
        self.scripted
            .write()
            .insert(product_name.to_string(), behavior);
    }

    pub fn insert_candidates(&self, product_name: &str, candidates: Vec<CandidateImage>) {
        self.insert(product_name, MockBehavior::Candidates(candidates));
    }

    /// Delays the response for `product_name` (for completion-order tests).
    pub fn set_delay(&self, product_name: &str, delay: Duration) {
        self.delays.write().insert(product_name.to_string(), delay);
    }

    /// Number of searches served so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ImageSource for MockImageSource {
    async fn search(&self, product_name: &str, _category: &str) -> SourceResult<Vec<CandidateImage>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let delay = self.delays.read().get(product_name).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let behavior = self
            .scripted
            .read()
            .get(product_name)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone());

        match behavior {
            MockBehavior::Candidates(candidates) => Ok(candidates),
            MockBehavior::Fail(message) => Err(SourceError::Unavailable(message)),
            MockBehavior::Panic(message) => panic!("{message}"),
        }
    }
}
