use serde::{Deserialize, Serialize};

use super::placeholder::placeholder_for;
use crate::scoring::{Confidence, ScoreBreakdown, ScoringResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Where a selected image came from.
pub enum ImageOrigin {
    /// A scored Unsplash photo.
    Unsplash,
    /// A category placeholder.
    Fallback,
}

impl ImageOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageOrigin::Unsplash => "unsplash",
            ImageOrigin::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for ImageOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Diagnostics attached to a result when debug mode is on.
pub struct DebugInfo {
    /// Enhanced query sent to the source.
    pub query: String,
    /// Number of candidates the source returned.
    pub results_fetched: usize,
    /// Breakdown of the chosen image; `None` for placeholders.
    pub scoring_breakdown: Option<ScoreBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// The image chosen for a product. Always produced, never an error.
pub struct ProductImageResult {
    pub url: String,
    pub source: ImageOrigin,
    pub confidence: Confidence,
    pub score: f64,
    pub is_placeholder: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_info: Option<DebugInfo>,
}

impl ProductImageResult {
    /// Result for a candidate that met the confidence threshold.
    pub fn from_scoring(best: &ScoringResult) -> Self {
        Self {
            url: best.image_url.clone(),
            source: ImageOrigin::Unsplash,
            confidence: best.confidence,
            score: best.score,
            is_placeholder: false,
            debug_info: None,
        }
    }

    /// Placeholder result for `category` (default placeholder when unknown).
    pub fn fallback(category: &str) -> Self {
        Self {
            url: placeholder_for(category).to_string(),
            source: ImageOrigin::Fallback,
            confidence: Confidence::Low,
            score: 0.0,
            is_placeholder: true,
            debug_info: None,
        }
    }

    pub fn with_debug_info(mut self, debug_info: Option<DebugInfo>) -> Self {
        self.debug_info = debug_info;
        self
    }

    /// Returns `true` if the image came from Unsplash.
    pub fn is_unsplash(&self) -> bool {
        self.source == ImageOrigin::Unsplash
    }
}

/// One product in a batch request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub category: String,
}

impl ProductRequest {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }
}
