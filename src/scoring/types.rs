use serde::{Deserialize, Serialize};

use crate::constants::{HIGH_CONFIDENCE_SCORE, MEDIUM_CONFIDENCE_SCORE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Confidence band derived from a relevance score.
pub enum Confidence {
    /// Score ≥ 8.
    High,
    /// 4 ≤ score < 8.
    Medium,
    /// Score < 4.
    Low,
}

impl Confidence {
    /// Maps a final score to its band.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_CONFIDENCE_SCORE {
            Confidence::High
        } else if score >= MEDIUM_CONFIDENCE_SCORE {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    /// Returns the lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Per-factor contributions. Positive factors are already capped.
pub struct ScoreBreakdown {
    /// Title matches in the description (cap 8).
    pub keyword_match: f64,
    /// Category boost matches in tags and description (cap 7).
    pub tags_match: f64,
    /// Studio/product-shot indicators (cap 6).
    pub product_photography: f64,
    /// Likes step function (0–3).
    pub popularity: f64,
    /// Sum of negative-indicator hits (≤ 0, uncapped).
    pub penalizations: f64,
}

impl ScoreBreakdown {
    /// Sum of all factors.
    pub fn total(&self) -> f64 {
        self.keyword_match
            + self.tags_match
            + self.product_photography
            + self.popularity
            + self.penalizations
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Relevance score for one candidate image.
pub struct ScoringResult {
    pub image_id: String,
    pub image_url: String,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub confidence: Confidence,
}

impl ScoringResult {
    /// Returns `true` if the score reaches `threshold`.
    pub fn meets(&self, threshold: f64) -> bool {
        self.score >= threshold
    }
}

impl std::fmt::Display for ScoringResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} score={:.1} confidence={}",
            self.image_id, self.score, self.confidence
        )
    }
}
