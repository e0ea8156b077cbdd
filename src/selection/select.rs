use crate::constants::UNSPLASH_IMAGE_HOSTS;
use crate::scoring::{ScoringResult, rank_candidates};
use crate::unsplash::CandidateImage;

/// Picks the highest-scoring candidate if it reaches `min_confidence_score`.
///
/// Ties keep input order. Returns `None` for an empty list or when the best
/// score is below the threshold.
pub fn select_best_image(
    candidates: &[CandidateImage],
    product_title: &str,
    category: &str,
    min_confidence_score: f64,
) -> Option<ScoringResult> {
    if candidates.is_empty() {
        return None;
    }

    rank_candidates(candidates, product_title, category)
        .into_iter()
        .next()
        .filter(|best| best.meets(min_confidence_score))
}

/// Returns `true` if `url` points at an Unsplash image host.
pub fn is_unsplash_url(url: &str) -> bool {
    UNSPLASH_IMAGE_HOSTS.iter().any(|host| url.contains(host))
}
