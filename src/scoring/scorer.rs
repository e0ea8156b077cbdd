use tracing::info;

use super::indicators::{NEGATIVE_INDICATORS, PRODUCT_PHOTOGRAPHY_INDICATORS, category_tag_boosts};
use super::types::{Confidence, ScoreBreakdown, ScoringResult};
use crate::constants::{KEYWORD_MATCH_CAP, PRODUCT_PHOTOGRAPHY_CAP, TAGS_MATCH_CAP};
use crate::unsplash::CandidateImage;

const FULL_TITLE_MATCH: f64 = 5.0;
const TITLE_WORD_MATCH: f64 = 1.0;
const TITLE_WORDS_CHECKED: usize = 3;
const TITLE_WORD_MIN_CHARS: usize = 4;

const BOOST_TAG_HIT: f64 = 2.0;
const BOOST_DESCRIPTION_HIT: f64 = 1.0;

const INDICATOR_DESCRIPTION_HIT: f64 = 1.5;
const INDICATOR_TAG_HIT: f64 = 1.0;

const NEGATIVE_DESCRIPTION_HIT: f64 = -4.0;
const NEGATIVE_TAG_HIT: f64 = -3.0;

/// Lowercased text views of a candidate, built once per score.
struct MatchText {
    description: String,
    tags: Vec<String>,
}

impl MatchText {
    fn new(image: &CandidateImage) -> Self {
        Self {
            description: image.description_text().to_lowercase(),
            tags: image.tags.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    fn describes(&self, term: &str) -> bool {
        self.description.contains(term)
    }

    fn tagged(&self, term: &str) -> bool {
        self.tags.iter().any(|t| t == term)
    }
}

/// Scores one candidate against a product title and category.
///
/// Pure and deterministic. Each positive factor is capped before penalizations
/// are added.
pub fn score_image(image: &CandidateImage, product_title: &str, category: &str) -> ScoringResult {
    let title = product_title.to_lowercase();
    let text = MatchText::new(image);

    let breakdown = ScoreBreakdown {
        keyword_match: keyword_match(&title, &text),
        tags_match: tags_match(category_tag_boosts(category), &text),
        product_photography: product_photography(&text),
        popularity: popularity(image.likes),
        penalizations: penalizations(&text),
    };

    let score = breakdown.total();

    ScoringResult {
        image_id: image.id.clone(),
        image_url: image.preferred_url().to_string(),
        score,
        breakdown,
        confidence: Confidence::from_score(score),
    }
}

/// Scores every candidate and sorts by score descending, ties by input position.
pub fn rank_candidates(
    images: &[CandidateImage],
    product_title: &str,
    category: &str,
) -> Vec<ScoringResult> {
    let mut ranked: Vec<(usize, ScoringResult)> = images
        .iter()
        .enumerate()
        .map(|(index, image)| (index, score_image(image, product_title, category)))
        .collect();

    ranked.sort_by(|(index_a, a), (index_b, b)| {
        b.score.total_cmp(&a.score).then_with(|| index_a.cmp(index_b))
    });

    ranked.into_iter().map(|(_, result)| result).collect()
}

/// Logs the breakdown of a selection.
pub fn log_scoring_details(result: &ScoringResult, product_title: &str) {
    info!(
        product = %product_title,
        image_id = %result.image_id,
        score = result.score,
        confidence = %result.confidence,
        keyword_match = result.breakdown.keyword_match,
        tags_match = result.breakdown.tags_match,
        product_photography = result.breakdown.product_photography,
        popularity = result.breakdown.popularity,
        penalizations = result.breakdown.penalizations,
        url = %result.image_url,
        "Image scoring"
    );
}

fn keyword_match(title: &str, text: &MatchText) -> f64 {
    let mut total = 0.0;

    if text.describes(title) {
        total += FULL_TITLE_MATCH;
    }

    total += title
        .split(' ')
        .take(TITLE_WORDS_CHECKED)
        .filter(|word| word.chars().count() >= TITLE_WORD_MIN_CHARS && text.describes(word))
        .count() as f64
        * TITLE_WORD_MATCH;

    total.min(KEYWORD_MATCH_CAP)
}

fn tags_match(boosts: &[&str], text: &MatchText) -> f64 {
    let total: f64 = boosts
        .iter()
        .map(|boost| {
            let mut hit = 0.0;
            if text.tagged(boost) {
                hit += BOOST_TAG_HIT;
            }
            if text.describes(boost) {
                hit += BOOST_DESCRIPTION_HIT;
            }
            hit
        })
        .sum();

    total.min(TAGS_MATCH_CAP)
}

fn product_photography(text: &MatchText) -> f64 {
    let total: f64 = PRODUCT_PHOTOGRAPHY_INDICATORS
        .iter()
        .map(|indicator| {
            let mut hit = 0.0;
            if text.describes(indicator) {
                hit += INDICATOR_DESCRIPTION_HIT;
            }
            if text.tagged(indicator) {
                hit += INDICATOR_TAG_HIT;
            }
            hit
        })
        .sum();

    total.min(PRODUCT_PHOTOGRAPHY_CAP)
}

/// Step function over likes: >1000 → 3, >500 → 2, >100 → 1.
pub fn popularity(likes: u64) -> f64 {
    match likes {
        1001.. => 3.0,
        501..=1000 => 2.0,
        101..=500 => 1.0,
        _ => 0.0,
    }
}

fn penalizations(text: &MatchText) -> f64 {
    NEGATIVE_INDICATORS
        .iter()
        .map(|negative| {
            let mut hit = 0.0;
            if text.describes(negative) {
                hit += NEGATIVE_DESCRIPTION_HIT;
            }
            if text.tagged(negative) {
                hit += NEGATIVE_TAG_HIT;
            }
            hit
        })
        .sum()
}
