//! Relevance scoring for candidate images.
//!
//! Each candidate is scored against the product title and category from its
//! description (falling back to the alt description) and its tags:
//!
//! | Factor | Rule | Cap |
//! |---|---|---|
//! | keyword match | +5 full title in text, +1 per early title word | 8 |
//! | tags match | +2 exact boost tag, +1 boost in text | 7 |
//! | product photography | +1.5 indicator in text, +1 indicator tag | 6 |
//! | popularity | likes >100 / >500 / >1000 | 3 |
//! | penalizations | −4 negative in text, −3 negative tag | none |
//!
//! Caps apply per factor before penalizations are added. Confidence is a pure
//! function of the final score.

pub mod indicators;
pub mod scorer;
pub mod types;


pub use indicators::{NEGATIVE_INDICATORS, PRODUCT_PHOTOGRAPHY_INDICATORS, category_tag_boosts};
pub use scorer::{log_scoring_details, popularity, rank_candidates, score_image};
pub use types::{Confidence, ScoreBreakdown, ScoringResult};
