//! Selection orchestrator.
//!
//! Ties the pipeline together: enhanced query, candidate search, ranking, and a
//! threshold check, with the [`placeholder`] catalog as the safety net.
//!
//! # Contract
//!
//! [`ImageSelector::get_product_image`] always returns a [`ProductImageResult`].
//! Source errors count as zero candidates. Panics are caught at that single
//! boundary as [`SelectionError`] and converted to the category placeholder.

pub mod error;
pub mod placeholder;
pub mod select;
pub mod selector;
pub mod types;


pub use error::{SelectionError, SelectionResult};
pub use placeholder::{DEFAULT_PLACEHOLDER, DEFAULT_PLACEHOLDER_KEY, PLACEHOLDERS, placeholder_for};
pub use select::{is_unsplash_url, select_best_image};
pub use selector::ImageSelector;
pub use types::{DebugInfo, ImageOrigin, ProductImageResult, ProductRequest};
