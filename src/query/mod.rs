//! Query enhancement.
//!
//! Turns a plain product name into a search query biased toward isolated, studio-lit
//! product shots without people, plus the fixed fetch filters sent with it.

pub mod keywords;


use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub use keywords::{
    GENERIC_QUERY_BOOSTS, KNOWN_CATEGORIES, category_query_boosts, query_boosts_or_generic,
};

/// Photo orientation filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
    Squarish,
}

impl Orientation {
    /// Wire value for the `orientation` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
            Orientation::Squarish => "squarish",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider-side safety filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFilter {
    Low,
    High,
}

impl ContentFilter {
    /// Wire value for the `content_filter` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentFilter::Low => "low",
            ContentFilter::High => "high",
        }
    }
}

impl std::fmt::Display for ContentFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters sent alongside the query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryFilters {
    pub orientation: Orientation,
    pub content_filter: ContentFilter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Default for QueryFilters {
    fn default() -> Self {
        Self {
            orientation: Orientation::Squarish,
            content_filter: ContentFilter::High,
            color: None,
        }
    }
}

/// A search query ready to send to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancedQuery {
    pub query: String,
    pub filters: QueryFilters,
}

/// Builds the enhanced query for a product.
///
/// The query is `name`, the first two category boosts, then the fixed
/// product-photography suffix, with empty tokens dropped.
pub fn enhance_product_query(product_name: &str, category: &str) -> EnhancedQuery {
    let boosts = query_boosts_or_generic(category);

    let query = std::iter::once(product_name)
        .chain(boosts.iter().take(2).copied())
        .chain(keywords::QUERY_SUFFIX.iter().copied())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    EnhancedQuery {
        query,
        filters: QueryFilters::default(),
    }
}

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(.*?\)\s*").expect("static regex is valid"));

static BULK_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*-\s*(pack|set|bundle|combo).*$").expect("static regex is valid")
});

static COLOR_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*\b(black|white|silver|gold|red|blue|green)\b.*$")
        .expect("static regex is valid")
});

/// Strips parentheticals, bulk-pack suffixes, and trailing color words.
///
/// Color words only match as whole words, so "Bluetooth" and "Wired" survive.
///
/// ```
/// use imagery::query::base_search_term;
///
/// assert_eq!(base_search_term("Desk Lamp (LED) - Pack of 2"), "Desk Lamp");
/// ```
pub fn base_search_term(product_name: &str) -> String {
    let stripped = PARENTHETICAL.replace_all(product_name, "");
    let stripped = BULK_SUFFIX.replace(&stripped, "");
    let stripped = COLOR_SUFFIX.replace(&stripped, "");
    stripped.trim().to_string()
}

/// Simpler query with explicit negative keywords, for low-confidence retries.
pub fn fallback_query(product_name: &str) -> String {
    format!("{product_name} product photography -people -nature -lifestyle")
}

/// Category names with curated keyword lists.
pub fn known_categories() -> &'static [&'static str] {
    &KNOWN_CATEGORIES
}
