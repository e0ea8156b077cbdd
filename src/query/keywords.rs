//! Curated per-category query boosts.
//!
//! Order matters: the enhancer only uses the first two terms of a list.

/// Categories with curated keyword lists (shared by query boosts, scoring boosts,
/// and the placeholder catalog).
pub const KNOWN_CATEGORIES: [&str; 10] = [
    "Electronics",
    "Fashion",
    "Groceries",
    "Home & Kitchen",
    "Health & Beauty",
    "Baby & Kids",
    "Automotive",
    "Sports & Outdoors",
    "Books & Stationery",
    "Tools & Industrial",
];

/// Boosts used when the category is not recognized.
pub const GENERIC_QUERY_BOOSTS: &[&str] =
    &["product", "isolated", "white background", "studio lighting"];

/// Terms appended to every query after the category boosts.
pub const QUERY_SUFFIX: &[&str] = &[
    "isolated",
    "white background",
    "studio",
    "product photography",
    "-people",
];

/// Returns the curated query boosts for `category`, if it is known.
pub fn category_query_boosts(category: &str) -> Option<&'static [&'static str]> {
    let boosts: &'static [&'static str] = match category {
        "Electronics" => &[
            "product shot",
            "isolated",
            "white background",
            "studio lighting",
            "tech gadget",
            "packshot",
            "no people",
            "clean background",
        ],
        "Fashion" => &[
            "clothing isolated",
            "apparel product",
            "fashion item",
            "white background",
            "front view",
            "packshot lay",
            "studio lighting",
            "no model",
        ],
        "Groceries" => &[
            "packaged food",
            "product packaging",
            "grocery item",
            "isolated on white",
            "food product",
            "studio shot",
        ],
        "Home & Kitchen" => &[
            "home appliance",
            "kitchen product",
            "furniture item",
            "product photography",
            "isolated",
            "studio background",
        ],
        "Health & Beauty" => &[
            "skincare product",
            "cosmetics",
            "beauty item",
            "product shot",
            "packaging photography",
            "white background",
            "isolated",
        ],
        "Baby & Kids" => &[
            "baby product",
            "kids toy",
            "children item",
            "product shot",
            "isolated",
            "studio lighting",
        ],
        "Automotive" => &[
            "car part",
            "auto accessory",
            "motor product",
            "isolated",
            "product shot",
            "clean background",
        ],
        "Sports & Outdoors" => &[
            "sports gear",
            "outdoor equipment",
            "athletic product",
            "product shot",
            "studio lighting",
            "isolated",
        ],
        "Books & Stationery" => &[
            "book",
            "stationery",
            "office supplies",
            "product photography",
            "flat lay",
            "white background",
        ],
        "Tools & Industrial" => &[
            "tool product",
            "industrial equipment",
            "manual tool",
            "product shot",
            "isolated",
            "studio lighting",
        ],
        _ => return None,
    };
    Some(boosts)
}

/// Returns the query boosts for `category`, falling back to [`GENERIC_QUERY_BOOSTS`].
pub fn query_boosts_or_generic(category: &str) -> &'static [&'static str] {
    category_query_boosts(category).unwrap_or(GENERIC_QUERY_BOOSTS)
}
