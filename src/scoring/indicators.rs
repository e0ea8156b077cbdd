//! Static term lists used by the scorer.

/// Terms that suggest a clean product shot.
pub const PRODUCT_PHOTOGRAPHY_INDICATORS: [&str; 7] = [
    "isolated",
    "white background",
    "studio",
    "product",
    "packshot",
    "clean background",
    "minimalist",
];

/// Terms that suggest lifestyle or scenery instead of the product.
pub const NEGATIVE_INDICATORS: [&str; 14] = [
    "people",
    "human",
    "person",
    "face",
    "lifestyle",
    "nature",
    "outdoor",
    "landscape",
    "tree",
    "coffee",
    "workspace",
    "office",
    "model",
    "crowd",
];

/// Tag/description boosts per category. Unknown categories get no boosts.
///
/// Keyed by the same category names as the query boosts, but tuned for matching
/// single-word provider tags rather than for building queries.
pub fn category_tag_boosts(category: &str) -> &'static [&'static str] {
    match category {
        "Electronics" => &[
            "computer",
            "technology",
            "gadget",
            "tech",
            "phone",
            "laptop",
            "keyboard",
            "monitor",
        ],
        "Fashion" => &["fashion", "clothing", "apparel", "shoes", "dress", "style"],
        "Groceries" => &["food", "grocery", "ingredients", "beverage", "drink"],
        "Home & Kitchen" => &["kitchen", "furniture", "home", "appliance", "cookware"],
        "Health & Beauty" => &["skincare", "cosmetics", "beauty", "wellness", "health"],
        "Baby & Kids" => &["baby", "kids", "toy", "children"],
        "Automotive" => &["car", "auto", "vehicle", "motor", "engine"],
        "Sports & Outdoors" => &["sports", "fitness", "outdoor", "gear"],
        "Books & Stationery" => &["book", "stationery", "office", "writing"],
        "Tools & Industrial" => &["tool", "industrial", "equipment", "hardware"],
        _ => &[],
    }
}
