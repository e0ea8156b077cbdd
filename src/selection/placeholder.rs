//! Static placeholder images, one per known category plus a default.

/// Key of the placeholder used for categories without their own image.
pub const DEFAULT_PLACEHOLDER_KEY: &str = "default";

/// Category → placeholder path. The last entry is the default.
pub const PLACEHOLDERS: [(&str, &str); 11] = [
    (
        "Electronics",
        "/images/placeholders/electronics-placeholder.png",
    ),
    ("Fashion", "/images/placeholders/fashion-placeholder.png"),
    ("Groceries", "/images/placeholders/groceries-placeholder.png"),
    (
        "Home & Kitchen",
        "/images/placeholders/home-kitchen-placeholder.png",
    ),
    (
        "Health & Beauty",
        "/images/placeholders/health-beauty-placeholder.png",
    ),
    ("Baby & Kids", "/images/placeholders/baby-kids-placeholder.png"),
    ("Automotive", "/images/placeholders/automotive-placeholder.png"),
    (
        "Sports & Outdoors",
        "/images/placeholders/sports-outdoors-placeholder.png",
    ),
    (
        "Books & Stationery",
        "/images/placeholders/books-stationery-placeholder.png",
    ),
    (
        "Tools & Industrial",
        "/images/placeholders/tools-industrial-placeholder.png",
    ),
    (
        DEFAULT_PLACEHOLDER_KEY,
        "/images/placeholders/product-placeholder.png",
    ),
];

/// Path of the default placeholder.
pub const DEFAULT_PLACEHOLDER: &str = PLACEHOLDERS[PLACEHOLDERS.len() - 1].1;

/// Returns the placeholder for `category`, or the default one.
pub fn placeholder_for(category: &str) -> &'static str {
    PLACEHOLDERS
        .iter()
        .find(|(key, _)| *key == category)
        .map(|(_, path)| *path)
        .unwrap_or(DEFAULT_PLACEHOLDER)
}
