//! Builders for provider photos and candidates.

use imagery::unsplash::{CandidateImage, RawPhoto};
use serde_json::{Value, json};

/// Builds a photo in the provider's wire shape.
#[derive(Debug, Clone)]
pub struct PhotoBuilder {
    id: String,
    description: Option<String>,
    alt_description: Option<String>,
    tags: Vec<String>,
    likes: u64,
    photographer: Option<String>,
}

impl PhotoBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            description: None,
            alt_description: None,
            tags: Vec::new(),
            likes: 0,
            photographer: None,
        }
    }

    pub fn description(mut self, text: &str) -> Self {
        self.description = Some(text.to_string());
        self
    }

    pub fn alt_description(mut self, text: &str) -> Self {
        self.alt_description = Some(text.to_string());
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn likes(mut self, likes: u64) -> Self {
        self.likes = likes;
        self
    }

    pub fn photographer(mut self, name: &str) -> Self {
        self.photographer = Some(name.to_string());
        self
    }

    pub fn regular_url(&self) -> String {
        format!("https://images.unsplash.com/{}?w=1080", self.id)
    }

    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "urls": {
                "small": format!("https://images.unsplash.com/{}?w=400", self.id),
                "regular": self.regular_url(),
                "full": format!("https://images.unsplash.com/{}", self.id),
            },
            "description": self.description,
            "alt_description": self.alt_description,
            "tags": self.tags.iter().map(|t| json!({ "title": t })).collect::<Vec<_>>(),
            "likes": self.likes,
            "downloads": 10,
            "user": self.photographer.as_ref().map(|name| json!({ "name": name })),
        })
    }

    pub fn to_candidate(&self) -> CandidateImage {
        let raw: RawPhoto = serde_json::from_value(self.to_json()).unwrap();
        CandidateImage::from(raw)
    }
}

/// Wraps photos in a search response body.
pub fn search_body(photos: &[PhotoBuilder]) -> Value {
    json!({
        "total": photos.len(),
        "total_pages": 1,
        "results": photos.iter().map(PhotoBuilder::to_json).collect::<Vec<_>>(),
    })
}

/// A clean studio shot that scores High for "Wireless Mouse" / Electronics.
pub fn mouse_photo() -> PhotoBuilder {
    PhotoBuilder::new("mouse-1")
        .description("isolated wireless mouse product shot on white background")
        .tags(&["technology", "isolated"])
        .likes(1200)
        .photographer("Jane Doe")
}

/// A lifestyle shot that scores below any reasonable threshold.
pub fn lifestyle_photo(id: &str) -> PhotoBuilder {
    PhotoBuilder::new(id)
        .description("people working in an office with coffee")
        .tags(&["people", "workspace"])
        .likes(40)
}

/// A studio shot that scores High for "Leather Jacket" / Fashion.
pub fn jacket_photo() -> PhotoBuilder {
    PhotoBuilder::new("jacket-1")
        .description("leather jacket studio product isolated")
        .tags(&["fashion"])
        .likes(600)
}
