use serde::{Deserialize, Serialize};

/// Size variants of a candidate photo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrls {
    pub small: String,
    pub regular: String,
    pub full: String,
}

/// Photo author, kept for attribution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photographer {
    pub name: String,
}

/// A normalized search result, prior to scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateImage {
    pub id: String,
    pub urls: ImageUrls,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Photographer>,
}

impl CandidateImage {
    /// Text used for matching: the description, or the alt description when the
    /// description is missing or empty.
    pub fn description_text(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .or(self.alt_description.as_deref())
            .unwrap_or("")
    }

    /// URL to hand back to callers: `regular`, or `small` when `regular` is empty.
    pub fn preferred_url(&self) -> &str {
        if self.urls.regular.is_empty() {
            &self.urls.small
        } else {
            &self.urls.regular
        }
    }
}

/// Raw `GET /search/photos` response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub results: Option<Vec<RawPhoto>>,
}

impl SearchResponse {
    /// Normalizes every result, treating a missing `results` field as empty.
    pub fn into_candidates(self) -> Vec<CandidateImage> {
        self.results
            .unwrap_or_default()
            .into_iter()
            .map(CandidateImage::from)
            .collect()
    }
}

/// One photo as the provider returns it. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPhoto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub urls: Option<RawUrls>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alt_description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<RawTag>>,
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default)]
    pub downloads: Option<u64>,
    #[serde(default)]
    pub user: Option<RawUser>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUrls {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub regular: Option<String>,
    #[serde(default)]
    pub full: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTag {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUser {
    #[serde(default)]
    pub name: Option<String>,
}

impl From<RawPhoto> for CandidateImage {
    fn from(raw: RawPhoto) -> Self {
        let urls = raw.urls.unwrap_or_default();
        Self {
            id: raw.id.unwrap_or_default(),
            urls: ImageUrls {
                small: urls.small.unwrap_or_default(),
                regular: urls.regular.unwrap_or_default(),
                full: urls.full.unwrap_or_default(),
            },
            description: raw.description,
            alt_description: raw.alt_description,
            tags: raw
                .tags
                .unwrap_or_default()
                .into_iter()
                .filter_map(|t| t.title)
                .collect(),
            likes: raw.likes.unwrap_or(0),
            downloads: raw.downloads.unwrap_or(0),
            user: raw.user.map(|u| Photographer {
                name: u.name.unwrap_or_default(),
            }),
        }
    }
}
