use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CatalogError;

/// Wire names match the public API: "movie" / "tv_series".
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Movie,
    TvSeries,
}

/// Closed set of platforms. Anything else is rejected at the type boundary.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamingPlatform {
    Netflix,
    #[serde(rename = "Amazon Prime Video")]
    AmazonPrimeVideo,
    #[serde(rename = "Disney+ Hotstar")]
    DisneyPlusHotstar,
    Hulu,
    #[serde(rename = "HBO Max")]
    HboMax,
    #[serde(rename = "Apple TV+")]
    AppleTvPlus,
    #[serde(rename = "Paramount+")]
    ParamountPlus,
    YouTube,
    Other,
}

impl StreamingPlatform {
    pub const ALL: [StreamingPlatform; 9] = [
        StreamingPlatform::Netflix,
        StreamingPlatform::AmazonPrimeVideo,
        StreamingPlatform::DisneyPlusHotstar,
        StreamingPlatform::Hulu,
        StreamingPlatform::HboMax,
        StreamingPlatform::AppleTvPlus,
        StreamingPlatform::ParamountPlus,
        StreamingPlatform::YouTube,
        StreamingPlatform::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StreamingPlatform::Netflix => "Netflix",
            StreamingPlatform::AmazonPrimeVideo => "Amazon Prime Video",
            StreamingPlatform::DisneyPlusHotstar => "Disney+ Hotstar",
            StreamingPlatform::Hulu => "Hulu",
            StreamingPlatform::HboMax => "HBO Max",
            StreamingPlatform::AppleTvPlus => "Apple TV+",
            StreamingPlatform::ParamountPlus => "Paramount+",
            StreamingPlatform::YouTube => "YouTube",
            StreamingPlatform::Other => "Other",
        }
    }
}

/// The seven scoring categories. A closed record: a missing category is a
/// deserialization error, never a runtime surprise, and iterating the
/// categories is exhaustive by construction.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CategoryRatings {
    pub story: f64,
    pub acting: f64,
    pub direction: f64,
    pub music_sound: f64,
    pub cinematography: f64,
    pub action_stunts: f64,
    pub emotional_impact: f64,
}

impl CategoryRatings {
    pub const COUNT: usize = 7;

    pub fn fields(&self) -> [(&'static str, f64); Self::COUNT] {
        [
            ("story", self.story),
            ("acting", self.acting),
            ("direction", self.direction),
            ("music_sound", self.music_sound),
            ("cinematography", self.cinematography),
            ("action_stunts", self.action_stunts),
            ("emotional_impact", self.emotional_impact),
        ]
    }
}

/// Caller-submitted fields for create/update. The store assigns `id` and
/// derives `overall_rating`; a draft never carries either.
#[derive(Debug, Deserialize, Clone)]
pub struct ItemDraft {
    pub title: String,
    pub content_type: ContentType,
    pub year: i32,
    pub genre: String,
    pub streaming_platform: StreamingPlatform,
    #[serde(default)]
    pub description: Option<String>,
    pub ratings: CategoryRatings,
}

// Non-rating draft fields, split out so boundary parsing can classify a bad
// ratings block and a bad metadata field into different error kinds.
#[derive(Debug, Deserialize)]
struct DraftFields {
    title: String,
    content_type: ContentType,
    year: i32,
    genre: String,
    streaming_platform: StreamingPlatform,
    #[serde(default)]
    description: Option<String>,
}

impl ItemDraft {
    /// Parses a JSON request body into a draft. Problems inside `ratings`
    /// (missing category, wrong type) report as rating validation errors;
    /// problems with any other field (unknown enum value, missing title,
    /// non-integer year) report as field errors.
    pub fn from_json(body: Value) -> Result<Self, CatalogError> {
        let Value::Object(mut map) = body else {
            return Err(CatalogError::Field(
                "request body must be a JSON object".to_string(),
            ));
        };
        let ratings_value = map
            .remove("ratings")
            .ok_or_else(|| CatalogError::Validation("missing field `ratings`".to_string()))?;
        let ratings: CategoryRatings = serde_json::from_value(ratings_value)
            .map_err(|e| CatalogError::Validation(e.to_string()))?;
        let fields: DraftFields = serde_json::from_value(Value::Object(map))
            .map_err(|e| CatalogError::Field(e.to_string()))?;
        Ok(ItemDraft {
            title: fields.title,
            content_type: fields.content_type,
            year: fields.year,
            genre: fields.genre,
            streaming_platform: fields.streaming_platform,
            description: fields.description,
            ratings,
        })
    }
}

/// One stored catalog entry. `overall_rating` is a derived projection of
/// `ratings`, recomputed on every write path; it is persisted only as a
/// denormalized cache for fast listing.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub content_type: ContentType,
    pub year: i32,
    pub genre: String,
    pub streaming_platform: StreamingPlatform,
    pub description: Option<String>,
    pub ratings: CategoryRatings,
    pub overall_rating: f64,
}

/// Exact-match list filter. Absent fields impose no constraint.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListFilter {
    pub streaming_platform: Option<StreamingPlatform>,
    pub content_type: Option<ContentType>,
    pub limit: Option<usize>,
}
