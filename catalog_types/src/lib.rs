// Example code that deserializes and serializes the model.
//
// use catalog_types::Series;
//
// fn main() {
//     let json = r#"{"serie_id": 42, "title": "Example Show"}"#;
//     let model: Series = serde_json::from_str(&json).unwrap();
// }

mod error;
pub mod keys;
pub mod record;
pub mod shape;
pub mod utils;

pub use error::{RecordError, UnknownRecordKind};
pub use keys::{
    EpisodeKey, FreeEpisodeKey, RubricKey, SeriesKey, SeriesRubricKey,
};
pub use record::{AnyRecord, CatalogRecord, RecordKind};
pub use shape::{FieldSpec, FieldType, ShapeError, ShapeViolation};

use serde::{Deserialize, Serialize};

/// A catalog category that series are organized under, scoped to one
/// campaign/country/language context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rubric {
    pub id_rubric: i64,

    pub rubric_name: String,

    pub campaign_countries_languages_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub serie_id: i64,

    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Cover image reference, usually a URL or a list of URLs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_covers: Option<String>,

    /// Unset when the series is only attached to contexts through
    /// [`SeriesRubric`] links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_countries_languages_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Tags a series under a rubric for one campaign/country/language context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRubric {
    pub serie_id: i64,

    pub id_rubric: i64,

    pub campaign_countries_languages_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub series_id: i64,

    pub episode_id: i64,

    pub season_id: i64,

    /// Playback order within the season
    pub episode_position: i64,

    /// Order of the season within the series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_position: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Kept as received: no unit conversion, and an integer stays an
    /// integer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<serde_json::Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_year: Option<i32>,

    /// Streaming URL for DRM-free playback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_streaming_no_drm: Option<String>,

    pub campaign_countries_languages_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Marks an episode as playable without the usual access restriction in one
/// campaign/country/language context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeEpisode {
    pub episode_id: i64,

    pub campaign_countries_languages_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
