//! Identity of each record kind.
//!
//! A key serializes to the same attribute names as the identity fields of its
//! record, so it can be used directly as a lookup key by a store.
use serde::{Deserialize, Serialize};

use crate::{Episode, FreeEpisode, Rubric, Series, SeriesRubric};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RubricKey {
    pub campaign_countries_languages_id: String,

    pub id_rubric: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesKey {
    pub serie_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesRubricKey {
    pub serie_id: i64,

    pub id_rubric: i64,

    pub campaign_countries_languages_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpisodeKey {
    pub series_id: i64,

    pub episode_id: i64,

    pub season_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FreeEpisodeKey {
    pub episode_id: i64,

    pub campaign_countries_languages_id: String,
}

impl From<&Rubric> for RubricKey {
    fn from(rubric: &Rubric) -> Self {
        Self {
            campaign_countries_languages_id: rubric
                .campaign_countries_languages_id
                .clone(),
            id_rubric: rubric.id_rubric,
        }
    }
}

impl From<&Series> for SeriesKey {
    fn from(series: &Series) -> Self {
        Self {
            serie_id: series.serie_id,
        }
    }
}

impl From<&SeriesRubric> for SeriesRubricKey {
    fn from(link: &SeriesRubric) -> Self {
        Self {
            serie_id: link.serie_id,
            id_rubric: link.id_rubric,
            campaign_countries_languages_id: link
                .campaign_countries_languages_id
                .clone(),
        }
    }
}

impl From<&Episode> for EpisodeKey {
    fn from(episode: &Episode) -> Self {
        Self {
            series_id: episode.series_id,
            episode_id: episode.episode_id,
            season_id: episode.season_id,
        }
    }
}

impl From<&FreeEpisode> for FreeEpisodeKey {
    fn from(free_episode: &FreeEpisode) -> Self {
        Self {
            episode_id: free_episode.episode_id,
            campaign_countries_languages_id: free_episode
                .campaign_countries_languages_id
                .clone(),
        }
    }
}

impl SeriesRubricKey {
    /// The series side of the link.
    #[must_use]
    pub const fn series(&self) -> SeriesKey {
        SeriesKey {
            serie_id: self.serie_id,
        }
    }

    /// The rubric side of the link, in the link's context.
    #[must_use]
    pub fn rubric(&self) -> RubricKey {
        RubricKey {
            campaign_countries_languages_id: self
                .campaign_countries_languages_id
                .clone(),
            id_rubric: self.id_rubric,
        }
    }
}

impl EpisodeKey {
    #[must_use]
    pub const fn series(&self) -> SeriesKey {
        SeriesKey {
            serie_id: self.series_id,
        }
    }
}
