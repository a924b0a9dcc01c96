use std::{collections::HashMap, fmt, hash::Hash, str::FromStr};

use aws_sdk_dynamodb::types::AttributeValue;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    utils, EpisodeKey, FreeEpisodeKey, RecordError, RubricKey, SeriesKey,
    SeriesRubricKey, UnknownRecordKind,
};
use crate::{Episode, FreeEpisode, Rubric, Series, SeriesRubric};

/// The five kinds of catalog records.
///
/// The snake case name doubles as the collection name used in configuration
/// and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Rubrics,

    Series,

    SeriesRubrics,

    Episodes,

    FreeEpisodes,
}

impl RecordKind {
    pub const ALL: [Self; 5] = [
        Self::Rubrics,
        Self::Series,
        Self::SeriesRubrics,
        Self::Episodes,
        Self::FreeEpisodes,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rubrics => "rubrics",
            Self::Series => "series",
            Self::SeriesRubrics => "series_rubrics",
            Self::Episodes => "episodes",
            Self::FreeEpisodes => "free_episodes",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = UnknownRecordKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownRecordKind(s.to_string()))
    }
}

/// A record that can cross the persistence boundary.
pub trait CatalogRecord: Serialize + DeserializeOwned {
    const KIND: RecordKind;

    /// The identity of the record.
    type Key: Serialize
        + DeserializeOwned
        + Clone
        + Eq
        + Hash
        + fmt::Debug;

    fn key(&self) -> Self::Key;
}

macro_rules! catalog_record {
    ($record:ty, $key:ty, $kind:expr) => {
        impl CatalogRecord for $record {
            const KIND: RecordKind = $kind;

            type Key = $key;

            fn key(&self) -> Self::Key {
                <$key>::from(self)
            }
        }
    };
}

catalog_record!(Rubric, RubricKey, RecordKind::Rubrics);
catalog_record!(Series, SeriesKey, RecordKind::Series);
catalog_record!(SeriesRubric, SeriesRubricKey, RecordKind::SeriesRubrics);
catalog_record!(Episode, EpisodeKey, RecordKind::Episodes);
catalog_record!(FreeEpisode, FreeEpisodeKey, RecordKind::FreeEpisodes);

/// Any catalog record, for payloads whose kind is only known at runtime.
///
/// Serializes as the inner record, without a tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyRecord {
    Rubric(Rubric),
    Series(Series),
    SeriesRubric(SeriesRubric),
    Episode(Episode),
    FreeEpisode(FreeEpisode),
}

macro_rules! dispatch {
    ($value:expr, $record:ident => $body:expr) => {
        match $value {
            AnyRecord::Rubric($record) => $body,
            AnyRecord::Series($record) => $body,
            AnyRecord::SeriesRubric($record) => $body,
            AnyRecord::Episode($record) => $body,
            AnyRecord::FreeEpisode($record) => $body,
        }
    };
}

impl AnyRecord {
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Rubric(_) => RecordKind::Rubrics,
            Self::Series(_) => RecordKind::Series,
            Self::SeriesRubric(_) => RecordKind::SeriesRubrics,
            Self::Episode(_) => RecordKind::Episodes,
            Self::FreeEpisode(_) => RecordKind::FreeEpisodes,
        }
    }

    /// Decodes a JSON payload as a record of the given kind.
    ///
    /// When `strict` is set the payload is checked against the field table
    /// of the kind first, so unknown fields and type mismatches are reported
    /// together instead of failing on the first one.
    ///
    /// # Errors
    /// Returns [`RecordError::Shape`] if a strict check fails, or
    /// [`RecordError::Json`] if the payload cannot be decoded.
    pub fn from_json(
        kind: RecordKind,
        value: serde_json::Value,
        strict: bool,
    ) -> Result<Self, RecordError> {
        if strict {
            kind.check_shape(&value)?;
        }

        Ok(match kind {
            RecordKind::Rubrics => Self::Rubric(utils::from_json(value)?),
            RecordKind::Series => Self::Series(utils::from_json(value)?),
            RecordKind::SeriesRubrics => {
                Self::SeriesRubric(utils::from_json(value)?)
            }
            RecordKind::Episodes => Self::Episode(utils::from_json(value)?),
            RecordKind::FreeEpisodes => {
                Self::FreeEpisode(utils::from_json(value)?)
            }
        })
    }

    /// Decodes a ``DynamoDB`` item as a record of the given kind.
    ///
    /// # Errors
    /// Returns [`RecordError::Decode`] if the item does not hold a record of
    /// that kind.
    pub fn from_item(
        kind: RecordKind,
        item: HashMap<String, AttributeValue>,
    ) -> Result<Self, RecordError> {
        Ok(match kind {
            RecordKind::Rubrics => Self::Rubric(utils::from_item(item)?),
            RecordKind::Series => Self::Series(utils::from_item(item)?),
            RecordKind::SeriesRubrics => {
                Self::SeriesRubric(utils::from_item(item)?)
            }
            RecordKind::Episodes => Self::Episode(utils::from_item(item)?),
            RecordKind::FreeEpisodes => {
                Self::FreeEpisode(utils::from_item(item)?)
            }
        })
    }

    /// # Errors
    /// Returns [`RecordError::Json`] if the record cannot be represented as
    /// JSON.
    pub fn to_json(&self) -> Result<serde_json::Value, RecordError> {
        dispatch!(self, record => utils::to_json(record))
    }

    /// # Errors
    /// Returns [`RecordError::Encode`] if the record cannot be encoded.
    pub fn to_item(
        &self,
    ) -> Result<HashMap<String, AttributeValue>, RecordError> {
        dispatch!(self, record => utils::to_item(record))
    }

    /// The identity attributes of the record, as a ``DynamoDB`` key.
    ///
    /// # Errors
    /// Returns [`RecordError::Encode`] if the key cannot be encoded.
    pub fn key_item(
        &self,
    ) -> Result<HashMap<String, AttributeValue>, RecordError> {
        dispatch!(self, record => utils::record_key_item(record))
    }
}

impl From<Rubric> for AnyRecord {
    fn from(record: Rubric) -> Self {
        Self::Rubric(record)
    }
}

impl From<Series> for AnyRecord {
    fn from(record: Series) -> Self {
        Self::Series(record)
    }
}

impl From<SeriesRubric> for AnyRecord {
    fn from(record: SeriesRubric) -> Self {
        Self::SeriesRubric(record)
    }
}

impl From<Episode> for AnyRecord {
    fn from(record: Episode) -> Self {
        Self::Episode(record)
    }
}

impl From<FreeEpisode> for AnyRecord {
    fn from(record: FreeEpisode) -> Self {
        Self::FreeEpisode(record)
    }
}
