use crate::{
    CatalogRecord, Episode, FreeEpisode, RecordError, Rubric, Series,
    SeriesRubric,
};
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

macro_rules! try_from_item {
    ($($record:ty),+ $(,)?) => {
        $(
            impl TryFrom<HashMap<String, AttributeValue>> for $record {
                type Error = RecordError;

                fn try_from(
                    item: HashMap<String, AttributeValue>,
                ) -> Result<Self, Self::Error> {
                    from_item(item)
                }
            }
        )+
    };
}

try_from_item!(Rubric, Series, SeriesRubric, Episode, FreeEpisode);

/// Converts a record to a ``DynamoDB`` item.
///
/// Optional fields that are unset produce no attribute at all, so an item
/// read back holds exactly the fields the record had.
///
/// # Errors
/// Returns [`RecordError::Encode`] if the record cannot be encoded.
pub fn to_item<R: CatalogRecord>(
    record: &R,
) -> Result<HashMap<String, AttributeValue>, RecordError> {
    serde_dynamo::to_item(record).map_err(|source| RecordError::Encode {
        kind: R::KIND,
        source,
    })
}

/// Converts a ``DynamoDB`` item to a record.
///
/// Attributes the record does not know about are ignored.
///
/// # Errors
/// Returns [`RecordError::Decode`] if a required attribute is missing or an
/// attribute has the wrong type.
pub fn from_item<R: CatalogRecord>(
    item: HashMap<String, AttributeValue>,
) -> Result<R, RecordError> {
    serde_dynamo::from_item(item).map_err(|source| RecordError::Decode {
        kind: R::KIND,
        source,
    })
}

/// Converts the identity of a record of kind `R` to a ``DynamoDB`` key.
///
/// # Errors
/// Returns [`RecordError::Encode`] if the key cannot be encoded.
pub fn key_to_item<R: CatalogRecord>(
    key: &R::Key,
) -> Result<HashMap<String, AttributeValue>, RecordError> {
    serde_dynamo::to_item(key).map_err(|source| RecordError::Encode {
        kind: R::KIND,
        source,
    })
}

/// The ``DynamoDB`` key of a record.
///
/// # Errors
/// Returns [`RecordError::Encode`] if the key cannot be encoded.
pub fn record_key_item<R: CatalogRecord>(
    record: &R,
) -> Result<HashMap<String, AttributeValue>, RecordError> {
    key_to_item::<R>(&record.key())
}

/// # Errors
/// Returns [`RecordError::Json`] if the record cannot be encoded.
pub fn to_json<R: CatalogRecord>(
    record: &R,
) -> Result<serde_json::Value, RecordError> {
    serde_json::to_value(record).map_err(|source| RecordError::Json {
        kind: R::KIND,
        source,
    })
}

/// # Errors
/// Returns [`RecordError::Json`] if a required field is missing or a field
/// has the wrong type.
pub fn from_json<R: CatalogRecord>(
    value: serde_json::Value,
) -> Result<R, RecordError> {
    serde_json::from_value(value).map_err(|source| RecordError::Json {
        kind: R::KIND,
        source,
    })
}
