use thiserror::Error;

use crate::{RecordKind, ShapeError};

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("failed to encode {kind} item: {source}")]
    Encode {
        kind: RecordKind,
        #[source]
        source: serde_dynamo::Error,
    },
    #[error("failed to decode {kind} item: {source}")]
    Decode {
        kind: RecordKind,
        #[source]
        source: serde_dynamo::Error,
    },
    #[error("invalid {kind} payload: {source}")]
    Json {
        kind: RecordKind,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl RecordError {
    /// The record kind the failing payload was read or written as.
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Encode { kind, .. }
            | Self::Decode { kind, .. }
            | Self::Json { kind, .. } => *kind,
            Self::Shape(shape) => shape.kind,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown record kind: {0}")]
pub struct UnknownRecordKind(pub String);
