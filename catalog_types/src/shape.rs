//! Field tables for each record kind, and conformance checks of raw JSON
//! payloads against them.
use std::fmt;

use thiserror::Error;

use crate::RecordKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// A whole number that fits in an `i64`, e.g. an identifier or a
    /// position
    Integer,
    /// A whole number that fits in an `i32`
    Integer32,
    /// Any number
    Number,
    Text,
}

impl FieldType {
    fn accepts(self, value: &serde_json::Value) -> bool {
        match self {
            Self::Integer => value.as_i64().is_some(),
            Self::Integer32 => value
                .as_i64()
                .is_some_and(|n| i32::try_from(n).is_ok()),
            Self::Number => value.is_number(),
            Self::Text => value.is_string(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Integer => "integer",
            Self::Integer32 => "32-bit integer",
            Self::Number => "number",
            Self::Text => "text",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,

    pub ty: FieldType,

    pub required: bool,

    /// Part of the record's identity
    pub key: bool,
}

const fn key(name: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec {
        name,
        ty,
        required: true,
        key: true,
    }
}

const fn required(name: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec {
        name,
        ty,
        required: true,
        key: false,
    }
}

const fn optional(name: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec {
        name,
        ty,
        required: false,
        key: false,
    }
}

const CREATED_AT: FieldSpec = optional("created_at", FieldType::Text);
const UPDATED_AT: FieldSpec = optional("updated_at", FieldType::Text);

const RUBRIC_FIELDS: &[FieldSpec] = &[
    key("id_rubric", FieldType::Integer),
    required("rubric_name", FieldType::Text),
    key("campaign_countries_languages_id", FieldType::Text),
    CREATED_AT,
    UPDATED_AT,
];

const SERIES_FIELDS: &[FieldSpec] = &[
    key("serie_id", FieldType::Integer),
    required("title", FieldType::Text),
    optional("description", FieldType::Text),
    optional("url_covers", FieldType::Text),
    optional("campaign_countries_languages_id", FieldType::Text),
    CREATED_AT,
    UPDATED_AT,
];

const SERIES_RUBRIC_FIELDS: &[FieldSpec] = &[
    key("serie_id", FieldType::Integer),
    key("id_rubric", FieldType::Integer),
    key("campaign_countries_languages_id", FieldType::Text),
    CREATED_AT,
    UPDATED_AT,
];

const EPISODE_FIELDS: &[FieldSpec] = &[
    key("series_id", FieldType::Integer),
    key("episode_id", FieldType::Integer),
    key("season_id", FieldType::Integer),
    required("episode_position", FieldType::Integer),
    optional("season_position", FieldType::Integer),
    optional("title", FieldType::Text),
    optional("description", FieldType::Text),
    optional("duration", FieldType::Number),
    optional("production_year", FieldType::Integer32),
    optional("url_streaming_no_drm", FieldType::Text),
    required("campaign_countries_languages_id", FieldType::Text),
    CREATED_AT,
    UPDATED_AT,
];

const FREE_EPISODE_FIELDS: &[FieldSpec] = &[
    key("episode_id", FieldType::Integer),
    key("campaign_countries_languages_id", FieldType::Text),
    CREATED_AT,
    UPDATED_AT,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeViolation {
    NotAnObject,
    MissingField(&'static str),
    WrongType {
        field: &'static str,
        expected: FieldType,
    },
    UnknownField(String),
}

impl fmt::Display for ShapeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => f.write_str("payload is not an object"),
            Self::MissingField(field) => {
                write!(f, "missing required field `{field}`")
            }
            Self::WrongType { field, expected } => {
                write!(f, "field `{field}` is not {expected}")
            }
            Self::UnknownField(field) => write!(f, "unknown field `{field}`"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} payload does not conform: {}", join(.violations))]
pub struct ShapeError {
    pub kind: RecordKind,

    pub violations: Vec<ShapeViolation>,
}

fn join(violations: &[ShapeViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl RecordKind {
    /// Every field of the record, in declaration order.
    #[must_use]
    pub const fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Rubrics => RUBRIC_FIELDS,
            Self::Series => SERIES_FIELDS,
            Self::SeriesRubrics => SERIES_RUBRIC_FIELDS,
            Self::Episodes => EPISODE_FIELDS,
            Self::FreeEpisodes => FREE_EPISODE_FIELDS,
        }
    }

    #[must_use]
    pub fn field(self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|field| field.name == name)
    }

    #[must_use]
    pub fn required_fields(self) -> Vec<&'static str> {
        self.fields()
            .iter()
            .filter(|field| field.required)
            .map(|field| field.name)
            .collect()
    }

    #[must_use]
    pub fn optional_fields(self) -> Vec<&'static str> {
        self.fields()
            .iter()
            .filter(|field| !field.required)
            .map(|field| field.name)
            .collect()
    }

    #[must_use]
    pub fn key_fields(self) -> Vec<&'static str> {
        self.fields()
            .iter()
            .filter(|field| field.key)
            .map(|field| field.name)
            .collect()
    }

    /// Checks a raw JSON payload against the field table of this kind.
    ///
    /// `null` counts as absent: it is accepted for optional fields and
    /// reported as missing for required ones.
    ///
    /// # Errors
    /// Returns a [`ShapeError`] listing every violation found, field table
    /// violations first and unknown fields last, sorted by name.
    pub fn check_shape(
        self,
        value: &serde_json::Value,
    ) -> Result<(), ShapeError> {
        let Some(object) = value.as_object() else {
            return Err(ShapeError {
                kind: self,
                violations: vec![ShapeViolation::NotAnObject],
            });
        };

        let mut violations = Vec::new();

        for field in self.fields() {
            match object.get(field.name) {
                None | Some(serde_json::Value::Null) => {
                    if field.required {
                        violations
                            .push(ShapeViolation::MissingField(field.name));
                    }
                }
                Some(value) if !field.ty.accepts(value) => {
                    violations.push(ShapeViolation::WrongType {
                        field: field.name,
                        expected: field.ty,
                    });
                }
                Some(_) => {}
            }
        }

        let mut unknown = object
            .keys()
            .filter(|name| self.field(name).is_none())
            .cloned()
            .collect::<Vec<_>>();
        unknown.sort();
        violations
            .extend(unknown.into_iter().map(ShapeViolation::UnknownField));

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ShapeError {
                kind: self,
                violations,
            })
        }
    }
}
