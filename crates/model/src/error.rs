//! Error types for the model layer.
//!
//! Only two kinds of condition are errors here: caller mistakes (ambiguous
//! spellings, unknown or pinned fields) and payloads whose shape cannot be
//! represented at all. Version skew between client and server (unknown enum
//! literals, unknown discriminators) is never an error.

use thiserror::Error;

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while decoding or building instances.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Both the wire key and the alternate spelling of one field were supplied.
    #[error(
        "Ambiguous input for {record}.{field}: both '{wire_key}' and '{alias}' were supplied"
    )]
    AmbiguousField {
        record: &'static str,
        field: &'static str,
        wire_key: &'static str,
        alias: &'static str,
    },

    /// A value does not fit the declared wire type of its field.
    #[error("Type mismatch for {record}.{field}: expected {expected}, found {found}")]
    TypeMismatch {
        record: &'static str,
        field: &'static str,
        expected: String,
        found: &'static str,
    },

    /// A date-time field did not hold an RFC3339 timestamp.
    #[error("Invalid date-time for {record}.{field}: {message}")]
    InvalidDateTime {
        record: &'static str,
        field: &'static str,
        message: String,
    },

    /// A record was decoded from something other than a JSON object.
    #[error("Expected a JSON object for {record}, found {found}")]
    NotAnObject {
        record: &'static str,
        found: &'static str,
    },

    /// The record type declares no field with this logical name.
    #[error("{record} has no field named '{field}'")]
    UnknownField { record: &'static str, field: String },

    /// The field is a subtype's pinned discriminator.
    #[error("{record}.{field} is pinned to '{literal}' and cannot be reassigned")]
    PinnedField {
        record: &'static str,
        field: &'static str,
        literal: &'static str,
    },

    /// A base type's discriminator was assigned a literal that selects a
    /// registered subtype.
    #[error(
        "{record}.{field} = '{literal}' selects {subtype}; create the instance with that subtype instead"
    )]
    SubtypeLiteral {
        record: &'static str,
        field: &'static str,
        literal: String,
        subtype: &'static str,
    },

    /// The payload nests deeper than the configured limit.
    #[error("Payload nesting exceeds the maximum depth of {limit}")]
    DepthExceeded { limit: usize },

    /// The input text was not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    /// Stable, low-cardinality label for this error, used in metrics and logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AmbiguousField { .. } => "ambiguous_field",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::InvalidDateTime { .. } => "invalid_date_time",
            Self::NotAnObject { .. } => "not_an_object",
            Self::UnknownField { .. } => "unknown_field",
            Self::PinnedField { .. } => "pinned_field",
            Self::SubtypeLiteral { .. } => "subtype_literal",
            Self::DepthExceeded { .. } => "depth_exceeded",
            Self::Json(_) => "json",
        }
    }

    /// Check if this error is a programming mistake on the caller's side
    /// rather than a malformed payload.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::AmbiguousField { .. }
                | Self::UnknownField { .. }
                | Self::PinnedField { .. }
                | Self::SubtypeLiteral { .. }
        )
    }
}
