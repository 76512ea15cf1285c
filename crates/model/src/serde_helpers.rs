//! Lenient scalar readers for loosely typed JSON.
//!
//! Responsibilities:
//! - Accept either JSON numbers or numeric strings for numeric fields.
//! - Accept `"true"`/`"false"` strings for boolean fields.
//! - Read any JSON value as an enum literal, so wrong-typed enum values stay
//!   recoverable.
//! - Name JSON value kinds for error messages.
//!
//! Explicitly does NOT handle:
//! - Range or business-rule validation.
//! - Date-time parsing (see the decoder).
//!
//! Invariants / assumptions:
//! - The service may return numeric fields as `"123"` strings or as `123` numbers
//!   depending on endpoint and version.
//! - A float is only accepted for an integer field when it has no fractional part
//!   and fits in `i64`.

use std::borrow::Cow;

use serde_json::Value;

/// Short name of a JSON value's kind, for diagnostics.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn i64_from_number_or_string(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

pub(crate) fn f64_from_number_or_string(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

pub(crate) fn bool_from_bool_or_string(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

/// The literal an enum field holds: the string itself, or the JSON text of
/// any other value (`5` becomes `"5"`).
pub(crate) fn enum_literal(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}
