//! Closed enumerations with forward-compatible coercion.
//!
//! Responsibilities:
//! - Declare the finite set of literals an enum field accepts.
//! - Coerce any string into an [`EnumValue`], mapping literals outside the
//!   declared set to the unknown sentinel instead of failing.
//!
//! Does NOT handle:
//! - Case folding. Literals are matched exactly.
//!
//! Invariants:
//! - An [`EnumValue::Unknown`] keeps the raw literal it was coerced from, so
//!   re-encoding an instance reproduces the server's value.
//! - Every coercion to the sentinel emits a `tracing` debug event and
//!   increments the unknown-enum counter.

use std::fmt;

use crate::metrics::MetricsCollector;

/// Sentinel reported for enum literals a client build does not know about.
pub const UNKNOWN_ENUM_VALUE: &str = "UNKNOWN_ENUM_VALUE";

/// A named, closed set of string literals.
///
/// ```rust
/// use loganalytics_model::{EnumType, UNKNOWN_ENUM_VALUE};
///
/// static COLOR: EnumType = EnumType::new("Color", &["RED", "GREEN"]);
///
/// assert_eq!(COLOR.coerce("RED"), "RED");
/// assert_eq!(COLOR.coerce("MAUVE"), UNKNOWN_ENUM_VALUE);
/// ```
#[derive(Debug)]
pub struct EnumType {
    name: &'static str,
    literals: &'static [&'static str],
}

impl EnumType {
    pub const fn new(name: &'static str, literals: &'static [&'static str]) -> Self {
        Self { name, literals }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn literals(&self) -> &'static [&'static str] {
        self.literals
    }

    /// Find the declared literal equal to `raw`.
    pub fn lookup(&self, raw: &str) -> Option<&'static str> {
        self.literals.iter().copied().find(|literal| *literal == raw)
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.lookup(raw).is_some()
    }

    /// Coerce a raw literal into a value of this enum.
    ///
    /// Literals outside the declared set (including the empty string) become
    /// [`EnumValue::Unknown`].
    pub fn coerce(&self, raw: &str) -> EnumValue {
        self.coerce_with(raw, &MetricsCollector::new())
    }

    /// [`Self::coerce`], reporting unknown literals to `metrics`.
    pub(crate) fn coerce_with(&self, raw: &str, metrics: &MetricsCollector) -> EnumValue {
        match self.lookup(raw) {
            Some(literal) => EnumValue::Known(literal),
            None => {
                tracing::debug!(
                    enum_type = self.name,
                    value = raw,
                    "Unknown enum value, mapping to {UNKNOWN_ENUM_VALUE}"
                );
                metrics.record_unknown_enum(self.name);
                EnumValue::Unknown(raw.to_string())
            }
        }
    }
}

/// The value of an enum field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EnumValue {
    /// One of the declared literals.
    Known(&'static str),
    /// A literal outside the declared set, kept verbatim.
    Unknown(String),
}

impl EnumValue {
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// The literal as it appears on the wire.
    ///
    /// For unknown values this is the raw literal received, not the sentinel.
    pub fn raw(&self) -> &str {
        match self {
            Self::Known(literal) => literal,
            Self::Unknown(raw) => raw,
        }
    }

    /// The literal as seen by application code: the declared literal, or
    /// [`UNKNOWN_ENUM_VALUE`].
    pub fn reported(&self) -> &str {
        match self {
            Self::Known(literal) => literal,
            Self::Unknown(_) => UNKNOWN_ENUM_VALUE,
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reported())
    }
}

impl PartialEq<str> for EnumValue {
    fn eq(&self, other: &str) -> bool {
        self.reported() == other
    }
}

impl PartialEq<&str> for EnumValue {
    fn eq(&self, other: &&str) -> bool {
        self.reported() == *other
    }
}
