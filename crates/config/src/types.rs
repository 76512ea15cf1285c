//! Codec configuration types.
//!
//! Responsibilities:
//! - Define the resolved [`CodecConfig`] consumed by the model codec.
//! - Define [`SequencePolicy`], the switch for malformed sequence-typed input.
//!
//! Does NOT handle:
//! - Loading values from the environment or files (see the `loader` module).
//!
//! Invariants:
//! - `CodecConfig::default()` reproduces the historical lenient behavior.
//! - `max_depth` is validated by the loader, never by the codec.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{DEFAULT_MAX_DEPTH, DEFAULT_METRICS_ENABLED};

/// How a sequence-typed field is decoded when the input value is not an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SequencePolicy {
    /// Treat the field as absent and emit a diagnostic.
    #[default]
    Lenient,
    /// Reject the payload with a type mismatch.
    Strict,
}

impl fmt::Display for SequencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// Error returned when parsing an unrecognized [`SequencePolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sequence policy '{0}' (expected 'lenient' or 'strict')")]
pub struct UnknownSequencePolicy(pub String);

impl FromStr for SequencePolicy {
    type Err = UnknownSequencePolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            _ => Err(UnknownSequencePolicy(s.to_string())),
        }
    }
}

/// Resolved codec configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Handling of non-array input for sequence fields.
    pub sequence_policy: SequencePolicy,
    /// Maximum record nesting depth accepted by decode.
    pub max_depth: usize,
    /// Whether decode diagnostics are also recorded as metrics.
    pub metrics_enabled: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            sequence_policy: SequencePolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            metrics_enabled: DEFAULT_METRICS_ENABLED,
        }
    }
}

impl CodecConfig {
    /// Returns true when non-array sequence input must be rejected.
    pub fn is_strict(&self) -> bool {
        self.sequence_policy == SequencePolicy::Strict
    }
}
