//! Metrics for tolerated anomalies in API payloads.
//!
//! The codec never fails on version skew between client and server. Instead
//! it records what it tolerated:
//! - Enum literals outside the declared set
//! - Discriminator values with no registered subtype
//! - Non-array values dropped from sequence fields
//! - Decode failures, by error kind
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (install a recorder from the `metrics` ecosystem)
//! - Logging (the codec emits `tracing` events alongside each counter)
//!
//! # Invariants
//! - Label values are static record, field and enum names, never payload data
//! - Metric recording is infallible
//! - Zero-cost when no metrics recorder is installed

/// Metric name for enum literals mapped to the unknown sentinel.
pub const METRIC_UNKNOWN_ENUM_VALUES: &str = "loganalytics_unknown_enum_values_total";

/// Metric name for discriminator values that fell back to the base type.
pub const METRIC_DISCRIMINATOR_FALLBACKS: &str = "loganalytics_discriminator_fallbacks_total";

/// Metric name for non-array sequence values treated as absent.
pub const METRIC_SKIPPED_SEQUENCES: &str = "loganalytics_skipped_sequences_total";

/// Metric name for decode failures.
pub const METRIC_DECODE_FAILURES: &str = "loganalytics_decode_failures_total";

/// Metrics collector for codec diagnostics.
///
/// A thin wrapper around the `metrics` crate macros with consistent labels.
///
/// # Example
///
/// ```rust
/// use loganalytics_model::MetricsCollector;
///
/// let collector = MetricsCollector::new();
/// collector.record_unknown_enum("TaskStatus");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    /// Whether metrics collection is enabled.
    enabled: bool,
}

impl MetricsCollector {
    /// Create a new, enabled metrics collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if metrics collection is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record an enum literal that was mapped to the unknown sentinel.
    pub fn record_unknown_enum(&self, enum_name: &'static str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_UNKNOWN_ENUM_VALUES, "enum" => enum_name).increment(1);
    }

    /// Record a payload that was decoded as its base type because the
    /// discriminator value had no registered subtype.
    pub fn record_discriminator_fallback(&self, base: &'static str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_DISCRIMINATOR_FALLBACKS, "base" => base).increment(1);
    }

    /// Record a sequence field whose non-array value was treated as absent.
    pub fn record_skipped_sequence(&self, record: &'static str, field: &'static str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_SKIPPED_SEQUENCES,
            "record" => record,
            "field" => field,
        )
        .increment(1);
    }

    /// Record a failed decode.
    ///
    /// # Arguments
    /// * `record` - The record type the caller asked for
    /// * `error_kind` - The stable error label from [`crate::ModelError::kind`]
    pub fn record_decode_failure(&self, record: &'static str, error_kind: &'static str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_DECODE_FAILURES,
            "record" => record,
            "error_kind" => error_kind,
        )
        .increment(1);
    }
}
