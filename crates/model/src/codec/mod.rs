//! JSON codec for record instances.
//!
//! Responsibilities:
//! - Decode loosely typed JSON into an [`Instance`] of a requested record
//!   type, resolving subtypes, alternate spellings, enum literals and
//!   defaults on the way.
//! - Encode instances back to wire JSON.
//! - Emit diagnostics (`tracing` events and counters) for every tolerated
//!   anomaly.
//!
//! Does NOT handle:
//! - HTTP transport or request signing.
//! - Required-field validation.
//!
//! Invariants:
//! - Decoding a payload the encoder produced yields an equal instance, as
//!   long as no defaulted field was left unset.
//! - Decoding never fails on unknown enum literals, unknown discriminator
//!   values or unknown input keys.

mod decode;
mod encode;

use std::sync::LazyLock;

use loganalytics_config::constants::MAX_MAX_DEPTH;
use loganalytics_config::{CodecConfig, SequencePolicy};
use serde_json::Value;

use crate::error::Result;
use crate::instance::Instance;
use crate::metrics::MetricsCollector;
use crate::schema::RecordType;

use decode::Decoder;

/// Decoder and encoder bound to one [`CodecConfig`].
///
/// # Example
///
/// ```rust
/// use loganalytics_model::{Codec, SequencePolicy, models};
///
/// let codec = Codec::builder().sequence_policy(SequencePolicy::Strict).build();
/// let action = codec
///     .decode_str(r#"{"type": "PURGE", "queryString": "*"}"#, models::action())
///     .unwrap();
/// assert_eq!(action.type_name(), "PurgeAction");
/// ```
#[derive(Debug, Clone)]
pub struct Codec {
    config: CodecConfig,
    metrics: MetricsCollector,
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec {
    /// Create a codec with the default configuration.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> CodecBuilder {
        CodecBuilder::default()
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn metrics(&self) -> &MetricsCollector {
        &self.metrics
    }

    /// Decode `value` as an instance of `ty` or, when `ty` is polymorphic,
    /// of the subtype its discriminator selects.
    ///
    /// # Errors
    ///
    /// Fails on ambiguous spellings, values that do not fit their declared
    /// type, non-object records and nesting beyond the configured depth.
    pub fn decode(&self, value: &Value, ty: &'static RecordType) -> Result<Instance> {
        let decoder = Decoder::new(&self.config, &self.metrics);
        decoder.record(value, ty, 1).inspect_err(|err| {
            tracing::debug!(record = ty.name(), error = %err, "Failed to decode payload");
            self.metrics.record_decode_failure(ty.name(), err.kind());
        })
    }

    /// Parse `json` and decode it as [`Self::decode`] does.
    pub fn decode_str(&self, json: &str, ty: &'static RecordType) -> Result<Instance> {
        let value: Value = serde_json::from_str(json).inspect_err(|_| {
            self.metrics.record_decode_failure(ty.name(), "json");
        })?;
        self.decode(&value, ty)
    }

    /// Decode every element of a JSON array, such as the `items` of a list
    /// response.
    pub fn decode_list(&self, value: &Value, ty: &'static RecordType) -> Result<Vec<Instance>> {
        match value {
            Value::Array(items) => items.iter().map(|item| self.decode(item, ty)).collect(),
            other => self.decode(other, ty).map(|instance| vec![instance]),
        }
    }

    /// Encode an instance to wire JSON.
    pub fn encode(&self, instance: &Instance) -> Value {
        encode::encode_instance(instance)
    }

    /// Encode an instance to a JSON string.
    pub fn encode_string(&self, instance: &Instance) -> Result<String> {
        Ok(serde_json::to_string(&self.encode(instance))?)
    }
}

/// Builder for [`Codec`].
#[derive(Debug, Clone, Default)]
pub struct CodecBuilder {
    config: CodecConfig,
    metrics: Option<MetricsCollector>,
}

impl CodecBuilder {
    /// Replace the whole configuration, e.g. one built by
    /// [`loganalytics_config::ConfigLoader`].
    pub fn config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    pub fn sequence_policy(mut self, policy: SequencePolicy) -> Self {
        self.config.sequence_policy = policy;
        self
    }

    /// Nesting limit for decoding. [`Self::build`] clamps it to
    /// `1..=MAX_MAX_DEPTH`, the same range the config loader accepts.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Use a specific collector instead of one derived from the
    /// configuration's `metrics_enabled` flag.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn build(mut self) -> Codec {
        let clamped = self.config.max_depth.clamp(1, MAX_MAX_DEPTH);
        if clamped != self.config.max_depth {
            tracing::debug!(
                requested = self.config.max_depth,
                max_depth = clamped,
                "Clamped codec max depth"
            );
            self.config.max_depth = clamped;
        }
        let metrics = self.metrics.unwrap_or_else(|| {
            if self.config.metrics_enabled {
                MetricsCollector::new()
            } else {
                MetricsCollector::disabled()
            }
        });
        Codec {
            config: self.config,
            metrics,
        }
    }
}

static DEFAULT_CODEC: LazyLock<Codec> = LazyLock::new(Codec::new);

/// Decode with the default codec.
pub fn decode(value: &Value, ty: &'static RecordType) -> Result<Instance> {
    DEFAULT_CODEC.decode(value, ty)
}

/// Parse and decode with the default codec.
pub fn decode_str(json: &str, ty: &'static RecordType) -> Result<Instance> {
    DEFAULT_CODEC.decode_str(json, ty)
}

/// Encode with the default codec.
pub fn encode(instance: &Instance) -> Value {
    encode::encode_instance(instance)
}
