use std::collections::BTreeMap;

use chrono::DateTime;
use loganalytics_config::CodecConfig;
use serde_json::{Map, Value};

use crate::discriminator::resolve_with;
use crate::error::{ModelError, Result};
use crate::instance::Instance;
use crate::metrics::MetricsCollector;
use crate::schema::{FieldDescriptor, RecordType, WireType};
use crate::serde_helpers::{
    bool_from_bool_or_string, enum_literal, f64_from_number_or_string, i64_from_number_or_string,
    json_kind,
};
use crate::value::FieldValue;

/// Field being decoded, for error reporting.
#[derive(Clone, Copy)]
struct Site {
    record: &'static str,
    field: &'static str,
}

impl Site {
    fn mismatch(self, expected: &WireType, found: &Value) -> ModelError {
        ModelError::TypeMismatch {
            record: self.record,
            field: self.field,
            expected: expected.to_string(),
            found: json_kind(found),
        }
    }
}

pub(super) struct Decoder<'a> {
    config: &'a CodecConfig,
    metrics: &'a MetricsCollector,
}

impl<'a> Decoder<'a> {
    pub(super) fn new(config: &'a CodecConfig, metrics: &'a MetricsCollector) -> Self {
        Self { config, metrics }
    }

    /// Decode a record at nesting level `depth` (the top-level object is 1).
    pub(super) fn record(
        &self,
        value: &Value,
        requested: &'static RecordType,
        depth: usize,
    ) -> Result<Instance> {
        self.check_depth(depth)?;
        let Value::Object(payload) = value else {
            return Err(ModelError::NotAnObject {
                record: requested.name(),
                found: json_kind(value),
            });
        };

        let ty = resolve_with(requested, payload, self.metrics);
        let pinned = ty.pinned().map(|p| p.field_index());
        let mut instance = Instance::new(ty);

        for (index, field) in ty.fields().iter().enumerate() {
            let raw = lookup(payload, ty, field)?;
            if pinned == Some(index) {
                continue;
            }
            let site = Site {
                record: ty.name(),
                field: field.name(),
            };
            let decoded = match raw {
                Some(raw) => self.field(raw, field, site, depth)?,
                None => None,
            };
            if let Some(value) = decoded.or_else(|| field.default_value().cloned()) {
                instance.set_slot(index, value);
            }
        }

        if tracing::enabled!(tracing::Level::TRACE) {
            for key in payload.keys().filter(|key| !ty.accepts_key(key)) {
                tracing::trace!(record = ty.name(), key = %key, "Ignoring unknown key");
            }
        }

        Ok(instance)
    }

    /// Decode a field's raw value. `None` means the value is treated as
    /// absent.
    fn field(
        &self,
        raw: &Value,
        field: &FieldDescriptor,
        site: Site,
        depth: usize,
    ) -> Result<Option<FieldValue>> {
        if field.ty().is_list() && !(raw.is_array() || raw.is_null()) && !self.config.is_strict() {
            tracing::debug!(
                record = site.record,
                field = site.field,
                found = json_kind(raw),
                "Sequence field holds a non-array value, treating it as absent"
            );
            self.metrics.record_skipped_sequence(site.record, site.field);
            return Ok(None);
        }
        self.value(raw, field.ty(), site, depth).map(Some)
    }

    fn value(&self, raw: &Value, ty: &WireType, site: Site, depth: usize) -> Result<FieldValue> {
        if raw.is_null() {
            return Ok(FieldValue::Null);
        }
        match ty {
            WireType::String => raw
                .as_str()
                .map(|s| FieldValue::String(s.to_string()))
                .ok_or_else(|| site.mismatch(ty, raw)),
            WireType::Integer => i64_from_number_or_string(raw)
                .map(FieldValue::Integer)
                .ok_or_else(|| site.mismatch(ty, raw)),
            WireType::Float => f64_from_number_or_string(raw)
                .map(FieldValue::Float)
                .ok_or_else(|| site.mismatch(ty, raw)),
            WireType::Boolean => bool_from_bool_or_string(raw)
                .map(FieldValue::Boolean)
                .ok_or_else(|| site.mismatch(ty, raw)),
            WireType::DateTime => {
                let text = raw.as_str().ok_or_else(|| site.mismatch(ty, raw))?;
                DateTime::parse_from_rfc3339(text)
                    .map(FieldValue::DateTime)
                    .map_err(|err| ModelError::InvalidDateTime {
                        record: site.record,
                        field: site.field,
                        message: err.to_string(),
                    })
            }
            WireType::Enum(enum_type) => {
                let literal = enum_literal(raw);
                Ok(FieldValue::Enum(enum_type.coerce_with(&literal, self.metrics)))
            }
            WireType::Record(nested) => self
                .record(raw, nested(), depth + 1)
                .map(|instance| FieldValue::Record(Box::new(instance))),
            WireType::List(element) => {
                self.check_depth(depth + 1)?;
                let items = raw.as_array().ok_or_else(|| site.mismatch(ty, raw))?;
                items
                    .iter()
                    .map(|item| self.value(item, element, site, depth + 1))
                    .collect::<Result<Vec<_>>>()
                    .map(FieldValue::List)
            }
            WireType::Map(element) => {
                self.check_depth(depth + 1)?;
                let entries = raw.as_object().ok_or_else(|| site.mismatch(ty, raw))?;
                entries
                    .iter()
                    .map(|(key, item)| {
                        self.value(item, element, site, depth + 1)
                            .map(|item| (key.clone(), item))
                    })
                    .collect::<Result<BTreeMap<_, _>>>()
                    .map(FieldValue::Map)
            }
        }
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.config.max_depth {
            return Err(ModelError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }
        Ok(())
    }
}

/// Find the raw value for `field` under either accepted spelling.
fn lookup<'v>(
    payload: &'v Map<String, Value>,
    ty: &RecordType,
    field: &FieldDescriptor,
) -> Result<Option<&'v Value>> {
    let canonical = payload.get(field.wire_key());
    let alternate = field.alias().and_then(|alias| payload.get(alias));
    match (canonical, alternate) {
        (Some(_), Some(_)) => Err(ModelError::AmbiguousField {
            record: ty.name(),
            field: field.name(),
            wire_key: field.wire_key(),
            alias: field.name(),
        }),
        (Some(value), None) | (None, Some(value)) => Ok(Some(value)),
        (None, None) => Ok(None),
    }
}
