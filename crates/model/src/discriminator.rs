//! Subtype resolution for polymorphic record types.
//!
//! A base type with a discriminator dispatches on the value found under the
//! discriminator's wire key. Resolution never fails: an absent, null,
//! non-string or unregistered value leaves the payload decoded as the type
//! the caller asked for.

use serde_json::{Map, Value};

use crate::metrics::MetricsCollector;
use crate::schema::RecordType;

/// Upper bound on discriminator hops, for hierarchies more than one level deep.
const MAX_HIERARCHY_DEPTH: usize = 8;

/// Pick the concrete record type for `payload`, starting from `base`.
///
/// Only the canonical wire key of the discriminator is consulted; the
/// snake_case spelling is never used for dispatch.
pub fn resolve_subtype(base: &'static RecordType, payload: &Map<String, Value>) -> &'static RecordType {
    resolve_with(base, payload, &MetricsCollector::disabled())
}

pub(crate) fn resolve_with(
    base: &'static RecordType,
    payload: &Map<String, Value>,
    metrics: &MetricsCollector,
) -> &'static RecordType {
    let mut current = base;
    for _ in 0..MAX_HIERARCHY_DEPTH {
        let Some(discriminator) = current.discriminator() else {
            break;
        };
        let raw = payload.get(discriminator.wire_key());
        match raw.and_then(Value::as_str).and_then(|literal| discriminator.lookup(literal)) {
            Some(subtype) if subtype.name() != current.name() => {
                tracing::trace!(base = current.name(), subtype = subtype.name(), "Resolved subtype");
                current = subtype;
            }
            Some(_) => break,
            None => {
                match raw {
                    None | Some(Value::Null) => {
                        tracing::trace!(base = current.name(), "No discriminator value, decoding as base type");
                    }
                    Some(value) => {
                        tracing::debug!(
                            base = current.name(),
                            discriminator = discriminator.wire_key(),
                            value = %value,
                            "Unrecognized discriminator value, decoding as base type"
                        );
                        metrics.record_discriminator_fallback(current.name());
                    }
                }
                break;
            }
        }
    }
    current
}
