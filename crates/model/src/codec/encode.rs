use chrono::SecondsFormat;
use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::instance::Instance;
use crate::value::FieldValue;

/// Encode an instance as a JSON object keyed by wire keys, in declaration
/// order. Unset fields are omitted; explicit nulls are kept.
pub(crate) fn encode_instance(instance: &Instance) -> Value {
    let mut object = Map::new();
    for (field, value) in instance.fields() {
        if let Some(value) = value {
            object.insert(field.wire_key().to_string(), encode_value(value));
        }
    }
    Value::Object(object)
}

pub(crate) fn encode_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Null => Value::Null,
        FieldValue::String(s) => Value::String(s.clone()),
        FieldValue::Integer(i) => Value::from(*i),
        // JSON has no representation for NaN or infinities.
        FieldValue::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
        FieldValue::Boolean(b) => Value::Bool(*b),
        FieldValue::DateTime(dt) => Value::String(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        FieldValue::Enum(e) => Value::String(e.raw().to_string()),
        FieldValue::Record(instance) => encode_instance(instance),
        FieldValue::List(items) => Value::Array(items.iter().map(encode_value).collect()),
        FieldValue::Map(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, item)| (key.clone(), encode_value(item)))
                .collect(),
        ),
    }
}

impl Serialize for Instance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode_instance(self).serialize(serializer)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode_value(self).serialize(serializer)
    }
}
