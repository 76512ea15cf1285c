//! Field values held by an [`Instance`].

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, FixedOffset, Utc};

use crate::enums::EnumValue;
use crate::instance::Instance;
use crate::schema::WireType;

/// A value assigned to a field.
///
/// `Null` is an explicit null, distinct from a field that was never set.
/// Floats compare and hash by bit pattern.
#[derive(Debug, Clone)]
pub enum FieldValue {
    Null,
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(DateTime<FixedOffset>),
    Enum(EnumValue),
    Record(Box<Instance>),
    List(Vec<FieldValue>),
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Short name of this value's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::DateTime(_) => "date-time",
            Self::Enum(_) => "enum",
            Self::Record(_) => "record",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumValue> {
        match self {
            Self::Enum(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Instance> {
        match self {
            Self::Record(instance) => Some(instance),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, FieldValue>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Fit a value to a declared wire type.
    ///
    /// Strings assigned to enum fields are coerced, integers widen to
    /// floats, and nested records must be the declared type or one of its
    /// subtypes. On mismatch, returns the kind of the offending value.
    pub(crate) fn conform(self, ty: &WireType) -> Result<Self, &'static str> {
        match (self, ty) {
            (Self::Null, _) => Ok(Self::Null),
            (value @ Self::String(_), WireType::String) => Ok(value),
            (Self::String(raw), WireType::Enum(e)) => Ok(Self::Enum(e.coerce(&raw))),
            (Self::Enum(value), WireType::Enum(e)) => Ok(Self::Enum(e.coerce(value.raw()))),
            (value @ Self::Integer(_), WireType::Integer) => Ok(value),
            (Self::Integer(i), WireType::Float) => Ok(Self::Float(i as f64)),
            (value @ Self::Float(_), WireType::Float) => Ok(value),
            (value @ Self::Boolean(_), WireType::Boolean) => Ok(value),
            (value @ Self::DateTime(_), WireType::DateTime) => Ok(value),
            (Self::Record(instance), WireType::Record(declared)) => {
                if instance.is_a(declared()) {
                    Ok(Self::Record(instance))
                } else {
                    Err("record")
                }
            }
            (Self::List(items), WireType::List(element)) => items
                .into_iter()
                .map(|item| item.conform(element))
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            (Self::Map(entries), WireType::Map(element)) => entries
                .into_iter()
                .map(|(key, item)| item.conform(element).map(|item| (key, item)))
                .collect::<Result<BTreeMap<_, _>, _>>()
                .map(Self::Map),
            (value, _) => Err(value.kind()),
        }
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            (Self::Enum(a), Self::Enum(b)) => a == b,
            (Self::Record(a), Self::Record(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for FieldValue {}

impl Hash for FieldValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::String(s) => s.hash(state),
            Self::Integer(i) => i.hash(state),
            Self::Float(f) => f.to_bits().hash(state),
            Self::Boolean(b) => b.hash(state),
            Self::DateTime(dt) => dt.hash(state),
            Self::Enum(e) => e.hash(state),
            Self::Record(instance) => instance.hash(state),
            Self::List(items) => items.hash(state),
            Self::Map(entries) => entries.hash(state),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<DateTime<FixedOffset>> for FieldValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::DateTime(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value.fixed_offset())
    }
}

impl From<EnumValue> for FieldValue {
    fn from(value: EnumValue) -> Self {
        Self::Enum(value)
    }
}

impl From<Instance> for FieldValue {
    fn from(value: Instance) -> Self {
        Self::Record(Box::new(value))
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<BTreeMap<String, T>> for FieldValue {
    fn from(entries: BTreeMap<String, T>) -> Self {
        Self::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::EnumType;

    static LEVEL: EnumType = EnumType::new("Level", &["LOW", "HIGH"]);

    #[test]
    fn test_float_equality_is_bitwise() {
        assert_eq!(FieldValue::Float(f64::NAN), FieldValue::Float(f64::NAN));
        assert_ne!(FieldValue::Float(0.0), FieldValue::Float(-0.0));
        assert_ne!(FieldValue::Float(1.0), FieldValue::Integer(1));
    }

    #[test]
    fn test_conform_coerces_string_to_enum() {
        let value = FieldValue::from("HIGH").conform(&WireType::Enum(&LEVEL)).unwrap();
        assert_eq!(value, FieldValue::Enum(EnumValue::Known("HIGH")));

        let value = FieldValue::from("EXTREME").conform(&WireType::Enum(&LEVEL)).unwrap();
        assert_eq!(value.as_enum().map(|e| e.is_unknown()), Some(true));
    }

    #[test]
    fn test_conform_widens_integer_to_float() {
        let value = FieldValue::from(3).conform(&WireType::Float).unwrap();
        assert_eq!(value, FieldValue::Float(3.0));
    }

    #[test]
    fn test_conform_rejects_mismatch() {
        assert_eq!(FieldValue::from(true).conform(&WireType::String), Err("boolean"));
        assert_eq!(FieldValue::from(1.5).conform(&WireType::Integer), Err("float"));
    }

    #[test]
    fn test_conform_checks_list_elements() {
        let ty = WireType::list(WireType::Integer);
        assert!(FieldValue::from(vec![1, 2, 3]).conform(&ty).is_ok());

        let mixed = FieldValue::List(vec![FieldValue::from(1), FieldValue::from("two")]);
        assert_eq!(mixed.conform(&ty), Err("string"));
    }

    #[test]
    fn test_null_conforms_to_anything() {
        assert_eq!(FieldValue::Null.conform(&WireType::DateTime), Ok(FieldValue::Null));
        assert_eq!(FieldValue::from(None::<i64>), FieldValue::Null);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(FieldValue::from("x").as_str(), Some("x"));
        assert_eq!(FieldValue::from(7).as_f64(), Some(7.0));
        assert_eq!(FieldValue::from(7).as_str(), None);
        assert_eq!(FieldValue::from(vec!["a"]).as_list().map(<[_]>::len), Some(1));
        assert_eq!(FieldValue::Null.kind(), "null");
    }
}
