//! Record instances.
//!
//! Responsibilities:
//! - Hold one value slot per declared field, distinguishing "never set"
//!   from an explicit null.
//! - Conform assigned values to the declared wire type, coercing enum
//!   literals on the way in.
//! - Keep a subtype's discriminator pinned to its literal, and keep a base
//!   type's discriminator off the literals of its registered subtypes.
//!
//! Does NOT handle:
//! - Required-field validation. The service is the authority on what a
//!   request must contain.
//!
//! Invariants:
//! - `slots.len()` always equals the number of fields of `record_type`.
//! - Two instances are equal when they have the same record type and every
//!   slot is equal, including which slots are unset.

use std::hash::{Hash, Hasher};

use crate::error::{ModelError, Result};
use crate::schema::{FieldDescriptor, RecordType};
use crate::value::FieldValue;

/// A value of some record type.
#[derive(Debug, Clone)]
pub struct Instance {
    record_type: &'static RecordType,
    slots: Vec<Option<FieldValue>>,
}

impl Instance {
    /// Create an instance with every field unset, apart from a subtype's
    /// pinned discriminator.
    pub fn new(record_type: &'static RecordType) -> Self {
        let mut slots = vec![None; record_type.fields().len()];
        if let Some((index, value)) = record_type.pinned_value() {
            slots[index] = Some(value);
        }
        Self { record_type, slots }
    }

    pub fn record_type(&self) -> &'static RecordType {
        self.record_type
    }

    pub fn type_name(&self) -> &'static str {
        self.record_type.name()
    }

    /// Whether this instance's type is `ty` or one of its subtypes.
    pub fn is_a(&self, ty: &RecordType) -> bool {
        self.record_type.is_subtype_of(ty)
    }

    /// Value of the field with logical name `name`, or `None` when the
    /// field is unset or not declared.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        let index = self.record_type.field_index(name)?;
        self.slots[index].as_ref()
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Assign a field by logical name.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownField`] for undeclared names,
    /// [`ModelError::PinnedField`] for a subtype's discriminator,
    /// [`ModelError::SubtypeLiteral`] when a base type's discriminator would
    /// select a registered subtype, and [`ModelError::TypeMismatch`] when
    /// the value does not fit the field.
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        let index = self.writable_index(name)?;
        let field = &self.record_type.fields()[index];
        let value = value
            .into()
            .conform(field.ty())
            .map_err(|found| ModelError::TypeMismatch {
                record: self.record_type.name(),
                field: field.name(),
                expected: field.ty().to_string(),
                found,
            })?;
        if let Some((literal, subtype)) = self.selected_subtype(index, &value) {
            return Err(ModelError::SubtypeLiteral {
                record: self.record_type.name(),
                field: field.name(),
                literal: literal.to_string(),
                subtype: subtype.name(),
            });
        }
        self.slots[index] = Some(value);
        Ok(())
    }

    /// Builder-style [`Self::set`].
    pub fn with(mut self, name: &str, value: impl Into<FieldValue>) -> Result<Self> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Clear a field, returning its previous value.
    pub fn unset(&mut self, name: &str) -> Result<Option<FieldValue>> {
        let index = self.writable_index(name)?;
        Ok(self.slots[index].take())
    }

    /// Declared fields paired with their current values, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldDescriptor, Option<&FieldValue>)> {
        self.record_type
            .fields()
            .iter()
            .zip(self.slots.iter().map(Option::as_ref))
    }

    pub(crate) fn set_slot(&mut self, index: usize, value: FieldValue) {
        self.slots[index] = Some(value);
    }

    /// The subtype `value` would select if stored in the discriminator slot
    /// of a base type, paired with the selecting literal.
    fn selected_subtype<'v>(
        &self,
        index: usize,
        value: &'v FieldValue,
    ) -> Option<(&'v str, &'static RecordType)> {
        let discriminator = self.record_type.discriminator()?;
        if self.record_type.fields()[index].wire_key() != discriminator.wire_key() {
            return None;
        }
        let literal = match value {
            FieldValue::Enum(e) => e.raw(),
            FieldValue::String(s) => s.as_str(),
            _ => return None,
        };
        discriminator
            .lookup(literal)
            .filter(|subtype| subtype.name() != self.record_type.name())
            .map(|subtype| (literal, subtype))
    }

    fn writable_index(&self, name: &str) -> Result<usize> {
        let index =
            self.record_type
                .field_index(name)
                .ok_or_else(|| ModelError::UnknownField {
                    record: self.record_type.name(),
                    field: name.to_string(),
                })?;
        if let Some(pinned) = self.record_type.pinned().filter(|p| p.field_index() == index) {
            return Err(ModelError::PinnedField {
                record: self.record_type.name(),
                field: self.record_type.fields()[index].name(),
                literal: pinned.literal(),
            });
        }
        Ok(index)
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.record_type.name() == other.record_type.name() && self.slots == other.slots
    }
}

impl Eq for Instance {}

impl Hash for Instance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.record_type.name().hash(state);
        self.slots.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::EnumValue;
    use crate::models::{purge_action, query, scheduled_tasks, storage};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_new_instance_has_pinned_discriminator() {
        let action = Instance::new(purge_action());
        assert_eq!(action.get("type"), Some(&FieldValue::Enum(EnumValue::Known("PURGE"))));
        assert!(!action.is_set("query_string"));
    }

    #[test]
    fn test_pinned_field_cannot_be_reassigned() {
        let mut action = Instance::new(purge_action());
        let err = action.set("type", "STREAM").unwrap_err();
        assert!(matches!(err, ModelError::PinnedField { literal: "PURGE", .. }));
        assert!(action.unset("type").is_err());
    }

    #[test]
    fn test_base_discriminator_rejects_registered_literal() {
        let mut action = Instance::new(scheduled_tasks::action());
        let err = action.set("type", "PURGE").unwrap_err();
        assert!(matches!(
            err,
            ModelError::SubtypeLiteral { record: "Action", subtype: "PurgeAction", .. }
        ));
        assert!(!action.is_set("type"));
    }

    #[test]
    fn test_base_discriminator_accepts_unregistered_literals() {
        let mut column = Instance::new(crate::models::abstract_column());
        column.set("type", "CHART_DATA_COLUMN").unwrap();
        column.set("type", "FUTURE_COLUMN").unwrap();
        column.set("type", FieldValue::Null).unwrap();
        assert!(column.unset("type").is_ok());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut action = Instance::new(purge_action());
        let err = action.set("queryString", "*").unwrap_err();
        assert!(matches!(err, ModelError::UnknownField { .. }));
    }

    #[test]
    fn test_set_coerces_enum_literals() {
        let mut action = Instance::new(purge_action());
        action.set("data_type", "LOG").unwrap();
        assert_eq!(action.get("data_type").and_then(FieldValue::as_enum), Some(&EnumValue::Known("LOG")));

        action.set("data_type", "METRICS").unwrap();
        let value = action.get("data_type").and_then(FieldValue::as_enum).unwrap();
        assert!(value.is_unknown());
    }

    #[test]
    fn test_set_rejects_wrong_type() {
        let mut action = Instance::new(purge_action());
        let err = action.set("compartment_id_in_subtree", "yes").unwrap_err();
        assert!(matches!(
            err,
            ModelError::TypeMismatch { field: "compartment_id_in_subtree", found: "string", .. }
        ));
    }

    #[test]
    fn test_nested_record_must_match_declared_type() {
        let range = Instance::new(query::time_range())
            .with("time_start", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
            .unwrap();
        let mut details = Instance::new(query::export_details());
        details.set("time_filter", range).unwrap();

        let err = details
            .set("time_filter", Instance::new(storage::purge_storage_data_details()))
            .unwrap_err();
        assert!(matches!(err, ModelError::TypeMismatch { found: "record", .. }));
    }

    #[test]
    fn test_subtype_accepted_where_base_declared() {
        let mut task = Instance::new(scheduled_tasks::standard_task());
        task.set("action", Instance::new(purge_action())).unwrap();
        assert!(task.get("action").and_then(FieldValue::as_record).unwrap().is_a(scheduled_tasks::action()));
    }

    #[test]
    fn test_unset_and_explicit_null_differ() {
        let mut a = Instance::new(purge_action());
        let b = Instance::new(purge_action());
        assert_eq!(a, b);

        a.set("query_string", FieldValue::Null).unwrap();
        assert_ne!(a, b);
        assert!(a.is_set("query_string"));

        assert_eq!(a.unset("query_string").unwrap(), Some(FieldValue::Null));
        assert_eq!(a, b);
    }

    #[test]
    fn test_fields_follow_declaration_order() {
        let names: Vec<_> = Instance::new(purge_action()).fields().map(|(f, _)| f.name()).collect();
        assert_eq!(names.first(), Some(&"type"));
        assert!(names.contains(&"purge_duration"));
    }
}
