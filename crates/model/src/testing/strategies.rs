//! `proptest` strategies for record instances.
//!
//! Generated instances are encodable and decode back to themselves:
//! - floats are finite
//! - defaulted fields are always set
//! - a polymorphic base's discriminator is either unset or a literal with no
//!   registered subtype, so the payload resolves to the same type again

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use proptest::prelude::*;
use proptest::strategy::Union;

use crate::enums::{EnumType, EnumValue};
use crate::instance::Instance;
use crate::schema::{Discriminator, RecordType, WireType};
use crate::value::FieldValue;

/// Nesting levels of records generated below the top-level instance.
pub const DEFAULT_RECORD_DEPTH: u32 = 2;

/// Arbitrary instances of `ty` or, when `ty` is polymorphic, of any of its
/// registered subtypes.
pub fn instance_strategy(ty: &'static RecordType) -> BoxedStrategy<Instance> {
    instance_with_depth(ty, DEFAULT_RECORD_DEPTH)
}

/// Like [`instance_strategy`], with an explicit nesting bound.
pub fn instance_with_depth(ty: &'static RecordType, depth: u32) -> BoxedStrategy<Instance> {
    let mut choices = vec![exact_instance(ty, depth)];
    if let Some(discriminator) = ty.discriminator() {
        choices.extend(
            discriminator
                .subtypes()
                .filter(|subtype| subtype.name() != ty.name())
                .map(|subtype| instance_with_depth(subtype, depth)),
        );
    }
    Union::new(choices).boxed()
}

/// Arbitrary instances of exactly `ty`.
fn exact_instance(ty: &'static RecordType, depth: u32) -> BoxedStrategy<Instance> {
    let pinned = ty.pinned().map(|p| p.field_index());
    let dispatch = ty
        .discriminator()
        .and_then(|d| ty.fields().iter().position(|f| f.wire_key() == d.wire_key()));

    let slots: Vec<BoxedStrategy<Option<FieldValue>>> = ty
        .fields()
        .iter()
        .enumerate()
        .map(|(index, field)| {
            if pinned == Some(index) {
                Just(None).boxed()
            } else if dispatch == Some(index) {
                unregistered_discriminator(field.ty(), ty.discriminator())
            } else if field.default_value().is_some() {
                value_strategy(field.ty(), depth).prop_map(Some).boxed()
            } else {
                proptest::option::of(field_strategy(field.ty(), depth)).boxed()
            }
        })
        .collect();

    slots
        .prop_map(move |values| {
            let mut instance = Instance::new(ty);
            for (index, value) in values.into_iter().enumerate() {
                if let Some(value) = value {
                    instance.set_slot(index, value);
                }
            }
            instance
        })
        .boxed()
}

/// A discriminator value that does not select a subtype.
fn unregistered_discriminator(
    ty: &WireType,
    discriminator: Option<&Discriminator>,
) -> BoxedStrategy<Option<FieldValue>> {
    let registered: Vec<&'static str> = discriminator
        .map(|d| d.literals().collect())
        .unwrap_or_default();
    let literal = "[A-Z][A-Z_]{0,11}"
        .prop_filter("registered discriminator literal", move |raw| {
            !registered.iter().any(|literal| *literal == raw.as_str())
        });
    match ty {
        WireType::Enum(enum_type) => {
            let enum_type: &'static EnumType = enum_type;
            proptest::option::of(literal.prop_map(move |raw| FieldValue::Enum(enum_type.coerce(&raw))))
                .boxed()
        }
        _ => proptest::option::of(literal.prop_map(FieldValue::String)).boxed(),
    }
}

/// A value or an explicit null.
fn field_strategy(ty: &WireType, depth: u32) -> BoxedStrategy<FieldValue> {
    prop_oneof![
        1 => Just(FieldValue::Null),
        8 => value_strategy(ty, depth),
    ]
    .boxed()
}

fn value_strategy(ty: &WireType, depth: u32) -> BoxedStrategy<FieldValue> {
    match ty {
        WireType::String => "[a-zA-Z0-9 ._-]{0,16}".prop_map(FieldValue::String).boxed(),
        WireType::Integer => any::<i64>().prop_map(FieldValue::Integer).boxed(),
        WireType::Float => (-1.0e12f64..1.0e12).prop_map(FieldValue::Float).boxed(),
        WireType::Boolean => any::<bool>().prop_map(FieldValue::Boolean).boxed(),
        WireType::DateTime => date_time_strategy().prop_map(FieldValue::DateTime).boxed(),
        WireType::Enum(enum_type) => enum_strategy(enum_type).prop_map(FieldValue::Enum).boxed(),
        WireType::Record(nested) => {
            if depth == 0 {
                Just(FieldValue::Null).boxed()
            } else {
                instance_with_depth(nested(), depth - 1)
                    .prop_map(|instance| FieldValue::Record(Box::new(instance)))
                    .boxed()
            }
        }
        WireType::List(element) => {
            proptest::collection::vec(field_strategy(element, depth), 0..3)
                .prop_map(FieldValue::List)
                .boxed()
        }
        WireType::Map(element) => {
            proptest::collection::btree_map("[a-z]{1,8}", field_strategy(element, depth), 0..3)
                .prop_map(|entries: BTreeMap<String, FieldValue>| FieldValue::Map(entries))
                .boxed()
        }
    }
}

/// Declared literals, with the occasional literal from a newer server.
pub fn enum_strategy(enum_type: &'static EnumType) -> BoxedStrategy<EnumValue> {
    let known = proptest::sample::select(enum_type.literals()).prop_map(EnumValue::Known);
    let unknown = "[A-Z][A-Z_]{0,11}"
        .prop_filter("declared literal", move |raw| !enum_type.contains(raw))
        .prop_map(EnumValue::Unknown);
    prop_oneof![4 => known, 1 => unknown].boxed()
}

/// Timestamps between 1970 and 2100 with nanosecond precision and a whole
/// hour offset.
pub fn date_time_strategy() -> BoxedStrategy<DateTime<FixedOffset>> {
    (0i64..4_102_444_800, 0u32..1_000_000_000, -12i32..=14)
        .prop_filter_map("representable timestamp", |(secs, nanos, hours)| {
            let offset = FixedOffset::east_opt(hours * 3600)?;
            DateTime::from_timestamp(secs, nanos).map(|utc| utc.with_timezone(&offset))
        })
        .boxed()
}
