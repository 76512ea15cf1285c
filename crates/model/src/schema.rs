//! Declarative record type descriptors.
//!
//! Responsibilities:
//! - Describe each record type: its ordered fields, their logical names,
//!   wire keys, wire types and defaults.
//! - Describe inheritance: a subtype extends a base, inherits its fields and
//!   pins the base's discriminator field to its own literal.
//! - Validate a descriptor once, when it is built.
//!
//! Does NOT handle:
//! - Decoding or encoding (see [`crate::codec`]).
//! - Holding field values (see [`crate::Instance`]).
//!
//! Invariants:
//! - Within a record type, logical names are unique, wire keys are unique and
//!   no spelling accepted for one field is accepted for another.
//! - A subtype lists every base field first, in the base's order.
//! - Record types refer to each other through [`RecordRef`] function
//!   pointers, so cyclic references (a base listing its subtypes, a subtype
//!   extending its base) never require eager construction.

use std::fmt;

use crate::enums::{EnumType, EnumValue};
use crate::value::FieldValue;

/// Lazily resolved reference to a record type.
pub type RecordRef = fn() -> &'static RecordType;

/// The declared type of a field on the wire.
#[derive(Debug, Clone)]
pub enum WireType {
    String,
    Integer,
    Float,
    Boolean,
    /// RFC3339 timestamp.
    DateTime,
    Enum(&'static EnumType),
    Record(RecordRef),
    List(Box<WireType>),
    /// JSON object with string keys.
    Map(Box<WireType>),
}

impl WireType {
    pub fn list(inner: WireType) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn map(inner: WireType) -> Self {
        Self::Map(Box::new(inner))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Integer => f.write_str("integer"),
            Self::Float => f.write_str("float"),
            Self::Boolean => f.write_str("boolean"),
            Self::DateTime => f.write_str("date-time"),
            Self::Enum(e) => write!(f, "enum {}", e.name()),
            Self::Record(r) => write!(f, "record {}", r().name()),
            Self::List(inner) => write!(f, "list<{inner}>"),
            Self::Map(inner) => write!(f, "map<{inner}>"),
        }
    }
}

/// One field of a record type.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: &'static str,
    wire_key: &'static str,
    ty: WireType,
    default: Option<FieldValue>,
}

impl FieldDescriptor {
    pub fn new(name: &'static str, wire_key: &'static str, ty: WireType) -> Self {
        Self {
            name,
            wire_key,
            ty,
            default: None,
        }
    }

    pub fn string(name: &'static str, wire_key: &'static str) -> Self {
        Self::new(name, wire_key, WireType::String)
    }

    pub fn integer(name: &'static str, wire_key: &'static str) -> Self {
        Self::new(name, wire_key, WireType::Integer)
    }

    pub fn float(name: &'static str, wire_key: &'static str) -> Self {
        Self::new(name, wire_key, WireType::Float)
    }

    pub fn boolean(name: &'static str, wire_key: &'static str) -> Self {
        Self::new(name, wire_key, WireType::Boolean)
    }

    pub fn date_time(name: &'static str, wire_key: &'static str) -> Self {
        Self::new(name, wire_key, WireType::DateTime)
    }

    pub fn enumeration(
        name: &'static str,
        wire_key: &'static str,
        enum_type: &'static EnumType,
    ) -> Self {
        Self::new(name, wire_key, WireType::Enum(enum_type))
    }

    pub fn record(name: &'static str, wire_key: &'static str, record: RecordRef) -> Self {
        Self::new(name, wire_key, WireType::Record(record))
    }

    pub fn list(name: &'static str, wire_key: &'static str, element: WireType) -> Self {
        Self::new(name, wire_key, WireType::list(element))
    }

    pub fn map(name: &'static str, wire_key: &'static str, value: WireType) -> Self {
        Self::new(name, wire_key, WireType::map(value))
    }

    /// Attach a default, injected by the decoder when neither spelling of
    /// the field is present in the payload.
    ///
    /// A string default on an enum field is stored as the enum value.
    pub fn with_default(mut self, value: impl Into<FieldValue>) -> Self {
        let value = match (value.into(), &self.ty) {
            (FieldValue::String(raw), WireType::Enum(e)) => FieldValue::Enum(e.coerce(&raw)),
            (value, _) => value,
        };
        self.default = Some(value);
        self
    }

    /// Logical (snake_case) name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Canonical (camelCase) key used on the wire.
    pub fn wire_key(&self) -> &'static str {
        self.wire_key
    }

    pub fn ty(&self) -> &WireType {
        &self.ty
    }

    pub fn default_value(&self) -> Option<&FieldValue> {
        self.default.as_ref()
    }

    /// The alternate input spelling, when it differs from the wire key.
    pub fn alias(&self) -> Option<&'static str> {
        (self.name != self.wire_key).then_some(self.name)
    }

    /// Spellings accepted on input: the wire key, then the logical name when
    /// it differs.
    pub fn accepted_keys(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.wire_key).chain(self.alias())
    }

    /// Whether `key` is one of the spellings accepted on input.
    pub fn accepts(&self, key: &str) -> bool {
        key == self.wire_key || key == self.name
    }
}

/// Dispatch table from discriminator literal to subtype.
#[derive(Debug, Clone)]
pub struct Discriminator {
    wire_key: &'static str,
    variants: Vec<(&'static str, RecordRef)>,
}

impl Discriminator {
    /// Wire key of the discriminator field. Only this spelling is consulted
    /// when resolving a subtype.
    pub fn wire_key(&self) -> &'static str {
        self.wire_key
    }

    pub fn lookup(&self, literal: &str) -> Option<&'static RecordType> {
        self.variants
            .iter()
            .find(|(candidate, _)| *candidate == literal)
            .map(|(_, subtype)| subtype())
    }

    pub fn literals(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.variants.iter().map(|(literal, _)| *literal)
    }

    pub fn subtypes(&self) -> impl Iterator<Item = &'static RecordType> + '_ {
        self.variants.iter().map(|(_, subtype)| subtype())
    }
}

/// Discriminator value fixed by a subtype.
#[derive(Debug, Clone, Copy)]
pub struct Pinned {
    field_index: usize,
    literal: &'static str,
}

impl Pinned {
    pub fn field_index(&self) -> usize {
        self.field_index
    }

    pub fn literal(&self) -> &'static str {
        self.literal
    }
}

/// Descriptor of one record type.
#[derive(Debug)]
pub struct RecordType {
    name: &'static str,
    fields: Vec<FieldDescriptor>,
    parent: Option<&'static RecordType>,
    discriminator: Option<Discriminator>,
    pinned: Option<Pinned>,
}

impl RecordType {
    pub fn builder(name: &'static str) -> RecordTypeBuilder {
        RecordTypeBuilder {
            name,
            fields: Vec::new(),
            parent: None,
            discriminator: None,
            pinned: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fields in declaration order, base fields first.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn parent(&self) -> Option<&'static RecordType> {
        self.parent
    }

    pub fn discriminator(&self) -> Option<&Discriminator> {
        self.discriminator.as_ref()
    }

    pub fn pinned(&self) -> Option<Pinned> {
        self.pinned
    }

    /// A base type with registered subtypes.
    pub fn is_abstract(&self) -> bool {
        self.discriminator.is_some()
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_by_wire_key(&self, wire_key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.wire_key == wire_key)
    }

    /// Whether any field accepts `key` as one of its spellings.
    pub fn accepts_key(&self, key: &str) -> bool {
        self.fields.iter().any(|f| f.accepts(key))
    }

    /// Whether this type is `other` or extends it, directly or transitively.
    pub fn is_subtype_of(&self, other: &RecordType) -> bool {
        let mut current = Some(self);
        while let Some(ty) = current {
            if ty.name == other.name {
                return true;
            }
            current = ty.parent;
        }
        false
    }

    /// Index and value of the pinned discriminator, if this is a subtype.
    pub(crate) fn pinned_value(&self) -> Option<(usize, FieldValue)> {
        let pinned = self.pinned?;
        let value = match &self.fields[pinned.field_index].ty {
            WireType::Enum(_) => FieldValue::Enum(EnumValue::Known(pinned.literal)),
            _ => FieldValue::String(pinned.literal.to_string()),
        };
        Some((pinned.field_index, value))
    }
}

/// Builder for [`RecordType`].
///
/// ```rust
/// use loganalytics_model::{FieldDescriptor, RecordType};
///
/// let ty = RecordType::builder("TimeRange")
///     .field(FieldDescriptor::date_time("time_start", "timeStart"))
///     .field(FieldDescriptor::date_time("time_end", "timeEnd"))
///     .build();
/// assert_eq!(ty.fields().len(), 2);
/// ```
#[derive(Debug)]
pub struct RecordTypeBuilder {
    name: &'static str,
    fields: Vec<FieldDescriptor>,
    parent: Option<&'static RecordType>,
    discriminator: Option<Discriminator>,
    pinned: Option<(&'static str, &'static str)>,
}

impl RecordTypeBuilder {
    /// Inherit every field of `parent`, ahead of any field declared here.
    pub fn extends(mut self, parent: &'static RecordType) -> Self {
        let mut fields = parent.fields.clone();
        fields.append(&mut self.fields);
        self.fields = fields;
        self.parent = Some(parent);
        self
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Fix the field named `field` to `literal` on every instance.
    pub fn pinned(mut self, field: &'static str, literal: &'static str) -> Self {
        self.pinned = Some((field, literal));
        self
    }

    /// Register subtypes selected by the value under `wire_key`.
    pub fn discriminator(
        mut self,
        wire_key: &'static str,
        variants: &[(&'static str, RecordRef)],
    ) -> Self {
        self.discriminator = Some(Discriminator {
            wire_key,
            variants: variants.to_vec(),
        });
        self
    }

    /// Validate and build the descriptor.
    ///
    /// Subtype references are not followed here, so a base type may list
    /// subtypes that extend it.
    ///
    /// # Panics
    ///
    /// Panics if the declaration is inconsistent: duplicate names, keys or
    /// accepted spellings, a discriminator or pin naming a missing field, a
    /// pinned literal outside the field's enum, or an enum default outside
    /// its declared literals. These are programming errors in a model
    /// declaration.
    pub fn build(self) -> RecordType {
        let name = self.name;

        for (i, field) in self.fields.iter().enumerate() {
            for other in &self.fields[i + 1..] {
                assert!(
                    !(other.accepts(field.name) || other.accepts(field.wire_key)),
                    "{name}: fields '{}' and '{}' share an accepted spelling",
                    field.name,
                    other.name
                );
            }
            if let (WireType::Enum(e), Some(FieldValue::Enum(EnumValue::Unknown(raw)))) =
                (&field.ty, &field.default)
            {
                panic!(
                    "{name}.{}: default '{raw}' is not a literal of {}",
                    field.name,
                    e.name()
                );
            }
        }

        if let Some(discriminator) = &self.discriminator {
            assert!(
                self.fields
                    .iter()
                    .any(|f| f.wire_key == discriminator.wire_key),
                "{name}: discriminator key '{}' is not a declared field",
                discriminator.wire_key
            );
        }

        let pinned = self.pinned.map(|(field_name, literal)| {
            let field_index = self
                .fields
                .iter()
                .position(|f| f.name == field_name)
                .unwrap_or_else(|| panic!("{name}: pinned field '{field_name}' is not declared"));
            if let WireType::Enum(e) = &self.fields[field_index].ty {
                assert!(
                    e.contains(literal),
                    "{name}: pinned literal '{literal}' is not a literal of {}",
                    e.name()
                );
            }
            Pinned {
                field_index,
                literal,
            }
        });

        RecordType {
            name,
            fields: self.fields,
            parent: self.parent,
            discriminator: self.discriminator,
            pinned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::LazyLock;

    static KIND: EnumType = EnumType::new("Kind", &["A", "B"]);

    fn shape() -> &'static RecordType {
        static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
            RecordType::builder("Shape")
                .field(FieldDescriptor::enumeration("kind", "kind", &KIND))
                .field(FieldDescriptor::string("display_name", "displayName"))
                .discriminator("kind", &[("A", shape_a)])
                .build()
        });
        &TYPE
    }

    fn shape_a() -> &'static RecordType {
        static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
            RecordType::builder("ShapeA")
                .extends(shape())
                .field(FieldDescriptor::integer("side_count", "sideCount"))
                .pinned("kind", "A")
                .build()
        });
        &TYPE
    }

    #[test]
    fn test_subtype_inherits_base_fields_first() {
        let names: Vec<_> = shape_a().fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["kind", "display_name", "side_count"]);
    }

    #[test]
    fn test_subtype_relation() {
        assert!(shape_a().is_subtype_of(shape()));
        assert!(shape().is_subtype_of(shape()));
        assert!(!shape().is_subtype_of(shape_a()));
    }

    #[test]
    fn test_discriminator_lookup() {
        let discriminator = shape().discriminator().unwrap();
        assert_eq!(discriminator.lookup("A").map(|t| t.name()), Some("ShapeA"));
        assert!(discriminator.lookup("B").is_none());
        assert_eq!(discriminator.literals().collect::<Vec<_>>(), vec!["A"]);
    }

    #[test]
    fn test_pinned_value_is_enum() {
        let (index, value) = shape_a().pinned_value().unwrap();
        assert_eq!(index, 0);
        assert_eq!(value, FieldValue::Enum(EnumValue::Known("A")));
        assert!(shape().pinned_value().is_none());
    }

    #[test]
    fn test_alias_only_when_spelling_differs() {
        let field = FieldDescriptor::string("display_name", "displayName");
        assert_eq!(field.alias(), Some("display_name"));
        assert!(field.accepts("displayName"));
        assert!(field.accepts("display_name"));
        assert!(!field.accepts("DisplayName"));

        assert_eq!(
            field.accepted_keys().collect::<Vec<_>>(),
            vec!["displayName", "display_name"]
        );

        let field = FieldDescriptor::string("name", "name");
        assert_eq!(field.alias(), None);
        assert_eq!(field.accepted_keys().collect::<Vec<_>>(), vec!["name"]);
    }

    #[test]
    fn test_enum_default_is_coerced() {
        let field = FieldDescriptor::enumeration("kind", "kind", &KIND).with_default("B");
        assert_eq!(
            field.default_value(),
            Some(&FieldValue::Enum(EnumValue::Known("B")))
        );
    }

    #[test]
    fn test_wire_type_display() {
        assert_eq!(WireType::list(WireType::Integer).to_string(), "list<integer>");
        assert_eq!(WireType::Enum(&KIND).to_string(), "enum Kind");
        assert_eq!(WireType::Record(shape).to_string(), "record Shape");
        assert_eq!(WireType::map(WireType::String).to_string(), "map<string>");
    }

    #[test]
    #[should_panic(expected = "share an accepted spelling")]
    fn test_duplicate_spelling_panics() {
        RecordType::builder("Broken")
            .field(FieldDescriptor::string("display_name", "displayName"))
            .field(FieldDescriptor::string("other", "display_name"))
            .build();
    }

    #[test]
    #[should_panic(expected = "is not a literal of Kind")]
    fn test_pinned_literal_outside_enum_panics() {
        RecordType::builder("Broken")
            .field(FieldDescriptor::enumeration("kind", "kind", &KIND))
            .pinned("kind", "Z")
            .build();
    }

    #[test]
    #[should_panic(expected = "is not a declared field")]
    fn test_discriminator_on_missing_field_panics() {
        RecordType::builder("Broken")
            .field(FieldDescriptor::string("name", "name"))
            .discriminator("kind", &[])
            .build();
    }
}
