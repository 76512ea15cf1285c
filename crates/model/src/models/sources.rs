//! Log sources and labels.

use std::sync::LazyLock;

use super::parsers::log_analytics_parser;
use crate::enums::EnumType;
use crate::schema::{FieldDescriptor, RecordType, WireType};

pub static LABEL_PRIORITY: EnumType =
    EnumType::new("LabelPriority", &["NONE", "LOW", "MEDIUM", "HIGH"]);

pub fn log_analytics_source_label() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("LogAnalyticsSourceLabel")
            .field(FieldDescriptor::string("label", "label"))
            .field(FieldDescriptor::string("label_display_name", "labelDisplayName"))
            .field(FieldDescriptor::string("label_condition", "labelCondition"))
            .field(FieldDescriptor::string("description", "description"))
            .field(FieldDescriptor::enumeration("priority", "priority", &LABEL_PRIORITY))
            .field(FieldDescriptor::boolean("is_system", "isSystem"))
            .build()
    });
    &TYPE
}

pub fn log_analytics_source() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("LogAnalyticsSource")
            .field(FieldDescriptor::string("name", "name"))
            .field(FieldDescriptor::string("display_name", "displayName"))
            .field(FieldDescriptor::string("description", "description"))
            .field(FieldDescriptor::integer("source_id", "sourceId"))
            .field(FieldDescriptor::string("type_name", "typeName"))
            .field(FieldDescriptor::boolean("is_system", "isSystem"))
            .field(FieldDescriptor::boolean("is_secure_content", "isSecureContent"))
            .field(FieldDescriptor::boolean(
                "is_auto_association_enabled",
                "isAutoAssociationEnabled",
            ))
            .field(FieldDescriptor::boolean(
                "is_auto_association_override",
                "isAutoAssociationOverride",
            ))
            .field(FieldDescriptor::integer("association_count", "associationCount"))
            .field(FieldDescriptor::integer("warning_config", "warningConfig"))
            .field(FieldDescriptor::list("entity_types", "entityTypes", WireType::String))
            .field(FieldDescriptor::list(
                "parsers",
                "parsers",
                WireType::Record(log_analytics_parser),
            ))
            .field(FieldDescriptor::list(
                "labels",
                "labels",
                WireType::Record(log_analytics_source_label),
            ))
            .field(FieldDescriptor::date_time("time_updated", "timeUpdated"))
            .field(FieldDescriptor::map("freeform_tags", "freeformTags", WireType::String))
            .build()
    });
    &TYPE
}
