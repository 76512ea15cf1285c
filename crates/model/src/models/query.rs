//! Query export requests.

use std::sync::LazyLock;

use super::common::SUB_SYSTEM;
use crate::enums::EnumType;
use crate::schema::{FieldDescriptor, RecordType};

pub static OUTPUT_FORMAT: EnumType = EnumType::new("OutputFormat", &["CSV", "JSON"]);

pub fn time_range() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("TimeRange")
            .field(FieldDescriptor::date_time("time_start", "timeStart"))
            .field(FieldDescriptor::date_time("time_end", "timeEnd"))
            .field(FieldDescriptor::string("time_zone", "timeZone"))
            .build()
    });
    &TYPE
}

/// Body of an export-query-result request. `output_format` defaults to `CSV`.
pub fn export_details() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("ExportDetails")
            .field(FieldDescriptor::string("compartment_id", "compartmentId"))
            .field(
                FieldDescriptor::boolean("compartment_id_in_subtree", "compartmentIdInSubtree")
                    .with_default(false),
            )
            .field(FieldDescriptor::string("query_string", "queryString"))
            .field(FieldDescriptor::enumeration("sub_system", "subSystem", &SUB_SYSTEM))
            .field(FieldDescriptor::integer("max_total_count", "maxTotalCount"))
            .field(FieldDescriptor::record("time_filter", "timeFilter", time_range))
            .field(FieldDescriptor::string("query_timezone", "queryTimezone"))
            .field(
                FieldDescriptor::enumeration("output_format", "outputFormat", &OUTPUT_FORMAT)
                    .with_default("CSV"),
            )
            .field(FieldDescriptor::boolean("should_localize", "shouldLocalize"))
            .field(FieldDescriptor::boolean(
                "should_use_acceleration",
                "shouldUseAcceleration",
            ))
            .build()
    });
    &TYPE
}
