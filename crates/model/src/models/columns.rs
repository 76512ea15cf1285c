//! Result columns of a query.
//!
//! `AbstractColumn` dispatches on `type`. `CHART_DATA_COLUMN` is a declared
//! literal without a registered subtype, so such columns decode as the base.

use std::sync::LazyLock;

use super::common::SUB_SYSTEM;
use crate::enums::EnumType;
use crate::schema::{FieldDescriptor, RecordType, WireType};

pub static COLUMN_TYPE: EnumType = EnumType::new(
    "ColumnType",
    &[
        "COLUMN",
        "CHART_COLUMN",
        "CHART_DATA_COLUMN",
        "TABLE_COLUMN",
        "TIME_COLUMN",
        "TREND_COLUMN",
    ],
);

pub static VALUE_TYPE: EnumType = EnumType::new(
    "ValueType",
    &[
        "BOOLEAN", "STRING", "DOUBLE", "FLOAT", "LONG", "INTEGER", "TIMESTAMP", "FACET", "TABLE",
    ],
);

pub fn abstract_column() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("AbstractColumn")
            .field(FieldDescriptor::enumeration("type", "type", &COLUMN_TYPE))
            .field(FieldDescriptor::string("display_name", "displayName"))
            .field(FieldDescriptor::enumeration("sub_system", "subSystem", &SUB_SYSTEM))
            .field(FieldDescriptor::boolean("is_list_of_values", "isListOfValues"))
            .field(FieldDescriptor::boolean("is_multi_valued", "isMultiValued"))
            .field(FieldDescriptor::boolean("is_case_sensitive", "isCaseSensitive"))
            .field(FieldDescriptor::boolean("is_groupable", "isGroupable"))
            .field(FieldDescriptor::boolean("is_evaluable", "isEvaluable"))
            .field(FieldDescriptor::boolean("is_hidden", "isHidden"))
            .field(FieldDescriptor::enumeration("value_type", "valueType", &VALUE_TYPE))
            .field(FieldDescriptor::string("original_display_name", "originalDisplayName"))
            .field(FieldDescriptor::string("internal_name", "internalName"))
            .discriminator(
                "type",
                &[
                    ("COLUMN", column),
                    ("CHART_COLUMN", chart_column),
                    ("TABLE_COLUMN", table_column),
                    ("TIME_COLUMN", time_column),
                    ("TREND_COLUMN", trend_column),
                ],
            )
            .build()
    });
    &TYPE
}

pub fn column() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("Column")
            .extends(abstract_column())
            .field(FieldDescriptor::list("values", "values", WireType::String))
            .pinned("type", "COLUMN")
            .build()
    });
    &TYPE
}

pub fn chart_column() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("ChartColumn")
            .extends(abstract_column())
            .field(FieldDescriptor::list("series", "series", WireType::String))
            .pinned("type", "CHART_COLUMN")
            .build()
    });
    &TYPE
}

/// A column holding a nested table; `columns` may itself contain table
/// columns.
pub fn table_column() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("TableColumn")
            .extends(abstract_column())
            .field(FieldDescriptor::list(
                "columns",
                "columns",
                WireType::Record(abstract_column),
            ))
            .field(FieldDescriptor::list(
                "result",
                "result",
                WireType::map(WireType::String),
            ))
            .pinned("type", "TABLE_COLUMN")
            .build()
    });
    &TYPE
}

pub fn time_column() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("TimeColumn")
            .extends(abstract_column())
            .field(FieldDescriptor::string("timezone", "timezone"))
            .pinned("type", "TIME_COLUMN")
            .build()
    });
    &TYPE
}

pub fn trend_column() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("TrendColumn")
            .extends(abstract_column())
            .field(FieldDescriptor::string("interval_gap", "intervalGap"))
            .field(FieldDescriptor::list("intervals", "intervals", WireType::Integer))
            .field(FieldDescriptor::list(
                "total_interval_counts",
                "totalIntervalCounts",
                WireType::Integer,
            ))
            .field(FieldDescriptor::list(
                "total_interval_counts_after_filter",
                "totalIntervalCountsAfterFilter",
                WireType::Integer,
            ))
            .field(FieldDescriptor::list(
                "interval_group_counts",
                "intervalGroupCounts",
                WireType::Integer,
            ))
            .pinned("type", "TREND_COLUMN")
            .build()
    });
    &TYPE
}
