//! Log parsers and their field mappings.

use std::sync::LazyLock;

use crate::enums::EnumType;
use crate::schema::{FieldDescriptor, RecordType, WireType};

pub static PARSER_TYPE: EnumType =
    EnumType::new("ParserType", &["XML", "JSON", "REGEX", "ODL", "DELIMITED"]);

pub fn log_analytics_parser_field() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("LogAnalyticsParserField")
            .field(FieldDescriptor::string("field_name", "fieldName"))
            .field(FieldDescriptor::string("field_display_name", "fieldDisplayName"))
            .field(FieldDescriptor::integer("parser_field_id", "parserFieldId"))
            .field(FieldDescriptor::string("parser_field_expression", "parserFieldExpression"))
            .field(FieldDescriptor::string("parser_field_name", "parserFieldName"))
            .field(FieldDescriptor::integer("parser_field_sequence", "parserFieldSequence"))
            .field(FieldDescriptor::string("parser_name", "parserName"))
            .field(FieldDescriptor::string("storage_field_name", "storageFieldName"))
            .field(FieldDescriptor::string("structured_column_info", "structuredColumnInfo"))
            .build()
    });
    &TYPE
}

pub fn log_analytics_parser() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("LogAnalyticsParser")
            .field(FieldDescriptor::string("name", "name"))
            .field(FieldDescriptor::string("display_name", "displayName"))
            .field(FieldDescriptor::string("description", "description"))
            .field(FieldDescriptor::string("content", "content"))
            .field(FieldDescriptor::string("encoding", "encoding"))
            .field(FieldDescriptor::string("example_content", "exampleContent"))
            .field(FieldDescriptor::list(
                "field_maps",
                "fieldMaps",
                WireType::Record(log_analytics_parser_field),
            ))
            .field(FieldDescriptor::string("field_delimiter", "fieldDelimiter"))
            .field(FieldDescriptor::string("field_qualifier", "fieldQualifier"))
            .field(FieldDescriptor::string("footer_content", "footerContent"))
            .field(FieldDescriptor::string("header_content", "headerContent"))
            .field(FieldDescriptor::boolean("is_default", "isDefault"))
            .field(FieldDescriptor::boolean("is_single_line_content", "isSingleLineContent"))
            .field(FieldDescriptor::boolean("is_system", "isSystem"))
            .field(FieldDescriptor::string("language", "language"))
            .field(FieldDescriptor::date_time("time_updated", "timeUpdated"))
            .field(FieldDescriptor::integer(
                "log_type_test_request_version",
                "logTypeTestRequestVersion",
            ))
            .field(FieldDescriptor::string(
                "parser_ignoreline_characters",
                "parserIgnorelineCharacters",
            ))
            .field(FieldDescriptor::integer("parser_sequence", "parserSequence"))
            .field(FieldDescriptor::string("parser_timezone", "parserTimezone"))
            .field(FieldDescriptor::boolean("is_parser_written_once", "isParserWrittenOnce"))
            .field(FieldDescriptor::boolean(
                "should_tokenize_original_text",
                "shouldTokenizeOriginalText",
            ))
            .field(FieldDescriptor::enumeration("type", "type", &PARSER_TYPE))
            .build()
    });
    &TYPE
}
