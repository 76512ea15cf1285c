//! Catalog of log-analytics payload shapes.
//!
//! Each record type is declared once, lazily, and referenced through a
//! function returning `&'static RecordType`. Enum types are plain statics.

pub mod columns;
pub mod common;
pub mod parsers;
pub mod query;
pub mod scheduled_tasks;
pub mod sources;
pub mod storage;

use crate::schema::RecordType;

pub use columns::{abstract_column, chart_column, column, table_column, time_column, trend_column};
pub use parsers::{log_analytics_parser, log_analytics_parser_field};
pub use query::{export_details, time_range};
pub use scheduled_tasks::{
    acceleration_task, action, auto_schedule, cron_schedule, fixed_frequency_schedule,
    metric_extraction, purge_action, schedule, scheduled_task, standard_task, stream_action,
};
pub use sources::{log_analytics_source, log_analytics_source_label};
pub use storage::{
    purge_storage_data_details, recall_archived_data_details, storage_work_request,
};

/// Every record type in the catalog.
pub fn all() -> Vec<&'static RecordType> {
    vec![
        abstract_column(),
        column(),
        chart_column(),
        table_column(),
        time_column(),
        trend_column(),
        log_analytics_parser(),
        log_analytics_parser_field(),
        log_analytics_source(),
        log_analytics_source_label(),
        scheduled_task(),
        standard_task(),
        acceleration_task(),
        schedule(),
        fixed_frequency_schedule(),
        cron_schedule(),
        auto_schedule(),
        action(),
        purge_action(),
        stream_action(),
        metric_extraction(),
        storage_work_request(),
        purge_storage_data_details(),
        recall_archived_data_details(),
        export_details(),
        time_range(),
    ]
}
