//! Scheduled tasks, their schedules and actions.
//!
//! Three polymorphic hierarchies live here:
//! - `ScheduledTask` dispatches on `kind`
//! - `Schedule` dispatches on `type`
//! - `Action` dispatches on `type`

use std::sync::LazyLock;

use super::common::{LIFECYCLE_STATE, STORAGE_DATA_TYPE};
use crate::enums::EnumType;
use crate::schema::{FieldDescriptor, RecordType, WireType};

pub static TASK_KIND: EnumType = EnumType::new("TaskKind", &["ACCELERATION", "STANDARD"]);

pub static TASK_TYPE: EnumType = EnumType::new(
    "TaskType",
    &["SAVED_SEARCH", "ACCELERATION", "PURGE", "ACCELERATION_MAINTENANCE"],
);

pub static TASK_STATUS: EnumType = EnumType::new(
    "TaskStatus",
    &["READY", "PAUSED", "COMPLETED", "BLOCKED"],
);

pub static PAUSE_REASON: EnumType = EnumType::new(
    "PauseReason",
    &[
        "METRIC_EXTRACTION_NOT_VALID",
        "SAVED_SEARCH_NOT_VALID",
        "SAVED_SEARCH_NOT_FOUND",
        "QUERY_STRING_NOT_VALID",
        "USER_ACTION",
        "TENANCY_LIFECYCLE",
    ],
);

pub static LAST_EXECUTION_STATUS: EnumType =
    EnumType::new("LastExecutionStatus", &["FAILED", "SUCCEEDED"]);

pub static SCHEDULE_TYPE: EnumType =
    EnumType::new("ScheduleType", &["FIXED_FREQUENCY", "CRON", "AUTO"]);

pub static MISFIRE_POLICY: EnumType = EnumType::new(
    "MisfirePolicy",
    &["RETRY_ONCE", "RETRY_INDEFINITELY", "SKIP"],
);

pub static ACTION_TYPE: EnumType = EnumType::new("ActionType", &["STREAM", "PURGE"]);

pub fn scheduled_task() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("ScheduledTask")
            .field(FieldDescriptor::enumeration("kind", "kind", &TASK_KIND))
            .field(FieldDescriptor::string("id", "id"))
            .field(FieldDescriptor::string("display_name", "displayName"))
            .field(FieldDescriptor::enumeration("task_type", "taskType", &TASK_TYPE))
            .field(FieldDescriptor::list(
                "schedules",
                "schedules",
                WireType::Record(schedule),
            ))
            .field(FieldDescriptor::record("action", "action", action))
            .field(FieldDescriptor::string("compartment_id", "compartmentId"))
            .field(FieldDescriptor::date_time("time_created", "timeCreated"))
            .field(FieldDescriptor::date_time("time_updated", "timeUpdated"))
            .field(FieldDescriptor::enumeration(
                "lifecycle_state",
                "lifecycleState",
                &LIFECYCLE_STATE,
            ))
            .field(FieldDescriptor::enumeration("task_status", "taskStatus", &TASK_STATUS))
            .field(FieldDescriptor::enumeration("pause_reason", "pauseReason", &PAUSE_REASON))
            .field(FieldDescriptor::string("work_request_id", "workRequestId"))
            .field(FieldDescriptor::integer("num_occurrences", "numOccurrences"))
            .field(FieldDescriptor::date_time(
                "time_of_next_execution",
                "timeOfNextExecution",
            ))
            .field(FieldDescriptor::map("freeform_tags", "freeformTags", WireType::String))
            .field(FieldDescriptor::map(
                "defined_tags",
                "definedTags",
                WireType::map(WireType::String),
            ))
            .discriminator(
                "kind",
                &[
                    ("ACCELERATION", acceleration_task),
                    ("STANDARD", standard_task),
                ],
            )
            .build()
    });
    &TYPE
}

pub fn standard_task() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("StandardTask")
            .extends(scheduled_task())
            .field(FieldDescriptor::enumeration(
                "last_execution_status",
                "lastExecutionStatus",
                &LAST_EXECUTION_STATUS,
            ))
            .field(FieldDescriptor::date_time("time_last_executed", "timeLastExecuted"))
            .pinned("kind", "STANDARD")
            .build()
    });
    &TYPE
}

pub fn acceleration_task() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("AccelerationTask")
            .extends(scheduled_task())
            .field(FieldDescriptor::string("saved_search_id", "savedSearchId"))
            .field(FieldDescriptor::string("saved_search_name", "savedSearchName"))
            .pinned("kind", "ACCELERATION")
            .build()
    });
    &TYPE
}

pub fn schedule() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("Schedule")
            .field(FieldDescriptor::enumeration("type", "type", &SCHEDULE_TYPE))
            .field(FieldDescriptor::enumeration(
                "misfire_policy",
                "misfirePolicy",
                &MISFIRE_POLICY,
            ))
            .field(FieldDescriptor::date_time(
                "time_of_first_execution",
                "timeOfFirstExecution",
            ))
            .discriminator(
                "type",
                &[
                    ("FIXED_FREQUENCY", fixed_frequency_schedule),
                    ("CRON", cron_schedule),
                    ("AUTO", auto_schedule),
                ],
            )
            .build()
    });
    &TYPE
}

pub fn fixed_frequency_schedule() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("FixedFrequencySchedule")
            .extends(schedule())
            .field(FieldDescriptor::string("recurring_interval", "recurringInterval"))
            .field(FieldDescriptor::integer("repeat_count", "repeatCount"))
            .pinned("type", "FIXED_FREQUENCY")
            .build()
    });
    &TYPE
}

pub fn cron_schedule() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("CronSchedule")
            .extends(schedule())
            .field(FieldDescriptor::string("expression", "expression"))
            .field(FieldDescriptor::string("time_zone", "timeZone"))
            .pinned("type", "CRON")
            .build()
    });
    &TYPE
}

pub fn auto_schedule() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("AutoSchedule")
            .extends(schedule())
            .pinned("type", "AUTO")
            .build()
    });
    &TYPE
}

pub fn action() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("Action")
            .field(FieldDescriptor::enumeration("type", "type", &ACTION_TYPE))
            .discriminator(
                "type",
                &[("PURGE", purge_action), ("STREAM", stream_action)],
            )
            .build()
    });
    &TYPE
}

/// Purges data matching `query_string` older than `purge_duration`, an
/// ISO-8601 period such as `-P30D`.
pub fn purge_action() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("PurgeAction")
            .extends(action())
            .field(FieldDescriptor::string("query_string", "queryString"))
            .field(FieldDescriptor::enumeration("data_type", "dataType", &STORAGE_DATA_TYPE))
            .field(FieldDescriptor::string("purge_duration", "purgeDuration"))
            .field(FieldDescriptor::string("purge_compartment_id", "purgeCompartmentId"))
            .field(FieldDescriptor::boolean(
                "compartment_id_in_subtree",
                "compartmentIdInSubtree",
            ))
            .pinned("type", "PURGE")
            .build()
    });
    &TYPE
}

pub fn stream_action() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("StreamAction")
            .extends(action())
            .field(FieldDescriptor::string("saved_search_id", "savedSearchId"))
            .field(FieldDescriptor::record(
                "metric_extraction",
                "metricExtraction",
                metric_extraction,
            ))
            .field(FieldDescriptor::string("saved_search_duration", "savedSearchDuration"))
            .pinned("type", "STREAM")
            .build()
    });
    &TYPE
}

pub fn metric_extraction() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("MetricExtraction")
            .field(FieldDescriptor::string("compartment_id", "compartmentId"))
            .field(FieldDescriptor::string("namespace", "namespace"))
            .field(FieldDescriptor::string("metric_name", "metricName"))
            .field(FieldDescriptor::string("resource_group", "resourceGroup"))
            .build()
    });
    &TYPE
}
