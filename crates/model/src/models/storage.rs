//! Storage work requests and the request bodies that start them.

use std::sync::LazyLock;

use super::common::STORAGE_DATA_TYPE;
use crate::enums::EnumType;
use crate::schema::{FieldDescriptor, RecordType};

pub static STORAGE_OPERATION_TYPE: EnumType = EnumType::new(
    "StorageOperationType",
    &[
        "OFFBOARD_TENANCY",
        "PURGE_STORAGE_DATA",
        "RECALL_ARCHIVED_STORAGE_DATA",
        "RELEASE_RECALLED_STORAGE_DATA",
        "PURGE_ARCHIVAL_DATA",
        "ARCHIVE_STORAGE_DATA",
        "CLEANUP_ARCHIVAL_STORAGE_DATA",
        "ENCRYPT_ACTIVE_DATA",
        "ENCRYPT_ARCHIVAL_DATA",
    ],
);

pub static WORK_REQUEST_STATUS: EnumType = EnumType::new(
    "WorkRequestStatus",
    &["ACCEPTED", "CANCELED", "FAILED", "IN_PROGRESS", "SUCCEEDED"],
);

pub fn storage_work_request() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("StorageWorkRequest")
            .field(FieldDescriptor::string("id", "id"))
            .field(FieldDescriptor::enumeration(
                "operation_type",
                "operationType",
                &STORAGE_OPERATION_TYPE,
            ))
            .field(FieldDescriptor::enumeration("status", "status", &WORK_REQUEST_STATUS))
            .field(FieldDescriptor::string("compartment_id", "compartmentId"))
            .field(FieldDescriptor::date_time("time_accepted", "timeAccepted"))
            .field(FieldDescriptor::date_time("time_started", "timeStarted"))
            .field(FieldDescriptor::date_time("time_finished", "timeFinished"))
            .field(FieldDescriptor::date_time("time_expires", "timeExpires"))
            .field(FieldDescriptor::float("percent_complete", "percentComplete"))
            .field(FieldDescriptor::date_time("time_data_started", "timeDataStarted"))
            .field(FieldDescriptor::date_time("time_data_ended", "timeDataEnded"))
            .field(FieldDescriptor::string("purge_query_string", "purgeQueryString"))
            .field(FieldDescriptor::enumeration(
                "data_type",
                "dataType",
                &STORAGE_DATA_TYPE,
            ))
            .field(FieldDescriptor::string("status_details", "statusDetails"))
            .field(FieldDescriptor::boolean(
                "compartment_id_in_subtree",
                "compartmentIdInSubtree",
            ))
            .build()
    });
    &TYPE
}

/// Body of a purge-storage-data request.
pub fn purge_storage_data_details() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("PurgeStorageDataDetails")
            .field(FieldDescriptor::string("compartment_id", "compartmentId"))
            .field(
                FieldDescriptor::boolean("compartment_id_in_subtree", "compartmentIdInSubtree")
                    .with_default(false),
            )
            .field(FieldDescriptor::date_time("time_data_ended", "timeDataEnded"))
            .field(FieldDescriptor::string("purge_query_string", "purgeQueryString"))
            .field(FieldDescriptor::enumeration(
                "data_type",
                "dataType",
                &STORAGE_DATA_TYPE,
            ))
            .build()
    });
    &TYPE
}

/// Body of a recall-archived-data request.
pub fn recall_archived_data_details() -> &'static RecordType {
    static TYPE: LazyLock<RecordType> = LazyLock::new(|| {
        RecordType::builder("RecallArchivedDataDetails")
            .field(FieldDescriptor::string("compartment_id", "compartmentId"))
            .field(FieldDescriptor::date_time("time_data_ended", "timeDataEnded"))
            .field(FieldDescriptor::date_time("time_data_started", "timeDataStarted"))
            .field(FieldDescriptor::enumeration(
                "data_type",
                "dataType",
                &STORAGE_DATA_TYPE,
            ))
            .field(FieldDescriptor::string("log_sets", "logSets"))
            .field(FieldDescriptor::string("query", "query"))
            .field(
                FieldDescriptor::boolean("is_recall_new_data_only", "isRecallNewDataOnly")
                    .with_default(false),
            )
            .field(
                FieldDescriptor::boolean("is_use_recommended_data_set", "isUseRecommendedDataSet")
                    .with_default(false),
            )
            .build()
    });
    &TYPE
}
