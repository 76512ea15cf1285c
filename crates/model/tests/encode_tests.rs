//! Encode tests: key order, unset/null distinction and nested values.

mod common;

use chrono::{FixedOffset, TimeZone};
use common::load_fixture;
use loganalytics_model::models::{self, query, scheduled_tasks, sources};
use loganalytics_model::{Codec, FieldValue, Instance, decode, encode};
use serde_json::json;

#[test]
fn test_keys_follow_declaration_order() {
    let range = Instance::new(query::time_range())
        .with("time_zone", "UTC")
        .unwrap()
        .with(
            "time_start",
            FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        )
        .unwrap();

    let encoded = Codec::new().encode_string(&range).unwrap();
    assert_eq!(encoded, r#"{"timeStart":"2024-05-01T00:00:00Z","timeZone":"UTC"}"#);
}

#[test]
fn test_input_key_order_does_not_leak() {
    let range = decode(
        &json!({"timeZone": "UTC", "timeEnd": "2024-05-02T00:00:00Z", "timeStart": "2024-05-01T00:00:00Z"}),
        query::time_range(),
    )
    .unwrap();
    let keys: Vec<_> = encode(&range).as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["timeStart", "timeEnd", "timeZone"]);
}

#[test]
fn test_unset_is_omitted_and_empty_is_kept() {
    let mut source = Instance::new(sources::log_analytics_source());
    source.set("name", "syslog").unwrap();
    assert_eq!(encode(&source), json!({"name": "syslog"}));

    source.set("labels", Vec::<FieldValue>::new()).unwrap();
    source.set("description", FieldValue::Null).unwrap();
    assert_eq!(
        encode(&source),
        json!({"name": "syslog", "description": null, "labels": []})
    );
}

#[test]
fn test_defaulted_fields_are_emitted_after_decode() {
    let details = decode(&json!({"queryString": "*"}), query::export_details()).unwrap();
    assert_eq!(
        encode(&details),
        json!({"compartmentIdInSubtree": false, "queryString": "*", "outputFormat": "CSV"})
    );
}

#[test]
fn test_unknown_enum_literal_is_preserved_on_encode() {
    let source = decode(
        &json!({"labels": [{"label": "x", "priority": "CRITICAL"}]}),
        sources::log_analytics_source(),
    )
    .unwrap();
    assert_eq!(
        encode(&source),
        json!({"labels": [{"label": "x", "priority": "CRITICAL"}]})
    );
}

#[test]
fn test_pinned_discriminator_is_always_emitted() {
    let action = Instance::new(scheduled_tasks::stream_action());
    assert_eq!(encode(&action), json!({"type": "STREAM"}));
}

#[test]
fn test_nested_instances_are_encoded_recursively() {
    let extraction = Instance::new(scheduled_tasks::metric_extraction())
        .with("namespace", "custom_metrics")
        .unwrap()
        .with("metric_name", "error_count")
        .unwrap();
    let action = Instance::new(scheduled_tasks::stream_action())
        .with("saved_search_id", "ss1")
        .unwrap()
        .with("metric_extraction", extraction)
        .unwrap();
    let task = Instance::new(scheduled_tasks::standard_task())
        .with("display_name", "stream errors")
        .unwrap()
        .with("action", action)
        .unwrap()
        .with("task_status", "PAUSED")
        .unwrap();

    assert_eq!(
        encode(&task),
        json!({
            "kind": "STANDARD",
            "displayName": "stream errors",
            "action": {
                "type": "STREAM",
                "savedSearchId": "ss1",
                "metricExtraction": {"namespace": "custom_metrics", "metricName": "error_count"}
            },
            "taskStatus": "PAUSED"
        })
    );
}

#[test]
fn test_float_and_integer_values() {
    let mut request = Instance::new(models::storage_work_request());
    request.set("percent_complete", 50).unwrap();
    assert_eq!(encode(&request), json!({"percentComplete": 50.0}));

    request.set("percent_complete", f64::NAN).unwrap();
    assert_eq!(encode(&request), json!({"percentComplete": null}));
}

#[test]
fn test_serialize_through_serde() {
    let fixture = load_fixture("scheduled_tasks/standard_task.json");
    let task = decode(&fixture, models::scheduled_task()).unwrap();
    let via_serde = serde_json::to_value(&task).unwrap();
    assert_eq!(via_serde, encode(&task));
}

#[test]
fn test_fixture_reencodes_canonically() {
    let fixture = load_fixture("scheduled_tasks/standard_task.json");
    let task = decode(&fixture, models::scheduled_task()).unwrap();
    let encoded = encode(&task);

    assert_eq!(encoded["schedules"][0]["repeatCount"], json!(5));
    assert_eq!(encoded["timeCreated"], json!("2024-01-15T10:20:30.123Z"));
    assert_eq!(encoded["timeUpdated"], json!("2024-01-16T08:00:00+01:00"));
    assert_eq!(decode(&encoded, models::scheduled_task()).unwrap(), task);
}
