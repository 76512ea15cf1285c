//! Benchmarks for decoding and encoding catalog payloads.
//!
//! Tests list responses of scheduled tasks (100/1k items) and deeply nested
//! table columns.

use criterion::{Criterion, criterion_group, criterion_main};
use loganalytics_model::models::{columns, scheduled_tasks};
use loganalytics_model::{Codec, decode, encode};
use std::hint::black_box;

fn generate_tasks(count: usize) -> serde_json::Value {
    let items: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "kind": if i % 2 == 0 { "STANDARD" } else { "ACCELERATION" },
                "id": format!("ocid1.loganalyticsscheduledtask.oc1..{i:08}"),
                "displayName": format!("Task {i}"),
                "taskType": "PURGE",
                "schedules": [{
                    "type": "FIXED_FREQUENCY",
                    "misfirePolicy": "RETRY_ONCE",
                    "recurringInterval": "P1D",
                    "repeatCount": format!("{}", i % 10),
                    "timeOfFirstExecution": "2024-02-01T03:00:00Z"
                }],
                "action": {
                    "type": "PURGE",
                    "queryString": "*",
                    "dataType": "LOG",
                    "purgeDuration": "-P30D"
                },
                "timeCreated": format!("2024-01-15T10:{:02}:00.000Z", i % 60),
                "taskStatus": if i % 7 == 0 { "MIGRATING" } else { "READY" },
                "freeformTags": {"team": "observability"}
            })
        })
        .collect();
    serde_json::Value::Array(items)
}

fn generate_nested_columns(depth: usize) -> serde_json::Value {
    let mut column = serde_json::json!({"type": "COLUMN", "displayName": "leaf", "values": ["a", "b"]});
    for level in 0..depth {
        column = serde_json::json!({
            "type": "TABLE_COLUMN",
            "displayName": format!("level {level}"),
            "columns": [column.clone(), column],
            "result": [{"k": "v"}]
        });
    }
    column
}

fn bench_decode_tasks_100(c: &mut Criterion) {
    let payload = generate_tasks(100);
    let codec = Codec::new();
    c.bench_function("decode_tasks_100", |b| {
        b.iter(|| {
            let tasks = codec
                .decode_list(black_box(&payload), scheduled_tasks::scheduled_task())
                .unwrap();
            black_box(tasks)
        })
    });
}

fn bench_decode_tasks_1k(c: &mut Criterion) {
    let payload = generate_tasks(1_000);
    let codec = Codec::new();
    c.bench_function("decode_tasks_1k", |b| {
        b.iter(|| {
            let tasks = codec
                .decode_list(black_box(&payload), scheduled_tasks::scheduled_task())
                .unwrap();
            black_box(tasks)
        })
    });
}

fn bench_decode_str_task(c: &mut Criterion) {
    let text = serde_json::to_string(&generate_tasks(1)[0]).unwrap();
    c.bench_function("decode_str_task", |b| {
        b.iter(|| {
            let task =
                loganalytics_model::decode_str(black_box(&text), scheduled_tasks::scheduled_task())
                    .unwrap();
            black_box(task)
        })
    });
}

fn bench_encode_tasks_1k(c: &mut Criterion) {
    let tasks = Codec::new()
        .decode_list(&generate_tasks(1_000), scheduled_tasks::scheduled_task())
        .unwrap();
    c.bench_function("encode_tasks_1k", |b| {
        b.iter(|| {
            for task in black_box(&tasks) {
                black_box(encode(task));
            }
        })
    });
}

fn bench_nested_columns(c: &mut Criterion) {
    let payload = generate_nested_columns(8);
    c.bench_function("decode_nested_columns_depth_8", |b| {
        b.iter(|| {
            let column = decode(black_box(&payload), columns::abstract_column()).unwrap();
            black_box(column)
        })
    });
}

criterion_group!(
    benches,
    bench_decode_tasks_100,
    bench_decode_tasks_1k,
    bench_decode_str_task,
    bench_encode_tasks_1k,
    bench_nested_columns
);
criterion_main!(benches);
