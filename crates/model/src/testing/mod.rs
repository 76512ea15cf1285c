//! Testing utilities for model tests.
//!
//! Fixture loading and `proptest` strategies that generate arbitrary
//! instances of any catalog record type.
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use loganalytics_model::testing::{load_fixture, strategies::instance_strategy};
//!
//! let fixture = load_fixture("scheduled_tasks/standard_task.json");
//! let strategy = instance_strategy(loganalytics_model::models::scheduled_task());
//! ```

pub mod strategies;

use std::path::Path;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "sources/source.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}
