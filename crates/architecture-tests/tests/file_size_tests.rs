//! Architecture tests for file size limits.
//!
//! - Files >700 LOC require justification (warning logged)
//! - Files >1000 LOC are presumed mis-scoped (test failure)

mod common;

use std::fs;
use std::path::Path;

use common::{find_files, find_workspace_root};

const WARNING_THRESHOLD: usize = 700;
const FAILURE_THRESHOLD: usize = 1000;

/// Files excluded from size checks, as (path_suffix, justification) tuples.
const EXCLUDED_FILES: &[(&str, &str)] = &[];

#[test]
fn file_size_limits() {
    let workspace_root = find_workspace_root();
    let crates_dir = workspace_root.join("crates");
    assert!(
        crates_dir.exists(),
        "crates/ directory not found at {:?}",
        crates_dir
    );

    let rust_files = find_files(&crates_dir, "rs");
    let mut failures = Vec::new();
    let mut warnings = Vec::new();

    for file_path in &rust_files {
        let loc = count_loc(file_path);
        let relative = file_path.strip_prefix(&workspace_root).unwrap_or(file_path);
        let relative_str = relative.to_string_lossy().to_string();
        let is_excluded = EXCLUDED_FILES
            .iter()
            .any(|(suffix, _)| relative_str.ends_with(suffix));

        if loc > FAILURE_THRESHOLD && !is_excluded {
            failures.push((relative_str, loc));
        } else if loc > WARNING_THRESHOLD {
            warnings.push((relative_str, loc));
        }
    }

    for (path, loc) in &warnings {
        eprintln!("[architecture] warning: {path}: {loc} lines (>{WARNING_THRESHOLD})");
    }

    if !failures.is_empty() {
        let listing: Vec<String> = failures
            .iter()
            .map(|(path, loc)| format!("  - {path}: {loc} lines"))
            .collect();
        panic!(
            "\nFiles exceeding {FAILURE_THRESHOLD} LOC (presumed mis-scoped):\n{}\n\
             Refactor them or add them to EXCLUDED_FILES with a justification.",
            listing.join("\n")
        );
    }

    eprintln!(
        "[architecture] Checked {} Rust files for size limits.",
        rust_files.len()
    );
}

/// Count lines of code in a file, excluding blank lines and comments.
fn count_loc(path: &Path) -> usize {
    let content = fs::read_to_string(path).expect("Failed to read file");
    let mut count = 0;
    let mut in_block_comment = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with("/*") {
            in_block_comment = true;
        }
        if trimmed.ends_with("*/") {
            in_block_comment = false;
            continue;
        }
        if in_block_comment || trimmed.starts_with("//") {
            continue;
        }
        count += 1;
    }

    count
}

#[test]
fn count_loc_skips_comments_and_blanks() {
    let dir = find_workspace_root().join("crates/architecture-tests/tests");
    let this_file = dir.join("file_size_tests.rs");
    let loc = count_loc(&this_file);
    let total = fs::read_to_string(&this_file).unwrap().lines().count();
    assert!(loc > 0);
    assert!(loc < total);
}
