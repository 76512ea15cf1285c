//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary files are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, unset, for use with `temp_env::with_vars`.
pub fn cleared_env() -> [(&'static str, Option<&'static str>); 5] {
    use crate::constants::*;
    [
        (ENV_SEQUENCE_POLICY, None),
        (ENV_MAX_DEPTH, None),
        (ENV_METRICS_ENABLED, None),
        (ENV_CONFIG_PATH, None),
        (ENV_DOTENV_DISABLED, Some("1")),
    ]
}
