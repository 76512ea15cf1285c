//! Configuration for the log-analytics model codec.
//!
//! This crate provides the [`CodecConfig`] type that tunes how payloads are
//! decoded, and a [`ConfigLoader`] that assembles it from builder overrides,
//! environment variables, an optional JSON file and built-in defaults.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{CodecConfig, SequencePolicy, UnknownSequencePolicy};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
