//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `LOGAN_*` environment variables.
//! - Apply parsed values to the environment layer of a `ConfigLoader`.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid values return `ConfigError::InvalidValue` naming the variable.

use std::path::PathBuf;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_CONFIG_PATH, ENV_MAX_DEPTH, ENV_METRICS_ENABLED, ENV_SEQUENCE_POLICY,
};
use crate::types::SequencePolicy;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(policy) = env_var_or_none(ENV_SEQUENCE_POLICY) {
        let policy: SequencePolicy = policy.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_SEQUENCE_POLICY.to_string(),
            message: "must be lenient or strict".to_string(),
        })?;
        loader.env_layer_mut().sequence_policy = Some(policy);
    }
    if let Some(depth) = env_var_or_none(ENV_MAX_DEPTH) {
        let depth: usize = depth.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_MAX_DEPTH.to_string(),
            message: "must be a positive integer".to_string(),
        })?;
        loader.env_layer_mut().max_depth = Some(depth);
    }
    if let Some(enabled) = env_var_or_none(ENV_METRICS_ENABLED) {
        let enabled: bool = enabled.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_METRICS_ENABLED.to_string(),
            message: "must be true or false".to_string(),
        })?;
        loader.env_layer_mut().metrics_enabled = Some(enabled);
    }

    // Only if not already set via the builder
    if loader.config_path().is_none()
        && let Some(path) = env_var_or_none(ENV_CONFIG_PATH)
    {
        loader.set_config_path(Some(PathBuf::from(path)));
    }

    Ok(())
}
