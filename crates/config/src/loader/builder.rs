//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Keep one partial layer per source and merge them in `build()`.
//!
//! Does NOT handle:
//! - Environment variable parsing (delegated to env.rs).
//! - Config file parsing (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Environment variables take precedence over file values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

use serde::Deserialize;
use std::path::PathBuf;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{
    DEFAULT_MAX_DEPTH, DEFAULT_METRICS_ENABLED, ENV_DOTENV_DISABLED, MAX_MAX_DEPTH,
};
use crate::types::{CodecConfig, SequencePolicy};

/// One source's worth of configuration values; `None` defers to lower layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct PartialCodecConfig {
    pub sequence_policy: Option<SequencePolicy>,
    pub max_depth: Option<usize>,
    pub metrics_enabled: Option<bool>,
}

impl PartialCodecConfig {
    /// Fill unset values from a lower-precedence layer.
    fn or(self, lower: Self) -> Self {
        Self {
            sequence_policy: self.sequence_policy.or(lower.sequence_policy),
            max_depth: self.max_depth.or(lower.max_depth),
            metrics_enabled: self.metrics_enabled.or(lower.metrics_enabled),
        }
    }
}

/// Configuration loader that builds a [`CodecConfig`] from layered sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    overrides: PartialCodecConfig,
    env: PartialCodecConfig,
    file: PartialCodecConfig,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with no sources applied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax or
    /// cannot be read. Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the JSON config file to read in [`Self::from_file`].
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Set the sequence policy.
    pub fn with_sequence_policy(mut self, policy: SequencePolicy) -> Self {
        self.overrides.sequence_policy = Some(policy);
        self
    }

    /// Set the maximum decode nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.overrides.max_depth = Some(depth);
        self
    }

    /// Enable or disable decode metrics.
    pub fn with_metrics_enabled(mut self, enabled: bool) -> Self {
        self.overrides.metrics_enabled = Some(enabled);
        self
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Read configuration from the JSON config file, if a path is known.
    ///
    /// The path comes from [`Self::with_config_path`] or `LOGAN_CONFIG_PATH`
    /// (the latter requires [`Self::from_env`] to run first).
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn env_layer_mut(&mut self) -> &mut PartialCodecConfig {
        &mut self.env
    }

    pub(crate) fn set_file_layer(&mut self, layer: PartialCodecConfig) {
        self.file = layer;
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<CodecConfig, ConfigError> {
        let merged = self.overrides.or(self.env).or(self.file);

        let max_depth = merged.max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
        if max_depth == 0 || max_depth > MAX_MAX_DEPTH {
            return Err(ConfigError::InvalidMaxDepth {
                message: format!("must be between 1 and {} (got {})", MAX_MAX_DEPTH, max_depth),
            });
        }

        Ok(CodecConfig {
            sequence_policy: merged.sequence_policy.unwrap_or_default(),
            max_depth,
            metrics_enabled: merged.metrics_enabled.unwrap_or(DEFAULT_METRICS_ENABLED),
        })
    }
}
