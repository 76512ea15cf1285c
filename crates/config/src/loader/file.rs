//! JSON config file loading.
//!
//! Responsibilities:
//! - Read the optional JSON config file and store it as the loader's file layer.
//!
//! Does NOT handle:
//! - Locating a default config file; the path is always explicit.
//!
//! Invariants:
//! - Unknown keys in the file are rejected so typos do not silently fall back to defaults.

use std::fs;

use super::builder::{ConfigLoader, PartialCodecConfig};
use super::error::ConfigError;

/// Apply the config file (if a path is set) to the loader's file layer.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let Some(path) = loader.config_path().cloned() else {
        return Ok(());
    };

    let content = fs::read_to_string(&path).map_err(|e| ConfigError::ConfigFileRead {
        path: path.clone(),
        kind: e.kind(),
    })?;

    let layer: PartialCodecConfig =
        serde_json::from_str(&content).map_err(|e| ConfigError::ConfigFileParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

    tracing::debug!(path = %path.display(), "Loaded codec config file");
    loader.set_file_layer(layer);
    Ok(())
}
