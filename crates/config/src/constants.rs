//! Centralized constants for the log-analytics SDK workspace.
//!
//! Default values and bounds shared by the config loader and the model
//! codec, kept here to avoid magic numbers drifting between crates.

// =============================================================================
// Decode Limits
// =============================================================================

/// Default maximum nesting depth accepted when decoding a payload.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Upper bound for a configured maximum nesting depth.
pub const MAX_MAX_DEPTH: usize = 512;

/// Metrics are recorded unless explicitly disabled.
pub const DEFAULT_METRICS_ENABLED: bool = true;

// =============================================================================
// Environment Variables
// =============================================================================

/// Selects how non-array input for sequence fields is handled (`lenient` or `strict`).
pub const ENV_SEQUENCE_POLICY: &str = "LOGAN_SEQUENCE_POLICY";

/// Overrides the maximum decode nesting depth.
pub const ENV_MAX_DEPTH: &str = "LOGAN_MAX_DEPTH";

/// Enables or disables decode metrics (`true` or `false`).
pub const ENV_METRICS_ENABLED: &str = "LOGAN_METRICS_ENABLED";

/// Path to an optional JSON config file.
pub const ENV_CONFIG_PATH: &str = "LOGAN_CONFIG_PATH";

/// When set to `true` or `1`, `.env` files are never loaded.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
