//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Load codec configuration from `.env` files, environment variables and a JSON file.
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Applying the configuration to a codec (see the model crate's `CodecBuilder`).
//!
//! Invariants / Assumptions:
//! - Precedence is builder > environment > file > defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod file;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
