//! Model layer for the log-analytics REST API.
//!
//! This crate provides the record mechanism shared by every request and
//! response payload of the API: declarative record types, a decoder that
//! turns loosely typed JSON into typed [`Instance`]s (with alias
//! resolution, enum coercion, default injection and discriminator-based
//! subtype dispatch), and an encoder that turns instances back into wire
//! JSON. A representative catalog of log-analytics payload shapes lives in
//! [`models`].

pub mod codec;
pub mod discriminator;
pub mod enums;
pub mod error;
pub mod instance;
pub mod metrics;
pub mod models;
pub mod registry;
pub mod schema;
mod serde_helpers;
pub mod value;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use codec::{Codec, CodecBuilder, decode, decode_str, encode};
pub use discriminator::resolve_subtype;
pub use enums::{EnumType, EnumValue, UNKNOWN_ENUM_VALUE};
pub use error::{ModelError, Result};
pub use instance::Instance;
pub use loganalytics_config::{CodecConfig, SequencePolicy};
pub use metrics::MetricsCollector;
pub use registry::{Catalog, catalog, record_type, record_types};
pub use schema::{Discriminator, FieldDescriptor, RecordRef, RecordType, WireType};
pub use value::FieldValue;
