//! Enumerations shared by several record types.

use crate::enums::EnumType;

pub static SUB_SYSTEM: EnumType = EnumType::new("SubSystem", &["LOG"]);

pub static STORAGE_DATA_TYPE: EnumType = EnumType::new("StorageDataType", &["LOG", "LOOKUP"]);

pub static LIFECYCLE_STATE: EnumType = EnumType::new("LifecycleState", &["ACTIVE", "DELETED"]);
