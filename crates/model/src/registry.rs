//! Lookup of record types by name.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::models;
use crate::schema::RecordType;

/// Every record type in the model catalog, keyed by name.
#[derive(Debug)]
pub struct Catalog {
    by_name: BTreeMap<&'static str, &'static RecordType>,
}

impl Catalog {
    fn build() -> Self {
        let mut by_name = BTreeMap::new();
        for ty in models::all() {
            let previous = by_name.insert(ty.name(), ty);
            assert!(previous.is_none(), "duplicate record type name {}", ty.name());
        }
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'static RecordType> {
        self.by_name.get(name).copied()
    }

    /// Record types in name order.
    pub fn iter(&self) -> impl Iterator<Item = &'static RecordType> + '_ {
        self.by_name.values().copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Record types that extend `base`, directly or transitively.
    pub fn subtypes_of(&self, base: &RecordType) -> Vec<&'static RecordType> {
        self.iter()
            .filter(|ty| ty.name() != base.name() && ty.is_subtype_of(base))
            .collect()
    }
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::build);

pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Every record type in the catalog, in name order.
pub fn record_types() -> impl Iterator<Item = &'static RecordType> {
    catalog().iter()
}

/// Look up a record type by name.
pub fn record_type(name: &str) -> Option<&'static RecordType> {
    catalog().get(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(record_type("PurgeAction").map(RecordType::name), Some("PurgeAction"));
        assert!(record_type("purge_action").is_none());
    }

    #[test]
    fn test_subtypes_of_action() {
        let action = record_type("Action").unwrap();
        let names: Vec<_> = catalog().subtypes_of(action).into_iter().map(RecordType::name).collect();
        assert_eq!(names, vec!["PurgeAction", "StreamAction"]);
    }

    #[test]
    fn test_catalog_is_not_empty() {
        assert!(!catalog().is_empty());
        assert_eq!(catalog().len(), models::all().len());
    }
}
