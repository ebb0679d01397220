#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::builtin::{DIRECTIONS, ROAD_TYPES};

/// Abbreviation to full word mapping. Keys are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionTable {
    entries: BTreeMap<String, String>,
}

impl ExpansionTable {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, abbreviation: &str) -> Option<&str> {
        self.entries.get(abbreviation).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by abbreviation.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn extend(&mut self, other: ExpansionTable) {
        self.entries.extend(other.entries);
    }
}

/// The two lookup tables used by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionTables {
    pub directions: ExpansionTable,
    pub road_types: ExpansionTable,
}

impl ExpansionTables {
    pub fn new(directions: ExpansionTable, road_types: ExpansionTable) -> Self {
        Self {
            directions,
            road_types,
        }
    }

    /// Tables compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            directions: ExpansionTable::new(DIRECTIONS.iter().copied()),
            road_types: ExpansionTable::new(ROAD_TYPES.iter().copied()),
        }
    }
}

impl Default for ExpansionTables {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup_is_case_sensitive() {
        let tables = ExpansionTables::builtin();
        assert_eq!(tables.directions.get("N"), Some("North"));
        assert_eq!(tables.directions.get("n"), None);
        assert_eq!(tables.road_types.get("RD"), Some("Road"));
        assert_eq!(tables.road_types.get("Rd"), None);
    }

    #[test]
    fn extend_overrides_existing_keys() {
        let mut table = ExpansionTable::new([("ST", "Street")]);
        table.extend(ExpansionTable::new([("ST", "Saint"), ("CT", "Court")]));
        assert_eq!(table.get("ST"), Some("Saint"));
        assert_eq!(table.len(), 2);
    }
}
