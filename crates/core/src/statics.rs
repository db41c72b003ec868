//! The bundled holiday table.
//!
//! The snapshot under `data/holidays.json` is generated offline by
//! `cargo xtask snapshot` and embedded here as a read-only asset. The table
//! is decoupled from the lookup service so tests can inject an arbitrary one
//! through [`StaticTable::from_map`].

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::holiday::Holiday;

const BUNDLED_SNAPSHOT: &str = include_str!("../data/holidays.json");

/// Read-only year→holidays mapping embedded in the deployed artifact.
#[derive(Debug, Clone, Default)]
pub struct StaticTable {
    years: HashMap<i32, Vec<Holiday>>,
}

impl StaticTable {
    /// Creates a table from an explicit mapping (used by tests and tooling).
    pub fn from_map(years: HashMap<i32, Vec<Holiday>>) -> Self {
        Self { years }
    }

    /// Creates a table with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The table embedded from the bundled snapshot, parsed once per process.
    pub fn bundled() -> &'static StaticTable {
        static TABLE: OnceLock<StaticTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            let years = serde_json::from_str(BUNDLED_SNAPSHOT)
                .expect("bundled holiday snapshot is valid JSON");
            Self { years }
        })
    }

    /// Returns true if the table has an entry for `year`.
    pub fn contains(&self, year: i32) -> bool {
        self.years.contains_key(&year)
    }

    /// Returns a copy of the holidays for `year`, if bundled.
    pub fn get(&self, year: i32) -> Option<Vec<Holiday>> {
        self.years.get(&year).cloned()
    }

    /// Number of bundled years.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Returns true if no years are bundled.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_snapshot_parses() {
        let table = StaticTable::bundled();
        assert!(!table.is_empty());
        assert!(table.contains(2024));
    }

    #[test]
    fn test_bundled_snapshot_contains_new_years_day() {
        let holidays = StaticTable::bundled().get(2024).unwrap();
        let new_year = holidays.iter().find(|h| h.date == "2024-01-01").unwrap();
        assert_eq!(new_year.name, "Confraternização Universal");
        assert_eq!(new_year.holiday_type, "national");
    }

    #[test]
    fn test_get_returns_copy() {
        let table = StaticTable::from_map(HashMap::from([(
            2024,
            vec![Holiday::national("2024-12-25", "Natal")],
        )]));
        let mut copy = table.get(2024).unwrap();
        copy.clear();
        assert_eq!(table.get(2024).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_year() {
        assert!(StaticTable::empty().get(2024).is_none());
    }
}
