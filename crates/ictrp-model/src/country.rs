//! Country reference table.
//!
//! Maps lowercase-trimmed country names to their canonical Natural Earth
//! name and ISO3 code. Built once before row processing and read-only
//! thereafter.

use std::collections::HashMap;

/// Canonical record for one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    /// Canonical country name used for geo-joins.
    pub name: String,
    /// ISO3 code (Natural Earth ADM0_A3).
    pub iso3: String,
}

/// Immutable lookup table keyed by lowercase-trimmed country name.
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    entries: HashMap<String, CountryRecord>,
}

impl CountryTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, record: CountryRecord) {
        self.entries
            .insert(name.trim().to_lowercase(), record);
    }

    /// Look up a raw country string after trimming and lower-casing.
    pub fn lookup(&self, raw: &str) -> Option<&CountryRecord> {
        self.entries.get(&raw.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, CountryRecord)> for CountryTable {
    fn from_iter<I: IntoIterator<Item = (String, CountryRecord)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, record) in iter {
            table.insert(&name, record);
        }
        table
    }
}
