//! # Country Restriction Table
//!
//! Destination-specific import policy: which commodity categories and which
//! exact HSN codes a country prohibits or restricts, plus advisory notes
//! shown to the shipper whatever the outcome.
//!
//! ## Absence Semantics
//!
//! A destination with no entry has no *known* additional restriction. It is
//! never treated as "shipping forbidden". Every predicate in this module
//! returns `false` for an unknown destination.
//!
//! ## Matching Rules
//!
//! - Country codes are trimmed and upper-cased before lookup.
//! - Category and HSN membership are exact, case-sensitive matches.
//!
//! ## Built-in Content
//!
//! Grouped by region in `americas`, `europe`, `middle_east` and
//! `asia_pacific`.

mod americas;
mod asia_pacific;
mod europe;
mod middle_east;

use std::collections::{BTreeSet, HashMap};

use customs_core::{CountryCode, HsnCode};
use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};

// ---------------------------------------------------------------------------
// CountryRestriction
// ---------------------------------------------------------------------------

/// One destination country's import policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRestriction {
    /// Normalized destination code (e.g. "AE").
    pub country_code: CountryCode,
    /// Display name.
    pub country_name: String,
    /// Categories banned entirely.
    #[serde(default)]
    pub prohibited_categories: BTreeSet<String>,
    /// Categories requiring extra clearance.
    #[serde(default)]
    pub restricted_categories: BTreeSet<String>,
    /// Exact codes banned, overriding the category view.
    #[serde(default)]
    pub prohibited_hsn_codes: BTreeSet<HsnCode>,
    /// Exact codes requiring extra clearance.
    #[serde(default)]
    pub restricted_hsn_codes: BTreeSet<HsnCode>,
    /// Advisory notes in display order.
    #[serde(default)]
    pub special_notes: Vec<String>,
}

impl CountryRestriction {
    /// Create an entry with no rules.
    pub fn new(country_code: CountryCode, country_name: impl Into<String>) -> Self {
        Self {
            country_code,
            country_name: country_name.into(),
            prohibited_categories: BTreeSet::new(),
            restricted_categories: BTreeSet::new(),
            prohibited_hsn_codes: BTreeSet::new(),
            restricted_hsn_codes: BTreeSet::new(),
            special_notes: Vec::new(),
        }
    }

    pub fn prohibit_category(mut self, category: impl Into<String>) -> Self {
        self.prohibited_categories.insert(category.into());
        self
    }

    pub fn restrict_category(mut self, category: impl Into<String>) -> Self {
        self.restricted_categories.insert(category.into());
        self
    }

    pub fn prohibit_code(mut self, code: HsnCode) -> Self {
        self.prohibited_hsn_codes.insert(code);
        self
    }

    pub fn restrict_code(mut self, code: HsnCode) -> Self {
        self.restricted_hsn_codes.insert(code);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.special_notes.push(note.into());
        self
    }

    /// Whether this exact code is banned here.
    pub fn prohibits_code(&self, code: &str) -> bool {
        self.prohibited_hsn_codes.contains(code)
    }

    /// Whether this exact code needs extra clearance here.
    pub fn restricts_code(&self, code: &str) -> bool {
        self.restricted_hsn_codes.contains(code)
    }

    /// Whether the whole category is banned here.
    pub fn prohibits_category(&self, category: &str) -> bool {
        self.prohibited_categories.contains(category)
    }

    /// Whether the whole category needs extra clearance here.
    pub fn restricts_category(&self, category: &str) -> bool {
        self.restricted_categories.contains(category)
    }
}

// ---------------------------------------------------------------------------
// Built-in rows
// ---------------------------------------------------------------------------

/// Compile-time row used by the regional content modules.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CountryRow {
    code: &'static str,
    name: &'static str,
    prohibited_categories: &'static [&'static str],
    restricted_categories: &'static [&'static str],
    prohibited_hsn_codes: &'static [&'static str],
    restricted_hsn_codes: &'static [&'static str],
    special_notes: &'static [&'static str],
}

impl CountryRow {
    fn to_entry(self) -> TableResult<CountryRestriction> {
        let parse_codes = |codes: &[&str]| -> TableResult<BTreeSet<HsnCode>> {
            codes
                .iter()
                .map(|c| HsnCode::new(*c).map_err(TableError::from))
                .collect()
        };
        Ok(CountryRestriction {
            country_code: CountryCode::new(self.code)?,
            country_name: self.name.to_string(),
            prohibited_categories: self.prohibited_categories.iter().map(|s| s.to_string()).collect(),
            restricted_categories: self.restricted_categories.iter().map(|s| s.to_string()).collect(),
            prohibited_hsn_codes: parse_codes(self.prohibited_hsn_codes)?,
            restricted_hsn_codes: parse_codes(self.restricted_hsn_codes)?,
            special_notes: self.special_notes.iter().map(|s| s.to_string()).collect(),
        })
    }
}

fn builtin_rows() -> impl Iterator<Item = CountryRow> {
    americas::ROWS
        .iter()
        .chain(europe::ROWS)
        .chain(middle_east::ROWS)
        .chain(asia_pacific::ROWS)
        .copied()
}

// ---------------------------------------------------------------------------
// CountryTable
// ---------------------------------------------------------------------------

/// Immutable table of destination policies keyed by country code.
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    entries: HashMap<CountryCode, CountryRestriction>,
}

impl CountryTable {
    /// Build a table from entries.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateCountry`] if two entries normalize to
    /// the same code.
    pub fn from_entries(entries: impl IntoIterator<Item = CountryRestriction>) -> TableResult<Self> {
        let mut map = HashMap::new();
        for entry in entries {
            if map.contains_key(&entry.country_code) {
                return Err(TableError::DuplicateCountry(entry.country_code.to_string()));
            }
            map.insert(entry.country_code.clone(), entry);
        }
        tracing::debug!(countries = map.len(), "built country restriction table");
        Ok(Self { entries: map })
    }

    /// The built-in reference table. Malformed rows are logged and skipped.
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        for row in builtin_rows() {
            match row.to_entry() {
                Ok(entry) if entries.contains_key(&entry.country_code) => {
                    tracing::error!(country = %entry.country_code, "duplicate built-in country row skipped");
                }
                Ok(entry) => {
                    entries.insert(entry.country_code.clone(), entry);
                }
                Err(e) => tracing::error!(country = row.code, error = %e, "malformed built-in country row skipped"),
            }
        }
        Self { entries }
    }

    /// Look up a destination. Input is trimmed and upper-cased first.
    pub fn lookup(&self, country: &str) -> Option<&CountryRestriction> {
        let normalized = CountryCode::new(country).ok()?;
        self.entries.get(&normalized)
    }

    /// Exact code banned at the destination. `false` if the country is unknown.
    pub fn is_hsn_prohibited(&self, code: &str, country: &str) -> bool {
        self.lookup(country).is_some_and(|c| c.prohibits_code(code))
    }

    /// Exact code restricted at the destination. `false` if the country is unknown.
    pub fn is_hsn_restricted(&self, code: &str, country: &str) -> bool {
        self.lookup(country).is_some_and(|c| c.restricts_code(code))
    }

    /// Category banned at the destination. `false` if the country is unknown.
    pub fn is_category_prohibited(&self, category: &str, country: &str) -> bool {
        self.lookup(country).is_some_and(|c| c.prohibits_category(category))
    }

    /// Category restricted at the destination. `false` if the country is unknown.
    pub fn is_category_restricted(&self, category: &str, country: &str) -> bool {
        self.lookup(country).is_some_and(|c| c.restricts_category(category))
    }

    /// All entries ordered by country code.
    pub fn countries(&self) -> Vec<&CountryRestriction> {
        let mut all: Vec<&CountryRestriction> = self.entries.values().collect();
        all.sort_by(|a, b| a.country_code.cmp(&b.country_code));
        all
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_keeps_every_row() {
        let table = CountryTable::builtin();
        assert_eq!(table.len(), builtin_rows().count());
        for row in builtin_rows() {
            assert!(row.to_entry().is_ok(), "row {} is malformed", row.code);
        }
    }

    #[test]
    fn test_lookup_normalizes() {
        let table = CountryTable::builtin();
        assert_eq!(table.lookup("ae").unwrap().country_name, "United Arab Emirates");
        assert!(table.lookup(" US ").is_some());
        assert!(table.lookup("").is_none());
        assert!(table.lookup("ZZ").is_none());
    }

    #[test]
    fn test_uae_prohibits_weapons() {
        let table = CountryTable::builtin();
        assert!(table.is_category_prohibited("Weapons", "AE"));
        assert!(!table.is_category_prohibited("Textiles", "AE"));
    }

    #[test]
    fn test_saudi_pharmaceuticals_restricted_not_prohibited() {
        let table = CountryTable::builtin();
        assert!(table.is_category_restricted("Pharmaceuticals", "SA"));
        assert!(!table.is_category_prohibited("Pharmaceuticals", "SA"));
        assert!(table.is_hsn_restricted("30049099", "SA"));
        assert!(!table.is_hsn_prohibited("30049099", "SA"));
    }

    #[test]
    fn test_code_level_prohibition() {
        let table = CountryTable::builtin();
        assert!(table.is_hsn_prohibited("17041000", "SG"));
        assert!(!table.is_category_prohibited("Food Products", "SG"));
    }

    #[test]
    fn test_predicates_false_for_unknown_country() {
        let table = CountryTable::builtin();
        assert!(!table.is_hsn_prohibited("93011000", "ZZ"));
        assert!(!table.is_hsn_restricted("93011000", "ZZ"));
        assert!(!table.is_category_prohibited("Weapons", "ZZ"));
        assert!(!table.is_category_restricted("Weapons", "ZZ"));
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let table = CountryTable::builtin();
        assert!(!table.is_category_prohibited("weapons", "AE"));
    }

    #[test]
    fn test_from_entries_rejects_duplicates_after_normalization() {
        let a = CountryRestriction::new(CountryCode::new("fr").unwrap(), "France");
        let b = CountryRestriction::new(CountryCode::new("FR").unwrap(), "France again");
        let err = CountryTable::from_entries([a, b]).unwrap_err();
        assert!(matches!(err, TableError::DuplicateCountry(c) if c == "FR"));
    }

    #[test]
    fn test_builder_and_predicates() {
        let entry = CountryRestriction::new(CountryCode::new("XX").unwrap(), "Testland")
            .prohibit_category("Weapons")
            .restrict_category("Toys")
            .prohibit_code(HsnCode::new("11111111").unwrap())
            .restrict_code(HsnCode::new("22222222").unwrap())
            .with_note("be nice");
        assert!(entry.prohibits_category("Weapons"));
        assert!(entry.restricts_category("Toys"));
        assert!(entry.prohibits_code("11111111"));
        assert!(entry.restricts_code("22222222"));
        assert!(!entry.restricts_code("11111111"));
        assert_eq!(entry.special_notes, vec!["be nice".to_string()]);
    }

    #[test]
    fn test_countries_sorted() {
        let table = CountryTable::builtin();
        let codes: Vec<&str> = table.countries().iter().map(|c| c.country_code.as_str()).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
        assert!(codes.contains(&"US"));
    }

    #[test]
    fn test_entry_deserializes_with_defaults() {
        let entry: CountryRestriction =
            serde_json::from_str(r#"{"country_code":"np","country_name":"Nepal"}"#).unwrap();
        assert_eq!(entry.country_code.as_str(), "NP");
        assert!(entry.special_notes.is_empty());
        assert!(entry.prohibited_hsn_codes.is_empty());
    }
}
