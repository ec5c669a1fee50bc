//! # HSN Catalog
//!
//! Static lookup from 8-digit HSN codes to commodity metadata.
//!
//! ## Data Model
//!
//! - [`HsnEntry`]: one commodity classification with its item-intrinsic
//!   risk flags.
//! - [`HsnCatalog`]: immutable, hash-indexed collection of entries.
//!
//! `globally_prohibited` and `globally_restricted` are independent flags.
//! A prohibited item is not required to also be marked restricted, so
//! consumers must check both.
//!
//! ## Built-in Content
//!
//! Reference rows live in content modules grouped by trade area:
//! `consumer` (apparel, food, cosmetics, electronics, printed matter) and
//! `controlled` (medicines, arms, narcotics, wildlife, hazardous goods).

mod consumer;
mod controlled;

use std::collections::HashMap;

use customs_core::HsnCode;
use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};

/// Category assigned to well-formed codes that no catalog row describes.
pub const GENERIC_CATEGORY: &str = "General";

// ---------------------------------------------------------------------------
// HsnEntry
// ---------------------------------------------------------------------------

/// A single commodity classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsnEntry {
    /// The 8-digit code. Unique within a catalog.
    pub code: HsnCode,
    /// Human-readable commodity name.
    pub description: String,
    /// Coarse grouping (e.g. "Electronics", "Pharmaceuticals", "Weapons").
    pub category: String,
    /// Importer/exporter must hold a license regardless of destination.
    #[serde(default)]
    pub requires_license: bool,
    /// May never be shipped internationally, whatever the destination.
    #[serde(default)]
    pub globally_prohibited: bool,
    /// Requires extra documentation everywhere.
    #[serde(default)]
    pub globally_restricted: bool,
    /// Why the item is prohibited or restricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restriction_reason: Option<String>,
    /// Synonyms used by free-text search.
    #[serde(default)]
    pub common_names: Vec<String>,
}

impl HsnEntry {
    /// Create an unrestricted entry.
    pub fn new(code: HsnCode, description: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            category: category.into(),
            requires_license: false,
            globally_prohibited: false,
            globally_restricted: false,
            restriction_reason: None,
            common_names: Vec::new(),
        }
    }

    /// The placeholder entry for a well-formed code absent from the catalog:
    /// category [`GENERIC_CATEGORY`], every flag `false`, no synonyms.
    pub fn generic(code: HsnCode) -> Self {
        let description = format!("General merchandise (HSN {code})");
        Self::new(code, description, GENERIC_CATEGORY)
    }

    /// Mark as globally prohibited with a reason.
    pub fn prohibited(mut self, reason: impl Into<String>) -> Self {
        self.globally_prohibited = true;
        self.restriction_reason = Some(reason.into());
        self
    }

    /// Mark as globally restricted with a reason.
    pub fn restricted(mut self, reason: impl Into<String>) -> Self {
        self.globally_restricted = true;
        self.restriction_reason = Some(reason.into());
        self
    }

    /// Mark as requiring an import/export license.
    pub fn licensed(mut self) -> Self {
        self.requires_license = true;
        self
    }

    /// Replace the synonym list.
    pub fn with_common_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.common_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Case-insensitive substring match against the description and every
    /// synonym. `needle` must already be lower-cased.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.description.to_lowercase().contains(needle)
            || self
                .common_names
                .iter()
                .any(|name| name.to_lowercase().contains(needle))
    }
}

// ---------------------------------------------------------------------------
// Built-in rows
// ---------------------------------------------------------------------------

/// Compile-time row used by the built-in content modules.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HsnRow {
    code: &'static str,
    description: &'static str,
    category: &'static str,
    requires_license: bool,
    globally_prohibited: bool,
    globally_restricted: bool,
    restriction_reason: Option<&'static str>,
    common_names: &'static [&'static str],
}

impl HsnRow {
    /// Unrestricted commodity.
    const fn open(
        code: &'static str,
        description: &'static str,
        category: &'static str,
        common_names: &'static [&'static str],
    ) -> Self {
        Self {
            code,
            description,
            category,
            requires_license: false,
            globally_prohibited: false,
            globally_restricted: false,
            restriction_reason: None,
            common_names,
        }
    }

    const fn restricted(self, reason: &'static str) -> Self {
        Self {
            globally_restricted: true,
            restriction_reason: Some(reason),
            ..self
        }
    }

    const fn prohibited(self, reason: &'static str) -> Self {
        Self {
            globally_prohibited: true,
            restriction_reason: Some(reason),
            ..self
        }
    }

    const fn licensed(self) -> Self {
        Self {
            requires_license: true,
            ..self
        }
    }

    fn to_entry(self) -> TableResult<HsnEntry> {
        Ok(HsnEntry {
            code: HsnCode::new(self.code)?,
            description: self.description.to_string(),
            category: self.category.to_string(),
            requires_license: self.requires_license,
            globally_prohibited: self.globally_prohibited,
            globally_restricted: self.globally_restricted,
            restriction_reason: self.restriction_reason.map(str::to_string),
            common_names: self.common_names.iter().map(|s| s.to_string()).collect(),
        })
    }
}

fn builtin_rows() -> impl Iterator<Item = HsnRow> {
    consumer::ROWS.iter().chain(controlled::ROWS.iter()).copied()
}

// ---------------------------------------------------------------------------
// HsnCatalog
// ---------------------------------------------------------------------------

/// Immutable catalog of HSN entries keyed by code.
#[derive(Debug, Clone, Default)]
pub struct HsnCatalog {
    entries: HashMap<HsnCode, HsnEntry>,
}

impl HsnCatalog {
    /// Build a catalog from entries.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateHsnCode`] if two entries share a code.
    pub fn from_entries(entries: impl IntoIterator<Item = HsnEntry>) -> TableResult<Self> {
        let mut map = HashMap::new();
        for entry in entries {
            if map.contains_key(&entry.code) {
                return Err(TableError::DuplicateHsnCode(entry.code.to_string()));
            }
            map.insert(entry.code.clone(), entry);
        }
        tracing::debug!(entries = map.len(), "built HSN catalog");
        Ok(Self { entries: map })
    }

    /// The built-in reference catalog.
    ///
    /// A malformed or duplicate built-in row is logged and skipped rather
    /// than aborting the process.
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        for row in builtin_rows() {
            match row.to_entry() {
                Ok(entry) if entries.contains_key(&entry.code) => {
                    tracing::error!(code = %entry.code, "duplicate built-in HSN row skipped");
                }
                Ok(entry) => {
                    entries.insert(entry.code.clone(), entry);
                }
                Err(e) => tracing::error!(code = row.code, error = %e, "malformed built-in HSN row skipped"),
            }
        }
        Self { entries }
    }

    /// Look up a code. Absence is an expected outcome, not an error.
    pub fn lookup(&self, code: &str) -> Option<&HsnEntry> {
        self.entries.get(code)
    }

    /// Whether `code` is exactly eight ASCII digits.
    pub fn is_well_formed(code: &str) -> bool {
        HsnCode::is_well_formed(code)
    }

    /// Case-insensitive substring search over descriptions and synonyms.
    ///
    /// The query is matched as given, surrounding whitespace included. Each
    /// matching entry appears once, ordered by code. A blank or
    /// whitespace-only query matches nothing.
    pub fn search(&self, text: &str) -> Vec<&HsnEntry> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        let needle = text.to_lowercase();
        let mut hits: Vec<&HsnEntry> = self
            .entries
            .values()
            .filter(|entry| entry.matches_lowercase(&needle))
            .collect();
        hits.sort_by(|a, b| a.code.cmp(&b.code));
        hits
    }

    /// All entries in a category (case-insensitive), ordered by code.
    pub fn by_category(&self, category: &str) -> Vec<&HsnEntry> {
        let mut hits: Vec<&HsnEntry> = self
            .entries
            .values()
            .filter(|entry| entry.category.eq_ignore_ascii_case(category))
            .collect();
        hits.sort_by(|a, b| a.code.cmp(&b.code));
        hits
    }

    /// All entries ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = &HsnEntry> {
        let mut all: Vec<&HsnEntry> = self.entries.values().collect();
        all.sort_by(|a, b| a.code.cmp(&b.code));
        all.into_iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
