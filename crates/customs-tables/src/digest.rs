//! # Ruleset Digest
//!
//! Content-addressed fingerprint of an HSN catalog plus a country table.
//! A booking can store the digest next to its validation results to record
//! exactly which rules it was checked against.
//!
//! ```text
//! SHA256( b"customs-ruleset-v1\0" + json(catalog rows by code) + b"\0" + json(country rows by code) )
//! ```
//!
//! Rows are serialized in ascending key order and every set inside a row is
//! a `BTreeSet`, so two tables with the same content produce the same
//! digest however they were assembled.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::catalog::{HsnCatalog, HsnEntry};
use crate::countries::{CountryRestriction, CountryTable};
use crate::error::TableResult;

const DOMAIN_PREFIX: &[u8] = b"customs-ruleset-v1\0";

/// Lowercase hex SHA-256 digest of a ruleset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RulesetDigest(String);

impl RulesetDigest {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 hex characters, for log lines and terminal output.
    pub fn short(&self) -> &str {
        &self.0[..12.min(self.0.len())]
    }
}

impl fmt::Display for RulesetDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the digest of a catalog and country table.
pub fn ruleset_digest(catalog: &HsnCatalog, countries: &CountryTable) -> TableResult<RulesetDigest> {
    let catalog_rows: Vec<&HsnEntry> = catalog.iter().collect();
    let country_rows: Vec<&CountryRestriction> = countries.countries();

    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_PREFIX);
    hasher.update(serde_json::to_vec(&catalog_rows)?);
    hasher.update(b"\0");
    hasher.update(serde_json::to_vec(&country_rows)?);
    let hex: String = hasher.finalize().iter().map(|b| format!("{b:02x}")).collect();

    tracing::debug!(digest = %hex, "computed ruleset digest");
    Ok(RulesetDigest(hex))
}
