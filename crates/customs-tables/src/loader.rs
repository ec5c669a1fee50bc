//! # Table Loader
//!
//! Loads substitute HSN catalogs and country restriction tables from disk,
//! so deployments can ship updated rules without a rebuild.
//!
//! ## File Format
//!
//! A table file is a YAML (`.yaml`/`.yml`) or JSON (`.json`) list whose
//! elements have the serde shape of [`HsnEntry`] or [`CountryRestriction`]:
//!
//! ```yaml
//! - code: "61091000"
//!   description: T-shirts of cotton
//!   category: Textiles
//!   common_names: [t-shirt, tee]
//! ```
//!
//! Every row is validated on load: malformed HSN codes and blank country
//! codes are rejected by the newtype deserializers, duplicate keys by the
//! table constructors.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::catalog::{HsnCatalog, HsnEntry};
use crate::countries::{CountryRestriction, CountryTable};
use crate::error::{TableError, TableResult};

/// Load an HSN catalog from a YAML or JSON list of entries.
pub fn load_catalog(path: &Path) -> TableResult<HsnCatalog> {
    let entries: Vec<HsnEntry> = read_document(path)?;
    tracing::info!(path = %path.display(), entries = entries.len(), "loaded HSN catalog");
    HsnCatalog::from_entries(entries)
}

/// Load a country restriction table from a YAML or JSON list of entries.
pub fn load_country_table(path: &Path) -> TableResult<CountryTable> {
    let entries: Vec<CountryRestriction> = read_document(path)?;
    tracing::info!(path = %path.display(), countries = entries.len(), "loaded country restriction table");
    CountryTable::from_entries(entries)
}

/// Read and deserialize a YAML or JSON document, dispatching on extension.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> TableResult<T> {
    let format = DocumentFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    match format {
        DocumentFormat::Yaml => serde_yaml::from_str(&content).map_err(|source| TableError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
        DocumentFormat::Json => serde_json::from_str(&content).map_err(|source| TableError::Json {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    fn from_path(path: &Path) -> TableResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(TableError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}
