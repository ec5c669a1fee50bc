//! # Batch Evaluation
//!
//! Validates every item of a multi-item shipment independently. Results are
//! keyed `"{index}-{hsn_code}"`, so two items sharing a code never collide,
//! and are kept in input order.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::result::ValidationResult;
use crate::summary::{self, ValidationSummary};

/// One line of a shipment as declared by the shipper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentItem {
    /// Declared HSN code, unvalidated.
    pub hsn_code: String,
    /// Shipper's description of the item.
    #[serde(default)]
    pub name: String,
}

impl ShipmentItem {
    pub fn new(hsn_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            hsn_code: hsn_code.into(),
            name: name.into(),
        }
    }
}

/// Result for one item of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    /// `"{index}-{hsn_code}"`.
    pub key: String,
    /// Position in the submitted item list.
    pub index: usize,
    /// The item's declared name.
    pub name: String,
    pub result: ValidationResult,
}

/// Ordered per-item results of a shipment.
///
/// Serializes as a JSON object from key to [`ValidationResult`], preserving
/// input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchValidation {
    entries: Vec<BatchEntry>,
}

impl BatchValidation {
    /// Run `validate` once per item, in order, with no early exit.
    pub fn from_items<F>(items: &[ShipmentItem], mut validate: F) -> Self
    where
        F: FnMut(&ShipmentItem) -> ValidationResult,
    {
        let entries = items
            .iter()
            .enumerate()
            .map(|(index, item)| BatchEntry {
                key: batch_key(index, &item.hsn_code),
                index,
                name: item.name.clone(),
                result: validate(item),
            })
            .collect();
        Self { entries }
    }

    /// Look up a result by its `"{index}-{hsn_code}"` key.
    pub fn get(&self, key: &str) -> Option<&ValidationResult> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.result)
    }

    /// Entries in input order.
    pub fn iter(&self) -> impl Iterator<Item = &BatchEntry> {
        self.entries.iter()
    }

    /// Results in input order.
    pub fn results(&self) -> impl Iterator<Item = &ValidationResult> {
        self.entries.iter().map(|e| &e.result)
    }

    /// Keys in input order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True iff any item cannot proceed.
    pub fn has_blocking_issues(&self) -> bool {
        summary::has_blocking_issues(self.results())
    }

    /// Status counts across the batch.
    pub fn summary(&self) -> ValidationSummary {
        summary::summarize(self.results())
    }
}

impl Serialize for BatchValidation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.result)?;
        }
        map.end()
    }
}

/// Result key for the item at `index`.
pub fn batch_key(index: usize, hsn_code: &str) -> String {
    format!("{index}-{hsn_code}")
}
