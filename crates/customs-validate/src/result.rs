//! # Validation Result
//!
//! The per-item outcome returned by [`ValidationService::validate`]. Results
//! are computed on demand and never persisted.
//!
//! [`ValidationService::validate`]: crate::ValidationService::validate

use customs_core::{IssueKind, Severity, ValidationIssue, ValidationStatus};
use customs_tables::HsnEntry;
use serde::{Deserialize, Serialize};

/// Classification of one shipment item for one destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Final status after every applicable check.
    pub status: ValidationStatus,
    /// The code as supplied by the caller, echoed back verbatim.
    pub hsn_code: String,
    /// The catalog entry, a generic placeholder for unknown well-formed
    /// codes, or `None` when the code is malformed.
    pub hsn_info: Option<HsnEntry>,
    /// Diagnostics in the order they were discovered.
    pub issues: Vec<ValidationIssue>,
    /// `false` iff `status` is `prohibited` or `invalid`.
    pub can_proceed: bool,
}

impl ValidationResult {
    /// Error-kind issues.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.is_error())
    }

    /// Warning-kind issues.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.kind == IssueKind::Warning)
    }

    /// Whether any issue is critical.
    pub fn has_critical(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Critical)
    }

    /// Whether this result blocks submission.
    pub fn is_blocking(&self) -> bool {
        !self.can_proceed
    }
}
