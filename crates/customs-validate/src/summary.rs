//! # Shipment Summary
//!
//! Aggregates per-item results into the gate the booking flow uses to
//! allow or block submission.

use customs_core::ValidationStatus;
use serde::{Deserialize, Serialize};

use crate::result::ValidationResult;

/// Status counts across a set of results.
///
/// Statuses are mutually exclusive, so
/// `valid + restricted + prohibited + invalid == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub valid: usize,
    pub restricted: usize,
    pub prohibited: usize,
    pub invalid: usize,
    /// `true` iff no result blocks submission.
    pub can_proceed: bool,
}

impl ValidationSummary {
    /// Count of results with the given status.
    pub fn count(&self, status: ValidationStatus) -> usize {
        match status {
            ValidationStatus::Valid => self.valid,
            ValidationStatus::Restricted => self.restricted,
            ValidationStatus::Prohibited => self.prohibited,
            ValidationStatus::Invalid => self.invalid,
        }
    }
}

/// True iff any result has `can_proceed == false`.
pub fn has_blocking_issues<'a, I>(results: I) -> bool
where
    I: IntoIterator<Item = &'a ValidationResult>,
{
    results.into_iter().any(|r| !r.can_proceed)
}

/// Count each status once per result.
pub fn summarize<'a, I>(results: I) -> ValidationSummary
where
    I: IntoIterator<Item = &'a ValidationResult>,
{
    let mut summary = ValidationSummary {
        can_proceed: true,
        ..ValidationSummary::default()
    };
    for result in results {
        summary.total += 1;
        match result.status {
            ValidationStatus::Valid => summary.valid += 1,
            ValidationStatus::Restricted => summary.restricted += 1,
            ValidationStatus::Prohibited => summary.prohibited += 1,
            ValidationStatus::Invalid => summary.invalid += 1,
        }
        if !result.can_proceed {
            summary.can_proceed = false;
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(status: ValidationStatus) -> ValidationResult {
        ValidationResult {
            status,
            hsn_code: "00000000".into(),
            hsn_info: None,
            issues: Vec::new(),
            can_proceed: status.can_proceed(),
        }
    }

    #[test]
    fn test_summarize_counts() {
        let results: Vec<ValidationResult> = [
            ValidationStatus::Valid,
            ValidationStatus::Valid,
            ValidationStatus::Restricted,
            ValidationStatus::Invalid,
        ]
        .into_iter()
        .map(result)
        .collect();
        let s = summarize(&results);
        assert_eq!(s.total, 4);
        assert_eq!(s.valid, 2);
        assert_eq!(s.restricted, 1);
        assert_eq!(s.prohibited, 0);
        assert_eq!(s.invalid, 1);
        assert!(!s.can_proceed);
        assert_eq!(s.count(ValidationStatus::Valid), 2);
    }

    #[test]
    fn test_restricted_only_can_proceed() {
        let results = vec![result(ValidationStatus::Restricted), result(ValidationStatus::Valid)];
        assert!(!has_blocking_issues(&results));
        assert!(summarize(&results).can_proceed);
    }

    #[test]
    fn test_prohibited_blocks() {
        let results = vec![result(ValidationStatus::Valid), result(ValidationStatus::Prohibited)];
        assert!(has_blocking_issues(&results));
    }

    #[test]
    fn test_empty_input() {
        let results: Vec<ValidationResult> = Vec::new();
        let s = summarize(&results);
        assert_eq!(s.total, 0);
        assert!(s.can_proceed);
        assert!(!has_blocking_issues(&results));
    }
}
