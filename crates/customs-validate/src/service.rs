//! # Validation Service
//!
//! Classifies a single shipment item against the injected HSN catalog and
//! country restriction table.
//!
//! ## Evaluation Logic
//!
//! 1. Malformed code → `invalid`, one critical issue, stop.
//! 2. Code not in catalog → generic entry, `valid`, one info issue, stop.
//!    Destination rules are deliberately not consulted on this path.
//! 3. Globally prohibited → `prohibited`.
//! 4. Globally restricted → at least `restricted`.
//! 5. License required → warning only, status unchanged.
//! 6. Destination unknown → stop with the status so far.
//! 7. Code prohibited at destination → `prohibited`.
//! 8. Category prohibited at destination → `prohibited`.
//! 9. Code restricted at destination → at least `restricted`.
//! 10. Category restricted at destination → at least `restricted`.
//! 11. Destination has notes → one info issue joining them with `". "`.
//!
//! Steps 3–10 only ever escalate. Restriction steps 4, 9 and 10 are skipped
//! entirely once the item is prohibited, so a prohibited result carries no
//! restriction warnings.

use std::sync::Arc;

use customs_core::{HsnCode, Severity, ValidationIssue, ValidationStatus};
use customs_tables::{CountryRestriction, CountryTable, HsnCatalog, HsnEntry};

use crate::batch::{BatchValidation, ShipmentItem};
use crate::result::ValidationResult;

/// Stateless classifier over immutable, shared tables.
#[derive(Debug, Clone)]
pub struct ValidationService {
    catalog: Arc<HsnCatalog>,
    countries: Arc<CountryTable>,
}

impl ValidationService {
    /// Create a service over the given tables.
    pub fn new(catalog: Arc<HsnCatalog>, countries: Arc<CountryTable>) -> Self {
        Self { catalog, countries }
    }

    /// Service over the built-in reference tables.
    pub fn builtin() -> Self {
        Self::new(
            Arc::new(HsnCatalog::builtin()),
            Arc::new(CountryTable::builtin()),
        )
    }

    pub fn catalog(&self) -> &HsnCatalog {
        &self.catalog
    }

    pub fn countries(&self) -> &CountryTable {
        &self.countries
    }

    /// Classify one item for one destination.
    pub fn validate(&self, hsn_code: &str, destination: &str) -> ValidationResult {
        let code = match HsnCode::new(hsn_code) {
            Ok(code) => code,
            Err(_) => {
                tracing::debug!(hsn_code, "malformed HSN code");
                return invalid_result(hsn_code);
            }
        };

        let Some(entry) = self.catalog.lookup(code.as_str()) else {
            tracing::debug!(hsn_code, "HSN code not in catalog; accepting");
            return unknown_code_result(code);
        };

        let mut eval = Evaluation::new(hsn_code, entry);
        eval.apply_global_rules();

        match self.countries.lookup(destination) {
            Some(country) => {
                eval.apply_country_rules(country);
                eval.attach_notes(country);
            }
            None => {
                tracing::warn!(destination, "no restriction entry for destination; country checks skipped");
            }
        }

        let result = eval.finish();
        tracing::debug!(
            hsn_code,
            destination,
            status = %result.status,
            issues = result.issues.len(),
            "validated item"
        );
        result
    }

    /// Classify every item independently, keyed `"{index}-{hsn_code}"`.
    pub fn validate_batch(&self, items: &[ShipmentItem], destination: &str) -> BatchValidation {
        let batch = BatchValidation::from_items(items, |item| self.validate(&item.hsn_code, destination));
        tracing::debug!(
            items = items.len(),
            destination,
            blocked = batch.has_blocking_issues(),
            "validated batch"
        );
        batch
    }
}

// ---------------------------------------------------------------------------
// Short-circuit results
// ---------------------------------------------------------------------------

fn invalid_result(hsn_code: &str) -> ValidationResult {
    let issue = ValidationIssue::critical(
        "Invalid HSN Code",
        format!("HSN code {hsn_code:?} must be exactly 8 digits"),
    )
    .with_recommendation("Enter the full 8-digit HSN code from the product invoice or the ITC(HS) schedule");
    ValidationResult {
        status: ValidationStatus::Invalid,
        hsn_code: hsn_code.to_string(),
        hsn_info: None,
        issues: vec![issue],
        can_proceed: false,
    }
}

fn unknown_code_result(code: HsnCode) -> ValidationResult {
    let issue = ValidationIssue::info(
        "HSN Code Accepted",
        format!("HSN code {code} is not in the restricted items database and is accepted as declared"),
    )
    .with_recommendation("Make sure the code matches the goods; misdeclaration can delay customs clearance");
    let hsn_code = code.to_string();
    ValidationResult {
        status: ValidationStatus::Valid,
        hsn_code,
        hsn_info: Some(HsnEntry::generic(code)),
        issues: vec![issue],
        can_proceed: true,
    }
}

// ---------------------------------------------------------------------------
// Evaluation accumulator
// ---------------------------------------------------------------------------

/// Running state for one catalogued item.
struct Evaluation<'a> {
    hsn_code: &'a str,
    entry: &'a HsnEntry,
    status: ValidationStatus,
    issues: Vec<ValidationIssue>,
}

impl<'a> Evaluation<'a> {
    fn new(hsn_code: &'a str, entry: &'a HsnEntry) -> Self {
        Self {
            hsn_code,
            entry,
            status: ValidationStatus::Valid,
            issues: Vec::new(),
        }
    }

    fn escalate(&mut self, to: ValidationStatus, issue: ValidationIssue) {
        let before = self.status;
        self.status = self.status.escalate(to);
        tracing::trace!(hsn_code = self.hsn_code, from = %before, to = %self.status, title = %issue.title, "escalation step");
        self.issues.push(issue);
    }

    fn is_prohibited(&self) -> bool {
        self.status == ValidationStatus::Prohibited
    }

    /// Steps 3–5: item-intrinsic flags.
    fn apply_global_rules(&mut self) {
        let entry = self.entry;

        if entry.globally_prohibited {
            let recommendation = entry
                .restriction_reason
                .clone()
                .unwrap_or_else(|| "This item cannot be shipped internationally".to_string());
            self.escalate(
                ValidationStatus::Prohibited,
                ValidationIssue::critical(
                    "Prohibited Item",
                    format!("{} is prohibited for international shipping", entry.description),
                )
                .with_recommendation(recommendation),
            );
        }

        if entry.globally_restricted && !self.is_prohibited() {
            let recommendation = entry
                .restriction_reason
                .clone()
                .unwrap_or_else(|| "Prepare the supporting documents before booking".to_string());
            self.escalate(
                ValidationStatus::Restricted,
                ValidationIssue::warning(
                    Severity::High,
                    "Restricted Item",
                    format!("{} requires special documentation", entry.description),
                )
                .with_recommendation(recommendation),
            );
        }

        if entry.requires_license {
            self.issues.push(
                ValidationIssue::warning(
                    Severity::High,
                    "License Required",
                    format!("{} requires an import/export license", entry.description),
                )
                .with_recommendation("Keep a valid license available for customs before shipping"),
            );
        }
    }

    /// Steps 7–10: destination policy.
    fn apply_country_rules(&mut self, country: &CountryRestriction) {
        let name = &country.country_name;
        let category = self.entry.category.as_str();

        if country.prohibits_code(self.hsn_code) {
            self.escalate(
                ValidationStatus::Prohibited,
                ValidationIssue::critical(
                    format!("Prohibited in {name}"),
                    format!("HSN code {} cannot be imported into {name}", self.hsn_code),
                )
                .with_recommendation("Remove this item from the shipment or choose another destination"),
            );
        }

        if country.prohibits_category(category) {
            self.escalate(
                ValidationStatus::Prohibited,
                ValidationIssue::critical(
                    format!("Category Prohibited in {name}"),
                    format!("{category} items are prohibited in {name}"),
                )
                .with_recommendation("Remove this item from the shipment or choose another destination"),
            );
        }

        if country.restricts_code(self.hsn_code) && !self.is_prohibited() {
            self.escalate(
                ValidationStatus::Restricted,
                ValidationIssue::warning(
                    Severity::High,
                    format!("Restricted in {name}"),
                    format!("HSN code {} requires special clearance in {name}", self.hsn_code),
                )
                .with_recommendation("Obtain the destination import permit before dispatch"),
            );
        }

        if country.restricts_category(category) && !self.is_prohibited() {
            self.escalate(
                ValidationStatus::Restricted,
                ValidationIssue::warning(
                    Severity::Medium,
                    format!("Category Restricted in {name}"),
                    format!("{category} items face additional checks in {name}"),
                )
                .with_recommendation("Include an itemised invoice and any supporting certificates"),
            );
        }
    }

    /// Step 11: advisory notes, whatever the outcome.
    fn attach_notes(&mut self, country: &CountryRestriction) {
        if country.special_notes.is_empty() {
            return;
        }
        self.issues.push(ValidationIssue::info(
            format!("Important Notes for {}", country.country_name),
            country.special_notes.join(". "),
        ));
    }

    fn finish(self) -> ValidationResult {
        ValidationResult {
            status: self.status,
            hsn_code: self.hsn_code.to_string(),
            hsn_info: Some(self.entry.clone()),
            can_proceed: self.status.can_proceed(),
            issues: self.issues,
        }
    }
}
