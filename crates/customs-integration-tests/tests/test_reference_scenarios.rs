//! # Reference Scenarios
//!
//! End-to-end checks of the built-in tables through the validation service,
//! covering the booking flow's canonical cases.

use customs_core::{IssueKind, Severity, ValidationStatus};
use customs_validate::{ShipmentItem, ValidationService};

fn service() -> ValidationService {
    ValidationService::builtin()
}

// ---------------------------------------------------------------------------
// 1. Single items
// ---------------------------------------------------------------------------

#[test]
fn firearm_to_uae_is_prohibited() {
    let r = service().validate("93011000", "AE");
    assert_eq!(r.status, ValidationStatus::Prohibited);
    assert!(!r.can_proceed);
    assert!(r.issues.len() >= 2, "global and category prohibitions both reported");
    assert_eq!(r.issues[0].title, "Prohibited Item");
    assert!(r.issues.iter().any(|i| i.title == "Category Prohibited in United Arab Emirates"));
    assert!(r.issues.iter().any(|i| i.title == "License Required"));
}

#[test]
fn cotton_tshirt_to_us_is_valid() {
    let r = service().validate("61091000", "US");
    assert_eq!(r.status, ValidationStatus::Valid);
    assert!(r.can_proceed);
    assert!(r.errors().next().is_none());
    assert!(r.warnings().next().is_none());
    let info = r.hsn_info.as_ref().unwrap();
    assert_eq!(info.category, "Textiles");
}

#[test]
fn medicine_to_saudi_arabia_is_restricted() {
    let r = service().validate("30049099", "SA");
    assert_eq!(r.status, ValidationStatus::Restricted);
    assert!(r.can_proceed);
    assert!(r.issues.iter().any(|i| i.title == "Restricted Item"));
    assert!(r.issues.iter().any(|i| i.title == "Restricted in Saudi Arabia"));
    assert!(!r.has_critical());
}

#[test]
fn areca_nuts_prohibited_by_code_in_uae() {
    let r = service().validate("08028010", "AE");
    assert_eq!(r.status, ValidationStatus::Prohibited);
    assert!(r.issues.iter().any(|i| i.title == "Prohibited in United Arab Emirates"));
}

#[test]
fn chewing_gum_prohibited_only_in_singapore() {
    assert_eq!(service().validate("17041000", "SG").status, ValidationStatus::Prohibited);
    let us = service().validate("17041000", "US");
    assert_eq!(us.status, ValidationStatus::Restricted);
    assert!(us.can_proceed);
}

#[test]
fn ghee_prohibited_in_australia() {
    assert_eq!(service().validate("04059020", "AU").status, ValidationStatus::Prohibited);
}

#[test]
fn drone_is_restricted_and_licensed_for_us() {
    let r = service().validate("88062100", "US");
    assert_eq!(r.status, ValidationStatus::Restricted);
    let titles: Vec<&str> = r.issues.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(&titles[..3], &["Restricted Item", "License Required", "Restricted in United States"]);
}

#[test]
fn globally_prohibited_item_stays_prohibited_everywhere() {
    for country in ["US", "AE", "SA", "SG", "AU", "JP", "CN", "GB", "DE", "FR", "CA", "QA", "ZZ"] {
        let r = service().validate("36041000", country);
        assert_eq!(r.status, ValidationStatus::Prohibited, "fireworks to {country}");
        assert!(!r.can_proceed);
    }
}

#[test]
fn destination_is_case_insensitive() {
    let upper = service().validate("93011000", "AE");
    let lower = service().validate("93011000", " ae ");
    assert_eq!(upper.status, lower.status);
    assert_eq!(upper.issues, lower.issues);
}

#[test]
fn unknown_destination_applies_only_global_rules() {
    let r = service().validate("30049099", "ZZ");
    assert_eq!(r.status, ValidationStatus::Restricted);
    assert!(r.issues.iter().all(|i| !i.title.contains(" in ")));
    assert!(r.issues.iter().all(|i| i.kind != IssueKind::Info));
}

#[test]
fn malformed_code_reports_single_critical_issue() {
    let r = service().validate("6109-100", "US");
    assert_eq!(r.status, ValidationStatus::Invalid);
    assert_eq!(r.issues.len(), 1);
    assert_eq!(r.issues[0].severity, Severity::Critical);
    assert!(r.hsn_info.is_none());
    assert_eq!(r.hsn_code, "6109-100");
}

#[test]
fn unknown_code_is_accepted_without_country_checks() {
    let r = service().validate("99999999", "AE");
    assert_eq!(r.status, ValidationStatus::Valid);
    assert_eq!(r.issues.len(), 1);
    assert_eq!(r.issues[0].kind, IssueKind::Info);
    assert_eq!(r.issues[0].title, "HSN Code Accepted");
    assert_eq!(r.hsn_info.as_ref().unwrap().category, "General");
}

#[test]
fn destination_notes_attached_even_when_valid() {
    let r = service().validate("61091000", "AE");
    assert_eq!(r.status, ValidationStatus::Valid);
    let note = r.issues.last().unwrap();
    assert_eq!(note.kind, IssueKind::Info);
    assert_eq!(note.title, "Important Notes for United Arab Emirates");
}

// ---------------------------------------------------------------------------
// 2. Batches
// ---------------------------------------------------------------------------

#[test]
fn batch_with_one_bad_code() {
    let batch = service().validate_batch(&[ShipmentItem::new("bad", "")], "US");
    assert_eq!(batch.keys().collect::<Vec<_>>(), vec!["0-bad"]);
    assert_eq!(batch.get("0-bad").unwrap().status, ValidationStatus::Invalid);
    assert!(batch.has_blocking_issues());
}

#[test]
fn mixed_shipment_summary() {
    let items = vec![
        ShipmentItem::new("61091000", "Cotton T-shirt"),
        ShipmentItem::new("30049099", "Paracetamol"),
        ShipmentItem::new("93011000", "Ceremonial cannon"),
        ShipmentItem::new("abc", "Mystery box"),
        ShipmentItem::new("99999999", "Unlisted item"),
    ];
    let batch = service().validate_batch(&items, "SA");
    let s = batch.summary();
    assert_eq!(s.total, 5);
    assert_eq!(s.valid, 2);
    assert_eq!(s.restricted, 1);
    assert_eq!(s.prohibited, 1);
    assert_eq!(s.invalid, 1);
    assert!(!s.can_proceed);

    let json = serde_json::to_value(&batch).unwrap();
    assert_eq!(json["2-93011000"]["status"], "prohibited");
    assert_eq!(json["3-abc"]["hsn_info"], serde_json::Value::Null);
}

#[test]
fn restricted_only_shipment_can_proceed() {
    let items = vec![
        ShipmentItem::new("30049099", "Paracetamol"),
        ShipmentItem::new("61091000", "Cotton T-shirt"),
    ];
    let batch = service().validate_batch(&items, "SA");
    assert!(!batch.has_blocking_issues());
    assert!(batch.summary().can_proceed);
}
