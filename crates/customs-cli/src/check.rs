//! # Check and Batch Subcommands
//!
//! `customs check` validates a single HSN code; `customs batch` validates
//! every item of a shipment file. Both exit with [`EXIT_BLOCKED`] when any
//! item is prohibited or invalid for the destination.
//!
//! ```bash
//! customs check 61091000 --country US
//! customs batch shipment.yaml --country AE --json
//! ```
//!
//! A shipment file is a YAML or JSON list of items:
//!
//! ```yaml
//! - hsn_code: "61091000"
//!   name: Cotton T-shirt
//! - hsn_code: "93011000"
//!   name: Ceremonial cannon
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use clap::Args;
use customs_core::ValidationStatus;
use customs_tables::{loader, ruleset_digest};
use customs_validate::{BatchValidation, ShipmentItem, ValidationResult, ValidationSummary};
use serde::Serialize;

use crate::{Session, EXIT_BLOCKED};

/// Arguments for `customs check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// HSN code to validate (8 digits).
    pub hsn_code: String,

    /// Destination country (ISO 3166-1 alpha-2). Defaults to the config's
    /// `default_country`.
    #[arg(long, short = 'c')]
    pub country: Option<String>,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `customs batch`.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// YAML or JSON file listing shipment items.
    pub file: PathBuf,

    /// Destination country (ISO 3166-1 alpha-2). Defaults to the config's
    /// `default_country`.
    #[arg(long, short = 'c')]
    pub country: Option<String>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Machine-readable batch report.
#[derive(Debug, Serialize)]
struct BatchReport<'a> {
    generated_at: String,
    destination: &'a str,
    ruleset_digest: String,
    summary: ValidationSummary,
    results: &'a BatchValidation,
}

/// Execute `customs check`.
pub fn run_check(args: &CheckArgs, session: &Session) -> Result<u8> {
    let destination = session.destination(args.country.as_deref())?;
    let result = session.service.validate(&args.hsn_code, &destination);
    tracing::info!(
        hsn_code = %args.hsn_code,
        destination = %destination,
        status = %result.status,
        "validated item"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("HSN {} -> {}", result.hsn_code, destination.to_ascii_uppercase());
        print_result(&result, "  ");
    }

    Ok(exit_code(result.is_blocking()))
}

/// Execute `customs batch`.
pub fn run_batch(args: &BatchArgs, session: &Session) -> Result<u8> {
    let destination = session.destination(args.country.as_deref())?;
    let items: Vec<ShipmentItem> = loader::read_document(&args.file)
        .with_context(|| format!("failed to read shipment file {}", args.file.display()))?;
    let batch = session.service.validate_batch(&items, &destination);
    let summary = batch.summary();
    tracing::info!(
        items = summary.total,
        destination = %destination,
        can_proceed = summary.can_proceed,
        "validated shipment"
    );

    if args.json {
        let digest = ruleset_digest(session.service.catalog(), session.service.countries())
            .context("failed to compute ruleset digest")?;
        let report = BatchReport {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            destination: &destination,
            ruleset_digest: digest.to_string(),
            summary,
            results: &batch,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for entry in batch.iter() {
            if entry.name.is_empty() {
                println!("[{}]", entry.key);
            } else {
                println!("[{}] {}", entry.key, entry.name);
            }
            print_result(&entry.result, "  ");
        }
        println!();
        println!("Total: {} ({})", summary.total, status_counts(&summary));
        if summary.can_proceed {
            println!("Shipment can proceed.");
        } else {
            println!("Shipment is BLOCKED.");
        }
    }

    Ok(exit_code(batch.has_blocking_issues()))
}

fn print_result(result: &ValidationResult, indent: &str) {
    println!("{indent}status:      {}", result.status);
    println!("{indent}can proceed: {}", result.can_proceed);
    if let Some(info) = &result.hsn_info {
        println!("{indent}item:        {} ({})", info.description, info.category);
    }
    for issue in &result.issues {
        println!("{indent}{issue}");
        if let Some(rec) = &issue.recommendation {
            println!("{indent}    -> {rec}");
        }
    }
}

/// `"valid 2, restricted 1, prohibited 0, invalid 1"`.
fn status_counts(summary: &ValidationSummary) -> String {
    ValidationStatus::all()
        .iter()
        .map(|status| format!("{status} {}", summary.count(*status)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn exit_code(blocked: bool) -> u8 {
    if blocked {
        EXIT_BLOCKED
    } else {
        0
    }
}
