//! # Catalog Subcommands
//!
//! Read-only views over the loaded tables: `customs lookup`, `customs search`,
//! `customs countries` and `customs digest`.

use std::collections::HashSet;

use anyhow::{Context, Result};
use clap::Args;
use customs_core::HsnCode;
use customs_tables::{ruleset_digest, HsnCatalog, HsnEntry};

use crate::Session;

/// Arguments for `customs lookup`.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// HSN code to look up.
    pub hsn_code: String,

    /// Print the entry as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `customs search`.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text matched against descriptions and common names.
    pub text: String,

    /// Restrict matches to one category (case-insensitive).
    #[arg(long)]
    pub category: Option<String>,

    /// Print matches as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute `customs lookup`.
///
/// An uncatalogued code is a normal outcome, not an error: the engine
/// accepts it as general merchandise, so the command reports that and
/// exits 0.
pub fn run_lookup(args: &LookupArgs, session: &Session) -> Result<u8> {
    let code = args.hsn_code.trim();
    if !HsnCatalog::is_well_formed(code) {
        anyhow::bail!("'{code}' is not a valid HSN code: expected exactly 8 digits");
    }
    let Some(entry) = session.service.catalog().lookup(code) else {
        println!("HSN {code} is not in the catalog; it validates as general merchandise.");
        return Ok(0);
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(entry)?);
        return Ok(0);
    }

    println!("HSN {}", entry.code);
    println!("  description: {}", entry.description);
    println!("  chapter:     {}", entry.code.chapter());
    println!("  category:    {}", entry.category);
    println!("  controls:    {}", controls(entry));
    if let Some(reason) = &entry.restriction_reason {
        println!("  reason:      {reason}");
    }
    if !entry.common_names.is_empty() {
        println!("  also known:  {}", entry.common_names.join(", "));
    }
    Ok(0)
}

/// Execute `customs search`.
pub fn run_search(args: &SearchArgs, session: &Session) -> Result<u8> {
    let matches = search_matches(session.service.catalog(), &args.text, args.category.as_deref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(0);
    }

    for entry in &matches {
        println!(
            "  {}  {:<20} {} [{}]",
            entry.code,
            entry.category,
            entry.description,
            controls(entry)
        );
    }
    println!();
    println!("{} match(es) for '{}'", matches.len(), args.text.trim());
    Ok(0)
}

/// Execute `customs countries`.
pub fn run_countries(session: &Session) -> Result<u8> {
    let countries = session.service.countries().countries();
    println!("Destinations with import restrictions:");
    println!();
    for c in &countries {
        println!(
            "  {:<4} {:<22} prohibited: {} categories, {} codes; restricted: {} categories, {} codes",
            c.country_code,
            c.country_name,
            c.prohibited_categories.len(),
            c.prohibited_hsn_codes.len(),
            c.restricted_categories.len(),
            c.restricted_hsn_codes.len(),
        );
    }
    println!();
    println!("Total: {} countries", countries.len());
    Ok(0)
}

/// Execute `customs digest`.
pub fn run_digest(session: &Session) -> Result<u8> {
    let digest = ruleset_digest(session.service.catalog(), session.service.countries())
        .context("failed to compute ruleset digest")?;
    println!("{digest}");
    Ok(0)
}

/// Text matches, narrowed to one category when given.
fn search_matches<'a>(catalog: &'a HsnCatalog, text: &str, category: Option<&str>) -> Vec<&'a HsnEntry> {
    let mut matches = catalog.search(text);
    if let Some(category) = category {
        let in_category: HashSet<&HsnCode> = catalog
            .by_category(category.trim())
            .into_iter()
            .map(|e| &e.code)
            .collect();
        matches.retain(|e| in_category.contains(&e.code));
    }
    matches
}

fn controls(entry: &HsnEntry) -> String {
    let mut flags = Vec::new();
    if entry.globally_prohibited {
        flags.push("prohibited");
    }
    if entry.globally_restricted {
        flags.push("restricted");
    }
    if entry.requires_license {
        flags.push("licence");
    }
    if flags.is_empty() {
        "none".to_string()
    } else {
        flags.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::open(None).unwrap()
    }

    #[test]
    fn test_lookup_known_code() {
        let args = LookupArgs {
            hsn_code: "88062100".into(),
            json: false,
        };
        assert_eq!(run_lookup(&args, &session()).unwrap(), 0);
    }

    #[test]
    fn test_lookup_unknown_code_is_not_an_error() {
        let args = LookupArgs {
            hsn_code: "99999999".into(),
            json: true,
        };
        assert_eq!(run_lookup(&args, &session()).unwrap(), 0);
    }

    #[test]
    fn test_lookup_malformed_code_is_error() {
        let args = LookupArgs {
            hsn_code: "12ab".into(),
            json: false,
        };
        assert!(run_lookup(&args, &session()).is_err());
    }

    #[test]
    fn test_search_with_category_filter() {
        let args = SearchArgs {
            text: "cotton".into(),
            category: Some("textiles".into()),
            json: true,
        };
        assert_eq!(run_search(&args, &session()).unwrap(), 0);
    }

    #[test]
    fn test_category_filter_narrows_matches() {
        let catalog = HsnCatalog::builtin();
        let all = search_matches(&catalog, "cotton", None);
        let textiles = search_matches(&catalog, "cotton", Some(" TEXTILES "));
        assert!(!textiles.is_empty());
        assert!(textiles.len() <= all.len());
        assert!(textiles.iter().all(|e| e.category == "Textiles"));
        assert!(search_matches(&catalog, "cotton", Some("Weapons")).is_empty());
    }

    #[test]
    fn test_controls_summary() {
        let catalog = HsnCatalog::builtin();
        assert_eq!(controls(catalog.lookup("61091000").unwrap()), "none");
        assert_eq!(controls(catalog.lookup("88062100").unwrap()), "restricted, licence");
        assert_eq!(controls(catalog.lookup("36041000").unwrap()), "prohibited");
    }

    #[test]
    fn test_countries_and_digest() {
        let s = session();
        assert_eq!(run_countries(&s).unwrap(), 0);
        assert_eq!(run_digest(&s).unwrap(), 0);
    }
}
