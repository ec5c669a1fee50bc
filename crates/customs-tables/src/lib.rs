//! # customs-tables — Reference Tables
//!
//! The static data the customs rules engine classifies against:
//!
//! - **Catalog** (`catalog.rs`): HSN commodity codes with category,
//!   licensing and item-intrinsic prohibition/restriction flags, plus
//!   free-text synonym search.
//!
//! - **Countries** (`countries.rs`): per-destination import policy:
//!   prohibited/restricted categories, prohibited/restricted HSN codes,
//!   and advisory notes.
//!
//! - **Loader** (`loader.rs`): substitute tables from YAML or JSON files.
//!
//! - **Digest** (`digest.rs`): SHA-256 fingerprint over both tables so a
//!   validation can be tied to the exact ruleset it ran against.
//!
//! ## Lifecycle
//!
//! Tables are built once and never mutated. Callers share them behind
//! `Arc` and inject them into the validation service.

pub mod catalog;
pub mod countries;
pub mod digest;
pub mod error;
pub mod loader;

pub use catalog::{HsnCatalog, HsnEntry, GENERIC_CATEGORY};
pub use countries::{CountryRestriction, CountryTable};
pub use digest::{ruleset_digest, RulesetDigest};
pub use error::{TableError, TableResult};
