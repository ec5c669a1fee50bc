//! # customs-core — Foundational Types for the Customs Rules Engine
//!
//! This crate is the leaf of the workspace. It defines the primitives every
//! other crate shares when classifying shipment items against import
//! restrictions.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `HsnCode` and `CountryCode` are
//!    validated at construction. A value of type `HsnCode` is always exactly
//!    eight ASCII digits.
//!
//! 2. **Single `ValidationStatus` lattice.** One definition of
//!    `valid < restricted < prohibited`, with `invalid` as a terminal
//!    short-circuit. Escalation can only move up the lattice.
//!
//! 3. **Diagnostics as data.** A `ValidationIssue` carries kind, severity,
//!    human-readable text and an optional recommendation. Nothing in the
//!    evaluation path raises an error for a bad shipment item.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `customs-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod issue;
pub mod status;

pub use error::ValidationError;
pub use identity::{CountryCode, HsnCode, HSN_CODE_LEN};
pub use issue::{IssueKind, Severity, ValidationIssue};
pub use status::ValidationStatus;
