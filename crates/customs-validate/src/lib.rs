//! # customs-validate — Shipment Item Classification
//!
//! Combines the HSN catalog and the country restriction table into a single
//! decision per shipment item, and aggregates decisions across a shipment.
//!
//! ## Evaluation Order
//!
//! For one item, checks run in a fixed order and each can only escalate
//! the status along `valid < restricted < prohibited`:
//!
//! ```text
//! format → catalog → global prohibition → global restriction → license
//!        → country code prohibition → country category prohibition
//!        → country code restriction → country category restriction
//!        → advisory notes
//! ```
//!
//! A malformed code short-circuits to `invalid`. A well-formed code that the
//! catalog does not know is accepted as `valid` without consulting the
//! destination's rules.
//!
//! ## Purity
//!
//! Every operation is a synchronous, side-effect-free function of its
//! inputs and the injected tables. Nothing is retried and nothing is cached.

pub mod batch;
pub mod result;
pub mod service;
pub mod summary;

pub use batch::{BatchEntry, BatchValidation, ShipmentItem};
pub use result::ValidationResult;
pub use service::ValidationService;
pub use summary::{has_blocking_issues, summarize, ValidationSummary};
