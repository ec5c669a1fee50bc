//! # customs-cli — Command-Line Front End
//!
//! Provides the `customs` binary over the rules engine.
//!
//! ## Subcommands
//!
//! - `customs check`: classify one HSN code for a destination.
//! - `customs batch`: classify every item of a shipment file.
//! - `customs lookup`: show the catalog entry for a code.
//! - `customs search`: free-text catalog search.
//! - `customs countries`: list destinations with restriction entries.
//! - `customs digest`: print the active ruleset fingerprint.
//!
//! ```bash
//! customs check 93011000 --country AE
//! customs batch shipment.yaml --country US --json
//! customs --config customs.yaml digest
//! ```
//!
//! ## Exit Codes
//!
//! `0` success, `1` error, `2` the shipment is blocked.

pub mod catalog;
pub mod check;
pub mod config;

use std::path::Path;

use anyhow::Result;
use customs_validate::ValidationService;

use crate::config::CliConfig;

/// Process exit code when validation blocks the shipment.
pub const EXIT_BLOCKED: u8 = 2;

/// Resolved configuration plus the service built from it.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: CliConfig,
    pub service: ValidationService,
}

impl Session {
    /// Load the optional config file and build the validation service.
    pub fn open(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let service = config.build_service()?;
        Ok(Self { config, service })
    }

    /// The destination to validate against: the explicit flag, else the
    /// configured default.
    pub fn destination(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .map(str::to_string)
            .or_else(|| self.config.default_country.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("no destination given: pass --country or set default_country in the config file")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_without_config_uses_builtin_tables() {
        let session = Session::open(None).unwrap();
        assert!(session.service.catalog().lookup("61091000").is_some());
        assert!(session.service.countries().lookup("AE").is_some());
    }

    #[test]
    fn test_destination_precedence() {
        let mut session = Session::open(None).unwrap();
        assert!(session.destination(None).is_err());
        session.config.default_country = Some("GB".into());
        assert_eq!(session.destination(None).unwrap(), "GB");
        assert_eq!(session.destination(Some("AE")).unwrap(), "AE");
    }
}
