//! # Table Errors
//!
//! Errors raised while building or loading reference tables. Lookups and
//! predicates over a built table never fail.

use std::path::PathBuf;

use customs_core::ValidationError;
use thiserror::Error;

/// Result alias for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Failure to build or load a reference table.
#[derive(Error, Debug)]
pub enum TableError {
    /// The table file could not be read.
    #[error("failed to read table file {}: {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The table file is not valid YAML for the expected shape.
    #[error("failed to parse YAML table {}: {source}", .path.display())]
    Yaml {
        /// File that failed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The table file is not valid JSON for the expected shape.
    #[error("failed to parse JSON table {}: {source}", .path.display())]
    Json {
        /// File that failed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Only `.yaml`, `.yml` and `.json` are understood.
    #[error("unsupported table format for {}: expected .yaml, .yml or .json", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Two catalog rows share a code.
    #[error("duplicate HSN code in catalog: {0}")]
    DuplicateHsnCode(String),

    /// Two restriction rows share a country code.
    #[error("duplicate country code in restriction table: {0}")]
    DuplicateCountry(String),

    /// A row carried a malformed identifier.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Canonical serialization for digesting failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let err = TableError::UnsupportedFormat(PathBuf::from("/tmp/table.toml"));
        assert!(err.to_string().contains("/tmp/table.toml"));
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: TableError = ValidationError::InvalidHsnCode("12".into()).into();
        assert_eq!(err.to_string(), "invalid HSN code \"12\": expected exactly 8 digits");
    }
}
