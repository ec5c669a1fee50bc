//! # HSN & Country Identifiers
//!
//! Newtypes for the two lookup keys of the engine: the 8-digit Harmonized
//! System Nomenclature code of a commodity, and the destination country code.
//!
//! ## Validation
//!
//! [`HsnCode`] is exactly eight ASCII digits. No checksum or chapter range
//! is enforced; any well-formed code is a legitimate key even if no catalog
//! knows it.
//!
//! [`CountryCode`] is trimmed and upper-cased at construction. It is not
//! checked against the ISO 3166 list.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of digits in a well-formed HSN code.
pub const HSN_CODE_LEN: usize = 8;

// -- Validating Deserialize ---------------------------------------------------

impl<'de> Deserialize<'de> for HsnCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// HsnCode
// ---------------------------------------------------------------------------

/// An 8-digit HSN commodity classification code (e.g. `"61091000"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct HsnCode(String);

impl HsnCode {
    /// Create an HSN code, rejecting anything that is not exactly eight
    /// ASCII digits. Surrounding whitespace is not stripped.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidHsnCode`] for malformed input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !Self::is_well_formed(&value) {
            return Err(ValidationError::InvalidHsnCode(value));
        }
        Ok(Self(value))
    }

    /// `true` iff `code` is exactly eight ASCII digits.
    pub fn is_well_formed(code: &str) -> bool {
        code.len() == HSN_CODE_LEN && code.bytes().all(|b| b.is_ascii_digit())
    }

    /// Access the code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two-digit HS chapter (e.g. `"93"` for arms and ammunition).
    pub fn chapter(&self) -> &str {
        &self.0[..2]
    }
}

impl fmt::Display for HsnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for HsnCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for HsnCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `HashMap<HsnCode, _>` and `BTreeSet<HsnCode>` be queried with `&str`.
// Sound because the derived `Eq`/`Ord`/`Hash` delegate to the inner `String`.
impl Borrow<str> for HsnCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// CountryCode
// ---------------------------------------------------------------------------

/// A destination country code, normalized to upper case (e.g. `"AE"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a country code, trimming whitespace and upper-casing.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyCountryCode`] if nothing remains
    /// after trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let normalized = value.as_ref().trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(ValidationError::EmptyCountryCode);
        }
        Ok(Self(normalized))
    }

    /// Access the normalized code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for CountryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CountryCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn eight_digit_strings_are_accepted(code in "[0-9]{8}") {
            let parsed = HsnCode::new(code.clone()).unwrap();
            prop_assert_eq!(parsed.as_str(), code.as_str());
        }

        #[test]
        fn wrong_length_digit_strings_are_rejected(code in "[0-9]{0,7}|[0-9]{9,12}") {
            prop_assert!(HsnCode::new(code).is_err());
        }

        #[test]
        fn codes_with_a_non_digit_are_rejected(prefix in "[0-9]{0,7}", bad in "[^0-9]") {
            let mut code = prefix;
            code.push_str(&bad);
            while code.chars().count() < HSN_CODE_LEN {
                code.push('0');
            }
            prop_assert!(!HsnCode::is_well_formed(&code));
        }

        #[test]
        fn country_code_normalization_is_idempotent(raw in " {0,2}[a-zA-Z]{2} {0,2}") {
            let once = CountryCode::new(&raw).unwrap();
            let twice = CountryCode::new(once.as_str()).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
