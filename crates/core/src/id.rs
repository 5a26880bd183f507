//! Strongly-typed natural keys used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Professional license number; the natural key of a doctor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicenseNumber(String);

/// National identification number; the natural key of a patient.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentificationNumber(String);

/// Tax identification number of an institution.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxId(String);

macro_rules! impl_string_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Parse an identifier, trimming surrounding whitespace.
            ///
            /// Blank input is rejected.
            pub fn parse(raw: impl AsRef<str>) -> DomainResult<Self> {
                let trimmed = raw.as_ref().trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(format!("{}: empty", $name)));
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

impl_string_newtype!(LicenseNumber, "LicenseNumber");
impl_string_newtype!(IdentificationNumber, "IdentificationNumber");
impl_string_newtype!(TaxId, "TaxId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_whitespace() {
        let id: LicenseNumber = "  LIC-001 ".parse().unwrap();
        assert_eq!(id.as_str(), "LIC-001");
        assert_eq!(id.to_string(), "LIC-001");
    }

    #[test]
    fn parse_rejects_blank() {
        match IdentificationNumber::parse("   ") {
            Err(DomainError::InvalidId(msg)) => assert!(msg.contains("IdentificationNumber")),
            other => panic!("Expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn ordering_follows_the_inner_string() {
        let a = LicenseNumber::parse("LIC-001").unwrap();
        let b = LicenseNumber::parse("LIC-002").unwrap();
        assert!(a < b);
    }
}
