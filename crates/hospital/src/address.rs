use serde::{Deserialize, Serialize};

use medrec_core::ValueObject;

/// Postal address (value object).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub postal_code: String,
}

impl ValueObject for Address {}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        neighborhood: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            number: number.into(),
            neighborhood: neighborhood.into(),
            city: city.into(),
            postal_code: postal_code.into(),
        }
    }

    /// Copy of this address with a different street number.
    pub fn with_number(&self, number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            ..self.clone()
        }
    }
}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} {}, {}, {} {}",
            self.street, self.number, self.neighborhood, self.city, self.postal_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_number_changes_only_the_number() {
        let addr = Address::new("8th St", "10-22", "Usaquen", "Bogota", "110221");
        let moved = addr.with_number("10-50");

        assert_eq!(moved.number, "10-50");
        assert_eq!(moved.street, addr.street);
        assert_eq!(moved.postal_code, addr.postal_code);
        assert_eq!(addr.number, "10-22");
    }

    #[test]
    fn equality_is_by_value() {
        let a = Address::new("Main Ave", "123", "Central", "Bogota", "110111");
        let b = Address::new("Main Ave", "123", "Central", "Bogota", "110111");
        assert_eq!(a, b);
        assert_ne!(a, b.with_number("124"));
    }
}
