use serde::{Deserialize, Serialize};

use medrec_core::{Entity, IdentificationNumber};

use crate::address::Address;
use crate::person::{Person, PersonalInfo};

/// A patient, keyed by identification number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    personal: PersonalInfo,
    phone: String,
    address: Address,
}

impl Patient {
    pub fn new(personal: PersonalInfo, phone: impl Into<String>, address: Address) -> Self {
        Self {
            personal,
            phone: phone.into(),
            address,
        }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = address;
    }
}

impl Person for Patient {
    fn personal(&self) -> &PersonalInfo {
        &self.personal
    }
}

impl Entity for Patient {
    type Id = IdentificationNumber;

    fn id(&self) -> &Self::Id {
        self.identification_number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Gender;

    #[test]
    fn id_is_the_identification_number() {
        let personal = PersonalInfo::new(
            "Carlos Perez",
            IdentificationNumber::parse("P-2001").unwrap(),
            Gender::Male,
            "carlos.perez@mail.com",
        )
        .unwrap();
        let mut p = Patient::new(
            personal,
            "3001112233",
            Address::new("7th St", "45A", "Chapinero", "Bogota", "110231"),
        );

        assert_eq!(p.id().as_str(), "P-2001");
        assert_eq!(p.phone(), "3001112233");

        let moved = p.address().with_number("46");
        p.set_address(moved.clone());
        assert_eq!(p.address(), &moved);
    }
}
