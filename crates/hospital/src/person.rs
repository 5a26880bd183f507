//! Fields shared by every person the hospital tracks.

use serde::{Deserialize, Serialize};

use medrec_core::{DomainError, DomainResult, IdentificationNumber};

/// Gender as recorded on a person's file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Every variant, in declaration order.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }
}

impl core::fmt::Display for Gender {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Personal details embedded by doctors and patients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    full_name: String,
    identification_number: IdentificationNumber,
    gender: Gender,
    email: String,
}

impl PersonalInfo {
    pub fn new(
        full_name: impl Into<String>,
        identification_number: IdentificationNumber,
        gender: Gender,
        email: impl Into<String>,
    ) -> DomainResult<Self> {
        let full_name = full_name.into();
        if full_name.trim().is_empty() {
            return Err(DomainError::validation("full name cannot be empty"));
        }

        Ok(Self {
            full_name,
            identification_number,
            gender,
            email: email.into(),
        })
    }
}

/// Read access to the shared personal details.
pub trait Person {
    fn personal(&self) -> &PersonalInfo;

    fn full_name(&self) -> &str {
        &self.personal().full_name
    }

    fn identification_number(&self) -> &IdentificationNumber {
        &self.personal().identification_number
    }

    fn gender(&self) -> Gender {
        self.personal().gender
    }

    fn email(&self) -> &str {
        &self.personal().email
    }
}

impl Person for PersonalInfo {
    fn personal(&self) -> &PersonalInfo {
        self
    }
}
