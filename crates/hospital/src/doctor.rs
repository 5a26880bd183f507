use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use medrec_core::{DomainError, DomainResult, Entity, IdentificationNumber, LicenseNumber};

use crate::person::{Person, PersonalInfo};

/// A doctor on the hospital staff, keyed by license number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    personal: PersonalInfo,
    license_number: LicenseNumber,
    specialty: String,
    join_year: i32,
    salary: f64,
    assigned_patient_ids: BTreeSet<IdentificationNumber>,
}

fn validate_specialty(specialty: &str) -> DomainResult<()> {
    if specialty.trim().is_empty() {
        return Err(DomainError::validation("specialty cannot be empty"));
    }
    Ok(())
}

fn validate_salary(salary: f64) -> DomainResult<()> {
    if !salary.is_finite() || salary < 0.0 {
        return Err(DomainError::validation(format!(
            "salary must be a non-negative amount (got {salary})"
        )));
    }
    Ok(())
}

impl Doctor {
    /// Create a doctor with no assigned patients.
    pub fn new(
        personal: PersonalInfo,
        license_number: LicenseNumber,
        specialty: impl Into<String>,
        join_year: i32,
        salary: f64,
    ) -> DomainResult<Self> {
        let specialty = specialty.into();
        validate_specialty(&specialty)?;
        validate_salary(salary)?;

        Ok(Self {
            personal,
            license_number,
            specialty,
            join_year,
            salary,
            assigned_patient_ids: BTreeSet::new(),
        })
    }

    pub fn license_number(&self) -> &LicenseNumber {
        &self.license_number
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    pub fn join_year(&self) -> i32 {
        self.join_year
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn assigned_patient_ids(&self) -> &BTreeSet<IdentificationNumber> {
        &self.assigned_patient_ids
    }

    pub fn is_assigned(&self, patient_id: &IdentificationNumber) -> bool {
        self.assigned_patient_ids.contains(patient_id)
    }

    pub fn set_specialty(&mut self, specialty: impl Into<String>) -> DomainResult<()> {
        let specialty = specialty.into();
        validate_specialty(&specialty)?;
        self.specialty = specialty;
        Ok(())
    }

    pub fn set_salary(&mut self, salary: f64) -> DomainResult<()> {
        validate_salary(salary)?;
        self.salary = salary;
        Ok(())
    }

    /// Returns `true` if the patient was not assigned before.
    pub fn assign_patient(&mut self, patient_id: IdentificationNumber) -> bool {
        self.assigned_patient_ids.insert(patient_id)
    }

    /// Returns `true` if the patient was assigned before.
    pub fn unassign_patient(&mut self, patient_id: &IdentificationNumber) -> bool {
        self.assigned_patient_ids.remove(patient_id)
    }
}

impl Person for Doctor {
    fn personal(&self) -> &PersonalInfo {
        &self.personal
    }
}

impl Entity for Doctor {
    type Id = LicenseNumber;

    fn id(&self) -> &Self::Id {
        &self.license_number
    }
}
