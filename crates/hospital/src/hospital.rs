//! Hospital aggregate root.
//!
//! The hospital exclusively owns its doctor and patient repositories. Every
//! mutation goes through a `&mut self` method here, so cross-entity invariants
//! (at least one active doctor, assignments referencing existing entities) are
//! checked and applied under a single borrow.

use tracing::{debug, info, warn};

use medrec_core::{
    AggregateRoot, CrudRepository, DomainError, DomainResult, Entity, IdentificationNumber,
    InMemoryRepository, LicenseNumber, TaxId,
};

use crate::address::Address;
use crate::doctor::Doctor;
use crate::patient::Patient;

pub type DoctorRepository = InMemoryRepository<Doctor, LicenseNumber>;
pub type PatientRepository = InMemoryRepository<Patient, IdentificationNumber>;

/// Minimum number of doctors a hospital must keep on staff.
pub const MIN_ACTIVE_DOCTORS: usize = 1;

#[derive(Debug, Clone)]
pub struct Hospital {
    name: String,
    tax_id: TaxId,
    address: Address,
    has_inpatients: bool,
    doctors: DoctorRepository,
    patients: PatientRepository,
    version: u64,
}

impl Hospital {
    /// Create a hospital with empty staff and patient records.
    pub fn new(
        name: impl Into<String>,
        tax_id: TaxId,
        address: Address,
        has_inpatients: bool,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("hospital name cannot be empty"));
        }

        Ok(Self {
            name,
            tax_id,
            address,
            has_inpatients,
            doctors: InMemoryRepository::keyed_by_id("doctor"),
            patients: InMemoryRepository::keyed_by_id("patient"),
            version: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tax_id(&self) -> &TaxId {
        &self.tax_id
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn has_inpatients(&self) -> bool {
        self.has_inpatients
    }

    pub fn set_has_inpatients(&mut self, has_inpatients: bool) {
        if self.has_inpatients != has_inpatients {
            self.has_inpatients = has_inpatients;
            self.bump();
        }
    }

    fn bump(&mut self) {
        self.version += 1;
    }

    // -- doctors -----------------------------------------------------------

    pub fn add_doctor(&mut self, doctor: Doctor) -> DomainResult<Doctor> {
        let doctor = self.doctors.create(doctor)?;
        self.bump();
        info!(license = %doctor.license_number(), specialty = doctor.specialty(), "doctor added");
        Ok(doctor)
    }

    pub fn doctor_by_license(&self, license: &LicenseNumber) -> Option<Doctor> {
        self.doctors.read_by_id(license)
    }

    pub fn update_doctor(&mut self, doctor: Doctor) -> DomainResult<Doctor> {
        let doctor = self.doctors.update(doctor)?;
        self.bump();
        debug!(license = %doctor.license_number(), "doctor updated");
        Ok(doctor)
    }

    /// Remove a doctor from staff.
    ///
    /// Rejected with `InvariantViolation` unless at least two doctors are on
    /// staff, whether or not `license` is one of them. An unknown license with
    /// enough staff is a no-op.
    pub fn delete_doctor_by_license(&mut self, license: &LicenseNumber) -> DomainResult<()> {
        let total = self.doctors.count();
        if total <= MIN_ACTIVE_DOCTORS {
            warn!(license = %license, total, "refusing to delete last active doctor");
            return Err(DomainError::invariant(
                "hospital must keep at least one active doctor",
            ));
        }

        if self.doctors.contains(license) {
            self.doctors.delete_by_id(license);
            self.bump();
            info!(license = %license, "doctor deleted");
        }
        Ok(())
    }

    pub fn list_doctors(&self) -> Vec<Doctor> {
        self.doctors.list_all()
    }

    pub fn doctor_count(&self) -> usize {
        self.doctors.count()
    }

    // -- patients ----------------------------------------------------------

    pub fn add_patient(&mut self, patient: Patient) -> DomainResult<Patient> {
        let patient = self.patients.create(patient)?;
        self.bump();
        info!(patient = %patient.id(), "patient added");
        Ok(patient)
    }

    pub fn patient_by_id(&self, id: &IdentificationNumber) -> Option<Patient> {
        self.patients.read_by_id(id)
    }

    pub fn update_patient(&mut self, patient: Patient) -> DomainResult<Patient> {
        let patient = self.patients.update(patient)?;
        self.bump();
        debug!(patient = %patient.id(), "patient updated");
        Ok(patient)
    }

    /// Remove a patient record. Unknown ids are a no-op.
    ///
    /// Existing doctor assignments are left as they are.
    pub fn delete_patient_by_id(&mut self, id: &IdentificationNumber) {
        if self.patients.contains(id) {
            self.patients.delete_by_id(id);
            self.bump();
            info!(patient = %id, "patient deleted");
        }
    }

    pub fn list_patients(&self) -> Vec<Patient> {
        self.patients.list_all()
    }

    pub fn patient_count(&self) -> usize {
        self.patients.count()
    }

    // -- assignments -------------------------------------------------------

    /// Assign a patient to a doctor. Assigning an existing pair is a no-op.
    pub fn assign_patient_to_doctor(
        &mut self,
        patient_id: &IdentificationNumber,
        license: &LicenseNumber,
    ) -> DomainResult<()> {
        let patient = self
            .patients
            .read_by_id(patient_id)
            .ok_or_else(|| DomainError::not_found("patient", patient_id))?;
        let mut doctor = self
            .doctors
            .read_by_id(license)
            .ok_or_else(|| DomainError::not_found("doctor", license))?;

        if !doctor.assign_patient(patient.id().clone()) {
            debug!(patient = %patient_id, license = %license, "patient already assigned");
            return Ok(());
        }

        self.doctors.update(doctor)?;
        self.bump();
        info!(patient = %patient_id, license = %license, "patient assigned");
        Ok(())
    }

    /// Remove a patient from a doctor's list. An unassigned patient is a no-op.
    pub fn unassign_patient_from_doctor(
        &mut self,
        patient_id: &IdentificationNumber,
        license: &LicenseNumber,
    ) -> DomainResult<()> {
        let mut doctor = self
            .doctors
            .read_by_id(license)
            .ok_or_else(|| DomainError::not_found("doctor", license))?;

        if !doctor.unassign_patient(patient_id) {
            debug!(patient = %patient_id, license = %license, "patient was not assigned");
            return Ok(());
        }

        self.doctors.update(doctor)?;
        self.bump();
        info!(patient = %patient_id, license = %license, "patient unassigned");
        Ok(())
    }
}

impl AggregateRoot for Hospital {
    type Id = TaxId;

    fn id(&self) -> &Self::Id {
        &self.tax_id
    }

    fn version(&self) -> u64 {
        self.version
    }
}
