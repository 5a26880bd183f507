//! Hospital domain module.
//!
//! Doctors and patients are stored in repositories owned by the `Hospital`
//! aggregate; `HospitalService` answers read-only statistics over them. All
//! state is in memory.

pub mod address;
pub mod doctor;
pub mod hospital;
pub mod patient;
pub mod person;
pub mod service;
pub mod shared;

pub use address::Address;
pub use doctor::Doctor;
pub use hospital::{DoctorRepository, Hospital, MIN_ACTIVE_DOCTORS, PatientRepository};
pub use patient::Patient;
pub use person::{Gender, Person, PersonalInfo};
pub use service::{HospitalService, HospitalSummary, SeniorDoctor};
pub use shared::SharedHospital;
