//! Read-only aggregate queries over a hospital's current state.
//!
//! Every query recomputes from the current doctor/patient listings; nothing
//! is cached.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::doctor::Doctor;
use crate::hospital::Hospital;
use crate::person::{Gender, Person};

pub struct HospitalService<'a> {
    hospital: &'a Hospital,
}

impl<'a> HospitalService<'a> {
    pub fn new(hospital: &'a Hospital) -> Self {
        Self { hospital }
    }

    /// Sum of every doctor's salary (0 with no doctors).
    pub fn total_salaries(&self) -> f64 {
        self.hospital.list_doctors().iter().map(Doctor::salary).sum()
    }

    /// Salary totals per specialty. Specialties without doctors are absent.
    pub fn total_salaries_by_specialty(&self) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for d in self.hospital.list_doctors() {
            *totals.entry(d.specialty().to_string()).or_insert(0.0) += d.salary();
        }
        totals
    }

    /// Share of patients per gender, in percent.
    ///
    /// Every gender is present in the result; with no patients all of them are
    /// `0.0`.
    pub fn patient_gender_percentages(&self) -> BTreeMap<Gender, f64> {
        let patients = self.hospital.list_patients();
        if patients.is_empty() {
            return Gender::ALL.into_iter().map(|g| (g, 0.0)).collect();
        }

        let total = patients.len() as f64;
        Gender::ALL
            .into_iter()
            .map(|g| {
                let count = patients.iter().filter(|p| p.gender() == g).count() as f64;
                (g, count / total * 100.0)
            })
            .collect()
    }

    pub fn doctor_count_by_specialty(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for d in self.hospital.list_doctors() {
            *counts.entry(d.specialty().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Doctor with the earliest join year; the first listed wins ties.
    pub fn most_senior_doctor(&self) -> Option<Doctor> {
        self.hospital
            .list_doctors()
            .into_iter()
            .min_by_key(Doctor::join_year)
    }

    /// Snapshot of every query above, for reporting.
    pub fn summary(&self) -> HospitalSummary {
        HospitalSummary {
            hospital_name: self.hospital.name().to_string(),
            doctor_count: self.hospital.doctor_count(),
            patient_count: self.hospital.patient_count(),
            total_salaries: self.total_salaries(),
            total_salaries_by_specialty: self.total_salaries_by_specialty(),
            doctor_count_by_specialty: self.doctor_count_by_specialty(),
            patient_gender_percentages: self.patient_gender_percentages(),
            most_senior_doctor: self.most_senior_doctor().map(|d| SeniorDoctor {
                license_number: d.license_number().to_string(),
                full_name: d.full_name().to_string(),
                specialty: d.specialty().to_string(),
                join_year: d.join_year(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeniorDoctor {
    pub license_number: String,
    pub full_name: String,
    pub specialty: String,
    pub join_year: i32,
}

/// Serializable result of [`HospitalService::summary`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HospitalSummary {
    pub hospital_name: String,
    pub doctor_count: usize,
    pub patient_count: usize,
    pub total_salaries: f64,
    pub total_salaries_by_specialty: BTreeMap<String, f64>,
    pub doctor_count_by_specialty: BTreeMap<String, usize>,
    pub patient_gender_percentages: BTreeMap<Gender, f64>,
    pub most_senior_doctor: Option<SeniorDoctor>,
}
