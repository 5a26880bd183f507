//! Sample records and the walkthrough the demo performs on them.

use anyhow::{Context, Result};
use tracing::info;

use medrec_core::{IdentificationNumber, LicenseNumber, TaxId};
use medrec_hospital::{Address, Doctor, Gender, Hospital, Patient, Person, PersonalInfo};

fn personal(name: &str, id: &str, gender: Gender, email: &str) -> Result<PersonalInfo> {
    Ok(PersonalInfo::new(name, IdentificationNumber::parse(id)?, gender, email)?)
}

#[allow(clippy::too_many_arguments)]
fn doctor(
    name: &str,
    id: &str,
    gender: Gender,
    email: &str,
    license: &str,
    specialty: &str,
    join_year: i32,
    salary: f64,
) -> Result<Doctor> {
    Ok(Doctor::new(
        personal(name, id, gender, email)?,
        LicenseNumber::parse(license)?,
        specialty,
        join_year,
        salary,
    )?)
}

fn patient(
    name: &str,
    id: &str,
    gender: Gender,
    email: &str,
    phone: &str,
    address: Address,
) -> Result<Patient> {
    Ok(Patient::new(personal(name, id, gender, email)?, phone, address))
}

/// Build the hospital and run every record-keeping operation once.
///
/// Progress lines are returned so the caller decides where they go.
pub fn run_walkthrough(hospital_name: &str) -> Result<(Hospital, Vec<String>)> {
    let mut log = Vec::new();
    let mut hospital = Hospital::new(
        hospital_name,
        TaxId::parse("900123456-7")?,
        Address::new("Main Ave", "123", "Central", "Bogota", "110111"),
        false,
    )?;

    hospital.add_doctor(doctor(
        "Alice Carter",
        "D-1001",
        Gender::Female,
        "alice.carter@hospital.com",
        "LIC-001",
        "Cardiology",
        2010,
        120_000.0,
    )?)?;
    hospital.add_doctor(doctor(
        "Bob Nguyen",
        "D-1002",
        Gender::Male,
        "bob.nguyen@hospital.com",
        "LIC-002",
        "Neurology",
        2005,
        135_000.0,
    )?)?;
    hospital.add_doctor(doctor(
        "Evelyn Santos",
        "D-1003",
        Gender::Female,
        "evelyn.santos@hospital.com",
        "LIC-003",
        "Cardiology",
        2018,
        98_000.0,
    )?)?;

    let lic_003 = LicenseNumber::parse("LIC-003")?;
    let mut d3 = hospital
        .doctor_by_license(&lic_003)
        .context("LIC-003 missing after insert")?;
    log.push(format!("Read doctor: {} - {}", d3.full_name(), d3.specialty()));

    d3.set_specialty("Pediatrics")?;
    d3.set_salary(102_000.0)?;
    let d3 = hospital.update_doctor(d3)?;
    log.push(format!(
        "Updated doctor {} specialty to {}",
        d3.license_number(),
        d3.specialty()
    ));

    hospital.delete_doctor_by_license(&LicenseNumber::parse("LIC-001")?)?;
    log.push(format!(
        "Doctors after delete: {}",
        join(hospital.list_doctors().iter().map(|d| d.license_number().to_string()))
    ));

    hospital.add_patient(patient(
        "Carlos Perez",
        "P-2001",
        Gender::Male,
        "carlos.perez@mail.com",
        "3001112233",
        Address::new("7th St", "45A", "Chapinero", "Bogota", "110231"),
    )?)?;
    hospital.add_patient(patient(
        "Maria Gomez",
        "P-2002",
        Gender::Female,
        "maria.gomez@mail.com",
        "3002223344",
        Address::new("8th St", "10-22", "Usaquen", "Bogota", "110221"),
    )?)?;
    hospital.add_patient(patient(
        "Alex Lee",
        "P-2003",
        Gender::Other,
        "alex.lee@mail.com",
        "3003334455",
        Address::new("9th St", "99", "Suba", "Bogota", "110311"),
    )?)?;

    let p_2002 = IdentificationNumber::parse("P-2002")?;
    let p2 = hospital
        .patient_by_id(&p_2002)
        .context("P-2002 missing after insert")?;
    log.push(format!("Read patient: {} - {}", p2.full_name(), p2.phone()));

    // Phone is fixed at registration; a new number means a replacement record.
    let p2 = hospital.update_patient(Patient::new(
        p2.personal().clone(),
        "3009990000",
        p2.address().with_number("10-50"),
    ))?;
    log.push(format!("Updated patient {} phone: {}", p2.identification_number(), p2.phone()));

    hospital.delete_patient_by_id(&IdentificationNumber::parse("P-2003")?);
    log.push(format!(
        "Patients after delete: {}",
        join(hospital.list_patients().iter().map(|p| p.identification_number().to_string()))
    ));

    let lic_002 = LicenseNumber::parse("LIC-002")?;
    hospital.assign_patient_to_doctor(&IdentificationNumber::parse("P-2001")?, &lic_002)?;
    hospital.assign_patient_to_doctor(&p_2002, &lic_003)?;
    for license in [&lic_002, &lic_003] {
        let d = hospital
        .doctor_by_license(license)
        .with_context(|| format!("{license} missing"))?;
        log.push(format!(
        "Doctor {} patients: {}",
        license,
        join(d.assigned_patient_ids().iter().map(ToString::to_string))
        ));
    }

    info!(
        doctors = hospital.doctor_count(),
        patients = hospital.patient_count(),
        "walkthrough finished"
    );
    Ok((hospital, log))
}

fn join(items: impl Iterator<Item = String>) -> String {
    format!("[{}]", items.collect::<Vec<_>>().join(", "))
}
