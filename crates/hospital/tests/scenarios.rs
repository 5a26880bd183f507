//! End-to-end scenarios over the public hospital API.

use medrec_core::{AggregateRoot, DomainError, IdentificationNumber, LicenseNumber, TaxId};
use medrec_hospital::{
    Address, Doctor, Gender, Hospital, HospitalService, Patient, Person, PersonalInfo,
};

fn lic(raw: &str) -> LicenseNumber {
    LicenseNumber::parse(raw).unwrap()
}

fn pid(raw: &str) -> IdentificationNumber {
    IdentificationNumber::parse(raw).unwrap()
}

fn city_hospital() -> Hospital {
    Hospital::new(
        "City Hospital",
        TaxId::parse("900123456-7").unwrap(),
        Address::new("Main Ave", "123", "Central", "Bogota", "110111"),
        false,
    )
    .unwrap()
}

fn doctor(
    name: &str,
    id: &str,
    gender: Gender,
    license: &str,
    specialty: &str,
    join_year: i32,
    salary: f64,
) -> Doctor {
    let personal = PersonalInfo::new(name, pid(id), gender, "staff@hospital.com").unwrap();
    Doctor::new(personal, lic(license), specialty, join_year, salary).unwrap()
}

fn patient(name: &str, id: &str, gender: Gender, phone: &str) -> Patient {
    let personal = PersonalInfo::new(name, pid(id), gender, "someone@mail.com").unwrap();
    Patient::new(
        personal,
        phone,
        Address::new("8th St", "10-22", "Usaquen", "Bogota", "110221"),
    )
}

fn alice() -> Doctor {
    doctor(
        "Alice Carter",
        "D-1001",
        Gender::Female,
        "LIC-001",
        "Cardiology",
        2010,
        120_000.0,
    )
}

fn bob() -> Doctor {
    doctor(
        "Bob Nguyen",
        "D-1002",
        Gender::Male,
        "LIC-002",
        "Neurology",
        2005,
        135_000.0,
    )
}

fn evelyn() -> Doctor {
    doctor(
        "Evelyn Santos",
        "D-1003",
        Gender::Female,
        "LIC-003",
        "Cardiology",
        2018,
        98_000.0,
    )
}

fn staffed_hospital() -> Hospital {
    let mut h = city_hospital();
    h.add_doctor(alice()).unwrap();
    h.add_doctor(bob()).unwrap();
    h.add_doctor(evelyn()).unwrap();
    h
}

#[test]
fn three_doctors_most_senior_is_the_2005_join() {
    let h = staffed_hospital();
    let senior = HospitalService::new(&h).most_senior_doctor().unwrap();
    assert_eq!(senior.full_name(), "Bob Nguyen");
    assert_eq!(senior.join_year(), 2005);
}

#[test]
fn two_cardiologists_sum_and_count() {
    let h = staffed_hospital();
    let svc = HospitalService::new(&h);

    assert_eq!(svc.total_salaries_by_specialty()["Cardiology"], 218_000.0);
    assert_eq!(svc.doctor_count_by_specialty()["Cardiology"], 2);
}

#[test]
fn sole_doctor_cannot_be_deleted() {
    let mut h = city_hospital();
    h.add_doctor(alice()).unwrap();

    let err = h.delete_doctor_by_license(&lic("LIC-001")).unwrap_err();
    assert!(matches!(err, DomainError::InvariantViolation(_)));

    let listed: Vec<_> = h
        .list_doctors()
        .into_iter()
        .map(|d| d.license_number().to_string())
        .collect();
    assert_eq!(listed, vec!["LIC-001".to_string()]);
}

#[test]
fn staff_can_shrink_down_to_one_but_not_zero() {
    let mut h = staffed_hospital();

    h.delete_doctor_by_license(&lic("LIC-001")).unwrap();
    assert_eq!(h.doctor_count(), 2);
    h.delete_doctor_by_license(&lic("LIC-003")).unwrap();
    assert_eq!(h.doctor_count(), 1);
    assert!(h.delete_doctor_by_license(&lic("LIC-002")).is_err());
    assert_eq!(h.doctor_count(), 1);
}

#[test]
fn full_record_keeping_walkthrough() {
    let mut h = staffed_hospital();

    let mut d3 = h.doctor_by_license(&lic("LIC-003")).unwrap();
    d3.set_specialty("Pediatrics").unwrap();
    d3.set_salary(102_000.0).unwrap();
    h.update_doctor(d3).unwrap();
    h.delete_doctor_by_license(&lic("LIC-001")).unwrap();

    h.add_patient(patient("Carlos Perez", "P-2001", Gender::Male, "3001112233")).unwrap();
    h.add_patient(patient("Maria Gomez", "P-2002", Gender::Female, "3002223344")).unwrap();
    h.add_patient(patient("Alex Lee", "P-2003", Gender::Other, "3003334455")).unwrap();

    let p2 = h.patient_by_id(&pid("P-2002")).unwrap();
    let replacement = Patient::new(
        p2.personal().clone(),
        "3009990000",
        p2.address().with_number("10-50"),
    );
    h.update_patient(replacement).unwrap();
    h.delete_patient_by_id(&pid("P-2003"));

    h.assign_patient_to_doctor(&pid("P-2001"), &lic("LIC-002")).unwrap();
    h.assign_patient_to_doctor(&pid("P-2002"), &lic("LIC-003")).unwrap();

    let p2 = h.patient_by_id(&pid("P-2002")).unwrap();
    assert_eq!(p2.phone(), "3009990000");
    assert_eq!(p2.address().number, "10-50");
    assert!(h.doctor_by_license(&lic("LIC-002")).unwrap().is_assigned(&pid("P-2001")));
    assert!(h.doctor_by_license(&lic("LIC-003")).unwrap().is_assigned(&pid("P-2002")));

    let summary = HospitalService::new(&h).summary();
    assert_eq!(summary.doctor_count, 2);
    assert_eq!(summary.patient_count, 2);
    assert_eq!(summary.total_salaries, 237_000.0);
    assert_eq!(summary.total_salaries_by_specialty["Pediatrics"], 102_000.0);
    assert_eq!(summary.patient_gender_percentages[&Gender::Other], 0.0);
    assert!(h.version() > 0);
}

#[test]
fn summary_serializes_with_uppercase_gender_keys() {
    let mut h = staffed_hospital();
    h.add_patient(patient("Alex Lee", "P-2003", Gender::Other, "3003334455")).unwrap();

    let json = serde_json::to_value(HospitalService::new(&h).summary()).unwrap();
    assert_eq!(json["patient_gender_percentages"]["OTHER"], 100.0);
    assert_eq!(json["patient_gender_percentages"]["MALE"], 0.0);
    assert_eq!(json["most_senior_doctor"]["license_number"], "LIC-002");
}
