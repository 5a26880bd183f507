//! Console rendering of a hospital summary.

use std::fmt::{self, Write as _};

use anyhow::Result;

use medrec_hospital::HospitalSummary;

use crate::config::ReportFormat;

pub fn render(summary: &HospitalSummary, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        ReportFormat::Text => Ok(render_text(summary)?),
    }
}

fn render_text(s: &HospitalSummary) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "== {} ==", s.hospital_name)?;
    writeln!(out, "Doctors: {}  Patients: {}", s.doctor_count, s.patient_count)?;
    writeln!(out, "Total salaries: {:.2}", s.total_salaries)?;

    writeln!(out, "Total salaries by specialty:")?;
    for (specialty, total) in &s.total_salaries_by_specialty {
        writeln!(out, "  {specialty}: {total:.2}")?;
    }

    writeln!(out, "Patient gender percentages:")?;
    for (gender, pct) in &s.patient_gender_percentages {
        writeln!(out, "  {gender}: {pct:.1}%")?;
    }

    writeln!(out, "Doctor count by specialty:")?;
    for (specialty, count) in &s.doctor_count_by_specialty {
        writeln!(out, "  {specialty}: {count}")?;
    }

    match &s.most_senior_doctor {
        Some(d) => writeln!(
            out,
            "Most senior doctor: {} - {} (join year {})",
            d.full_name, d.specialty, d.join_year
        )?,
        None => writeln!(out, "Most senior doctor: none")?,
    }
    Ok(out)
}
