//! `medrec-demo`: builds a sample hospital, exercises record keeping and
//! prints the statistics report to stdout.

mod config;
mod report;
mod sample;

use anyhow::Result;

use medrec_hospital::HospitalService;

use crate::config::DemoConfig;

fn main() -> Result<()> {
    let cfg = DemoConfig::from_env();
    if cfg.json_logs {
        medrec_observability::init();
    } else {
        medrec_observability::init_pretty();
    }
    for warning in &cfg.warnings {
        tracing::warn!("{warning}");
    }
    tracing::debug!(?cfg, "configuration loaded");

    let (hospital, progress) = sample::run_walkthrough(&cfg.hospital_name)?;
    for line in &progress {
        println!("{line}");
    }

    let summary = HospitalService::new(&hospital).summary();
    print!("{}", report::render(&summary, cfg.report_format)?);
    Ok(())
}
