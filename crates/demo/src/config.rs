//! Environment-driven configuration for the demo driver.

use std::collections::HashMap;
use std::env::VarError;

pub const ENV_HOSPITAL_NAME: &str = "MEDREC_HOSPITAL_NAME";
pub const ENV_REPORT_FORMAT: &str = "MEDREC_REPORT_FORMAT";
pub const ENV_LOG_FORMAT: &str = "MEDREC_LOG_FORMAT";

const DEFAULT_HOSPITAL_NAME: &str = "City Hospital";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub hospital_name: String,
    pub report_format: ReportFormat,
    pub json_logs: bool,
    /// Problems found while reading the environment, logged once tracing is up.
    pub warnings: Vec<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            hospital_name: DEFAULT_HOSPITAL_NAME.to_string(),
            report_format: ReportFormat::Text,
            json_logs: true,
            warnings: Vec::new(),
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Build from an explicit variable map; unknown values fall back to defaults.
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        Self::from_lookup(|key| vars.get(key).cloned().ok_or(VarError::NotPresent))
    }

    /// Build from a per-key lookup with `std::env::var` semantics.
    ///
    /// Values that are not valid Unicode are recorded as warnings and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Result<String, VarError>) -> Self {
        let mut cfg = Self::default();
        let get = |key: &str, warnings: &mut Vec<String>| match lookup(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                warnings.push(format!("{key} is not valid unicode; using default"));
                None
            }
        };

        if let Some(name) = get(ENV_HOSPITAL_NAME, &mut cfg.warnings) {
            if name.trim().is_empty() {
                cfg.warnings
                    .push(format!("{ENV_HOSPITAL_NAME} is blank; using default"));
            } else {
                cfg.hospital_name = name.trim().to_string();
            }
        }

        if let Some(raw) = get(ENV_REPORT_FORMAT, &mut cfg.warnings) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "text" => cfg.report_format = ReportFormat::Text,
                "json" => cfg.report_format = ReportFormat::Json,
                other => cfg
                    .warnings
                    .push(format!("unknown {ENV_REPORT_FORMAT} value {other:?}; using text")),
            }
        }

        if let Some(raw) = get(ENV_LOG_FORMAT, &mut cfg.warnings) {
            cfg.json_logs = !raw.trim().eq_ignore_ascii_case("pretty");
        }

        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(DemoConfig::from_vars(&HashMap::new()), DemoConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let cfg = DemoConfig::from_vars(&vars(&[
            (ENV_HOSPITAL_NAME, " North Clinic "),
            (ENV_REPORT_FORMAT, "JSON"),
            (ENV_LOG_FORMAT, "pretty"),
        ]));
        assert_eq!(cfg.hospital_name, "North Clinic");
        assert_eq!(cfg.report_format, ReportFormat::Json);
        assert!(!cfg.json_logs);
    }

    #[test]
    fn unknown_or_blank_values_fall_back() {
        let cfg = DemoConfig::from_vars(&vars(&[
            (ENV_HOSPITAL_NAME, "   "),
            (ENV_REPORT_FORMAT, "yaml"),
        ]));
        assert_eq!(cfg.hospital_name, DEFAULT_HOSPITAL_NAME);
        assert_eq!(cfg.report_format, ReportFormat::Text);
        assert_eq!(cfg.warnings.len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_values_warn_and_fall_back() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let cfg = DemoConfig::from_lookup(|key| match key {
            ENV_REPORT_FORMAT => Ok("json".to_string()),
            ENV_HOSPITAL_NAME | ENV_LOG_FORMAT => {
                Err(VarError::NotUnicode(OsString::from_vec(vec![0xff, 0xfe])))
            }
            _ => Err(VarError::NotPresent),
        });

        assert_eq!(cfg.hospital_name, DEFAULT_HOSPITAL_NAME);
        assert_eq!(cfg.report_format, ReportFormat::Json);
        assert!(cfg.json_logs);
        assert_eq!(cfg.warnings.len(), 2);
        assert!(cfg.warnings[0].contains(ENV_HOSPITAL_NAME));
    }

    #[test]
    fn from_env_reads_only_its_own_keys() {
        // Unrelated variables (whatever their encoding) are never inspected.
        let cfg = DemoConfig::from_env();
        assert!(!cfg.hospital_name.trim().is_empty());
    }
}
