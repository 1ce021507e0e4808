// src/config/mod.rs

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;

/// One `report_types` entry as written in the settings file.
#[derive(Debug, Deserialize, PartialEq, Clone, Eq)]
pub struct RawReportType {
    pub label: String,
    pub cp_codes: Vec<String>,
    pub unit: String,
    #[serde(default)]
    pub geo_countries: Vec<String>,
}

/// Top-level settings file (config/settings.yaml).
#[derive(Debug, Deserialize, PartialEq, Clone, Eq)]
pub struct Settings {
    pub report_types: BTreeMap<String, RawReportType>,
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading settings {}", path.display()))?;
        serde_yaml::from_str(&text).with_context(|| format!("parsing settings {}", path.display()))
    }
}

/// Validated per-report configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub label: String,
    pub cp_codes: Vec<String>,
    pub unit: String,
    pub geo_countries: Vec<String>,
}

const VALID_UNITS: &[&str] = &["TB", "GB"];

/// CP codes must be "ALL" or digit-only strings.
fn validate_cp_codes(cp_codes: &[String], report_name: &str) -> Result<()> {
    for code in cp_codes {
        let numeric = !code.is_empty() && code.chars().all(|c| c.is_ascii_digit());
        if code != "ALL" && !numeric {
            bail!(
                "invalid CP code {:?} in report {:?}: must be numeric or \"ALL\"",
                code,
                report_name
            );
        }
    }
    Ok(())
}

/// Validate every raw report type and build the config map.
pub fn build_report_types(settings: &Settings) -> Result<BTreeMap<String, ReportConfig>> {
    let mut result = BTreeMap::new();
    for (name, raw) in &settings.report_types {
        validate_cp_codes(&raw.cp_codes, name)?;
        if !VALID_UNITS.contains(&raw.unit.as_str()) {
            bail!(
                "invalid unit {:?} in report {:?}: must be one of {:?}",
                raw.unit,
                name,
                VALID_UNITS
            );
        }
        result.insert(
            name.clone(),
            ReportConfig {
                label: raw.label.clone(),
                cp_codes: raw.cp_codes.clone(),
                unit: raw.unit.clone(),
                geo_countries: raw.geo_countries.clone(),
            },
        );
    }
    info!("loaded {} report types", result.len());
    Ok(result)
}

/// Load the settings file and build validated report configs in one step.
pub fn load_report_types(path: impl AsRef<Path>) -> Result<BTreeMap<String, ReportConfig>> {
    let settings = Settings::load(path)?;
    build_report_types(&settings)
}
