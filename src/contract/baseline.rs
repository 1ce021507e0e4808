// src/contract/baseline.rs

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::CheckResult;

/// Saved snapshot of contract check results, used to detect upstream
/// DOM drift between runs.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct Baseline {
    pub timestamp: DateTime<Utc>,
    pub results: Vec<CheckResult>,
}

impl Baseline {
    pub fn new(results: Vec<CheckResult>) -> Self {
        Self {
            timestamp: Utc::now(),
            results,
        }
    }

    /// Write as pretty JSON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating baseline directory {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("serializing baseline")?;
        fs::write(path, json + "\n")
            .with_context(|| format!("writing baseline {}", path.display()))?;
        info!("baseline saved: {}", path.display());
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading baseline {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing baseline {}", path.display()))
    }
}

/// Per-selector drift outcome against the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drift {
    /// Present in baseline and still healthy.
    Ok,
    /// Not in the baseline at all.
    New,
    /// Count dropped but the selector still meets its minimum.
    Decreased,
    /// Was found in the baseline, now missing.
    Broken,
}

/// One diffed selector plus its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftEntry {
    pub selector: String,
    pub drift: Drift,
    pub baseline_count: Option<usize>,
    pub count: usize,
}

/// Outcome of comparing fresh results against a stored baseline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiffReport {
    pub entries: Vec<DriftEntry>,
}

impl DiffReport {
    /// True if any previously-found selector is now missing.
    pub fn is_breaking(&self) -> bool {
        self.entries.iter().any(|e| e.drift == Drift::Broken)
    }
}

/// Compare fresh results against the stored baseline, logging each
/// selector's outcome. Count decreases are warnings, not failures.
pub fn diff(baseline: &Baseline, results: &[CheckResult]) -> DiffReport {
    let by_selector: HashMap<&str, &CheckResult> = baseline
        .results
        .iter()
        .map(|r| (r.selector.as_str(), r))
        .collect();

    info!("comparing to baseline from {}", baseline.timestamp);

    let mut entries = Vec::with_capacity(results.len());
    for result in results {
        let (drift, baseline_count) = match by_selector.get(result.selector.as_str()) {
            None => {
                info!(
                    "NEW {}: {} (count={})",
                    result.description, result.selector, result.count
                );
                (Drift::New, None)
            }
            Some(old) if old.found && !result.found => {
                error!(
                    "BROKEN {}: {} (was {}, now {})",
                    result.description, result.selector, old.count, result.count
                );
                (Drift::Broken, Some(old.count))
            }
            Some(old) if result.count < old.count => {
                warn!(
                    "{}: {} count decreased ({} -> {})",
                    result.description, result.selector, old.count, result.count
                );
                (Drift::Decreased, Some(old.count))
            }
            Some(old) => {
                info!("OK {}: {} ({})", result.description, result.selector, result.count);
                (Drift::Ok, Some(old.count))
            }
        };
        entries.push(DriftEntry {
            selector: result.selector.clone(),
            drift,
            baseline_count,
            count: result.count,
        });
    }

    DiffReport { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{Page, CONTRACTS};
    use tempfile::tempdir;

    fn check(selector: &str, count: usize, expected_min: usize) -> CheckResult {
        CheckResult {
            selector: selector.to_string(),
            description: selector.to_string(),
            page: Page::Hostname,
            count,
            expected_min,
            found: count >= expected_min,
        }
    }

    #[test]
    fn test_diff_all_ok() {
        let baseline = Baseline::new(vec![check("akam-single-kpi", 4, 4)]);
        let report = diff(&baseline, &[check("akam-single-kpi", 4, 4)]);
        assert!(!report.is_breaking());
        assert_eq!(report.entries[0].drift, Drift::Ok);
    }

    #[test]
    fn test_diff_broken() {
        let baseline = Baseline::new(vec![check(".single-kpi__value", 4, 4)]);
        let report = diff(&baseline, &[check(".single-kpi__value", 0, 4)]);
        assert!(report.is_breaking());
        assert_eq!(report.entries[0].drift, Drift::Broken);
        assert_eq!(report.entries[0].baseline_count, Some(4));
    }

    #[test]
    fn test_diff_count_decreased_is_not_breaking() {
        let baseline = Baseline::new(vec![check(".akam-calendar-body-cell-content", 62, 28)]);
        let report = diff(&baseline, &[check(".akam-calendar-body-cell-content", 30, 28)]);
        assert!(!report.is_breaking());
        assert_eq!(report.entries[0].drift, Drift::Decreased);
    }

    #[test]
    fn test_diff_new_selector_is_not_breaking() {
        let baseline = Baseline::new(vec![]);
        let report = diff(&baseline, &[check(".new-element", 3, 1)]);
        assert!(!report.is_breaking());
        assert_eq!(report.entries[0].drift, Drift::New);
        assert_eq!(report.entries[0].baseline_count, None);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("golden").join("contract_baseline.json");

        let baseline = Baseline::new(CONTRACTS.iter().map(|c| c.record(c.expected_min)).collect());
        baseline.save(&path).unwrap();

        let loaded = Baseline::load(&path).unwrap();
        assert_eq!(loaded, baseline);
        assert_eq!(loaded.results.len(), CONTRACTS.len());
    }

    #[test]
    fn test_load_missing_baseline_is_error() {
        let dir = tempdir().unwrap();
        let err = Baseline::load(&dir.path().join("nope.json"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("reading baseline"), "{err}");
    }
}
