// src/contract/mod.rs

pub mod baseline;

pub use baseline::{diff, Baseline, DiffReport, Drift};

use serde::{Deserialize, Serialize};

/// Report page a selector lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Hostname,
    Geography,
}

impl Page {
    pub fn as_str(&self) -> &str {
        match self {
            Page::Hostname => "hostname",
            Page::Geography => "geography",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hostname" => Some(Page::Hostname),
            "geography" => Some(Page::Geography),
            _ => None,
        }
    }
}

/// When a selector is expected to be present: after report data loads,
/// or while the filter panel is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Data,
    Filter,
}

impl Phase {
    pub fn as_str(&self) -> &str {
        match self {
            Phase::Data => "data",
            Phase::Filter => "filter",
        }
    }
}

/// One DOM selector the dashboard automation depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorContract {
    pub selector: &'static str,
    pub description: &'static str,
    pub page: Page,
    pub phase: Phase,
    pub expected_min: usize,
}

const fn contract(
    selector: &'static str,
    description: &'static str,
    page: Page,
    phase: Phase,
    expected_min: usize,
) -> SelectorContract {
    SelectorContract {
        selector,
        description,
        page,
        phase,
        expected_min,
    }
}

/// Every selector the automation relies on, with the minimum element
/// count a healthy page shows.
pub const CONTRACTS: &[SelectorContract] = &[
    contract("akam-single-kpi", "KPI card element", Page::Hostname, Phase::Data, 4),
    contract(".single-kpi__title", "KPI title", Page::Hostname, Phase::Data, 4),
    contract(".single-kpi__value", "KPI value", Page::Hostname, Phase::Data, 4),
    contract(".single-kpi__unit", "KPI unit", Page::Hostname, Phase::Data, 4),
    contract("app-date-range-preview", "Filter trigger", Page::Hostname, Phase::Data, 1),
    contract("#cpcodes-filter-editor", "CP code editor", Page::Hostname, Phase::Filter, 1),
    contract("input[placeholder='CP codes']", "CP code search", Page::Hostname, Phase::Filter, 1),
    contract(".akam-calendar-body-cell-content", "Calendar day cells", Page::Hostname, Phase::Filter, 28),
    contract("table.cdk-table.akam-table", "Geography table", Page::Geography, Phase::Data, 1),
];

/// Result of probing one selector.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct CheckResult {
    pub selector: String,
    pub description: String,
    pub page: Page,
    pub count: usize,
    pub expected_min: usize,
    pub found: bool,
}

impl SelectorContract {
    /// Record an observed element count against this contract.
    pub fn record(&self, count: usize) -> CheckResult {
        CheckResult {
            selector: self.selector.to_string(),
            description: self.description.to_string(),
            page: self.page,
            count,
            expected_min: self.expected_min,
            found: count >= self.expected_min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_found() {
        let result = CONTRACTS[0].record(5);
        assert!(result.found);
        assert_eq!(result.count, 5);
        assert_eq!(result.selector, "akam-single-kpi");
    }

    #[test]
    fn test_record_missing() {
        let result = CONTRACTS[1].record(2);
        assert!(!result.found);
        assert_eq!(result.count, 2);
    }

    #[test]
    fn test_record_zero() {
        let result = CONTRACTS[8].record(0);
        assert!(!result.found);
    }

    #[test]
    fn test_contracts_cover_both_pages() {
        let pages: Vec<Page> = CONTRACTS.iter().map(|c| c.page).collect();
        assert!(pages.contains(&Page::Hostname));
        assert!(pages.contains(&Page::Geography));
    }

    #[test]
    fn test_contracts_all_have_positive_min_count() {
        for c in CONTRACTS {
            assert!(c.expected_min > 0, "{}", c.selector);
        }
    }

    #[test]
    fn test_page_round_trip() {
        assert_eq!(Page::from_str("hostname"), Some(Page::Hostname));
        assert_eq!(Page::from_str(" Geography "), Some(Page::Geography));
        assert_eq!(Page::from_str("unknown"), None);
        assert_eq!(Page::Geography.as_str(), "geography");
    }

    #[test]
    fn test_check_result_wire_shape() {
        let json = serde_json::to_value(CONTRACTS[0].record(4)).unwrap();
        assert_eq!(json["page"], "hostname");
        assert_eq!(json["found"], true);
        assert_eq!(json["expected_min"], 4);
    }
}
