// src/extract/report.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Inclusive date range a report covers, as ISO date strings.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Structured output for one report run. `geography` is only present
/// for reports that carry a per-country breakdown.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ReportOutput {
    pub date_range: DateRange,
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub traffic: BTreeMap<String, f64>,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geography: Option<BTreeMap<String, f64>>,
}

impl ReportOutput {
    pub fn new(
        kind: &str,
        label: &str,
        start_date: &str,
        end_date: &str,
        traffic: BTreeMap<String, f64>,
        unit: &str,
        geography: Option<BTreeMap<String, f64>>,
    ) -> Self {
        Self {
            date_range: DateRange {
                start: start_date.to_string(),
                end: end_date.to_string(),
            },
            kind: kind.to_string(),
            label: label.to_string(),
            traffic,
            unit: unit.to_string(),
            geography,
        }
    }
}
