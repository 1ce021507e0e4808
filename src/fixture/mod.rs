// src/fixture/mod.rs

pub mod validate;

pub use validate::validate;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One summary metric tile on the traffic dashboard.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct KpiCard {
    pub title: String,
    /// Decimal-formatted display value, kept as authored ("170.82").
    pub value: String,
    pub unit: String,
}

/// Per-country byte volume row from the geography table.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct GeographyRow {
    /// Two-letter uppercase country code.
    pub country: String,
    /// Comma-grouped digit string, kept as authored ("31,398,058,511").
    pub bytes: String,
}

/// Month the date picker opens on.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy, Eq)]
pub struct InitialMonth {
    pub year: i32,
    /// Zero-indexed calendar month (0 = January).
    pub month: u32,
}

/// Complete mock dashboard snapshot. Field names and nesting are the
/// wire contract consumers bind to, hence the camelCase renames.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MockData {
    pub kpi_cards: Vec<KpiCard>,
    pub geography_rows: Vec<GeographyRow>,
    pub cp_codes: Vec<String>,
    pub initial_month: InitialMonth,
}

fn card(title: &str, value: &str, unit: &str) -> KpiCard {
    KpiCard {
        title: title.to_string(),
        value: value.to_string(),
        unit: unit.to_string(),
    }
}

fn row(country: &str, bytes: &str) -> GeographyRow {
    GeographyRow {
        country: country.to_string(),
        bytes: bytes.to_string(),
    }
}

static MOCK_DATA: Lazy<MockData> = Lazy::new(|| {
    let data = MockData {
        kpi_cards: vec![
            card("Edge", "170.82", "Terabytes"),
            card("Origin", "61.25", "Terabytes"),
            card("Midgress", "43.89", "Gigabytes"),
            card("Edge vs. Origin", "64.14", "%"),
        ],
        geography_rows: vec![
            row("ID", "168,776,644,787,204"),
            row("TW", "31,398,058,511"),
            row("SG", "5,234,567,890"),
        ],
        cp_codes: vec![
            "960172".to_string(),
            "578716".to_string(),
            "1415558".to_string(),
            "1421896".to_string(),
        ],
        initial_month: InitialMonth {
            year: 2026,
            month: 0,
        },
    };
    validate(&data).expect("mock dashboard data violates its own contract");
    data
});

/// Deterministic mock data for integration tests. Values are fixed so
/// test assertions can match exactly; never reformat them.
pub fn mock_data() -> &'static MockData {
    &MOCK_DATA
}
