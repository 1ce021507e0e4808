// src/fixture/validate.rs

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use super::MockData;

static COUNTRY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2}$").expect("country pattern should parse"));

/// Digit string with optional comma grouping: "5234567890" or "5,234,567,890".
static GROUPED_DIGITS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d+|\d{1,3}(?:,\d{3})+)$").expect("grouped digits pattern should parse")
});

/// Decimal display value, optionally comma-grouped: "170.82", "1,234.56".
static DECIMAL_VALUE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d+|\d{1,3}(?:,\d{3})+)(?:\.\d+)?$").expect("decimal value pattern should parse")
});

/// Schema check over the fixture literals. The fixture is foundational
/// to every dependent test, so a failure here is fatal for the suite;
/// diagnostics name the offending record.
pub fn validate(data: &MockData) -> Result<()> {
    if data.kpi_cards.is_empty() {
        bail!("fixture has no KPI cards");
    }
    for card in &data.kpi_cards {
        if card.title.trim().is_empty() {
            bail!("KPI card with empty title");
        }
        if !DECIMAL_VALUE_RE.is_match(&card.value) {
            bail!(
                "KPI card {:?} has non-decimal value {:?}",
                card.title,
                card.value
            );
        }
        if card.unit.trim().is_empty() {
            bail!("KPI card {:?} has empty unit", card.title);
        }
    }

    for row in &data.geography_rows {
        if !COUNTRY_RE.is_match(&row.country) {
            bail!("geography row has invalid country code {:?}", row.country);
        }
        if !GROUPED_DIGITS_RE.is_match(&row.bytes) {
            bail!(
                "geography row {:?} has malformed byte count {:?}",
                row.country,
                row.bytes
            );
        }
    }

    for code in &data.cp_codes {
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_digit()) {
            bail!("CP code {:?} is not a digit string", code);
        }
    }

    if data.initial_month.month > 11 {
        bail!(
            "initial month index {} out of range 0..=11",
            data.initial_month.month
        );
    }
    if !(1000..=9999).contains(&data.initial_month.year) {
        bail!("initial year {} is not a 4-digit year", data.initial_month.year);
    }

    Ok(())
}
