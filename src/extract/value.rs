// src/extract/value.rs

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static TRAFFIC_VALUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([\d,.]+)\s+(.+)$").expect("traffic value pattern should parse"));

/// Long display labels → short unit codes. Unknown labels pass through
/// unchanged.
fn normalize_unit(raw: &str) -> &str {
    match raw {
        "Terabytes" => "TB",
        "Gigabytes" => "GB",
        "Megabytes" => "MB",
        "Bytes" => "B",
        other => other,
    }
}

/// Decimal bytes per unit. "%" and friends carry no byte factor.
fn bytes_factor(unit: &str) -> Result<f64> {
    Ok(match unit {
        "B" => 1.0,
        "MB" => 1e6,
        "GB" => 1e9,
        "TB" => 1e12,
        other => bail!("no byte factor for unit {:?}", other),
    })
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Split a dashboard display string into numeric value and short unit.
///
/// Examples:
///     "170.82 Terabytes" → (170.82, "TB")
///     "43.89 Gigabytes"  → (43.89, "GB")
///     "64.14 %"          → (64.14, "%")
pub fn parse_traffic_value(text: &str) -> Result<(f64, String)> {
    let trimmed = text.trim();
    let caps = TRAFFIC_VALUE_RE
        .captures(trimmed)
        .with_context(|| format!("cannot parse traffic value {:?}", trimmed))?;
    let value: f64 = caps[1]
        .replace(',', "")
        .parse()
        .with_context(|| format!("cannot parse traffic value {:?}", trimmed))?;
    let unit = normalize_unit(caps[2].trim()).to_string();
    Ok((value, unit))
}

/// Convert a value between byte units (B, MB, GB, TB), rounded to
/// 2 decimals. Identical units return the value untouched.
pub fn convert_unit(value: f64, from_unit: &str, to_unit: &str) -> Result<f64> {
    if from_unit == to_unit {
        return Ok(value);
    }
    let from = bytes_factor(from_unit)?;
    let to = bytes_factor(to_unit)?;
    Ok(round2(value * from / to))
}

/// Raw byte count → TB, rounded to 2 decimals.
pub fn bytes_to_tb(byte_count: u64) -> f64 {
    round2(byte_count as f64 / 1e12)
}

/// Exact integer read of a comma-grouped byte string as shown in the
/// geography table ("31,398,058,511").
pub fn parse_grouped_bytes(text: &str) -> Result<u64> {
    let digits = text.trim().replace(',', "");
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        bail!("malformed byte count {:?}", text);
    }
    digits
        .parse()
        .with_context(|| format!("byte count {:?} out of range", text))
}
