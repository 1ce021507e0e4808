// src/calendar/mod.rs

use anyhow::{bail, Context, Result};

/// Month names as shown on the date picker panels.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Month headers of the two visible calendar panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedMonths {
    pub left: String,
    pub right: String,
}

/// Parse "Nov 2025" or "November 2025" into (year, month 1-12).
/// Month names match by prefix.
pub fn parse_month_label(label: &str) -> Result<(i32, u32)> {
    let parts: Vec<&str> = label.split_whitespace().collect();
    if parts.len() != 2 {
        bail!("cannot parse month label {:?}", label);
    }
    let (name, year_str) = (parts[0], parts[1]);
    let year: i32 = year_str
        .parse()
        .with_context(|| format!("cannot parse month label {:?}", label))?;

    for (i, full) in MONTH_NAMES.iter().enumerate() {
        if full.starts_with(name) {
            return Ok((year, i as u32 + 1));
        }
    }
    bail!("unknown month {:?}", name);
}

/// Number of arrow clicks to move the right panel to the target month.
/// Positive = forward, negative = back. Pure logic, no UI interaction.
pub fn nav_clicks(current: &DisplayedMonths, target: &str) -> Result<i32> {
    let (right_year, right_month) = parse_month_label(&current.right)?;
    let (target_year, target_month) = parse_month_label(target)?;

    let right_total = right_year * 12 + right_month as i32;
    let target_total = target_year * 12 + target_month as i32;

    Ok(target_total - right_total)
}

/// Display name for a zero-indexed calendar month (0 = January).
pub fn month_name(index: u32) -> Option<&'static str> {
    MONTH_NAMES.get(index as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn displayed(left: &str, right: &str) -> DisplayedMonths {
        DisplayedMonths {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    #[test]
    fn test_nav_clicks() {
        let cases = [
            ("Nov 2025", "Dec 2025", "Jan 2026", 1),
            ("Nov 2025", "Dec 2025", "Mar 2026", 3),
            ("Feb 2026", "Mar 2026", "Jan 2026", -2),
            ("Dec 2025", "Jan 2026", "Jan 2026", 0),
            ("November 2025", "December 2025", "January 2026", 1),
            ("Jan 2026", "Feb 2026", "Dec 2026", 10),
        ];
        for (left, right, target, expected) in cases {
            let clicks = nav_clicks(&displayed(left, right), target).unwrap();
            assert_eq!(clicks, expected, "{right} -> {target}");
        }
    }

    #[test]
    fn test_parse_month_label() {
        assert_eq!(parse_month_label("Nov 2025").unwrap(), (2025, 11));
        assert_eq!(parse_month_label("November 2025").unwrap(), (2025, 11));
        assert_eq!(parse_month_label("  January 2026 ").unwrap(), (2026, 1));
    }

    #[test]
    fn test_parse_month_label_missing_year() {
        let err = parse_month_label("January").unwrap_err().to_string();
        assert!(err.contains("cannot parse month label"), "{err}");
    }

    #[test]
    fn test_parse_month_label_unknown_month() {
        let err = parse_month_label("Smarch 2026").unwrap_err().to_string();
        assert!(err.contains("unknown month"), "{err}");
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(0), Some("January"));
        assert_eq!(month_name(11), Some("December"));
        assert_eq!(month_name(12), None);
    }
}
