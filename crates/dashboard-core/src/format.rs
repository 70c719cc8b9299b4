//! Display formatting shared by every panel.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;
const THOUSAND: f64 = 1_000.0;

/// Whether a P/L figure reads as a profit or a loss.
///
/// Zero counts as profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PnlTone {
    Profit,
    Loss,
}

impl PnlTone {
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            PnlTone::Profit
        } else {
            PnlTone::Loss
        }
    }
}

/// Compact Indian-style magnitude: `Cr`, `L` and `K` suffixes.
///
/// ```
/// use dashboard_core::format_number;
/// assert_eq!(format_number(12_345_678.0), "1.23Cr");
/// assert_eq!(format_number(250_000.0), "2.50L");
/// assert_eq!(format_number(999.0), "999");
/// ```
pub fn format_number(n: f64) -> String {
    if n >= CRORE {
        format!("{:.2}Cr", n / CRORE)
    } else if n >= LAKH {
        format!("{:.2}L", n / LAKH)
    } else if n >= THOUSAND {
        format!("{:.2}K", n / THOUSAND)
    } else {
        format_plain(n)
    }
}

/// A number as a plain string: whole values without a decimal point.
pub fn format_plain(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

pub fn format_rupees(amount: f64) -> String {
    format!("₹{:.2}", amount)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Local wall-clock time (`HH:MM:SS`) of an ISO-8601 timestamp.
///
/// Timestamps without an offset are taken as local time. Anything that
/// does not parse is returned as-is.
pub fn format_trade_time(timestamp: &str) -> String {
    parse_timestamp(timestamp)
        .map(|ts| ts.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

fn parse_timestamp(s: &str) -> Option<DateTime<Local>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Local));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_thresholds() {
        assert_eq!(format_number(12_345_678.0), "1.23Cr");
        assert_eq!(format_number(10_000_000.0), "1.00Cr");
        assert_eq!(format_number(9_999_999.0), "100.00L");
        assert_eq!(format_number(100_000.0), "1.00L");
        assert_eq!(format_number(1_500.0), "1.50K");
        assert_eq!(format_number(1_000.0), "1.00K");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn small_fractions_are_shown_verbatim() {
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(-42.0), "-42");
    }

    #[test]
    fn rupees_and_percent() {
        assert_eq!(format_rupees(1234.5), "₹1234.50");
        assert_eq!(format_rupees(-12.5), "₹-12.50");
        assert_eq!(format_percent(18.456), "18.46%");
    }

    #[test]
    fn pnl_tone_follows_sign() {
        assert_eq!(PnlTone::of(0.0), PnlTone::Profit);
        assert_eq!(PnlTone::of(0.01), PnlTone::Profit);
        assert_eq!(PnlTone::of(-0.01), PnlTone::Loss);
        assert_eq!(PnlTone::of(f64::NAN), PnlTone::Loss);
    }

    #[test]
    fn naive_timestamps_are_local() {
        assert_eq!(format_trade_time("2024-03-01T14:05:09.123456"), "14:05:09");
        assert_eq!(format_trade_time("2024-03-01 09:15:00"), "09:15:00");
    }

    #[test]
    fn offset_timestamps_convert_to_local() {
        let expected = DateTime::parse_from_rfc3339("2024-03-01T08:00:00Z")
            .unwrap()
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string();
        assert_eq!(format_trade_time("2024-03-01T08:00:00Z"), expected);
    }

    #[test]
    fn garbage_timestamps_pass_through() {
        assert_eq!(format_trade_time("yesterday"), "yesterday");
    }
}
