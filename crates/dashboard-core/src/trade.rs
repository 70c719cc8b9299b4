//! Trade history records.

use std::fmt;

use crate::format::PnlTone;

/// Lifecycle status of a recorded trade.
///
/// Only `CLOSED` trades count towards performance metrics; any status
/// string the backend invents is kept verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradeStatus {
    Open,
    Closed,
    Other(String),
}

impl TradeStatus {
    /// Case-sensitive, matching the backend's upper-case strings.
    pub fn parse(s: &str) -> Self {
        match s {
            "OPEN" => TradeStatus::Open,
            "CLOSED" => TradeStatus::Closed,
            other => TradeStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TradeStatus::Open => "OPEN",
            TradeStatus::Closed => "CLOSED",
            TradeStatus::Other(s) => s,
        }
    }
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TradeRecord {
    /// ISO-8601 as stored by the backend.
    pub timestamp: String,
    pub symbol: String,
    pub strike: f64,
    pub option_type: String,
    pub side: String,
    pub entry_price: f64,
    pub exit_price: Option<f64>,
    pub quantity: i64,
    pub pnl: Option<f64>,
    pub pnl_percentage: Option<f64>,
    pub status: TradeStatus,
}

impl TradeRecord {
    pub fn is_closed(&self) -> bool {
        self.status == TradeStatus::Closed
    }

    /// P/L with a missing value read as zero.
    pub fn pnl_or_zero(&self) -> f64 {
        self.pnl.unwrap_or(0.0)
    }

    pub fn pnl_percentage_or_zero(&self) -> f64 {
        self.pnl_percentage.unwrap_or(0.0)
    }

    pub fn pnl_tone(&self) -> PnlTone {
        PnlTone::of(self.pnl_or_zero())
    }

    pub fn pnl_percentage_tone(&self) -> PnlTone {
        PnlTone::of(self.pnl_percentage_or_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_is_case_sensitive() {
        assert_eq!(TradeStatus::parse("CLOSED"), TradeStatus::Closed);
        assert_eq!(TradeStatus::parse("OPEN"), TradeStatus::Open);
        assert_eq!(
            TradeStatus::parse("closed"),
            TradeStatus::Other("closed".to_string())
        );
        assert_eq!(TradeStatus::parse("CANCELLED").as_str(), "CANCELLED");
    }
}
