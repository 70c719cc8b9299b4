//! Background market analysis published by the backend.
//!
//! The backend refreshes this snapshot on its own schedule while trading
//! is active; the dashboard just picks up whatever is current.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalAction {
    Buy,
    Sell,
    Wait,
    Other(String),
}

impl SignalAction {
    pub fn parse(s: &str) -> Self {
        match s {
            "BUY" => SignalAction::Buy,
            "SELL" => SignalAction::Sell,
            "WAIT" => SignalAction::Wait,
            other => SignalAction::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SignalAction::Buy => "BUY",
            SignalAction::Sell => "SELL",
            SignalAction::Wait => "WAIT",
            SignalAction::Other(s) => s,
        }
    }

    pub fn is_actionable(&self) -> bool {
        matches!(self, SignalAction::Buy | SignalAction::Sell)
    }
}

impl fmt::Display for SignalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strategy signal attached to the snapshot.
///
/// A `WAIT` signal carries no levels, only the action and a zero
/// confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub action: SignalAction,
    /// `CALL` or `PUT` when actionable.
    pub option_type: Option<String>,
    pub entry: Option<f64>,
    pub target: Option<f64>,
    pub stop_loss: Option<f64>,
    pub confidence: Option<f64>,
}

impl Signal {
    pub fn wait() -> Self {
        Self {
            action: SignalAction::Wait,
            option_type: None,
            entry: None,
            target: None,
            stop_loss: None,
            confidence: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketSnapshot {
    pub current_price: Option<f64>,
    pub pcr: Option<f64>,
    pub max_pain: Option<f64>,
    pub heavy_call: Option<f64>,
    pub heavy_put: Option<f64>,
    pub signal: Option<Signal>,
}
