//! Open positions as reported by the broker.

use crate::format::PnlTone;

/// One open position.
///
/// Received fresh on every poll; a new list fully replaces the old one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Position {
    pub symbol: String,
    pub net_qty: i64,
    pub average_price: f64,
    pub ltp: f64,
    pub pnl: f64,
}

impl Position {
    pub fn pnl_tone(&self) -> PnlTone {
        PnlTone::of(self.pnl)
    }
}
