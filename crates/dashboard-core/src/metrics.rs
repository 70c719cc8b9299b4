//! Client-side performance summary over the trade history.

use crate::format::PnlTone;
use crate::trade::TradeRecord;

/// Aggregates over CLOSED trades only.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PerformanceMetrics {
    pub total_pnl: f64,
    /// Percentage in `0.0..=100.0`.
    pub win_rate: f64,
    pub closed_trades: usize,
    pub avg_pnl: f64,
}

impl PerformanceMetrics {
    /// Recompute from scratch.
    ///
    /// Returns `None` for an empty history so the caller keeps whatever
    /// it was showing before.
    pub fn from_trades(trades: &[TradeRecord]) -> Option<Self> {
        if trades.is_empty() {
            return None;
        }

        let closed: Vec<&TradeRecord> = trades.iter().filter(|t| t.is_closed()).collect();
        let total_pnl: f64 = closed.iter().map(|t| t.pnl_or_zero()).sum();
        let winners = closed.iter().filter(|t| t.pnl_or_zero() > 0.0).count();

        let (win_rate, avg_pnl) = if closed.is_empty() {
            (0.0, 0.0)
        } else {
            let n = closed.len() as f64;
            (winners as f64 / n * 100.0, total_pnl / n)
        };

        Some(Self {
            total_pnl,
            win_rate,
            closed_trades: closed.len(),
            avg_pnl,
        })
    }

    pub fn total_pnl_tone(&self) -> PnlTone {
        PnlTone::of(self.total_pnl)
    }
}
