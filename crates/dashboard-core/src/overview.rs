//! The market overview strip.
//!
//! Two sources write into the same slots:
//! - the option chain (underlying, ATM strike and its PCR)
//! - the background market snapshot (current price, PCR, max pain)
//!
//! Whichever arrived last wins. Slots hold display text so each source
//! keeps its own formatting: the chain's PCR is rounded to two places,
//! the snapshot's PCR is shown as received.

use chrono::{DateTime, Local};

use crate::format::format_plain;
use crate::market::MarketSnapshot;
use crate::option_chain::OptionChain;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketOverview {
    pub underlying_value: Option<String>,
    /// ATM strike from the chain, or max pain from the snapshot.
    pub atm_strike: Option<String>,
    pub pcr: Option<String>,
    pub max_pain: Option<String>,
    pub heavy_call: Option<String>,
    pub heavy_put: Option<String>,
    pub last_update: Option<DateTime<Local>>,
}

impl MarketOverview {
    pub fn apply_chain(&mut self, chain: &OptionChain, now: DateTime<Local>) {
        self.underlying_value = Some(format!("{:.2}", chain.underlying_value));

        if let Some(atm) = chain.atm_row() {
            self.atm_strike = Some(format_plain(atm.strike));
            self.pcr = Some(format!("{:.2}", atm.pcr));
        }

        if let Some(max_pain) = chain.max_pain {
            self.max_pain = Some(format_plain(max_pain));
        }
        if let Some(heavy_call) = chain.heavy_call {
            self.heavy_call = Some(format_plain(heavy_call));
        }
        if let Some(heavy_put) = chain.heavy_put {
            self.heavy_put = Some(format_plain(heavy_put));
        }

        self.last_update = Some(now);
    }

    /// Zero or missing fields leave the corresponding slot untouched.
    pub fn apply_snapshot(&mut self, snapshot: &MarketSnapshot, now: DateTime<Local>) {
        if let Some(price) = non_zero(snapshot.current_price) {
            self.underlying_value = Some(format!("{:.2}", price));
        }
        if let Some(pcr) = non_zero(snapshot.pcr) {
            self.pcr = Some(format_plain(pcr));
        }
        if let Some(max_pain) = non_zero(snapshot.max_pain) {
            let text = format_plain(max_pain);
            self.atm_strike = Some(text.clone());
            self.max_pain = Some(text);
        }
        if let Some(heavy_call) = non_zero(snapshot.heavy_call) {
            self.heavy_call = Some(format_plain(heavy_call));
        }
        if let Some(heavy_put) = non_zero(snapshot.heavy_put) {
            self.heavy_put = Some(format_plain(heavy_put));
        }

        self.last_update = Some(now);
    }

    pub fn last_update_label(&self) -> String {
        match self.last_update {
            Some(ts) => ts.format("%H:%M:%S").to_string(),
            None => "--".to_string(),
        }
    }
}

fn non_zero(v: Option<f64>) -> Option<f64> {
    v.filter(|x| *x != 0.0 && !x.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option_chain::OptionRow;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, h, m, s).unwrap()
    }

    fn chain() -> OptionChain {
        OptionChain {
            underlying_value: 47_123.456,
            options: vec![
                OptionRow {
                    strike: 47_000.0,
                    atm: false,
                    pcr: 0.9,
                    ..OptionRow::default()
                },
                OptionRow {
                    strike: 47_100.0,
                    atm: true,
                    pcr: 1.2345,
                    ..OptionRow::default()
                },
            ],
            max_pain: Some(47_000.0),
            ..OptionChain::default()
        }
    }

    #[test]
    fn chain_fills_underlying_atm_and_pcr() {
        let mut overview = MarketOverview::default();
        overview.apply_chain(&chain(), at(9, 30, 5));

        assert_eq!(overview.underlying_value.as_deref(), Some("47123.46"));
        assert_eq!(overview.atm_strike.as_deref(), Some("47100"));
        assert_eq!(overview.pcr.as_deref(), Some("1.23"));
        assert_eq!(overview.max_pain.as_deref(), Some("47000"));
        assert_eq!(overview.last_update_label(), "09:30:05");
    }

    #[test]
    fn chain_without_atm_keeps_previous_slots() {
        let mut overview = MarketOverview {
            atm_strike: Some("46900".to_string()),
            pcr: Some("0.80".to_string()),
            ..MarketOverview::default()
        };
        let mut c = chain();
        c.options.iter_mut().for_each(|r| r.atm = false);
        overview.apply_chain(&c, at(9, 31, 0));

        assert_eq!(overview.atm_strike.as_deref(), Some("46900"));
        assert_eq!(overview.pcr.as_deref(), Some("0.80"));
    }

    #[test]
    fn snapshot_writes_max_pain_into_the_atm_slot() {
        let mut overview = MarketOverview::default();
        overview.apply_chain(&chain(), at(9, 30, 0));

        let snapshot = MarketSnapshot {
            current_price: Some(47_210.0),
            pcr: Some(1.07),
            max_pain: Some(47_200.0),
            ..MarketSnapshot::default()
        };
        overview.apply_snapshot(&snapshot, at(9, 30, 10));

        assert_eq!(overview.underlying_value.as_deref(), Some("47210.00"));
        assert_eq!(overview.pcr.as_deref(), Some("1.07"));
        assert_eq!(overview.atm_strike.as_deref(), Some("47200"));
        assert_eq!(overview.last_update_label(), "09:30:10");
    }

    #[test]
    fn zero_snapshot_fields_are_ignored() {
        let mut overview = MarketOverview::default();
        overview.apply_chain(&chain(), at(9, 30, 0));

        let snapshot = MarketSnapshot {
            current_price: Some(0.0),
            pcr: None,
            ..MarketSnapshot::default()
        };
        overview.apply_snapshot(&snapshot, at(9, 30, 10));

        assert_eq!(overview.underlying_value.as_deref(), Some("47123.46"));
        assert_eq!(overview.pcr.as_deref(), Some("1.23"));
        assert_eq!(overview.last_update_label(), "09:30:10");
    }
}
