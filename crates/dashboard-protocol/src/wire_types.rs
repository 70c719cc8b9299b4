//! Serde mirrors of the backend's JSON bodies.
//!
//! Every envelope carries a `success` flag and an optional `message`;
//! payload fields are optional because the backend omits them on
//! failure. Conversions into `dashboard_core` types live next to each
//! wire struct.

use serde::{Deserialize, Serialize};

use dashboard_core::{
    MarketSnapshot, OptionChain, OptionLeg, OptionRow, Position, Signal, SignalAction,
    TradeRecord, TradeStatus,
};

use crate::lenient;

/// Generic `{ success, message }` reply (start / stop trading).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Broker profile echoed back on login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "clientCode")]
    pub clientcode: Option<String>,
}

impl UserProfile {
    /// `"Name (CODE)"`, or whichever half is present.
    pub fn display_name(&self) -> Option<String> {
        let name = self.name.as_deref().filter(|s| !s.is_empty());
        let code = self.clientcode.as_deref().filter(|s| !s.is_empty());
        match (name, code) {
            (Some(n), Some(c)) => Some(format!("{} ({})", n, c)),
            (Some(n), None) => Some(n.to_string()),
            (None, Some(c)) => Some(c.to_string()),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StartTradingRequest<'a> {
    pub symbol: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExecuteTradeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// Positions
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PositionsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub positions: Option<Vec<WirePosition>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WirePosition {
    #[serde(default, deserialize_with = "lenient::string")]
    pub tradingsymbol: String,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub netqty: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub averageprice: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub ltp: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub pnl: Option<f64>,
}

impl From<WirePosition> for Position {
    fn from(w: WirePosition) -> Self {
        Position {
            symbol: w.tradingsymbol,
            net_qty: w.netqty.unwrap_or(0.0) as i64,
            average_price: w.averageprice.unwrap_or(0.0),
            ltp: w.ltp.unwrap_or(0.0),
            pnl: w.pnl.unwrap_or(0.0),
        }
    }
}

// ============================================================================
// Option chain
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptionChainResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<WireOptionChain>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireOptionChain {
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub underlying_value: Option<f64>,
    #[serde(default)]
    pub options: Option<Vec<WireOptionRow>>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub pcr: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub max_pain: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub heavy_call: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub heavy_put: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireOptionRow {
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub strike: Option<f64>,
    #[serde(default)]
    pub ce: Option<WireOptionLeg>,
    #[serde(default)]
    pub pe: Option<WireOptionLeg>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub atm: bool,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub pcr: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WireOptionLeg {
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub oi: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub ltp: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub iv: Option<f64>,
}

impl From<WireOptionLeg> for OptionLeg {
    fn from(w: WireOptionLeg) -> Self {
        OptionLeg {
            oi: w.oi.unwrap_or(0.0),
            volume: w.volume.unwrap_or(0.0),
            ltp: w.ltp.unwrap_or(0.0),
            iv: w.iv.unwrap_or(0.0),
        }
    }
}

impl From<WireOptionRow> for OptionRow {
    fn from(w: WireOptionRow) -> Self {
        OptionRow {
            strike: w.strike.unwrap_or(0.0),
            ce: w.ce.map(OptionLeg::from).unwrap_or_default(),
            pe: w.pe.map(OptionLeg::from).unwrap_or_default(),
            atm: w.atm,
            pcr: w.pcr.unwrap_or(0.0),
        }
    }
}

impl From<WireOptionChain> for OptionChain {
    fn from(w: WireOptionChain) -> Self {
        OptionChain {
            underlying_value: w.underlying_value.unwrap_or(0.0),
            options: w
                .options
                .unwrap_or_default()
                .into_iter()
                .map(OptionRow::from)
                .collect(),
            pcr: w.pcr,
            max_pain: w.max_pain,
            heavy_call: w.heavy_call,
            heavy_put: w.heavy_put,
        }
    }
}

// ============================================================================
// Trade history
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TradeHistoryResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub trades: Option<Vec<WireTrade>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireTrade {
    #[serde(default, deserialize_with = "lenient::string")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub symbol: String,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub strike: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub option_type: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub side: String,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub entry_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub exit_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub quantity: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub pnl: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub pnl_percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: String,
}

impl From<WireTrade> for TradeRecord {
    fn from(w: WireTrade) -> Self {
        TradeRecord {
            timestamp: w.timestamp,
            symbol: w.symbol,
            strike: w.strike.unwrap_or(0.0),
            option_type: w.option_type,
            side: w.side,
            entry_price: w.entry_price.unwrap_or(0.0),
            // A zero exit price means "not exited yet".
            exit_price: w.exit_price.filter(|p| *p != 0.0),
            quantity: w.quantity.unwrap_or(0.0) as i64,
            pnl: w.pnl,
            pnl_percentage: w.pnl_percentage,
            status: TradeStatus::parse(&w.status),
        }
    }
}

// ============================================================================
// Market data
// ============================================================================

/// Bare object, no envelope: either the analysis or `{ error, signal }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketDataResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub current_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub pcr: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub max_pain: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub heavy_call: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub heavy_put: Option<f64>,
    #[serde(default)]
    pub signal: Option<WireSignal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireSignal {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default, rename = "type")]
    pub option_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub entry: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub target: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub sl: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub confidence: Option<f64>,
}

impl From<WireSignal> for Signal {
    fn from(w: WireSignal) -> Self {
        Signal {
            action: w
                .action
                .as_deref()
                .map(SignalAction::parse)
                .unwrap_or(SignalAction::Wait),
            option_type: w.option_type,
            entry: w.entry,
            target: w.target,
            stop_loss: w.sl,
            confidence: w.confidence,
        }
    }
}

impl MarketDataResponse {
    /// The backend's error text, if it has no analysis to offer.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    pub fn into_snapshot(self) -> MarketSnapshot {
        MarketSnapshot {
            current_price: self.current_price,
            pcr: self.pcr,
            max_pain: self.max_pain,
            heavy_call: self.heavy_call,
            heavy_put: self.heavy_put,
            signal: self.signal.map(Signal::from),
        }
    }
}
