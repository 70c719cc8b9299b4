//! dashboard-core
//!
//! Pure view-model logic for the options dashboard:
//! - session flags and polling gates
//! - positions, option chain and trade records
//! - performance metrics and market overview
//! - number / currency formatting and notifications

pub mod session;
pub mod position;
pub mod option_chain;
pub mod trade;
pub mod metrics;
pub mod market;
pub mod overview;
pub mod format;
pub mod notification;

pub use session::{FastTick, Session};
pub use position::Position;
pub use option_chain::{OptionChain, OptionLeg, OptionRow, DISPLAY_ROWS};
pub use trade::{TradeRecord, TradeStatus};
pub use metrics::PerformanceMetrics;
pub use market::{MarketSnapshot, Signal, SignalAction};
pub use overview::MarketOverview;
pub use format::{format_number, format_percent, format_rupees, format_trade_time, PnlTone};
pub use notification::{Notification, NotificationKind};
