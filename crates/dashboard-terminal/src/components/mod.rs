// crates/dashboard-terminal/src/components/mod.rs

use dashboard_core::PnlTone;
use ratatui::style::{Color, Style};

pub mod login;
pub mod market_overview;
pub mod signal;
pub mod performance;
pub mod positions;
pub mod option_chain;
pub mod trade_history;
pub mod status_bar;
pub mod help;
pub mod notification;

pub const PROFIT_COLOR: Color = Color::Green;
pub const LOSS_COLOR: Color = Color::Red;

/// Green for profit (zero included), red for loss.
pub fn tone_style(tone: PnlTone) -> Style {
    match tone {
        PnlTone::Profit => Style::default().fg(PROFIT_COLOR),
        PnlTone::Loss => Style::default().fg(LOSS_COLOR),
    }
}

/// `--` for a slot nothing has written yet.
pub(crate) fn or_placeholder(value: Option<&str>) -> &str {
    value.unwrap_or("--")
}
