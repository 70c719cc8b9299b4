// crates/dashboard-terminal/src/components/trade_history.rs

use dashboard_core::format::format_plain;
use dashboard_core::{format_percent, format_rupees, format_trade_time, TradeRecord, TradeStatus};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::tone_style;
use crate::app::App;

pub const EMPTY_TEXT: &str = "No trades yet";

pub const COLUMNS: [&str; 11] = [
    "Time", "Symbol", "Strike", "Type", "Side", "Entry", "Exit", "Qty", "P&L", "P&L %", "Status",
];

fn status_style(status: &TradeStatus) -> Style {
    match status {
        TradeStatus::Open => Style::default().fg(Color::Cyan),
        TradeStatus::Closed => Style::default().fg(Color::Gray),
        TradeStatus::Other(_) => Style::default(),
    }
}

fn trade_row(trade: &TradeRecord) -> Row<'static> {
    let exit = trade
        .exit_price
        .map(format_rupees)
        .unwrap_or_else(|| "--".to_string());

    Row::new(vec![
        Cell::from(format_trade_time(&trade.timestamp)),
        Cell::from(trade.symbol.clone()),
        Cell::from(format_plain(trade.strike)),
        Cell::from(trade.option_type.clone()),
        Cell::from(trade.side.clone()),
        Cell::from(format_rupees(trade.entry_price)),
        Cell::from(exit),
        Cell::from(trade.quantity.to_string()),
        Cell::from(format_rupees(trade.pnl_or_zero())).style(tone_style(trade.pnl_tone())),
        Cell::from(format_percent(trade.pnl_percentage_or_zero()))
            .style(tone_style(trade.pnl_percentage_tone())),
        Cell::from(trade.status.to_string()).style(status_style(&trade.status)),
    ])
}

pub fn draw_trade_history(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" Trade History ({}) ", app.trades.len()))
        .borders(Borders::ALL);

    if app.trades.is_empty() {
        let no_data = Paragraph::new(EMPTY_TEXT)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(no_data, area);
        return;
    }

    let header = Row::new(COLUMNS.to_vec())
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app.trades.iter().map(trade_row).collect();

    let widths = [
        Constraint::Length(9),
        Constraint::Min(14),
        Constraint::Length(7),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(5),
        Constraint::Length(11),
        Constraint::Length(8),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}
