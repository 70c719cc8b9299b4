// crates/dashboard-terminal/src/components/positions.rs

use dashboard_core::format_rupees;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::tone_style;
use crate::app::App;

pub const EMPTY_TEXT: &str = "No open positions";

pub fn draw_positions(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" Positions ({}) ", app.positions.len()))
        .borders(Borders::ALL);

    if app.positions.is_empty() {
        let no_data = Paragraph::new(EMPTY_TEXT)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(no_data, area);
        return;
    }

    let header = Row::new(vec!["Symbol", "Qty", "Avg", "LTP", "P&L"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .positions
        .iter()
        .map(|pos| {
            Row::new(vec![
                Cell::from(pos.symbol.clone()),
                Cell::from(pos.net_qty.to_string()),
                Cell::from(format_rupees(pos.average_price)),
                Cell::from(format_rupees(pos.ltp)),
                Cell::from(format_rupees(pos.pnl)).style(tone_style(pos.pnl_tone())),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(14),
        Constraint::Length(6),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}
