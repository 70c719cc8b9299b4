// crates/dashboard-terminal/src/components/performance.rs

use dashboard_core::{format_rupees, PnlTone};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::tone_style;
use crate::app::App;

pub fn draw_performance(f: &mut Frame, area: Rect, app: &App) {
    let m = &app.metrics;
    let label = Style::default().fg(Color::Gray);

    let lines = vec![
        Line::from(vec![
            Span::styled("Total P&L    ", label),
            Span::styled(
                format_rupees(m.total_pnl),
                tone_style(m.total_pnl_tone()).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Win Rate     ", label),
            Span::raw(format!("{:.1}%", m.win_rate)),
        ]),
        Line::from(vec![
            Span::styled("Total Trades ", label),
            Span::raw(m.closed_trades.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Avg P&L      ", label),
            Span::styled(format_rupees(m.avg_pnl), tone_style(PnlTone::of(m.avg_pnl))),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title(" Performance ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
