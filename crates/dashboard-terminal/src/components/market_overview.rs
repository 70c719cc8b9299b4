// crates/dashboard-terminal/src/components/market_overview.rs

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::or_placeholder;
use crate::app::App;

pub fn draw_market_overview(f: &mut Frame, area: Rect, app: &App) {
    let o = &app.overview;
    let label = Style::default().fg(Color::Gray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let field = |name: &'static str, v: Option<&str>| {
        Line::from(vec![
            Span::styled(format!("{:<12}", name), label),
            Span::styled(or_placeholder(v).to_string(), value),
        ])
    };

    let last_update = o.last_update_label();
    let lines = vec![
        field("Underlying", o.underlying_value.as_deref()),
        field("ATM Strike", o.atm_strike.as_deref()),
        field("PCR", o.pcr.as_deref()),
        field("Max Pain", o.max_pain.as_deref()),
        field("Heavy Call", o.heavy_call.as_deref()),
        field("Heavy Put", o.heavy_put.as_deref()),
        field("Updated", Some(last_update.as_str())),
    ];

    let title = format!(" Market Overview - {} ", app.selected_symbol());
    let paragraph = Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
