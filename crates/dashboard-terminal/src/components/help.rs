// crates/dashboard-terminal/src/components/help.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str, Color)] = &[
    ("L/l", "Login to Angel One", Color::Cyan),
    ("S/s", "Start Trading (selected symbol)", Color::Green),
    ("X/x", "Stop Trading", Color::Red),
    ("E/e", "Execute Trade on current signal", Color::Magenta),
    ("←/→ [ ]", "Change Symbol", Color::Cyan),
    ("R/r", "Refresh Now", Color::Yellow),
    ("Enter/Esc", "Dismiss Notification", Color::White),
    ("F1/?", "Toggle Help", Color::Gray),
    ("Q/q", "Quit", Color::Red),
];

pub fn draw_help(f: &mut Frame, area: Rect) {
    f.render_widget(Clear, area);

    let items: Vec<ListItem> = BINDINGS
        .iter()
        .map(|(keys, action, color)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<10}", keys),
                    Style::default().fg(*color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" - {}", action)),
            ]))
        })
        .collect();

    let help_list = List::new(items).block(
        Block::default()
            .title(" Help - Keyboard Shortcuts ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(help_list, area);

    if area.height < 3 {
        return;
    }
    let footer = Paragraph::new("Press F1 or ESC to close help")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    let footer_area = Rect {
        x: area.x + 1,
        y: area.y + area.height - 2,
        width: area.width.saturating_sub(2),
        height: 1,
    };
    f.render_widget(footer, footer_area);
}
