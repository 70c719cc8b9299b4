// crates/dashboard-terminal/src/components/login.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

pub fn draw_login(f: &mut Frame, area: Rect, app: &App) {
    let button_style = if app.login_control.enabled {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines = vec![
        Line::from(""),
        Line::from("Connect your broker account to start the dashboard."),
        Line::from(""),
        Line::from(vec![
            Span::styled("[L]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(format!(" {} ", app.login_control.label), button_style),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("Symbol: {}   [←/→] change", app.selected_symbol()),
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Login ").borders(Borders::ALL));

    f.render_widget(paragraph, area);
}
