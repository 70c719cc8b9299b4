// crates/dashboard-terminal/src/components/status_bar.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

fn key(label: &'static str, enabled: bool, color: Color) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(label, style)
}

fn text(label: &'static str, enabled: bool) -> Span<'static> {
    if enabled {
        Span::raw(label)
    } else {
        Span::styled(label, Style::default().fg(Color::DarkGray))
    }
}

pub fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let logged_in = app.session.logged_in;

    let shortcuts = if logged_in {
        vec![
            key("[S]", app.start_enabled, Color::Green),
            text("tart ", app.start_enabled),
            key("[X]", app.stop_enabled, Color::Red),
            text(" Stop ", app.stop_enabled),
            key("[E]", true, Color::Magenta),
            Span::raw("xecute "),
            key("[←/→]", true, Color::Cyan),
            Span::raw(" Symbol "),
            key("[R]", true, Color::Yellow),
            Span::raw("efresh "),
            key("[Q]", true, Color::Gray),
            Span::raw("uit"),
        ]
    } else {
        vec![
            key("[L]", app.login_control.enabled, Color::Cyan),
            text("ogin ", app.login_control.enabled),
            key("[←/→]", true, Color::Cyan),
            Span::raw(" Symbol "),
            key("[F1]", true, Color::Gray),
            Span::raw(" Help "),
            key("[Q]", true, Color::Gray),
            Span::raw("uit"),
        ]
    };

    let paragraph = Paragraph::new(Line::from(shortcuts))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}
