// crates/dashboard-terminal/src/components/notification.rs

use dashboard_core::{Notification, NotificationKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn kind_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Error => Color::Red,
        NotificationKind::Info => Color::Cyan,
    }
}

/// Modal popup; stays up until dismissed.
pub fn draw_notification(f: &mut Frame, area: Rect, notification: &Notification, pending: usize) {
    f.render_widget(Clear, area);

    let color = kind_color(notification.kind);
    let title = if pending > 1 {
        format!(" Notification (1 of {}) ", pending)
    } else {
        " Notification ".to_string()
    };

    let lines = vec![
        Line::from(""),
        Line::from(notification.text()),
        Line::from(""),
        Line::styled("[Enter] OK", Style::default().fg(Color::Gray)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(paragraph, area);
}
