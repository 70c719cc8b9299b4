// crates/dashboard-terminal/src/ui.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::components::{
    help::draw_help,
    login::draw_login,
    market_overview::draw_market_overview,
    notification::draw_notification,
    option_chain::draw_option_chain,
    performance::draw_performance,
    positions::draw_positions,
    signal::draw_signal,
    status_bar::draw_status_bar,
    trade_history::draw_trade_history,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    draw_header(f, chunks[0], app);

    if app.session.logged_in {
        draw_dashboard(f, chunks[1], app);
    } else {
        draw_login(f, centered_rect(60, 50, chunks[1]), app);
    }

    draw_status_bar(f, chunks[2], app);

    if app.show_help {
        draw_help(f, centered_rect(60, 60, f.size()));
    }

    // Notifications sit above everything, help included.
    if let Some(notification) = app.current_notification() {
        draw_notification(f, centered_rect(50, 25, f.size()), notification, app.notifications.len());
    }
}

fn badge(text: &'static str, on: bool) -> Span<'static> {
    let color = if on { Color::Green } else { Color::Red };
    Span::styled(
        format!(" {} ", text),
        Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD),
    )
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(60),
        ])
        .split(area);

    let mut left = vec![Span::styled(
        "Options Trading Dashboard",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    if let Some(user) = &app.user {
        left.push(Span::raw("  "));
        left.push(Span::styled(user.clone(), Style::default().fg(Color::White)));
    }
    let left_paragraph = Paragraph::new(Line::from(left))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(left_paragraph, header_chunks[0]);

    let connection = if app.connected { "Connected" } else { "Disconnected" };
    let trading = if app.session.trading_active {
        "Trading Active"
    } else {
        "Trading Inactive"
    };
    let right = vec![
        badge(connection, app.connected),
        Span::raw(" "),
        badge(trading, app.session.trading_active),
        Span::raw("  "),
        Span::styled(
            app.selected_symbol().to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  Msgs: {}", app.message_count),
            Style::default().fg(Color::Gray),
        ),
    ];
    let right_paragraph = Paragraph::new(Line::from(right))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(right_paragraph, header_chunks[1]);
}

fn draw_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),      // Overview / signal / performance
            Constraint::Percentage(55), // Option chain + positions
            Constraint::Min(6),         // Trade history
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(rows[0]);

    draw_market_overview(f, top[0], app);
    draw_signal(f, top[1], app);
    draw_performance(f, top[2], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65),
            Constraint::Percentage(35),
        ])
        .split(rows[1]);

    draw_option_chain(f, middle[0], app);
    draw_positions(f, middle[1], app);

    draw_trade_history(f, rows[2], app);
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
