// crates/dashboard-terminal/src/components/signal.rs

use dashboard_core::{format_rupees, Signal, SignalAction};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

fn action_style(action: &SignalAction) -> Style {
    let color = match action {
        SignalAction::Buy => Color::Green,
        SignalAction::Sell => Color::Red,
        SignalAction::Wait => Color::Yellow,
        SignalAction::Other(_) => Color::Gray,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn level(name: &'static str, v: Option<f64>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<11}", name), Style::default().fg(Color::Gray)),
        Span::raw(v.map(format_rupees).unwrap_or_else(|| "--".to_string())),
    ])
}

fn signal_lines(signal: &Signal) -> Vec<Line<'static>> {
    let mut head = vec![Span::styled(signal.action.to_string(), action_style(&signal.action))];
    if let Some(option_type) = &signal.option_type {
        head.push(Span::raw(format!(" {}", option_type)));
    }

    let mut lines = vec![Line::from(head)];
    if signal.action.is_actionable() {
        lines.push(level("Entry", signal.entry));
        lines.push(level("Target", signal.target));
        lines.push(level("Stop Loss", signal.stop_loss));
    }
    if let Some(confidence) = signal.confidence {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<11}", "Confidence"), Style::default().fg(Color::Gray)),
            Span::raw(format!("{:.0}%", confidence)),
        ]));
    }
    lines
}

pub fn draw_signal(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().title(" Signal ").borders(Borders::ALL);

    let paragraph = match &app.signal {
        Some(signal) => Paragraph::new(signal_lines(signal)),
        None => {
            let hint = if app.session.trading_active {
                "Waiting for analysis..."
            } else {
                "Start trading to receive signals"
            };
            Paragraph::new(hint)
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
        }
    };

    f.render_widget(paragraph.block(block), area);
}
