// crates/dashboard-terminal/src/components/option_chain.rs

use dashboard_core::{format_number, format_percent, format_rupees, OptionLeg, OptionRow};
use dashboard_core::format::format_plain;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;

pub const EMPTY_TEXT: &str = "No option data available";

pub const COLUMNS: [&str; 9] = [
    "CE OI", "CE Vol", "CE LTP", "CE IV", "Strike", "PE IV", "PE LTP", "PE Vol", "PE OI",
];

pub const ATM_STYLE: Style = Style::new().bg(Color::Yellow).fg(Color::Black);

fn call_cells(leg: &OptionLeg) -> [Cell<'static>; 4] {
    [
        Cell::from(format_number(leg.oi)),
        Cell::from(format_number(leg.volume)),
        Cell::from(format_rupees(leg.ltp)),
        Cell::from(format_percent(leg.iv)),
    ]
}

fn put_cells(leg: &OptionLeg) -> [Cell<'static>; 4] {
    [
        Cell::from(format_percent(leg.iv)),
        Cell::from(format_rupees(leg.ltp)),
        Cell::from(format_number(leg.volume)),
        Cell::from(format_number(leg.oi)),
    ]
}

fn chain_row(opt: &OptionRow) -> Row<'static> {
    let mut cells: Vec<Cell> = Vec::with_capacity(COLUMNS.len());
    cells.extend(call_cells(&opt.ce));
    cells.push(Cell::from(format_plain(opt.strike)).style(Style::default().add_modifier(Modifier::BOLD)));
    cells.extend(put_cells(&opt.pe));

    let row = Row::new(cells);
    if opt.atm {
        row.style(ATM_STYLE)
    } else {
        row
    }
}

pub fn draw_option_chain(f: &mut Frame, area: Rect, app: &App) {
    let symbol = app.chain_symbol.as_deref().unwrap_or(app.selected_symbol());
    let block = Block::default()
        .title(format!(" Option Chain - {} ", symbol))
        .borders(Borders::ALL);

    let chain = match &app.option_chain {
        Some(chain) if !chain.is_empty() => chain,
        _ => {
            let no_data = Paragraph::new(EMPTY_TEXT)
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(no_data, area);
            return;
        }
    };

    let header = Row::new(COLUMNS.to_vec())
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = chain.visible_rows().iter().map(chain_row).collect();

    let widths = [
        Constraint::Length(9),
        Constraint::Length(9),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Length(9),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}
