//! Week view
//!
//! Bar chart of the last 7 days plus the monthly total and running
//! daily average.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::reports::{average_daily, monthly_total, weekly_totals};
use crate::tui::app::App;

/// Render the week view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(4)])
        .split(area);

    render_chart(frame, app, chunks[0]);
    render_totals(frame, app, chunks[1]);
}

/// Render the 7-day bar chart, oldest on the left
fn render_chart(frame: &mut Frame, app: &mut App, area: Rect) {
    let ledger = app.storage.ledger.snapshot().unwrap_or_default();
    let totals = weekly_totals(&ledger, app.today());

    let bars: Vec<Bar> = totals
        .iter()
        .map(|dt| {
            let label = format!("{:02}/{:02}", dt.day.month(), dt.day.day());
            Bar::default()
                .label(Line::from(label))
                .value(dt.total.cents().max(0) as u64)
                .text_value(format!("{:.0}", dt.total.to_major_units()))
        })
        .collect();

    let bar_width = ((area.width.saturating_sub(2)) / 7).saturating_sub(1).max(3);
    let chart = BarChart::default()
        .block(Block::default().title(" Last 7 Days ").borders(Borders::ALL))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::Black).bg(Color::Green));

    frame.render_widget(chart, area);
}

/// Render the monthly total and the all-time daily average
fn render_totals(frame: &mut Frame, app: &mut App, area: Rect) {
    let ledger = app.storage.ledger.snapshot().unwrap_or_default();
    let currency = app.storage.currency.get().unwrap_or_default();

    let month = monthly_total(&ledger, Local::now());
    let average = average_daily(&ledger);

    let lines = vec![
        Line::from(vec![
            Span::styled("This month: ", Style::default().fg(Color::White)),
            Span::styled(
                month.format_with_symbol(&currency.symbol),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::styled("Daily average: ", Style::default().fg(Color::White)),
            Span::styled(
                average.format_with_symbol(&currency.symbol),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title(" Totals ").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
