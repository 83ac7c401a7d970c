//! Dashboard view
//!
//! Shows the budget gauge, today's entries, and the quick-amount chips.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::category;
use crate::reports::DailySummary;
use crate::tui::app::{App, InputMode};

/// Render the dashboard view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    render_gauge(frame, app, chunks[0]);
    render_entries(frame, app, chunks[1]);
    render_quick_row(frame, app, chunks[2]);
}

/// Render the budget progress gauge with the remaining amount
fn render_gauge(frame: &mut Frame, app: &mut App, area: Rect) {
    let ledger = app.storage.ledger.snapshot().unwrap_or_default();
    let budget = app.storage.budget.get().unwrap_or_default();
    let currency = app.storage.currency.get().unwrap_or_default();

    let summary = DailySummary::generate(&ledger, budget, app.today());

    let gauge_color = if summary.progress >= 1.0 {
        Color::Red
    } else if summary.progress >= 0.8 {
        Color::Yellow
    } else {
        Color::Green
    };

    let label = format!(
        "{} / {}  ({} left)",
        summary.total.format_with_symbol(&currency.symbol),
        summary.budget.format_with_symbol(&currency.symbol),
        summary.remaining.format_with_symbol(&currency.symbol),
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" {} ", summary.day))
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(gauge_color))
        .ratio(summary.progress)
        .label(label);

    frame.render_widget(gauge, area);
}

/// Render today's entries as a selectable list
fn render_entries(frame: &mut Frame, app: &mut App, area: Rect) {
    let entries = app.today_entries();
    let categories = app.storage.categories.list().unwrap_or_default();
    let currency = app.storage.currency.get().unwrap_or_default();

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let name = category::display_name(&categories, entry.category_id);
            let mut spans = vec![
                Span::styled(
                    format!("{:>10}", entry.amount.format_with_symbol(&currency.symbol)),
                    Style::default().fg(Color::White),
                ),
                Span::raw("  "),
                Span::styled(name, Style::default().fg(Color::Cyan)),
            ];
            if !entry.note_text().is_empty() {
                spans.push(Span::styled(
                    format!("  {}", entry.note_text()),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!(" Today ({} entries) ", entries.len());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !entries.is_empty() {
        state.select(Some(app.selected_entry_index.min(entries.len() - 1)));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the quick-amount chips, or the amount form while typing
fn render_quick_row(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.input_mode == InputMode::EnteringAmount {
        let input = Paragraph::new(format!("{}_", app.amount_input)).block(
            Block::default()
                .title(" Amount ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(input, area);
        return;
    }

    let amounts = app.storage.quick_amounts.get().unwrap_or_default();
    let currency = app.storage.currency.get().unwrap_or_default();

    let mut spans = vec![];
    for (i, amount) in amounts.as_slice().iter().enumerate().take(9) {
        spans.push(Span::styled(
            format!("{}:", i + 1),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(
            format!("{} ", amount.format_with_symbol(&currency.symbol)),
            Style::default().fg(Color::Green),
        ));
    }

    let chips = Paragraph::new(Line::from(spans))
        .block(Block::default().title(" Quick Add ").borders(Borders::ALL));
    frame.render_widget(chips, area);
}
