//! TUI Views module
//!
//! Contains the dashboard and week views plus the shared status bar and
//! confirm dialog.

pub mod dashboard;
pub mod week;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, ActiveView, App, InputMode};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(frame.area());

    // Render main view based on active view
    match app.active_view {
        ActiveView::Dashboard => dashboard::render(frame, app, chunks[0]),
        ActiveView::Week => week::render(frame, app, chunks[0]),
    }

    render_status_bar(frame, app, chunks[1]);

    // Render dialog if active
    if app.active_dialog == ActiveDialog::ConfirmClear {
        render_confirm_clear(frame, app);
    }
}

/// Render the bottom status bar with key hints
fn render_status_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    if let Some(ref message) = app.status {
        spans.push(Span::styled(
            format!(" {} ", message),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw("│ "));
    }

    let hints = match app.input_mode {
        InputMode::EnteringAmount => " Enter:Add  Esc:Cancel ",
        InputMode::Normal => " q:Quit  Tab:View  1-9:Quick  a:Amount  d:Delete  x:Clear ",
    };
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the clear-day confirmation dialog
fn render_confirm_clear(frame: &mut Frame, app: &App) {
    let area = centered_rect(44, 5, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Clear Day ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let text = vec![
        Line::from(format!("Remove all entries for {}?", app.today())),
        Line::from(""),
        Line::from(Span::styled(
            "y: Confirm    n: Cancel",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Center a fixed-size rect within `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
