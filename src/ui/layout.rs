//! Layout components (form area, action row, status bar)

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::{App, StatusKind};
use cafe_onboard::form::SubmissionSink;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Key hints shown on the right of the status bar
const HELP_TEXT: &str = "Tab/↓ next · Shift+Tab/↑ prev · Space toggle · Ctrl+S submit · Ctrl+R reset · Ctrl+T theme · Esc quit";

/// Width of the Submit button
const SUBMIT_WIDTH: u16 = 16;

/// Split the screen into (form, action row, status bar)
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Form
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the Submit button, centred
pub fn draw_actions<S: SubmissionSink>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(SUBMIT_WIDTH),
            Constraint::Min(0),
        ])
        .split(area);

    render_button(
        frame,
        chunks[1],
        "Submit",
        app.is_submit_focused(),
        &app.theme().palette(),
    );
}

/// Draw the status message and key hints
pub fn draw_status_bar<S: SubmissionSink>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let palette = app.theme().palette();

    let mut spans = Vec::new();
    if let Some(status) = &app.status {
        let color = match status.kind {
            StatusKind::Info => palette.accent,
            StatusKind::Success => palette.success,
            StatusKind::Error => palette.error,
        };
        spans.push(Span::styled(
            format!(" {} ", status.text),
            Style::default().fg(color),
        ));
        spans.push(Span::raw("│"));
    }
    spans.push(Span::styled(
        format!(" {HELP_TEXT} "),
        Style::default().fg(palette.muted),
    ));
    spans.push(Span::styled(
        format!("[{}]", app.theme().label()),
        Style::default().fg(palette.accent),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
