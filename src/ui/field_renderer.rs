//! Field rendering utilities for forms

use cafe_onboard::form::{FieldKind, FieldSchema};
use cafe_onboard::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Field box height in rows (top border + value + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

/// What a field box should show
pub struct FieldView<'a> {
    pub field: &'a FieldSchema,
    pub value: &'a str,
    pub checked: bool,
    pub error: Option<&'a str>,
    pub is_active: bool,
}

/// Draw one input box: label on the top border, error on the bottom border
pub fn draw_field(frame: &mut Frame, area: Rect, view: &FieldView, palette: &Palette) {
    let field = view.field;
    let border_style = if view.error.is_some() && !view.is_active {
        palette.error_style()
    } else {
        palette.border_style(view.is_active)
    };

    let cursor = if view.is_active { "▌" } else { "" };
    let content = if field.kind == FieldKind::Checkbox {
        let mark = if view.checked { "[x]" } else { "[ ]" };
        Line::from(vec![
            Span::styled(mark, Style::default().fg(palette.focus)),
            Span::styled(format!(" {}", field.label), Style::default().fg(palette.text)),
        ])
    } else if view.value.is_empty() && !view.is_active {
        Line::from(Span::styled(
            field.kind.hint(),
            Style::default().fg(palette.muted),
        ))
    } else {
        Line::from(vec![
            Span::styled(view.value, Style::default().fg(palette.text)),
            Span::styled(cursor, Style::default().fg(palette.focus)),
        ])
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    if field.kind != FieldKind::Checkbox {
        let marker = if field.required { " *" } else { "" };
        let title_style = if view.is_active {
            Style::default()
                .fg(palette.focus)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.accent)
        };
        block = block.title(Span::styled(format!(" {}{marker} ", field.label), title_style));
    }
    if let Some(error) = view.error {
        block = block.title_bottom(Span::styled(format!(" {error} "), palette.error_style()));
    }

    frame.render_widget(Paragraph::new(content).block(block), area);
}
