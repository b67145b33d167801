//! Registration form rendering
//!
//! Sections become header rows; fields are laid out two per row unless
//! they ask for the full width. Only the rows around the focused field are
//! drawn when the form is taller than the screen.

use super::field_renderer::{draw_field, FieldView, FIELD_HEIGHT};
use crate::app::App;
use cafe_onboard::form::{FormSchema, SubmissionSink};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::ops::Range;

/// Height of a section header row
const SECTION_HEIGHT: u16 = 1;

/// One visual row of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormRow {
    Section(String),
    /// Indices into the schema's field order (one or two)
    Fields(Vec<usize>),
}

impl FormRow {
    pub fn height(&self) -> u16 {
        match self {
            FormRow::Section(_) => SECTION_HEIGHT,
            FormRow::Fields(_) => FIELD_HEIGHT,
        }
    }

    fn contains(&self, field_index: usize) -> bool {
        matches!(self, FormRow::Fields(indices) if indices.contains(&field_index))
    }
}

/// Lay out the schema as rows
pub fn build_rows(schema: &FormSchema) -> Vec<FormRow> {
    let mut rows = Vec::new();
    let mut index = 0;
    for section in schema.sections() {
        rows.push(FormRow::Section(section.label.clone()));
        let mut pending: Vec<usize> = Vec::new();
        for field in &section.fields {
            if field.full_width {
                if !pending.is_empty() {
                    rows.push(FormRow::Fields(std::mem::take(&mut pending)));
                }
                rows.push(FormRow::Fields(vec![index]));
            } else {
                pending.push(index);
                if pending.len() == 2 {
                    rows.push(FormRow::Fields(std::mem::take(&mut pending)));
                }
            }
            index += 1;
        }
        if !pending.is_empty() {
            rows.push(FormRow::Fields(pending));
        }
    }
    rows
}

/// Rows that fit in `height`, scrolled just enough to show `focus_row`
pub fn visible_rows(rows: &[FormRow], focus_row: usize, height: u16) -> Range<usize> {
    if rows.is_empty() {
        return 0..0;
    }
    let focus_row = focus_row.min(rows.len() - 1);
    let span = |range: Range<usize>| -> u16 { rows[range].iter().map(FormRow::height).sum() };

    let mut start = 0;
    while start < focus_row && span(start..focus_row + 1) > height {
        start += 1;
    }
    let mut end = start;
    while end < rows.len() && span(start..end + 1) <= height {
        end += 1;
    }
    start..end.max(start + 1).min(rows.len())
}

/// Draw the form with all sections and fields
pub fn draw<S: SubmissionSink>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let palette = app.theme().palette();
    let block = Block::default()
        .title(Span::styled(" Cafe Registration ", palette.title_style()))
        .borders(Borders::ALL)
        .border_style(palette.border_style(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let schema = app.form.schema();
    let fields: Vec<_> = schema.fields().collect();
    let rows = build_rows(schema);
    let focus_row = rows
        .iter()
        .position(|row| row.contains(app.focus()))
        .unwrap_or(rows.len().saturating_sub(1));

    let mut y = inner.y;
    for row in &rows[visible_rows(&rows, focus_row, inner.height)] {
        let height = row.height().min(inner.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let row_area = Rect::new(inner.x, y, inner.width, height);
        match row {
            FormRow::Section(label) => {
                let line = Line::from(Span::styled(format!("▸ {label}"), palette.title_style()));
                frame.render_widget(Paragraph::new(line), row_area);
            }
            FormRow::Fields(indices) => {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints(vec![Constraint::Ratio(1, 2); 2])
                    .split(row_area);
                let full = indices.len() == 1 && fields[indices[0]].full_width;
                for (slot, &index) in indices.iter().enumerate() {
                    let field = fields[index];
                    let value = app.display_value(field);
                    let view = FieldView {
                        field,
                        value: &value,
                        checked: app.is_checked(field),
                        error: app.form.error(&field.path),
                        is_active: app.focus() == index,
                    };
                    let cell = if full { row_area } else { columns[slot] };
                    draw_field(frame, cell, &view, &palette);
                }
            }
        }
        y += height;
    }
}
