//! Application state and key handling

use anyhow::Result;
use cafe_onboard::form::{
    FieldInput, FieldKind, FieldPath, FieldSchema, FormController, FormSchema, SubmissionSink,
    SubmitOutcome,
};
use cafe_onboard::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Severity of the status bar message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Main application struct
pub struct App<S: SubmissionSink> {
    /// Form values, errors and the submission sink
    pub form: FormController<S>,
    theme: Theme,
    /// Focused stop: `0..field_count` are fields, `field_count` is Submit
    focus: usize,
    /// Text as typed, so number fields keep e.g. a trailing "." while editing
    inputs: HashMap<FieldPath, String>,
    pub status: Option<StatusMessage>,
    quit: bool,
}

impl<S: SubmissionSink> App<S> {
    pub fn new(schema: FormSchema, theme: Theme, sink: S) -> Self {
        Self {
            form: FormController::new(schema, sink),
            theme,
            focus: 0,
            inputs: HashMap::new(),
            status: None,
            quit: false,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_submit_focused(&self) -> bool {
        self.focus == self.form.schema().field_count()
    }

    pub fn focused_field(&self) -> Option<&FieldSchema> {
        self.form.schema().fields().nth(self.focus)
    }

    pub fn next_focus(&mut self) {
        let stops = self.form.schema().field_count() + 1;
        self.focus = (self.focus + 1) % stops;
    }

    pub fn prev_focus(&mut self) {
        let stops = self.form.schema().field_count() + 1;
        self.focus = if self.focus == 0 {
            stops - 1
        } else {
            self.focus - 1
        };
    }

    /// Text to show inside the input for `field`
    pub fn display_value(&self, field: &FieldSchema) -> String {
        if let Some(text) = self.inputs.get(&field.path) {
            return text.clone();
        }
        self.form
            .value(&field.path)
            .map(|v| v.to_string())
            .unwrap_or_default()
    }

    pub fn is_checked(&self, field: &FieldSchema) -> bool {
        self.form.value(&field.path).is_some_and(|v| v.as_bool())
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let focused_kind = self.focused_field().map(|f| f.kind);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::Char('t') if ctrl => self.cycle_theme(),
            KeyCode::Tab | KeyCode::Down => self.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.prev_focus(),
            KeyCode::Enter if self.is_submit_focused() => self.submit(),
            KeyCode::Enter | KeyCode::Char(' ') if focused_kind == Some(FieldKind::Checkbox) => {
                self.toggle_checkbox()?
            }
            KeyCode::Enter => self.next_focus(),
            KeyCode::Char(c) if !ctrl && focused_kind.is_some() => self.input_char(c)?,
            KeyCode::Backspace if focused_kind.is_some() => self.backspace()?,
            _ => {}
        }
        Ok(())
    }

    fn input_char(&mut self, c: char) -> Result<()> {
        let Some(field) = self.focused_field() else {
            return Ok(());
        };
        if field.kind == FieldKind::Checkbox {
            return Ok(());
        }
        let path = field.path.clone();
        let mut text = self.display_value(field);
        text.push(c);
        self.write_text(path, text)
    }

    fn backspace(&mut self) -> Result<()> {
        let Some(field) = self.focused_field() else {
            return Ok(());
        };
        if field.kind == FieldKind::Checkbox {
            return Ok(());
        }
        let path = field.path.clone();
        let mut text = self.display_value(field);
        text.pop();
        self.write_text(path, text)
    }

    fn write_text(&mut self, path: FieldPath, text: String) -> Result<()> {
        self.form.on_field_change(&path, FieldInput::Text(text.clone()))?;
        self.inputs.insert(path, text);
        Ok(())
    }

    fn toggle_checkbox(&mut self) -> Result<()> {
        let Some(field) = self.focused_field() else {
            return Ok(());
        };
        let path = field.path.clone();
        let checked = !self.is_checked(field);
        self.form.on_field_change(&path, FieldInput::Checked(checked))?;
        Ok(())
    }

    /// Validate and submit, then report the outcome in the status bar
    pub fn submit(&mut self) {
        self.status = Some(match self.form.on_submit() {
            SubmitOutcome::Submitted => StatusMessage {
                text: "Form submitted!".to_string(),
                kind: StatusKind::Success,
            },
            SubmitOutcome::Rejected { error_count } => {
                self.focus_first_error();
                let noun = if error_count == 1 { "field" } else { "fields" };
                StatusMessage {
                    text: format!("Fix {error_count} {noun} before submitting"),
                    kind: StatusKind::Error,
                }
            }
            SubmitOutcome::SinkFailed(message) => StatusMessage {
                text: format!("Submission failed: {message}"),
                kind: StatusKind::Error,
            },
        });
    }

    fn focus_first_error(&mut self) {
        let first = self
            .form
            .schema()
            .fields()
            .position(|f| self.form.error(&f.path).is_some());
        if let Some(index) = first {
            self.focus = index;
        }
    }

    /// Clear every value and error and start over
    pub fn reset(&mut self) {
        self.form.reset();
        self.inputs.clear();
        self.focus = 0;
        self.status = Some(StatusMessage {
            text: "Form cleared".to_string(),
            kind: StatusKind::Info,
        });
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = Some(StatusMessage {
            text: format!("Theme: {}", self.theme.label()),
            kind: StatusKind::Info,
        });
    }
}
