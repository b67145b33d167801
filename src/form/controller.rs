//! Form controller: owns values and errors and exposes the two transitions
//! (field change and submit) the presentation layer drives.

use super::path::{FieldPath, PathError};
use super::schema::{FieldKind, FieldSchema, FormSchema};
use super::sink::SubmissionSink;
use super::validation::{validate, ErrorState};
use super::value::{parse_number, FieldInput, FieldValue, FormState};
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("no field declared at `{0}`")]
    UnknownField(FieldPath),
    #[error(transparent)]
    Path(#[from] PathError),
}

/// What happened on a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the sink accepted the payload
    Submitted,
    /// Validation failed; nothing was sent
    Rejected { error_count: usize },
    /// Validation passed but the sink returned an error
    SinkFailed(String),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}

pub struct FormController<S: SubmissionSink> {
    schema: FormSchema,
    values: Rc<FormState>,
    errors: ErrorState,
    sink: S,
}

impl<S: SubmissionSink> FormController<S> {
    pub fn new(schema: FormSchema, sink: S) -> Self {
        Self {
            schema,
            values: Rc::new(FormState::new()),
            errors: ErrorState::new(),
            sink,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    /// Shared handle to the current values; later edits never show through it
    pub fn snapshot(&self) -> Rc<FormState> {
        Rc::clone(&self.values)
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn field(&self, path: &FieldPath) -> Option<&FieldSchema> {
        self.schema.field(path)
    }

    pub fn value(&self, path: &FieldPath) -> Option<&FieldValue> {
        self.values.get(path)
    }

    pub fn error(&self, path: &FieldPath) -> Option<&str> {
        self.errors.get(path).map(String::as_str)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Store user input for the field at `path`.
    ///
    /// Number fields coerce their text here: non-numeric text is kept as NaN
    /// for the number rule to report, blank text stays empty.
    pub fn on_field_change(&mut self, path: &FieldPath, input: FieldInput) -> Result<(), FormError> {
        let kind = self
            .schema
            .field(path)
            .map(|f| f.kind)
            .ok_or_else(|| FormError::UnknownField(path.clone()))?;

        let value = coerce(kind, input);
        tracing::trace!("Field {path} changed to {value}");
        Rc::make_mut(&mut self.values).set(path, value)?;
        Ok(())
    }

    /// Validate and, if clean, hand the current values to the sink
    pub fn on_submit(&mut self) -> SubmitOutcome {
        let validation = validate(&self.schema, &self.values);
        let error_count = validation.error_count();
        self.errors = validation.errors;

        if error_count > 0 {
            tracing::warn!("Submit rejected with {error_count} validation errors");
            return SubmitOutcome::Rejected { error_count };
        }

        match self.sink.submit(&self.values) {
            Ok(()) => SubmitOutcome::Submitted,
            Err(err) => {
                tracing::error!("Submission failed: {err:#}");
                SubmitOutcome::SinkFailed(err.to_string())
            }
        }
    }

    /// Discard all values and errors
    pub fn reset(&mut self) {
        self.values = Rc::new(FormState::new());
        self.errors.clear();
    }
}

fn coerce(kind: FieldKind, input: FieldInput) -> FieldValue {
    match (kind, input) {
        (_, FieldInput::Checked(checked)) => FieldValue::Bool(checked),
        (FieldKind::Number, FieldInput::Text(text)) if text.trim().is_empty() => {
            FieldValue::Text(String::new())
        }
        (FieldKind::Number, FieldInput::Text(text)) => {
            FieldValue::Number(parse_number(&text).unwrap_or(f64::NAN))
        }
        (_, FieldInput::Text(text)) => FieldValue::Text(text),
    }
}
