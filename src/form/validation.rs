//! Declarative validation of form state against a schema

use super::path::Tree;
use super::schema::{FieldKind, FieldSchema, FormSchema};
use super::value::{FieldValue, FormState};
use once_cell::sync::Lazy;
use regex::Regex;

/// Validation messages mirroring the shape of [`FormState`]
pub type ErrorState = Tree<String>;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date pattern"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s-]{10,}$").expect("valid phone pattern"));

/// Result of one validation pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Validation {
    pub errors: ErrorState,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.leaf_count()
    }
}

/// Walk every field of `schema` in order and collect its error, if any.
///
/// Fields never short-circuit each other; within a field, a failed required
/// check suppresses the kind-specific rule.
pub fn validate(schema: &FormSchema, state: &FormState) -> Validation {
    let mut errors = ErrorState::new();
    for field in schema.fields() {
        if let Some(message) = check_field(field, state.get(&field.path)) {
            // Schema paths never conflict, so this write cannot fail
            if let Err(err) = errors.set(&field.path, message) {
                tracing::warn!("Dropping error for {}: {err}", field.path);
            }
        }
    }

    let validation = Validation { errors };
    tracing::debug!(
        fields = schema.field_count(),
        errors = validation.error_count(),
        "Validated form"
    );
    validation
}

/// Error message for a single field, or `None` if it passes
pub fn check_field(field: &FieldSchema, value: Option<&FieldValue>) -> Option<String> {
    if field.required && value.map_or(true, FieldValue::is_blank) {
        return Some(format!("{} is required", field.label));
    }
    let value = value?;

    match field.kind {
        FieldKind::Email if value.is_truthy() && !EMAIL_RE.is_match(&value.to_string()) => {
            Some("Invalid email format".to_string())
        }
        FieldKind::Number if !is_empty_text(value) && !is_non_negative(value) => {
            Some(format!("{} must be a positive number", field.label))
        }
        FieldKind::Date if value.is_truthy() && !DATE_RE.is_match(&value.to_string()) => {
            Some("Invalid date format (YYYY-MM-DD)".to_string())
        }
        FieldKind::Tel if value.is_truthy() && !PHONE_RE.is_match(&value.to_string()) => {
            Some("Invalid phone number".to_string())
        }
        _ => None,
    }
}

fn is_empty_text(value: &FieldValue) -> bool {
    matches!(value, FieldValue::Text(s) if s.is_empty())
}

fn is_non_negative(value: &FieldValue) -> bool {
    value.as_number().is_some_and(|n| n >= 0.0)
}
