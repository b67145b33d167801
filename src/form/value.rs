//! Form value objects

use super::path::Tree;
use serde::Serialize;
use std::fmt;

/// A single leaf value held in the form state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    /// May be NaN when a number field received non-numeric text
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    /// Values the required rule treats as "not filled in"
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Bool(b) => !b,
            FieldValue::Number(_) => false,
        }
    }

    /// Loose truthiness: non-empty text, non-zero numbers, `true`
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Number(n) => *n != 0.0 && !n.is_nan(),
            FieldValue::Bool(b) => *b,
        }
    }

    /// Numeric reading of the value, or `None` when it is not a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) if !n.is_nan() => Some(*n),
            FieldValue::Number(_) | FieldValue::Bool(_) => None,
            FieldValue::Text(s) => parse_number(s),
        }
    }

    pub fn as_bool(&self) -> bool {
        matches!(self, FieldValue::Bool(true))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) if n.is_nan() => f.write_str("NaN"),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Raw input emitted by the presentation layer for one field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Text(String),
    Checked(bool),
}

impl FieldInput {
    pub fn text(value: impl Into<String>) -> Self {
        FieldInput::Text(value.into())
    }
}

/// Current form values, keyed by field path
pub type FormState = Tree<FieldValue>;

/// Parse trimmed decimal text into a finite number
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
