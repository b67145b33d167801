//! Declarative form schema
//!
//! A form is an ordered list of sections, each an ordered list of fields.
//! Order drives both rendering and validation traversal. Schemas load from
//! JSON shaped like:
//!
//! ```json
//! [{ "label": "Owner", "fields": [
//!     { "name": "contact_info.email", "label": "Email", "type": "email", "required": true }
//! ]}]
//! ```

use super::path::FieldPath;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Built-in gaming cafe registration form
const CAFE_REGISTRATION_JSON: &str = include_str!("../../assets/cafe_registration.json");

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid schema at `{path}`: {message}")]
    Parse { path: String, message: String },
    #[error("field path `{0}` is declared more than once")]
    DuplicatePath(FieldPath),
    #[error("field path `{prefix}` is a parent of `{path}`")]
    PathPrefixConflict { prefix: FieldPath, path: FieldPath },
}

/// Input type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Number,
    Date,
    Checkbox,
}

impl FieldKind {
    /// Placeholder shown for an empty input of this kind
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Text => "",
            Self::Email => "name@example.com",
            Self::Tel => "+91 98765 43210",
            Self::Number => "0",
            Self::Date => "YYYY-MM-DD",
            Self::Checkbox => "",
        }
    }
}

/// Static description of one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    #[serde(rename = "name")]
    pub path: FieldPath,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    /// Presentation hint: take the whole row
    #[serde(default, rename = "fullWidth")]
    pub full_width: bool,
}

impl FieldSchema {
    pub fn new(path: FieldPath, label: &str, kind: FieldKind) -> Self {
        Self {
            path,
            label: label.to_string(),
            kind,
            required: false,
            full_width: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }
}

/// Named, ordered group of fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSchema {
    pub label: String,
    pub fields: Vec<FieldSchema>,
}

impl SectionSchema {
    pub fn new(label: &str, fields: Vec<FieldSchema>) -> Self {
        Self {
            label: label.to_string(),
            fields,
        }
    }
}

/// Ordered sections making up a whole form.
///
/// Every field path is unique and no path is a parent of another, so two
/// fields can never share a leaf in the form state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormSchema {
    sections: Vec<SectionSchema>,
}

impl FormSchema {
    pub fn new(sections: Vec<SectionSchema>) -> Result<Self, SchemaError> {
        let schema = Self { sections };
        schema.check_paths()?;
        Ok(schema)
    }

    /// Parse a schema from its JSON configuration shape
    pub fn from_json(source: &str) -> Result<Self, SchemaError> {
        let deserializer = &mut serde_json::Deserializer::from_str(source);
        let sections: Vec<SectionSchema> =
            serde_path_to_error::deserialize(deserializer).map_err(|e| SchemaError::Parse {
                path: e.path().to_string(),
                message: e.inner().to_string(),
            })?;
        Self::new(sections)
    }

    /// The gaming cafe registration form shipped with the app
    pub fn cafe_registration() -> Result<Self, SchemaError> {
        Self::from_json(CAFE_REGISTRATION_JSON)
    }

    pub fn sections(&self) -> &[SectionSchema] {
        &self.sections
    }

    /// All fields in traversal order
    pub fn fields(&self) -> impl Iterator<Item = &FieldSchema> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    pub fn field_count(&self) -> usize {
        self.sections.iter().map(|s| s.fields.len()).sum()
    }

    pub fn field(&self, path: &FieldPath) -> Option<&FieldSchema> {
        self.fields().find(|f| &f.path == path)
    }

    fn check_paths(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for field in self.fields() {
            if !seen.insert(&field.path) {
                return Err(SchemaError::DuplicatePath(field.path.clone()));
            }
        }
        for a in self.fields() {
            if let Some(b) = self.fields().find(|b| a.path.is_strict_prefix_of(&b.path)) {
                return Err(SchemaError::PathPrefixConflict {
                    prefix: a.path.clone(),
                    path: b.path.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn path(raw: &str) -> FieldPath {
        FieldPath::parse(raw).unwrap()
    }

    mod loading {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_parses_configuration_shape() {
            let json = r#"[
                { "type": "section", "label": "Owner", "fields": [
                    { "name": "owner_name", "label": "Owner Name", "type": "text", "required": true },
                    { "name": "contact_info.email", "label": "Email", "type": "email", "fullWidth": true }
                ]}
            ]"#;
            let schema = FormSchema::from_json(json).unwrap();
            assert_eq!(
                schema.sections(),
                &[SectionSchema::new(
                    "Owner",
                    vec![
                        FieldSchema::new(path("owner_name"), "Owner Name", FieldKind::Text)
                            .required(),
                        FieldSchema::new(path("contact_info.email"), "Email", FieldKind::Email)
                            .full_width(),
                    ],
                )]
            );
        }

        #[test]
        fn test_optional_flags_default_to_false() {
            let json = r#"[{ "label": "S", "fields": [
                { "name": "a", "label": "A", "type": "checkbox" }
            ]}]"#;
            let schema = FormSchema::from_json(json).unwrap();
            let field = schema.field(&path("a")).unwrap();
            assert!(!field.required);
            assert!(!field.full_width);
        }

        #[test]
        fn test_unknown_kind_reports_location() {
            let json = r#"[{ "label": "S", "fields": [
                { "name": "a", "label": "A", "type": "text" },
                { "name": "b", "label": "B", "type": "color" }
            ]}]"#;
            match FormSchema::from_json(json) {
                Err(SchemaError::Parse { path, .. }) => assert_eq!(path, "[0].fields[1].type"),
                other => panic!("expected parse error, got {other:?}"),
            }
        }

        #[test]
        fn test_malformed_path_rejected() {
            let json = r#"[{ "label": "S", "fields": [
                { "name": "a..b", "label": "A", "type": "text" }
            ]}]"#;
            assert!(matches!(
                FormSchema::from_json(json),
                Err(SchemaError::Parse { .. })
            ));
        }
    }

    mod path_uniqueness {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_duplicate_path_across_sections() {
            let result = FormSchema::new(vec![
                SectionSchema::new(
                    "A",
                    vec![FieldSchema::new(path("x.y"), "Y", FieldKind::Text)],
                ),
                SectionSchema::new(
                    "B",
                    vec![FieldSchema::new(path("x.y"), "Y again", FieldKind::Text)],
                ),
            ]);
            assert!(matches!(result, Err(SchemaError::DuplicatePath(p)) if p == path("x.y")));
        }

        #[test]
        fn test_prefix_conflict() {
            let result = FormSchema::new(vec![SectionSchema::new(
                "A",
                vec![
                    FieldSchema::new(path("timing.opening.hour"), "Hour", FieldKind::Number),
                    FieldSchema::new(path("timing.opening"), "Opening", FieldKind::Text),
                ],
            )]);
            match result {
                Err(SchemaError::PathPrefixConflict { prefix, path: p }) => {
                    assert_eq!(prefix, path("timing.opening"));
                    assert_eq!(p, path("timing.opening.hour"));
                }
                other => panic!("expected prefix conflict, got {other:?}"),
            }
        }

        #[test]
        fn test_shared_parent_is_fine() {
            let result = FormSchema::new(vec![SectionSchema::new(
                "A",
                vec![
                    FieldSchema::new(path("timing.opening_time"), "Open", FieldKind::Text),
                    FieldSchema::new(path("timing.closing_time"), "Close", FieldKind::Text),
                ],
            )]);
            assert!(result.is_ok());
        }
    }

    mod cafe_registration {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_builtin_schema_loads() {
            let schema = FormSchema::cafe_registration().unwrap();
            assert_eq!(schema.sections().len(), 9);
            assert_eq!(schema.field_count(), 48);
            assert_eq!(schema.sections()[0].label, "Cafe Details");
        }

        #[test]
        fn test_builtin_required_fields() {
            let schema = FormSchema::cafe_registration().unwrap();
            let required: Vec<&str> = schema
                .fields()
                .filter(|f| f.required)
                .map(|f| f.path.as_str())
                .collect();
            assert_eq!(
                required,
                vec![
                    "cafe_name",
                    "owner_name",
                    "contact_info.phone",
                    "contact_info.email",
                    "business_registration_details.registration_number",
                    "business_registration_details.registration_date",
                    "physicalAddress.addressLine1",
                    "physicalAddress.pincode",
                    "physicalAddress.state",
                    "physicalAddress.country",
                    "timing.opening_time",
                    "timing.closing_time",
                    "slot_duration",
                ]
            );
        }

        #[test]
        fn test_builtin_kinds() {
            let schema = FormSchema::cafe_registration().unwrap();
            let kind = |p: &str| schema.field(&path(p)).map(|f| f.kind);
            assert_eq!(kind("contact_info.phone"), Some(FieldKind::Tel));
            assert_eq!(kind("physicalAddress.pincode"), Some(FieldKind::Number));
            assert_eq!(
                kind("business_registration_details.registration_date"),
                Some(FieldKind::Date)
            );
            assert_eq!(kind("amenities.24/7"), Some(FieldKind::Checkbox));
            assert_eq!(kind("no.such.field"), None);
        }
    }
}
