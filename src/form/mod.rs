//! Form domain layer
//!
//! Path-addressed form state, a declarative schema, the validation engine
//! that walks it, and the controller tying them to a submission sink.

mod controller;
mod path;
mod schema;
mod sink;
mod validation;
mod value;

pub use controller::{FormController, FormError, SubmitOutcome};
pub use path::{FieldPath, Node, PathError, Tree};
pub use schema::{FieldKind, FieldSchema, FormSchema, SchemaError, SectionSchema};
pub use sink::{LogSink, SubmissionSink};
pub use validation::{check_field, validate, ErrorState, Validation};
pub use value::{FieldInput, FieldValue, FormState};
