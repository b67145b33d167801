//! Cafe onboarding form library
//!
//! Declarative form schemas, dotted-path form state, validation, and a
//! controller that the terminal front end drives.

pub mod config;
pub mod form;
pub mod theme;
