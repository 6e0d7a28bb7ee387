//! Shared domain types (validation errors, failure kinds).

pub mod error;
pub mod field_errors;
