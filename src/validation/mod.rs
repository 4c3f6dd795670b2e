//! # Field validation
//!
//! Shared declarative rule set for the registration form plus the server-side
//! interpreter that enforces it.
//!
//! - [`rules`] - the rule table (data only), also served to the browser
//! - [`interpreter`] - pure evaluation of a rule table against field values
//!
//! The server never trusts client-side validity: every request is re-evaluated
//! here before anything touches the store.
//!
//! ```rust,ignore
//! use crate::validation::{validate, REGISTRATION_RULES};
//!
//! if let Err(errors) = validate(REGISTRATION_RULES, &request) {
//!     return Err(AppError::InvalidFields(errors));
//! }
//! ```

pub mod interpreter;
pub mod rules;

use std::collections::HashMap;

use serde::Serialize;
use validator::ValidationError;

pub use interpreter::{validate, validate_field};
pub use rules::{Constraint, FieldRules, REGISTRATION_RULES};

/// One rejected field, as reported to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Builds the client-facing error from a constraint failure.
    pub fn from_validation(field: &str, error: &ValidationError) -> Self {
        let message = error
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| error.code.to_string());

        Self::new(field, message)
    }
}

/// Anything the interpreter can read field values from.
///
/// Missing fields return `None` and are treated as empty.
pub trait FieldSource {
    fn field_value(&self, field: &str) -> Option<&str>;
}

impl FieldSource for HashMap<String, String> {
    fn field_value(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}
