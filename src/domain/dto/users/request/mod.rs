//! # User request DTOs
//!
//! Structures decoded from HTTP request bodies.
//!
//! ## Validation layers
//!
//! 1. **Syntactic**: JSON shape, handled by `serde` (all keys optional)
//! 2. **Structural**: the shared rule table in [`crate::validation`]
//! 3. **Business**: email / phone uniqueness, checked by the service layer
//!
//! ```rust,ignore
//! use crate::domain::dto::users::request::RegistrationRequest;
//!
//! let validated = request.validate()?; // AppError::InvalidFields on failure
//! ```

pub mod registration_request;

pub use registration_request::{RegistrationRequest, ValidatedRegistration};
