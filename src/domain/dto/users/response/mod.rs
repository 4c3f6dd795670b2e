//! # User response DTOs
//!
//! Outgoing bodies. Secrets (password hash) and contact data (phone) are
//! stripped here; entities are never serialized to clients directly.

pub mod registration_response;

pub use registration_response::{PublicUser, REGISTRATION_SUCCESS_MESSAGE, RegistrationResponse};
