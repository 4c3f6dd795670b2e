//! # User DTOs
//!
//! ```text
//! users/
//! ├── request/     client → server (RegistrationRequest, ValidatedRegistration)
//! └── response/    server → client (RegistrationResponse, PublicUser)
//! ```
//!
//! JSON keys follow the Spanish wire contract of the registration form
//! (`nombre`, `contrasena`, `fechaRegistro`, ...); Rust field names stay English.

pub mod request;
pub mod response;
