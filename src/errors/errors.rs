//! Application-wide error system
//!
//! Unified error handling for the registration service. `thiserror` derives
//! the `Error` impls and `actix_web::ResponseError` turns every variant into a
//! structured JSON response, so handlers can simply propagate with `?`.
//!
//! ## HTTP mapping
//!
//! | AppError | HTTP Status | Body |
//! |----------|-------------|------|
//! | `InvalidFields` | 400 Bad Request | `{ "error", "errores": [{ "field", "message" }] }` |
//! | `DuplicateField` | 400 Bad Request | `{ "error" }` naming the taken field |
//! | `MalformedBody` | 400 Bad Request | `{ "error" }` |
//! | `DatabaseError` | 500 Internal Server Error | generic `{ "error" }` |
//! | `InternalError` | 500 Internal Server Error | generic `{ "error" }` |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn register(request: RegistrationRequest) -> Result<PublicUser, AppError> {
//!     if store.find_by_email(&email).await?.is_some() {
//!         return Err(AppError::DuplicateField(UniqueField::Email));
//!     }
//!     // ...
//! }
//! ```

use actix_web::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::validation::FieldError;

/// Message returned with every structural validation failure.
pub const INVALID_FIELDS_MESSAGE: &str = "Datos inválidos";

/// Message returned for any 5xx; the real cause only goes to the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

/// Field that carries a uniqueness constraint in the user store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UniqueField {
    Email,
    Phone,
}

impl UniqueField {
    /// Wire identifier of the field, as used in requests and documents.
    pub fn field_name(&self) -> &'static str {
        match self {
            UniqueField::Email => "email",
            UniqueField::Phone => "telefono",
        }
    }

    /// User-facing message for a registration that collides on this field.
    pub fn conflict_message(&self) -> &'static str {
        match self {
            UniqueField::Email => "El correo electrónico ya está registrado",
            UniqueField::Phone => "El número de teléfono ya está registrado",
        }
    }
}

/// Application-wide error type
///
/// Covers the three failure families of a registration: the user typed
/// something wrong (`InvalidFields`, `MalformedBody`), the user picked an
/// email or phone that is taken (`DuplicateField`), or the backend broke
/// (`DatabaseError`, `InternalError`).
///
/// ## Conversion patterns
///
/// ```rust,ignore
/// // MongoDB failure
/// collection.find_one(filter).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// // Anything else with a Display impl
/// bcrypt::hash(password, cost).context("password hashing failed")?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// One or more field rules failed (400 Bad Request)
    ///
    /// Carries every failing field, in rule-table order.
    #[error("Validation error: {} field(s) rejected", .0.len())]
    InvalidFields(Vec<FieldError>),

    /// Email or phone already registered (400 Bad Request)
    #[error("Duplicate field: {}", .0.field_name())]
    DuplicateField(UniqueField),

    /// Request body could not be decoded (400 Bad Request)
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Storage failure (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Unexpected failure (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidFields(_)
            | AppError::DuplicateField(_)
            | AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Builds the JSON error body.
    ///
    /// 5xx bodies are deliberately generic; details are written to the log
    /// instead so storage internals never reach the client.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::InvalidFields(errors) => serde_json::json!({
                "error": INVALID_FIELDS_MESSAGE,
                "errores": errors,
            }),
            AppError::DuplicateField(field) => serde_json::json!({
                "error": field.conflict_message(),
            }),
            AppError::MalformedBody(detail) => serde_json::json!({
                "error": format!("Cuerpo de la solicitud inválido: {}", detail),
            }),
            AppError::DatabaseError(detail) | AppError::InternalError(detail) => {
                log::error!("request failed: {}", detail);
                serde_json::json!({ "error": INTERNAL_ERROR_MESSAGE })
            }
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// Result alias used across services, repositories and handlers
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait converting foreign errors into `AppError::InternalError`
pub trait ErrorContext<T> {
    /// Converts the error, prefixing it with `msg`.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
