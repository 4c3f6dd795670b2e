//! # Registration request DTO
//!
//! Wire contract of `POST /api/registro` and its parsed, validated form.
//!
//! ## Fields
//!
//! | JSON key | Rust field | Notes |
//! |----------|-----------|-------|
//! | `nombre` | `name` | 3-50 letters/spaces |
//! | `email` | `email` | lowercased before lookup and storage |
//! | `contrasena` | `password` | ≥ 8 chars, lower + upper + digit |
//! | `confirmarContrasena` | `password_confirmation` | must equal `contrasena`, never stored |
//! | `edad` | `age` | number or numeric string, 18-99 |
//! | `telefono` | `phone` | exactly 10 digits |
//! | `biografia` | `bio` | optional, ≤ 300 chars |
//! | `genero` | `gender` | `Masculino` / `Femenino` / `Otro` |
//! | `pais` | `country` | 2-50 chars |
//!
//! Every key may be absent: absence is judged by the rule set like an empty
//! value, so a missing `pais` is reported as a field error instead of a JSON
//! decoding failure.
//!
//! ## JSON example
//!
//! ```json
//! {
//!   "nombre": "Lucía Gómez",
//!   "email": "Lucia@Example.com",
//!   "contrasena": "Abcdefg1",
//!   "confirmarContrasena": "Abcdefg1",
//!   "edad": 27,
//!   "telefono": "5512345678",
//!   "biografia": "",
//!   "genero": "Femenino",
//!   "pais": "Colombia"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::Gender;
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::{deserialize_string_or_number, normalize_email, trim_string};
use crate::validation::{self, FieldSource, REGISTRATION_RULES};

/// Candidate registration as received from the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationRequest {
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(rename = "contrasena", default)]
    pub password: Option<String>,

    #[serde(rename = "confirmarContrasena", default)]
    pub password_confirmation: Option<String>,

    #[serde(rename = "edad", default, deserialize_with = "deserialize_string_or_number")]
    pub age: Option<String>,

    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,

    #[serde(rename = "biografia", default)]
    pub bio: Option<String>,

    #[serde(rename = "genero", default)]
    pub gender: Option<String>,

    #[serde(rename = "pais", default)]
    pub country: Option<String>,
}

impl FieldSource for RegistrationRequest {
    fn field_value(&self, field: &str) -> Option<&str> {
        let value = match field {
            "nombre" => &self.name,
            "email" => &self.email,
            "contrasena" => &self.password,
            "confirmarContrasena" => &self.password_confirmation,
            "edad" => &self.age,
            "telefono" => &self.phone,
            "biografia" => &self.bio,
            "genero" => &self.gender,
            "pais" => &self.country,
            _ => return None,
        };
        value.as_deref()
    }
}

impl RegistrationRequest {
    /// Runs the full rule set and parses the request.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidFields` - every failing field, in rule-table order
    pub fn validate(self) -> AppResult<ValidatedRegistration> {
        validation::validate(REGISTRATION_RULES, &self).map_err(AppError::InvalidFields)?;
        ValidatedRegistration::try_from(self)
    }
}

/// A registration that passed every rule, with values in canonical form.
///
/// There is no confirmation field: once validated it has no further use.
#[derive(Debug, Clone)]
pub struct ValidatedRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: i32,
    pub phone: String,
    pub bio: String,
    pub gender: Gender,
    pub country: String,
}

impl TryFrom<RegistrationRequest> for ValidatedRegistration {
    type Error = AppError;

    /// Parses the request values; only meaningful after rule evaluation.
    ///
    /// A failure here means the rule table and this parser disagree, which is
    /// reported as an internal error.
    fn try_from(request: RegistrationRequest) -> Result<Self, Self::Error> {
        let text = |value: Option<String>| value.as_deref().map(trim_string).unwrap_or_default();

        let age_text = text(request.age);
        let age = age_text
            .parse::<i32>()
            .map_err(|e| AppError::InternalError(format!("unparseable age {:?}: {}", age_text, e)))?;

        let gender_text = text(request.gender);
        let gender = Gender::from_wire(&gender_text)
            .ok_or_else(|| AppError::InternalError(format!("unknown gender {:?}", gender_text)))?;

        Ok(Self {
            name: text(request.name),
            email: request.email.as_deref().map(normalize_email).unwrap_or_default(),
            password: request.password.unwrap_or_default(),
            age,
            phone: text(request.phone),
            bio: text(request.bio),
            gender,
            country: text(request.country),
        })
    }
}
