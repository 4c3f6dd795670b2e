//! # Registration response DTO
//!
//! Body of a successful `POST /api/registro` (HTTP 201).
//!
//! ```json
//! {
//!   "mensaje": "Usuario registrado exitosamente",
//!   "usuario": {
//!     "id": "65f1c0e2a4b3c2d1e0f9a8b7",
//!     "nombre": "Lucía Gómez",
//!     "email": "lucia@example.com",
//!     "edad": 27,
//!     "genero": "Femenino",
//!     "pais": "Colombia",
//!     "fechaRegistro": "2024-03-13T10:15:30.123Z"
//!   }
//! }
//! ```
//!
//! The password hash, phone number and biography are never part of the public
//! view.

use serde::Serialize;

use crate::domain::entities::users::{Gender, UserRecord};

pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Usuario registrado exitosamente";

/// Public projection of a stored user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: String,
    pub nombre: String,
    pub email: String,
    pub edad: i32,
    pub genero: Gender,
    pub pais: String,
    /// RFC 3339, UTC
    pub fecha_registro: String,
}

impl From<&UserRecord> for PublicUser {
    fn from(record: &UserRecord) -> Self {
        let registered_at = record.registered_at();

        Self {
            id: record.id_string().unwrap_or_default(),
            nombre: record.name.clone(),
            email: record.email.clone(),
            edad: record.age,
            genero: record.gender,
            pais: record.country.clone(),
            fecha_registro: registered_at
                .try_to_rfc3339_string()
                .unwrap_or_else(|_| registered_at.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationResponse {
    pub mensaje: String,
    pub usuario: PublicUser,
}

impl RegistrationResponse {
    pub fn new(record: &UserRecord) -> Self {
        Self {
            mensaje: REGISTRATION_SUCCESS_MESSAGE.to_string(),
            usuario: PublicUser::from(record),
        }
    }
}
