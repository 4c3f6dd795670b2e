//! Registered user entity
//!
//! The document stored in the `usuarios` collection. Built only through
//! [`UserRecord::from_registration`], the explicit to-storage projection; the
//! password confirmation never reaches this type.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::domain::dto::users::request::ValidatedRegistration;

/// Self-declared gender, stored with its Spanish wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "Masculino")]
    Male,
    #[serde(rename = "Femenino")]
    Female,
    #[serde(rename = "Otro")]
    Other,
}

impl Gender {
    /// Parses a wire value (`Masculino`, `Femenino`, `Otro`).
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Masculino" => Some(Gender::Male),
            "Femenino" => Some(Gender::Female),
            "Otro" => Some(Gender::Other),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Gender::Male => "Masculino",
            Gender::Female => "Femenino",
            Gender::Other => "Otro",
        }
    }
}

/// User entity
///
/// `email` is stored lowercased; `email` and `telefono` are unique across the
/// collection. `fechaRegistro` is stamped once at creation and has no setter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Normalised email (unique)
    pub email: String,
    /// bcrypt hash of the submitted password
    #[serde(rename = "contrasenaHash")]
    pub password_hash: String,
    #[serde(rename = "edad")]
    pub age: i32,
    /// Ten-digit phone (unique)
    #[serde(rename = "telefono")]
    pub phone: String,
    /// Empty when the user left it blank
    #[serde(rename = "biografia", default)]
    pub bio: String,
    #[serde(rename = "genero")]
    pub gender: Gender,
    #[serde(rename = "pais")]
    pub country: String,
    #[serde(rename = "fechaRegistro")]
    registered_at: DateTime,
}

impl UserRecord {
    /// To-storage projection of a validated registration.
    ///
    /// Takes the already-hashed password and stamps `fechaRegistro` with the
    /// current time. The record has no id until the store assigns one.
    pub fn from_registration(registration: ValidatedRegistration, password_hash: String) -> Self {
        let ValidatedRegistration {
            name,
            email,
            age,
            phone,
            bio,
            gender,
            country,
            ..
        } = registration;

        Self {
            id: None,
            name,
            email,
            password_hash,
            age,
            phone,
            bio,
            gender,
            country,
            registered_at: DateTime::now(),
        }
    }

    /// Creation timestamp.
    pub fn registered_at(&self) -> DateTime {
        self.registered_at
    }

    /// ID as a hex string
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
