//! # Registration rule table
//!
//! Declarative description of every constraint a registration must satisfy.
//! The table is plain data: the server evaluates it through
//! [`interpreter`](super::interpreter) and the browser form downloads the very
//! same table from `GET /api/registro/reglas`, so the two sides cannot drift.
//!
//! ## Rule kinds
//!
//! | Kind | Fails when |
//! |------|-----------|
//! | `required` | trimmed value is empty |
//! | `length` | trimmed length (in characters) is outside `[min, max]` |
//! | `pattern` | non-empty value does not fully match `regex` |
//! | `email` | non-empty value does not match `regex` or is not a valid address |
//! | `composition` | a required character class (lower, upper, digit) is absent |
//! | `numericRange` | value is not an integer or lies outside `[min, max]` |
//! | `matches` | value differs from the sibling field `other` |
//! | `oneOf` | value is not a member of `values` |
//!
//! Patterns stay inside the subset shared by JavaScript and the `regex`
//! crate: no lookarounds, and `[0-9]` instead of the Unicode-aware `\d`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Letters (including Spanish accented letters) and whitespace only.
pub const NAME_PATTERN: &str = r"^[a-zA-ZáéíóúÁÉÍÓÚüÜñÑ\s]+$";

/// Exactly ten ASCII digits.
pub const PHONE_PATTERN: &str = r"^[0-9]{10}$";

/// Something, `@`, something, a dot, something; no whitespace.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(NAME_PATTERN).expect("NAME_PATTERN is a valid regex pattern"));

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONE_PATTERN).expect("PHONE_PATTERN is a valid regex pattern"));

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex pattern"));

/// Precompiled form of one of the table's patterns.
///
/// `None` for a pattern this module does not define.
pub fn compiled_pattern(pattern: &str) -> Option<&'static Regex> {
    match pattern {
        NAME_PATTERN => Some(&*NAME_REGEX),
        PHONE_PATTERN => Some(&*PHONE_REGEX),
        EMAIL_PATTERN => Some(&*EMAIL_REGEX),
        _ => None,
    }
}

/// Accepted wire values for `genero`.
pub const GENDER_VALUES: &[&str] = &["Masculino", "Femenino", "Otro"];

/// A single constraint on one field.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Constraint {
    Required {
        message: &'static str,
    },
    Length {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
        message: &'static str,
    },
    Pattern {
        regex: &'static str,
        message: &'static str,
    },
    Email {
        regex: &'static str,
        message: &'static str,
    },
    Composition {
        lowercase: bool,
        uppercase: bool,
        digit: bool,
        message: &'static str,
    },
    NumericRange {
        min: i64,
        max: i64,
        message: &'static str,
    },
    Matches {
        other: &'static str,
        message: &'static str,
    },
    OneOf {
        values: &'static [&'static str],
        message: &'static str,
    },
}

impl Constraint {
    /// Human-readable message reported when this constraint fails.
    pub fn message(&self) -> &'static str {
        match self {
            Constraint::Required { message }
            | Constraint::Length { message, .. }
            | Constraint::Pattern { message, .. }
            | Constraint::Email { message, .. }
            | Constraint::Composition { message, .. }
            | Constraint::NumericRange { message, .. }
            | Constraint::Matches { message, .. }
            | Constraint::OneOf { message, .. } => message,
        }
    }

    /// Stable machine code, used as the `validator::ValidationError` code.
    pub fn code(&self) -> &'static str {
        match self {
            Constraint::Required { .. } => "required",
            Constraint::Length { .. } => "length",
            Constraint::Pattern { .. } => "pattern",
            Constraint::Email { .. } => "email",
            Constraint::Composition { .. } => "composition",
            Constraint::NumericRange { .. } => "range",
            Constraint::Matches { .. } => "must_match",
            Constraint::OneOf { .. } => "one_of",
        }
    }
}

/// Every constraint attached to one field.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldRules {
    /// Wire identifier of the field (JSON key and form element id).
    pub field: &'static str,
    /// Display label for the form.
    pub label: &'static str,
    /// Optional fields skip all constraints when left empty.
    pub optional: bool,
    /// Evaluated in order; the first failure is the field's error.
    pub constraints: &'static [Constraint],
}

/// The registration rule set, in the order errors are reported.
pub static REGISTRATION_RULES: &[FieldRules] = &[
    FieldRules {
        field: "nombre",
        label: "Nombre completo",
        optional: false,
        constraints: &[
            Constraint::Required {
                message: "El nombre es obligatorio",
            },
            Constraint::Length {
                min: Some(3),
                max: Some(50),
                message: "El nombre debe tener entre 3 y 50 caracteres",
            },
            Constraint::Pattern {
                regex: NAME_PATTERN,
                message: "El nombre solo puede contener letras y espacios",
            },
        ],
    },
    FieldRules {
        field: "email",
        label: "Correo electrónico",
        optional: false,
        constraints: &[
            Constraint::Required {
                message: "El correo electrónico es obligatorio",
            },
            Constraint::Email {
                regex: EMAIL_PATTERN,
                message: "Debe ser un email válido",
            },
        ],
    },
    FieldRules {
        field: "contrasena",
        label: "Contraseña",
        optional: false,
        constraints: &[
            Constraint::Required {
                message: "La contraseña es obligatoria",
            },
            Constraint::Length {
                min: Some(8),
                max: None,
                message: "La contraseña debe tener al menos 8 caracteres",
            },
            Constraint::Composition {
                lowercase: true,
                uppercase: true,
                digit: true,
                message: "La contraseña debe contener al menos una minúscula, una mayúscula y un número",
            },
        ],
    },
    FieldRules {
        field: "confirmarContrasena",
        label: "Confirmar contraseña",
        optional: false,
        constraints: &[
            Constraint::Required {
                message: "Debe confirmar la contraseña",
            },
            Constraint::Matches {
                other: "contrasena",
                message: "Las contraseñas no coinciden",
            },
        ],
    },
    FieldRules {
        field: "edad",
        label: "Edad",
        optional: false,
        constraints: &[
            Constraint::Required {
                message: "La edad es obligatoria",
            },
            Constraint::NumericRange {
                min: 18,
                max: 99,
                message: "La edad debe ser un número entre 18 y 99",
            },
        ],
    },
    FieldRules {
        field: "telefono",
        label: "Teléfono",
        optional: false,
        constraints: &[
            Constraint::Required {
                message: "El teléfono es obligatorio",
            },
            Constraint::Pattern {
                regex: PHONE_PATTERN,
                message: "El teléfono debe tener exactamente 10 dígitos",
            },
        ],
    },
    FieldRules {
        field: "biografia",
        label: "Biografía",
        optional: true,
        constraints: &[Constraint::Length {
            min: None,
            max: Some(300),
            message: "La biografía no puede exceder 300 caracteres",
        }],
    },
    FieldRules {
        field: "genero",
        label: "Género",
        optional: false,
        constraints: &[
            Constraint::Required {
                message: "Debe seleccionar un género",
            },
            Constraint::OneOf {
                values: GENDER_VALUES,
                message: "Debe seleccionar un género válido",
            },
        ],
    },
    FieldRules {
        field: "pais",
        label: "País",
        optional: false,
        constraints: &[
            Constraint::Required {
                message: "Debe seleccionar un país",
            },
            Constraint::Length {
                min: Some(2),
                max: Some(50),
                message: "El país debe tener entre 2 y 50 caracteres",
            },
        ],
    },
];
