//! # Domain entities
//!
//! Structures mapped one-to-one onto MongoDB documents.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← this module (persisted records)
//! └── dto/          ← request / response contracts
//! ```
//!
//! Entities never leave the server as-is; handlers answer with the public
//! views in [`dto`](super::dto), which drop secrets such as the password hash.

pub mod users;
