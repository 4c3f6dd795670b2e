//! # Domain layer
//!
//! ```text
//! Domain Layer (this module)
//! ├── entities  - persisted records (UserRecord)
//! └── dto       - request / response contracts
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db)
//! ```
//!
//! Flow of a registration through the types:
//!
//! ```text
//! RegistrationRequest ──validate()──▶ ValidatedRegistration
//!        ──UserRecord::from_registration(hash)──▶ UserRecord
//!        ──store.insert()──▶ UserRecord (with id) ──▶ RegistrationResponse
//! ```

pub mod dto;
pub mod entities;
