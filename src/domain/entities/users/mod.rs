//! Users entity module
//!
//! ```rust,ignore
//! use crate::domain::entities::users::UserRecord;
//!
//! let record = UserRecord::from_registration(validated, password_hash);
//! ```

pub mod user;

pub use user::{Gender, UserRecord};
