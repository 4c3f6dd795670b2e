//! Application services.

pub mod users;
