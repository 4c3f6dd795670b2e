//! Data access layer.

pub mod users;
