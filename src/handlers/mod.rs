//! HTTP handlers.

pub mod assets;
pub mod registration;
