//! Error types shared by every layer
//!
//! See [`errors`] for the `AppError` taxonomy and its HTTP mapping.

pub mod errors;

pub use errors::*;
