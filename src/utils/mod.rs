//! Common utility functions
//!
//! # Modules
//!
//! - [`string_utils`] - trimming, email normalisation and lenient deserializers
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::normalize_email;
//!
//! let email = normalize_email("  Ana@Example.com ");
//! ```

pub mod string_utils;
