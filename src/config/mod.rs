//! Environment-driven configuration.

pub mod data_config;

pub use data_config::*;
