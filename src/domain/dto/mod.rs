//! # Data Transfer Objects
//!
//! Data contracts at the HTTP boundary.
//!
//! | Direction | Module | Role |
//! |-----------|--------|------|
//! | request | [`users::request`] | decoded bodies, rule-set validation |
//! | response | [`users::response`] | public views returned to the client |

pub mod users;
