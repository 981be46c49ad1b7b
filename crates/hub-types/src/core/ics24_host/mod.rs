//! ICS 24: Host identifiers.

pub mod error;
pub mod identifier;
pub mod validate;
