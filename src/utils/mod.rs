//! Shared helpers used across the API layer.

pub mod validate;
