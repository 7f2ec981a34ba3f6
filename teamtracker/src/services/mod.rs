//! External service integrations.

pub mod api;
