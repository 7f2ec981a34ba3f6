//! Cross-cutting helpers.

pub mod runtime;
pub mod validation;
