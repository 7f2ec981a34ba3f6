//! Core types shared across the app.

pub mod error;
pub mod service;

pub use error::{AppError, Result};
