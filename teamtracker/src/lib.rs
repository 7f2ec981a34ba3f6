//! TeamTracker desktop client.
//!
//! A native egui client for the TeamTracker backend: build and manage
//! Pokémon teams, mark favorites, and browse friends' teams. Network calls
//! run on a shared tokio runtime and report back to the UI thread over an
//! event channel.

pub mod app;
pub mod core;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::App;
pub use crate::core::{AppError, Result};
