//! HTTP layer for the TeamTracker backend.
//!
//! `client` owns the dispatcher and the refresh-and-retry protocol; the
//! sibling modules add the typed resource calls on top of it.

pub mod auth;
pub mod client;
pub mod error;
pub mod friends;
pub mod session;
pub mod teams;

pub use client::ApiClient;
pub use error::ApiError;
pub use session::Session;
