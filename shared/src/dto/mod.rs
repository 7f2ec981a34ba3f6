//! Data Transfer Objects for the TeamTracker backend API.

pub mod auth;
pub mod friend;
pub mod team;

pub use auth::*;
pub use friend::*;
pub use team::*;
