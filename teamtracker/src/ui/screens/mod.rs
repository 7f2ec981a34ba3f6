//! Screen render functions, one module per screen.

pub mod auth;
pub mod editor;
pub mod friends;
pub mod home;
pub mod start;
