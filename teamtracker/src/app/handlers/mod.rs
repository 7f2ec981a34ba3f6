//! User-action handlers. Each takes the shared state and the event channel,
//! does synchronous validation, and spawns the network work on the runtime.

pub mod auth;
pub mod friends;
pub mod navigation;
pub mod teams;
