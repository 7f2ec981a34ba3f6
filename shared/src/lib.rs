//! # Shared Data Transfer Objects Library
//!
//! This library defines the JSON contract between the desktop client and the
//! TeamTracker REST backend. All DTOs use `serde` for serialization.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Credential pair and auth request/response DTOs
//!   - **[`dto::team`]**: Teams, Pokémon slots and generation labels
//!   - **[`dto::friend`]**: Friends list DTOs
//! - **[`utils`]**: Shared utility functions (sprite URLs, display labels)
//!
//! ## Wire Format
//!
//! The backend is a Django REST service, so most field names map 1:1 from
//! snake_case. The one exception is the favorite flag, which travels as
//! `isFavorite` and is renamed on the Rust side.

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
