use crate::services::api::ApiError;
use thiserror::Error;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend call failed.
    #[error("API error: {0}")]
    Api(String),

    /// User input did not pass validation.
    #[error("{0}")]
    Validation(String),

    /// The app reached a state an operation cannot run from.
    #[error("State error: {0}")]
    State(String),
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        AppError::Api(err.to_string())
    }
}

/// Convenience result alias used across the app.
pub type Result<T> = std::result::Result<T, AppError>;
