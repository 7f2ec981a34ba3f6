use thiserror::Error;

/// Failure taxonomy for backend API calls.
///
/// Every operation on [`super::client::ApiClient`] resolves to one of these.
/// Credential problems (`Auth`) are kept apart from resource-call rejections
/// (`Request`) so the UI can route them to the right screen.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login or signup was rejected by the backend.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// A resource call came back with a non-2xx status after the retry
    /// protocol ran its course.
    #[error("request failed ({status}): {message}")]
    Request { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("malformed response from backend: {0}")]
    Decode(String),

    /// Connection-level failure (DNS, refused connection, dropped socket).
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// Status code for `Request` errors, `None` for every other variant.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
