use serde::{Deserialize, Serialize};

/// Login request (`POST /auth/token/`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Signup request (`POST /auth/signup/`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

/// Credential pair returned by a successful login.
///
/// Both tokens are opaque strings; the client never inspects them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Refresh request (`POST /auth/token/refresh/`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Refresh response. The backend reissues only the access token; the
/// refresh token is reused, not rotated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshResponse {
    pub access: String,
}

/// Error body shape the backend uses for rejections.
///
/// Django REST puts the human-readable message under `detail`; a few
/// handlers use `error` instead, so both are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Backend-supplied message, whichever field carried it.
    pub fn message(&self) -> Option<&str> {
        self.detail.as_deref().or(self.error.as_deref())
    }
}
