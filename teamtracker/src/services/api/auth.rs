use shared::{LoginRequest, SignupRequest, TokenPair};

use super::client::ApiClient;
use super::error::ApiError;

impl ApiClient {
    /// Log in and store the issued credential pair in the session.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        tracing::info!(username, "attempting login");

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.post_public("/auth/token/", &request).await?;
        let status = response.status();

        if !status.is_success() {
            let message = rejection_message(response, "Invalid username or password").await;
            tracing::warn!(username, status = %status, "login failed");
            return Err(ApiError::Auth(message));
        }

        let tokens: TokenPair = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        self.session().set_pair(&tokens.access, &tokens.refresh);
        tracing::info!(username, "login successful");
        Ok(())
    }

    /// Register a new account, then log in with the same credentials.
    /// There is no registered-but-logged-out state.
    pub async fn signup(&self, username: &str, password: &str) -> Result<(), ApiError> {
        tracing::info!(username, "attempting signup");

        let request = SignupRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.post_public("/auth/signup/", &request).await?;
        let status = response.status();

        if !status.is_success() {
            let message = rejection_message(response, "Signup failed").await;
            tracing::warn!(username, status = %status, "signup failed");
            return Err(ApiError::Auth(message));
        }

        self.login(username, password).await
    }
}

async fn rejection_message(response: reqwest::Response, fallback: &str) -> String {
    response
        .json::<shared::ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message().map(str::to_string))
        .unwrap_or_else(|| fallback.to_string())
}
