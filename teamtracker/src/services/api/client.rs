use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared::{ApiErrorBody, RefreshRequest, RefreshResponse};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::error::ApiError;
use super::session::Session;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const BASE_URL_ENV: &str = "TEAMTRACKER_API_URL";

/// HTTP client for the TeamTracker backend.
///
/// All authenticated traffic goes through [`ApiClient::send_authed`], which
/// attaches the bearer token and runs the refresh-and-retry protocol: on a
/// 401 the access token is refreshed at most once and the request is
/// reissued at most once. Concurrent 401s share a single refresh via
/// `refresh_gate`.
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Arc<Session>,
    refresh_gate: Mutex<()>,
}

impl ApiClient {
    /// Client pointed at the configured backend (`TEAMTRACKER_API_URL`,
    /// falling back to the local dev server).
    pub fn new(session: Arc<Session>) -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url, session)
    }

    pub fn with_base_url(base_url: impl Into<String>, session: Arc<Session>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            refresh_gate: Mutex::new(()),
        }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body without credentials. Login and signup only.
    pub(crate) async fn post_public(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<Response, ApiError> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    async fn issue(
        &self,
        method: &Method,
        path: &str,
        body: Option<&Value>,
        access: &str,
    ) -> Result<Response, ApiError> {
        let mut request = self
            .client
            .request(method.clone(), self.url(path))
            .bearer_auth(access);
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }

    /// Authenticated dispatcher. Attaches the current access token; on a 401
    /// refreshes once and retries once. If the refresh itself is rejected the
    /// session is cleared and the original 401 response is returned.
    pub(crate) async fn send_authed(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Response, ApiError> {
        let access = self
            .session
            .access_token()
            .ok_or_else(|| ApiError::Auth("not logged in".to_string()))?;

        let response = self.issue(&method, path, body.as_ref(), &access).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        tracing::debug!(path, "access token rejected, attempting refresh");
        match self.refresh_access_token(&access).await? {
            Some(fresh) => self.issue(&method, path, body.as_ref(), &fresh).await,
            // Refresh rejected, session already cleared. Surface the 401.
            None => Ok(response),
        }
    }

    /// Single-flight token refresh. Returns the access token to retry with,
    /// or `None` when the backend rejected the refresh token.
    async fn refresh_access_token(&self, stale_access: &str) -> Result<Option<String>, ApiError> {
        let _guard = self.refresh_gate.lock().await;

        // Another caller may have refreshed while we waited on the gate.
        if let Some(current) = self.session.access_token() {
            if current != stale_access {
                return Ok(Some(current));
            }
        }

        let Some(refresh) = self.session.refresh_token() else {
            self.session.clear();
            return Ok(None);
        };

        let response = self
            .client
            .post(self.url("/auth/token/refresh/"))
            .json(&RefreshRequest { refresh })
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "refresh token rejected, clearing session");
            self.session.clear();
            return Ok(None);
        }

        let body: RefreshResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        self.session.set_access_token(&body.access);
        tracing::debug!("access token refreshed");
        Ok(Some(body.access))
    }

    /// Authenticated GET with a typed JSON response.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send_authed(Method::GET, path, None).await?;
        decode(response).await
    }

    /// Authenticated request with a JSON body and a typed JSON response.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = self.send_authed(method, path, Some(body)).await?;
        decode(response).await
    }

    /// Authenticated request where only the status matters.
    pub(crate) async fn send_expect_empty(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<(), ApiError> {
        let response = self.send_authed(method, path, body).await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(request_error(status, response).await)
        }
    }
}

/// Decode a JSON response, mapping non-2xx statuses to [`ApiError::Request`].
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Err(request_error(status, response).await)
    }
}

/// Build a `Request` error from a failed response, pulling the backend's
/// `detail`/`error` message when one is present.
pub(crate) async fn request_error(status: StatusCode, response: Response) -> ApiError {
    let message = response
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message().map(str::to_string))
        .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()));
    ApiError::Request {
        status: status.as_u16(),
        message,
    }
}
