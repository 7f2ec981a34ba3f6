use reqwest::Method;
use shared::{Friend, FriendActionRequest, FriendsListResponse, Team};

use super::client::ApiClient;
use super::error::ApiError;

impl ApiClient {
    /// The logged-in user's friends list.
    pub async fn list_friends(&self) -> Result<Vec<Friend>, ApiError> {
        let response: FriendsListResponse = self.get_json("/friends/").await?;
        Ok(response.friends)
    }

    /// Add a friend by exact username.
    pub async fn add_friend(&self, username: &str) -> Result<(), ApiError> {
        tracing::info!(username, "adding friend");
        let body = action_body(username)?;
        self.send_expect_empty(Method::POST, "/friends/add/", Some(body))
            .await
    }

    /// Remove a friend by username. The backend takes the username in the
    /// request body, not the path.
    pub async fn remove_friend(&self, username: &str) -> Result<(), ApiError> {
        tracing::info!(username, "removing friend");
        let body = action_body(username)?;
        self.send_expect_empty(Method::DELETE, "/friends/remove/", Some(body))
            .await
    }

    /// A friend's teams, read-only.
    pub async fn friend_teams(&self, friend_id: i64) -> Result<Vec<Team>, ApiError> {
        self.get_json(&format!("/friends/{}/teams/", friend_id))
            .await
    }
}

fn action_body(username: &str) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(FriendActionRequest {
        username: username.to_string(),
    })
    .map_err(|e| ApiError::Decode(e.to_string()))
}
