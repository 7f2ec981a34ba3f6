use async_trait::async_trait;
use shared::{Friend, Team};
use std::sync::Arc;

use crate::services::api::{ApiClient, ApiError, Session};

/// Backend operations behind a trait. The app state holds an
/// `Arc<dyn ApiService>`, so tests can substitute a canned implementation
/// for the HTTP client.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// The credential store backing this service.
    fn session(&self) -> &Arc<Session>;

    async fn login(&self, username: String, password: String) -> Result<(), ApiError>;
    async fn signup(&self, username: String, password: String) -> Result<(), ApiError>;

    async fn list_teams(&self) -> Result<Vec<Team>, ApiError>;
    async fn create_team(&self, team: Team) -> Result<Team, ApiError>;
    async fn update_team(&self, id: i64, team: Team) -> Result<Team, ApiError>;
    async fn delete_team(&self, id: i64) -> Result<(), ApiError>;
    async fn set_favorite(&self, id: i64, favorite: bool) -> Result<Team, ApiError>;

    async fn list_friends(&self) -> Result<Vec<Friend>, ApiError>;
    async fn add_friend(&self, username: String) -> Result<(), ApiError>;
    async fn remove_friend(&self, username: String) -> Result<(), ApiError>;
    async fn friend_teams(&self, friend_id: i64) -> Result<Vec<Team>, ApiError>;
}

#[async_trait]
impl ApiService for ApiClient {
    fn session(&self) -> &Arc<Session> {
        ApiClient::session(self)
    }

    async fn login(&self, username: String, password: String) -> Result<(), ApiError> {
        ApiClient::login(self, &username, &password).await
    }

    async fn signup(&self, username: String, password: String) -> Result<(), ApiError> {
        ApiClient::signup(self, &username, &password).await
    }

    async fn list_teams(&self) -> Result<Vec<Team>, ApiError> {
        ApiClient::list_teams(self).await
    }

    async fn create_team(&self, team: Team) -> Result<Team, ApiError> {
        ApiClient::create_team(self, &team).await
    }

    async fn update_team(&self, id: i64, team: Team) -> Result<Team, ApiError> {
        ApiClient::update_team(self, id, &team).await
    }

    async fn delete_team(&self, id: i64) -> Result<(), ApiError> {
        ApiClient::delete_team(self, id).await
    }

    async fn set_favorite(&self, id: i64, favorite: bool) -> Result<Team, ApiError> {
        ApiClient::set_favorite(self, id, favorite).await
    }

    async fn list_friends(&self) -> Result<Vec<Friend>, ApiError> {
        ApiClient::list_friends(self).await
    }

    async fn add_friend(&self, username: String) -> Result<(), ApiError> {
        ApiClient::add_friend(self, &username).await
    }

    async fn remove_friend(&self, username: String) -> Result<(), ApiError> {
        ApiClient::remove_friend(self, &username).await
    }

    async fn friend_teams(&self, friend_id: i64) -> Result<Vec<Team>, ApiError> {
        ApiClient::friend_teams(self, friend_id).await
    }
}
