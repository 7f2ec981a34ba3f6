use reqwest::Method;
use shared::{FavoriteUpdate, Team};

use super::client::ApiClient;
use super::error::ApiError;

impl ApiClient {
    /// All teams owned by the logged-in user.
    pub async fn list_teams(&self) -> Result<Vec<Team>, ApiError> {
        self.get_json("/teams/").await
    }

    /// A single team by id.
    pub async fn get_team(&self, id: i64) -> Result<Team, ApiError> {
        self.get_json(&format!("/teams/{}/", id)).await
    }

    /// Create a team. The backend assigns the id and echoes the stored team.
    pub async fn create_team(&self, team: &Team) -> Result<Team, ApiError> {
        tracing::info!(name = %team.name, "creating team");
        self.send_json(Method::POST, "/teams/", team).await
    }

    /// Full replace of an existing team.
    pub async fn update_team(&self, id: i64, team: &Team) -> Result<Team, ApiError> {
        tracing::info!(id, name = %team.name, "updating team");
        self.send_json(Method::PUT, &format!("/teams/{}/", id), team)
            .await
    }

    /// Delete a team by id.
    pub async fn delete_team(&self, id: i64) -> Result<(), ApiError> {
        tracing::info!(id, "deleting team");
        self.send_expect_empty(Method::DELETE, &format!("/teams/{}/", id), None)
            .await
    }

    /// Flip only the favorite flag, leaving the rest of the team untouched.
    pub async fn set_favorite(&self, id: i64, favorite: bool) -> Result<Team, ApiError> {
        let update = FavoriteUpdate {
            is_favorite: favorite,
        };
        self.send_json(Method::PATCH, &format!("/teams/{}/", id), &update)
            .await
    }
}
