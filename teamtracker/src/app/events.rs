use shared::{Friend, Team};

use crate::services::api::ApiError;

/// Results flowing back from spawned network tasks into the UI thread.
///
/// Handlers spawn requests on the shared runtime and push one of these onto
/// the app event channel; `on_tick` drains the channel each frame.
#[derive(Debug)]
pub enum AppEvent {
    LoginResult {
        username: String,
        result: Result<(), ApiError>,
    },
    SignupResult {
        username: String,
        result: Result<(), ApiError>,
    },

    TeamsLoaded(Result<Vec<Team>, ApiError>),
    TeamSaved(Result<Team, ApiError>),
    TeamDeleted {
        id: i64,
        result: Result<(), ApiError>,
    },
    FavoriteToggled {
        id: i64,
        result: Result<Team, ApiError>,
    },

    FriendsLoaded(Result<Vec<Friend>, ApiError>),
    FriendAdded(Result<(), ApiError>),
    FriendRemoved {
        username: String,
        result: Result<(), ApiError>,
    },
    FriendTeamsLoaded {
        friend_id: i64,
        result: Result<Vec<Team>, ApiError>,
    },
}
