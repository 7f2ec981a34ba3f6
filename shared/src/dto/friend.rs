use serde::{Deserialize, Serialize};

/// A friend entry. The backend exposes a flat list per user; there is no
/// richer graph on the client side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Friend {
    pub id: i64,
    pub username: String,
}

/// Response envelope for `GET /friends/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FriendsListResponse {
    pub friends: Vec<Friend>,
}

/// Body for `POST /friends/add/` and `DELETE /friends/remove/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FriendActionRequest {
    pub username: String,
}
