use async_channel::Sender;
use parking_lot::RwLock;
use shared::Friend;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use crate::utils::runtime::TOKIO_RT;

pub fn fetch_friends(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>) {
    let api_client = {
        let mut app_state = state.write();
        app_state.friends.loading = true;
        app_state.friends.error = None;
        app_state.api_client.clone()
    };

    let tx = event_tx.clone();
    TOKIO_RT.spawn(async move {
        let result = api_client.list_friends().await;
        let _ = tx.send(AppEvent::FriendsLoaded(result)).await;
    });
}

pub fn handle_add_friend(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>) {
    let (api_client, username) = {
        let mut app_state = state.write();
        let username = app_state.friends.add_input.trim().to_string();
        if username.is_empty() {
            app_state.friends.error = Some("Enter a username to add".to_string());
            return;
        }
        app_state.friends.error = None;
        (app_state.api_client.clone(), username)
    };

    let tx = event_tx.clone();
    TOKIO_RT.spawn(async move {
        let result = api_client.add_friend(username).await;
        let _ = tx.send(AppEvent::FriendAdded(result)).await;
    });
}

/// Remove the currently selected friend.
pub fn handle_remove_friend(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>) {
    let (api_client, username) = {
        let mut app_state = state.write();
        let Some(selected) = app_state.friends.selected.clone() else {
            return;
        };
        app_state.friends.confirm_remove = false;
        app_state.friends.removing = true;
        app_state.friends.error = None;
        (app_state.api_client.clone(), selected.username)
    };

    let tx = event_tx.clone();
    TOKIO_RT.spawn(async move {
        let result = api_client.remove_friend(username.clone()).await;
        let _ = tx.send(AppEvent::FriendRemoved { username, result }).await;
    });
}

/// Select a friend and load their teams, or deselect on a second click.
pub fn handle_select_friend(
    state: &Arc<RwLock<AppState>>,
    event_tx: &Sender<AppEvent>,
    friend: &Friend,
) {
    let api_client = {
        let mut app_state = state.write();
        app_state.friends.confirm_remove = false;
        if app_state.friends.selected.as_ref().map(|f| f.id) == Some(friend.id) {
            app_state.friends.selected = None;
            app_state.friends.friend_teams.clear();
            return;
        }
        app_state.friends.selected = Some(friend.clone());
        app_state.friends.friend_teams.clear();
        app_state.friends.friend_teams_loading = true;
        app_state.api_client.clone()
    };

    let friend_id = friend.id;
    let tx = event_tx.clone();
    TOKIO_RT.spawn(async move {
        let result = api_client.friend_teams(friend_id).await;
        let _ = tx
            .send(AppEvent::FriendTeamsLoaded { friend_id, result })
            .await;
    });
}
