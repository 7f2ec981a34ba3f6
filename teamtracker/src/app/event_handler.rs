use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::handlers::{friends, teams};
use crate::app::state::{AppState, Screen};

/// Applies completed-task results to the app state.
///
/// Implemented on [`crate::app::App`]; split into a trait so the match arms
/// live apart from the frame loop.
pub trait AppEventHandler {
    fn state(&self) -> &Arc<RwLock<AppState>>;
    fn event_tx(&self) -> &Sender<AppEvent>;

    fn handle_event_impl(&mut self, event: AppEvent) {
        let state = self.state().clone();
        let event_tx = self.event_tx().clone();

        match event {
            AppEvent::LoginResult { username, result } | AppEvent::SignupResult { username, result } => {
                match result {
                    Ok(()) => {
                        {
                            let mut app_state = state.write();
                            app_state.current_user = Some(username);
                            app_state.auth = Default::default();
                            app_state.current_screen = Screen::Home;
                        }
                        teams::fetch_teams(&state, &event_tx);
                    }
                    Err(e) => state.write().auth.set_error(e.to_string()),
                }
            }

            AppEvent::TeamsLoaded(result) => {
                let mut app_state = state.write();
                app_state.home.loading = false;
                match result {
                    Ok(list) => app_state.home.teams = list,
                    // A 401 here means the refresh was rejected and the
                    // session is already cleared; send the user back to log in.
                    Err(e) if e.status() == Some(401) => {
                        app_state.auth = Default::default();
                        app_state
                            .auth
                            .set_error("Session expired. Please log in again.".to_string());
                        app_state.current_screen = Screen::Auth;
                    }
                    Err(e) => app_state.home.error = Some(e.to_string()),
                }
            }

            AppEvent::TeamSaved(result) => match result {
                Ok(team) => {
                    {
                        let mut app_state = state.write();
                        app_state.editor.saving = false;
                        app_state.home.notice = Some(format!("Saved \"{}\"", team.name));
                        app_state.current_screen = Screen::Home;
                    }
                    teams::fetch_teams(&state, &event_tx);
                }
                Err(e) => {
                    let mut app_state = state.write();
                    app_state.editor.saving = false;
                    app_state.editor.error = Some(e.to_string());
                }
            },

            AppEvent::TeamDeleted { id, result } => match result {
                Ok(()) => {
                    state.write().home.deleting_id = None;
                    tracing::info!(id, "team deleted");
                    teams::fetch_teams(&state, &event_tx);
                }
                Err(e) => {
                    // The list stays as-is; the team may still exist.
                    let mut app_state = state.write();
                    app_state.home.deleting_id = None;
                    app_state.home.error = Some(e.to_string());
                }
            },

            AppEvent::FavoriteToggled { id, result } => match result {
                Ok(updated) => {
                    let mut app_state = state.write();
                    if let Some(team) = app_state
                        .home
                        .teams
                        .iter_mut()
                        .find(|team| team.id == Some(id))
                    {
                        *team = updated;
                    }
                }
                Err(e) => {
                    // Cached flag stays untouched so the star keeps showing
                    // the last confirmed backend state.
                    tracing::warn!(id, error = %e, "favorite toggle failed");
                    state.write().home.notice =
                        Some("Failed to update favorite status".to_string());
                }
            },

            AppEvent::FriendsLoaded(result) => {
                let mut app_state = state.write();
                app_state.friends.loading = false;
                match result {
                    Ok(list) => app_state.friends.friends = list,
                    Err(e) => app_state.friends.error = Some(e.to_string()),
                }
            }

            AppEvent::FriendAdded(result) => match result {
                Ok(()) => {
                    state.write().friends.add_input.clear();
                    friends::fetch_friends(&state, &event_tx);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "add friend failed");
                    state.write().friends.error = Some(
                        "Failed to add friend. Make sure the username is entered correctly."
                            .to_string(),
                    );
                }
            },

            AppEvent::FriendRemoved { username, result } => match result {
                Ok(()) => {
                    {
                        let mut app_state = state.write();
                        app_state.friends.removing = false;
                        if app_state.friends.selected.as_ref().map(|f| f.username.as_str())
                            == Some(username.as_str())
                        {
                            app_state.friends.selected = None;
                            app_state.friends.friend_teams.clear();
                        }
                    }
                    friends::fetch_friends(&state, &event_tx);
                }
                Err(e) => {
                    let mut app_state = state.write();
                    app_state.friends.removing = false;
                    app_state.friends.error = Some(e.to_string());
                }
            },

            AppEvent::FriendTeamsLoaded { friend_id, result } => {
                let mut app_state = state.write();
                // Ignore results for a friend that is no longer selected.
                if app_state.friends.selected.as_ref().map(|f| f.id) != Some(friend_id) {
                    return;
                }
                app_state.friends.friend_teams_loading = false;
                match result {
                    Ok(list) => app_state.friends.friend_teams = list,
                    Err(e) => app_state.friends.error = Some(e.to_string()),
                }
            }
        }
    }
}
