use async_channel::Sender;
use parking_lot::RwLock;
use shared::Team;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, EditorState, Screen};
use crate::core::service::ApiService;
use crate::utils::runtime::TOKIO_RT;

/// Reload the teams list from the backend.
pub fn fetch_teams(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>) {
    let api_client = {
        let mut app_state = state.write();
        app_state.home.loading = true;
        app_state.home.error = None;
        app_state.api_client.clone()
    };

    let tx = event_tx.clone();
    TOKIO_RT.spawn(async move {
        let result = api_client.list_teams().await;
        let _ = tx.send(AppEvent::TeamsLoaded(result)).await;
    });
}

/// Validate the editor form and save the team (create or update).
pub fn handle_save_team_click(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>) {
    let (api_client, team) = {
        let mut app_state = state.write();
        let team = match app_state.editor.build_team() {
            Ok(team) => team,
            Err(e) => {
                app_state.editor.error = Some(e.to_string());
                return;
            }
        };
        app_state.editor.saving = true;
        app_state.editor.error = None;
        (app_state.api_client.clone(), team)
    };

    let tx = event_tx.clone();
    TOKIO_RT.spawn(async move {
        let result = match team.id {
            Some(id) => api_client.update_team(id, team).await,
            None => api_client.create_team(team).await,
        };
        let _ = tx.send(AppEvent::TeamSaved(result)).await;
    });
}

pub fn handle_delete_team(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>, id: i64) {
    let api_client = {
        let mut app_state = state.write();
        app_state.home.deleting_id = Some(id);
        app_state.api_client.clone()
    };

    let tx = event_tx.clone();
    TOKIO_RT.spawn(async move {
        let result = api_client.delete_team(id).await;
        let _ = tx.send(AppEvent::TeamDeleted { id, result }).await;
    });
}

/// Flip a team's favorite flag. The cached list is only updated once the
/// backend confirms; a failure leaves it untouched.
pub fn handle_toggle_favorite(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>, id: i64) {
    let (api_client, favorite) = {
        let app_state = state.read();
        let Some(team) = app_state.home.teams.iter().find(|team| team.id == Some(id)) else {
            return;
        };
        (app_state.api_client.clone(), !team.is_favorite)
    };

    let tx = event_tx.clone();
    TOKIO_RT.spawn(async move {
        let result = api_client.set_favorite(id, favorite).await;
        let _ = tx.send(AppEvent::FavoriteToggled { id, result }).await;
    });
}

pub fn open_editor_for_new(state: &Arc<RwLock<AppState>>) {
    let mut app_state = state.write();
    app_state.editor = EditorState::new_team();
    app_state.current_screen = Screen::Editor;
}

pub fn open_editor_for(state: &Arc<RwLock<AppState>>, team: &Team) {
    let mut app_state = state.write();
    app_state.editor = EditorState::from_team(team);
    app_state.current_screen = Screen::Editor;
}
