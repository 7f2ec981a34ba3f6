use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, AuthState, Screen};
use crate::core::service::ApiService;
use crate::utils::runtime::TOKIO_RT;

pub fn handle_login_click(
    state: &Arc<RwLock<AppState>>,
    event_tx: &Sender<AppEvent>,
    username: String,
    password: String,
) {
    if username.trim().is_empty() || password.is_empty() {
        state
            .write()
            .auth
            .set_error("Username and password are required".to_string());
        return;
    }

    let api_client = state.read().api_client.clone();
    let tx = event_tx.clone();
    let task_username = username.clone();
    TOKIO_RT.spawn(async move {
        let result = api_client.login(task_username.clone(), password).await;
        let _ = tx
            .send(AppEvent::LoginResult {
                username: task_username,
                result,
            })
            .await;
    });

    state.write().auth.set_notice("Logging in...".to_string());
}

pub fn handle_signup_click(
    state: &Arc<RwLock<AppState>>,
    event_tx: &Sender<AppEvent>,
    username: String,
    password: String,
    confirm_password: String,
) {
    if username.trim().is_empty() || password.is_empty() {
        state
            .write()
            .auth
            .set_error("Username and password are required".to_string());
        return;
    }
    if password != confirm_password {
        state
            .write()
            .auth
            .set_error("Passwords do not match".to_string());
        return;
    }

    let api_client = state.read().api_client.clone();
    let tx = event_tx.clone();
    let task_username = username.clone();
    TOKIO_RT.spawn(async move {
        let result = api_client.signup(task_username.clone(), password).await;
        let _ = tx
            .send(AppEvent::SignupResult {
                username: task_username,
                result,
            })
            .await;
    });

    state.write().auth.set_notice("Creating account...".to_string());
}

pub fn handle_switch_to_login(state: &Arc<RwLock<AppState>>) {
    let mut app_state = state.write();
    app_state.auth = AuthState::login();
    app_state.current_screen = Screen::Auth;
}

pub fn handle_switch_to_signup(state: &Arc<RwLock<AppState>>) {
    let mut app_state = state.write();
    app_state.auth = AuthState::signup();
    app_state.current_screen = Screen::Auth;
}

/// Clear the session and reset every screen back to its initial state.
pub fn handle_logout(state: &Arc<RwLock<AppState>>) {
    let mut app_state = state.write();
    app_state.api_client.session().clear();
    app_state.current_user = None;
    app_state.auth = AuthState::login();
    app_state.home = Default::default();
    app_state.editor = Default::default();
    app_state.friends = Default::default();
    app_state.current_screen = Screen::Start;
    tracing::info!("logged out");
}
