//! Application orchestrator.
//!
//! `App` owns the shared state and the event channel. Each frame runs
//! `on_tick` to drain completed task results, then the UI renders from a
//! snapshot of the state. User actions delegate to the `handlers` modules,
//! which spawn network work and report back over the channel.

pub mod event_handler;
pub mod events;
pub mod handlers;
pub mod state;

use async_channel::{Receiver, Sender};
use parking_lot::RwLock;
use shared::{Friend, Team};
use std::sync::Arc;

use crate::core::service::ApiService;
use crate::services::api::{ApiClient, Session};
use event_handler::AppEventHandler;
use events::AppEvent;
use state::{AppState, Screen};

pub struct App {
    pub state: Arc<RwLock<AppState>>,
    event_rx: Receiver<AppEvent>,
    event_tx: Sender<AppEvent>,
}

impl App {
    pub fn new() -> Self {
        let session = Arc::new(Session::load(Session::default_path()));
        let api_client = Arc::new(ApiClient::new(session));
        Self::with_client(api_client)
    }

    pub fn with_client(api_client: Arc<dyn ApiService>) -> Self {
        let (event_tx, event_rx) = async_channel::unbounded();
        let state = Arc::new(RwLock::new(AppState::new(api_client)));

        let app = Self {
            state,
            event_rx,
            event_tx,
        };

        // A persisted session skips the start screen; load its data now.
        if app.state.read().current_screen == Screen::Home {
            handlers::teams::fetch_teams(&app.state, &app.event_tx);
        }
        app
    }

    /// Drain completed task results. Called once per frame.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event_impl(event);
        }
    }

    // Delegates the UI calls into the handler modules.

    pub fn handle_screen_change(&self, screen: Screen) {
        handlers::navigation::handle_screen_change(&self.state, &self.event_tx, screen);
    }

    pub fn handle_login_click(&self, username: String, password: String) {
        handlers::auth::handle_login_click(&self.state, &self.event_tx, username, password);
    }

    pub fn handle_signup_click(&self, username: String, password: String, confirm: String) {
        handlers::auth::handle_signup_click(&self.state, &self.event_tx, username, password, confirm);
    }

    pub fn handle_switch_to_login(&self) {
        handlers::auth::handle_switch_to_login(&self.state);
    }

    pub fn handle_switch_to_signup(&self) {
        handlers::auth::handle_switch_to_signup(&self.state);
    }

    pub fn handle_logout(&self) {
        handlers::auth::handle_logout(&self.state);
    }

    pub fn handle_refresh_teams(&self) {
        handlers::teams::fetch_teams(&self.state, &self.event_tx);
    }

    pub fn handle_new_team_click(&self) {
        handlers::teams::open_editor_for_new(&self.state);
    }

    pub fn handle_edit_team_click(&self, team: &Team) {
        handlers::teams::open_editor_for(&self.state, team);
    }

    pub fn handle_save_team_click(&self) {
        handlers::teams::handle_save_team_click(&self.state, &self.event_tx);
    }

    pub fn handle_delete_team(&self, id: i64) {
        handlers::teams::handle_delete_team(&self.state, &self.event_tx, id);
    }

    pub fn handle_toggle_favorite(&self, id: i64) {
        handlers::teams::handle_toggle_favorite(&self.state, &self.event_tx, id);
    }

    pub fn handle_add_friend(&self) {
        handlers::friends::handle_add_friend(&self.state, &self.event_tx);
    }

    pub fn handle_remove_friend(&self) {
        handlers::friends::handle_remove_friend(&self.state, &self.event_tx);
    }

    pub fn handle_select_friend(&self, friend: &Friend) {
        handlers::friends::handle_select_friend(&self.state, &self.event_tx, friend);
    }
}

impl AppEventHandler for App {
    fn state(&self) -> &Arc<RwLock<AppState>> {
        &self.state
    }

    fn event_tx(&self) -> &Sender<AppEvent> {
        &self.event_tx
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.on_tick();
        crate::ui::render(ctx, self);
        // Poll for task results even when there is no input.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
