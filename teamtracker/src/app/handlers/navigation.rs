use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::handlers::{friends, teams};
use crate::app::state::{AppState, Screen};

/// Switch screens, bouncing unauthenticated users to the auth screen and
/// refreshing data on entry to the list screens.
pub fn handle_screen_change(
    state: &Arc<RwLock<AppState>>,
    event_tx: &Sender<AppEvent>,
    screen: Screen,
) {
    {
        let mut app_state = state.write();
        if screen.requires_auth() && !app_state.is_authenticated() {
            tracing::debug!(?screen, "redirecting unauthenticated user to auth screen");
            app_state.current_screen = Screen::Auth;
            return;
        }
        app_state.current_screen = screen;
    }

    match screen {
        Screen::Home => teams::fetch_teams(state, event_tx),
        Screen::Friends => friends::fetch_friends(state, event_tx),
        _ => {}
    }
}
