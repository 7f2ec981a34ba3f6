//! UI rendering.
//!
//! Every frame renders from a clone of the app state, so widgets never hold
//! the state lock while the user interacts with them.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::state::Screen;
use crate::app::App;

/// Main render function, called every frame.
pub fn render(ctx: &egui::Context, app: &mut App) {
    let state = {
        match app.state.try_read() {
            Some(state_guard) => state_guard.clone(),
            // Lock held by a handler, skip this frame.
            None => return,
        }
    };

    egui::CentralPanel::default().show(ctx, |ui| {
        let current_screen = state.current_screen;

        // Bounce unauthenticated users off protected screens.
        if current_screen.requires_auth() && !state.is_authenticated() {
            app.handle_screen_change(Screen::Auth);
            screens::auth::render(ui, &state, app);
            return;
        }

        match current_screen {
            Screen::Start => screens::start::render(ui, app),
            Screen::Auth => screens::auth::render(ui, &state, app),
            Screen::Home => screens::home::render(ui, &state, app),
            Screen::Editor => screens::editor::render(ui, &state, app),
            Screen::Friends => screens::friends::render(ui, &state, app),
        }
    });
}
