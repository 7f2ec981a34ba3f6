//! Home screen, the logged-in user's teams.

use egui;

use crate::app::state::{AppState, Screen};
use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::ui::widgets::team_card::{render_team_card, TeamCardAction};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.heading("Your Pokémon Teams");
        if let Some(username) = &state.current_user {
            forms::render_hint(ui, &format!("Trainer {}", username), &theme);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Log Out").clicked() {
                app.handle_logout();
            }
        });
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if forms::render_button(ui, "Create New Team", Some(theme.accent), None).clicked() {
            app.handle_new_team_click();
        }
        for screen in Screen::all() {
            if screen != state.current_screen && ui.button(screen.title()).clicked() {
                app.handle_screen_change(screen);
            }
        }
        if ui.button("Refresh").clicked() {
            app.handle_refresh_teams();
        }
        if state.home.loading {
            ui.spinner();
        }
    });

    ui.add_space(6.0);
    if let Some(error) = &state.home.error {
        forms::render_error(ui, error, &theme);
    }
    if let Some(notice) = &state.home.notice {
        ui.colored_label(theme.success, notice);
        ui.add_space(6.0);
    }

    ui.separator();

    if state.home.teams.is_empty() && !state.home.loading {
        ui.add_space(30.0);
        ui.vertical_centered(|ui| {
            forms::render_hint(ui, "No teams yet. Create your first team!", &theme);
        });
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for team in &state.home.teams {
            let deleting = team.id.is_some() && state.home.deleting_id == team.id;
            let action = render_team_card(ui, team, false, deleting, &theme);
            match action {
                TeamCardAction::ToggleFavorite => {
                    if let Some(id) = team.id {
                        app.handle_toggle_favorite(id);
                    }
                }
                TeamCardAction::Edit => app.handle_edit_team_click(team),
                TeamCardAction::Delete => {
                    if let Some(id) = team.id {
                        app.handle_delete_team(id);
                    }
                }
                TeamCardAction::None => {}
            }
            ui.add_space(8.0);
        }
    });
}
