//! Friends screen: manage the friends list and browse a friend's teams.

use egui;

use crate::app::state::{AppState, Screen};
use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::ui::widgets::team_card::render_team_card;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        if ui.button("< Back").clicked() {
            app.handle_screen_change(Screen::Home);
        }
        ui.heading("Your Friends");
        if state.friends.loading {
            ui.spinner();
        }
    });
    ui.add_space(10.0);

    // Add / remove controls
    let mut add_input = state.friends.add_input.clone();
    ui.horizontal(|ui| {
        let response = ui.add_sized(
            [220.0, 28.0],
            egui::TextEdit::singleline(&mut add_input).hint_text("Friend's username"),
        );
        let submit =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        app.state.write().friends.add_input = add_input;

        if forms::render_button(ui, "Add Friend", Some(theme.accent), None).clicked() || submit {
            app.handle_add_friend();
        }

        let can_remove = state.friends.selected.is_some() && !state.friends.removing;
        if state.friends.removing {
            ui.add_enabled(false, egui::Button::new("Removing..."));
        } else if state.friends.confirm_remove {
            // Two-click removal: confirm or back out.
            if ui
                .add_enabled(can_remove, egui::Button::new("Confirm Remove").fill(theme.error))
                .clicked()
            {
                app.handle_remove_friend();
            }
            if ui.button("Cancel").clicked() {
                app.state.write().friends.confirm_remove = false;
            }
        } else if ui
            .add_enabled(can_remove, egui::Button::new("Remove Selected"))
            .clicked()
        {
            app.state.write().friends.confirm_remove = true;
        }
    });

    ui.add_space(6.0);
    if let Some(error) = &state.friends.error {
        forms::render_error(ui, error, &theme);
    }

    // Search filter
    let mut search = state.friends.search.clone();
    ui.horizontal(|ui| {
        ui.label("Search");
        ui.add_sized(
            [220.0, 28.0],
            egui::TextEdit::singleline(&mut search).hint_text("Filter by username"),
        );
    });
    app.state.write().friends.search = search;

    ui.separator();

    let filtered = state.friends.filtered();
    if filtered.is_empty() && !state.friends.loading {
        forms::render_hint(ui, "No friends found. Add one by username!", &theme);
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for friend in filtered {
            let selected = state.friends.selected.as_ref().map(|f| f.id) == Some(friend.id);
            if ui.selectable_label(selected, &friend.username).clicked() {
                app.handle_select_friend(friend);
            }
        }

        if let Some(selected) = &state.friends.selected {
            ui.add_space(12.0);
            ui.separator();
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("{}'s Teams", selected.username)).strong(),
                );
                if state.friends.friend_teams_loading {
                    ui.spinner();
                }
            });
            ui.add_space(6.0);

            if state.friends.friend_teams.is_empty() && !state.friends.friend_teams_loading {
                forms::render_hint(ui, "This trainer has no teams yet", &theme);
            }
            for team in &state.friends.friend_teams {
                render_team_card(ui, team, true, false, &theme);
                ui.add_space(8.0);
            }
        }
    });
}
