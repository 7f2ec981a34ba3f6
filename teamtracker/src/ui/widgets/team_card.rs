//! Team card widget shared by the home screen and the friends screen.

use egui;
use shared::{utils, Team};

use crate::ui::theme::Theme;

/// Action the user took on a card this frame, applied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamCardAction {
    None,
    ToggleFavorite,
    Edit,
    Delete,
}

/// Render one team as a card. `read_only` hides the edit controls (friend
/// teams); `deleting` disables the buttons while a delete is in flight.
pub fn render_team_card(
    ui: &mut egui::Ui,
    team: &Team,
    read_only: bool,
    deleting: bool,
    theme: &Theme,
) -> TeamCardAction {
    let mut action = TeamCardAction::None;

    ui.group(|ui| {
        ui.set_min_width(320.0);

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&team.name).strong().size(16.0));
            ui.label(egui::RichText::new(team.generation.label()).color(theme.dim));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if !read_only {
                    let star = if team.is_favorite { "★" } else { "☆" };
                    let star_color = if team.is_favorite {
                        theme.favorite
                    } else {
                        theme.dim
                    };
                    let star_button =
                        egui::Button::new(egui::RichText::new(star).color(star_color).size(18.0))
                            .frame(false);
                    if ui
                        .add_enabled(!deleting, star_button)
                        .on_hover_text("Toggle favorite")
                        .clicked()
                    {
                        action = TeamCardAction::ToggleFavorite;
                    }
                } else if team.is_favorite {
                    ui.label(egui::RichText::new("★").color(theme.favorite).size(18.0));
                }
            });
        });

        if let Some(description) = &team.description {
            ui.label(
                egui::RichText::new(utils::truncate_description(description, 120))
                    .color(theme.dim),
            );
        }

        ui.add_space(4.0);
        for slot in &team.pokemon {
            ui.horizontal(|ui| {
                ui.label(slot.display_label());
                ui.label(egui::RichText::new(format!("Lv. {}", slot.level)).color(theme.dim));
                if let Some(sprite_id) = slot.sprite_id {
                    ui.hyperlink_to("sprite", utils::sprite_url(sprite_id));
                }
            });
        }

        if !read_only {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.add_enabled(!deleting, egui::Button::new("Edit")).clicked() {
                    action = TeamCardAction::Edit;
                }
                let delete_label = if deleting { "Deleting..." } else { "Delete" };
                if ui
                    .add_enabled(!deleting, egui::Button::new(delete_label))
                    .clicked()
                {
                    action = TeamCardAction::Delete;
                }
            });
        }
    });

    action
}
