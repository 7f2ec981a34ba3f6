//! Team editor screen, create and edit.

use egui;
use shared::Generation;

use crate::app::state::{AppState, Screen};
use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::utils::validation::{LEVEL_MAX, LEVEL_MIN};

/// Species offered in the slot dropdowns.
const SPECIES_OPTIONS: &[&str] = &[
    "Pikachu",
    "Charizard",
    "Blastoise",
    "Venusaur",
    "Gengar",
    "Dragonite",
];

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &App) {
    let theme = Theme::default();
    let editing = state.editor.editing_id.is_some();

    ui.horizontal(|ui| {
        if ui.button("< Back").clicked() {
            app.handle_screen_change(Screen::Home);
        }
        ui.heading(if editing { "Edit Team" } else { "Create New Team" });
    });
    ui.add_space(10.0);

    // Work on a local copy; written back in one go at the end of the frame.
    let mut editor = state.editor.clone();
    let mut save_requested = false;

    egui::ScrollArea::vertical().show(ui, |ui| {
        forms::render_text_input(
            ui,
            "Team Name",
            &mut editor.name,
            "e.g. Kanto Classics",
            false,
            [300.0, 30.0],
        );
        ui.add_space(8.0);

        ui.label("Generation");
        egui::ComboBox::from_id_salt("generation")
            .width(300.0)
            .selected_text(
                editor
                    .generation
                    .map(|gen| gen.label())
                    .unwrap_or("Select generation"),
            )
            .show_ui(ui, |ui| {
                for gen in Generation::all() {
                    ui.selectable_value(&mut editor.generation, Some(*gen), gen.label());
                }
            });
        ui.add_space(8.0);

        ui.label("Description (optional)");
        ui.add_sized(
            [300.0, 60.0],
            egui::TextEdit::multiline(&mut editor.description)
                .hint_text("Strategy notes, format, etc."),
        );
        ui.add_space(8.0);

        ui.checkbox(&mut editor.is_favorite, "Favorite");
        ui.add_space(12.0);

        ui.label(egui::RichText::new("Pokémon").strong());
        forms::render_hint(ui, "At least one slot needs a Pokémon", &theme);
        ui.add_space(4.0);

        egui::Grid::new("slot_grid")
            .num_columns(4)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(egui::RichText::new("Pokémon").color(theme.dim));
                ui.label(egui::RichText::new("Nickname").color(theme.dim));
                ui.label(egui::RichText::new("Level").color(theme.dim));
                ui.label(egui::RichText::new("Sprite #").color(theme.dim));
                ui.end_row();

                for (index, slot) in editor.slots.iter_mut().enumerate() {
                    egui::ComboBox::from_id_salt(("slot_species", index))
                        .width(140.0)
                        .selected_text(if slot.species.is_empty() {
                            "Select Pokémon"
                        } else {
                            slot.species.as_str()
                        })
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut slot.species, String::new(), "(empty)");
                            for species in SPECIES_OPTIONS {
                                ui.selectable_value(
                                    &mut slot.species,
                                    species.to_string(),
                                    *species,
                                );
                            }
                        });

                    ui.add_sized(
                        [120.0, 24.0],
                        egui::TextEdit::singleline(&mut slot.nickname).hint_text("Nickname"),
                    );

                    ui.add(
                        egui::DragValue::new(&mut slot.level)
                            .range(LEVEL_MIN..=LEVEL_MAX)
                            .speed(1),
                    );

                    ui.add_sized(
                        [60.0, 24.0],
                        egui::TextEdit::singleline(&mut slot.sprite_id).hint_text("#"),
                    );
                    ui.end_row();
                }
            });

        ui.add_space(12.0);

        if let Some(error) = &editor.error {
            forms::render_error(ui, error, &theme);
        }

        ui.horizontal(|ui| {
            let save_label = if editor.saving {
                "Saving..."
            } else if editing {
                "Save Changes"
            } else {
                "Create Team"
            };
            if ui
                .add_enabled(
                    !editor.saving,
                    egui::Button::new(save_label).fill(theme.accent),
                )
                .clicked()
            {
                save_requested = true;
            }
            if ui.button("Cancel").clicked() {
                app.handle_screen_change(Screen::Home);
            }
        });
    });

    if save_requested {
        // Push the edits into state, then let the handler validate and spawn
        // the save. Validation errors land back on the state's editor.
        app.state.write().editor = editor;
        app.handle_save_team_click();
        return;
    }

    // Write local edits back unless a save already replaced the state.
    let mut app_state = app.state.write();
    if !app_state.editor.saving {
        app_state.editor = editor;
    }
}
