//! Landing screen shown before login.

use egui;

use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

pub fn render(ui: &mut egui::Ui, app: &App) {
    let theme = Theme::default();

    ui.vertical_centered(|ui| {
        ui.add_space(140.0);
        ui.label(
            egui::RichText::new("TeamTracker")
                .size(42.0)
                .strong()
                .color(theme.accent),
        );
        ui.add_space(8.0);
        forms::render_hint(ui, "Build, manage and share your Pokémon teams", &theme);
        ui.add_space(40.0);

        let button_size = egui::Vec2::new(220.0, 36.0);
        if forms::render_button(ui, "Log In", Some(theme.accent), Some(button_size)).clicked() {
            app.handle_switch_to_login();
        }
        ui.add_space(10.0);
        if forms::render_button(ui, "Create Account", None, Some(button_size)).clicked() {
            app.handle_switch_to_signup();
        }
    });
}
