//! Reusable form elements for consistent UI across screens.

use egui;

use crate::ui::theme::Theme;

/// Render a labelled text input field.
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    password: bool,
    size: [f32; 2],
) -> egui::Response {
    ui.label(label);
    ui.add_sized(
        size,
        egui::TextEdit::singleline(value)
            .password(password)
            .hint_text(hint),
    )
}

/// Render a styled button.
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    fill_color: Option<egui::Color32>,
    min_size: Option<egui::Vec2>,
) -> egui::Response {
    let mut button = egui::Button::new(text);
    if let Some(color) = fill_color {
        button = button.fill(color);
    }
    if let Some(size) = min_size {
        button = button.min_size(size);
    }
    ui.add(button)
}

/// Render a form heading.
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.label(egui::RichText::new(text).heading().strong().color(theme.accent));
    ui.add_space(20.0);
}

/// Render an error message.
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(egui::RichText::new(error).color(theme.error));
    ui.add_space(10.0);
}

/// Render help/hint text.
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).color(theme.dim));
}
