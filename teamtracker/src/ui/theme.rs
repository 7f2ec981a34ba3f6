//! Dark theme with a Pokéball-red accent.

use egui::{Color32, Context, Stroke, Visuals};

/// Application color palette.
pub struct Theme {
    /// Normal text
    pub normal: Color32,
    /// Primary accent (Pokéball red)
    pub accent: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    /// Success/positive
    pub success: Color32,
    /// Error/negative
    pub error: Color32,
    /// Warning/attention
    pub warning: Color32,
    /// Favorite star
    pub favorite: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            normal: Color32::from_rgb(235, 235, 235),
            accent: Color32::from_rgb(222, 56, 49),    // #DE3831
            dim: Color32::from_rgb(150, 150, 150),
            success: Color32::from_rgb(80, 200, 120),
            error: Color32::from_rgb(255, 90, 90),
            warning: Color32::from_rgb(255, 170, 0),
            favorite: Color32::from_rgb(255, 204, 0),  // #FFCC00
        }
    }
}

/// Apply the dark theme to the egui context. Called once at startup.
pub fn apply(ctx: &Context) {
    let theme = Theme::default();
    let mut visuals = Visuals::dark();

    visuals.panel_fill = Color32::from_rgb(18, 18, 22);
    visuals.window_fill = Color32::from_rgb(24, 24, 28);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, theme.accent);
    visuals.widgets.active.bg_stroke = Stroke::new(1.5, theme.accent);
    visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(222, 56, 49, 80);
    visuals.selection.stroke = Stroke::new(1.5, theme.accent);
    visuals.hyperlink_color = theme.accent;

    ctx.set_visuals(visuals);
}
