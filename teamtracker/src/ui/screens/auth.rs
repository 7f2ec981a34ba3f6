//! Authentication screen, login and signup forms.

use egui;

use crate::app::state::{AppState, AuthState};
use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &App) {
    let theme = Theme::default();

    ui.vertical_centered(|ui| {
        ui.add_space(100.0);

        match &state.auth {
            AuthState::Login {
                username,
                password,
                error,
                notice,
            } => render_login_form(
                ui,
                username,
                password,
                error.as_deref(),
                notice.as_deref(),
                app,
                &theme,
            ),
            AuthState::Signup {
                username,
                password,
                confirm_password,
                error,
                notice,
            } => render_signup_form(
                ui,
                username,
                password,
                confirm_password,
                error.as_deref(),
                notice.as_deref(),
                app,
                &theme,
            ),
        }
    });
}

fn render_login_form(
    ui: &mut egui::Ui,
    username: &str,
    password: &str,
    error: Option<&str>,
    notice: Option<&str>,
    app: &App,
    theme: &Theme,
) {
    forms::render_form_heading(ui, "Log In", theme);

    // Local mutable copies for the text inputs; written back below.
    let mut username_input = username.to_string();
    let mut password_input = password.to_string();
    let mut submit = false;

    forms::render_text_input(
        ui,
        "Username",
        &mut username_input,
        "Enter username",
        false,
        [250.0, 30.0],
    );
    {
        let mut state = app.state.write();
        if let AuthState::Login { username, .. } = &mut state.auth {
            *username = username_input.clone();
        }
    }

    ui.add_space(10.0);

    let password_response = forms::render_text_input(
        ui,
        "Password",
        &mut password_input,
        "Enter password",
        true,
        [250.0, 30.0],
    );
    if password_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        submit = true;
    }
    {
        let mut state = app.state.write();
        if let AuthState::Login { password, .. } = &mut state.auth {
            *password = password_input.clone();
        }
    }

    ui.add_space(15.0);

    if let Some(error) = error {
        forms::render_error(ui, error, theme);
    }
    if let Some(notice) = notice {
        forms::render_hint(ui, notice, theme);
    }

    if forms::render_button(
        ui,
        "Log In",
        Some(theme.accent),
        Some(egui::Vec2::new(250.0, 32.0)),
    )
    .clicked()
    {
        submit = true;
    }

    if submit {
        app.handle_login_click(username_input, password_input);
    }

    ui.add_space(10.0);
    if ui.link("Need an account? Sign up").clicked() {
        app.handle_switch_to_signup();
    }
}

fn render_signup_form(
    ui: &mut egui::Ui,
    username: &str,
    password: &str,
    confirm_password: &str,
    error: Option<&str>,
    notice: Option<&str>,
    app: &App,
    theme: &Theme,
) {
    forms::render_form_heading(ui, "Create Account", theme);

    let mut username_input = username.to_string();
    let mut password_input = password.to_string();
    let mut confirm_input = confirm_password.to_string();
    let mut submit = false;

    forms::render_text_input(
        ui,
        "Username",
        &mut username_input,
        "Choose a username",
        false,
        [250.0, 30.0],
    );
    ui.add_space(10.0);
    forms::render_text_input(
        ui,
        "Password",
        &mut password_input,
        "Choose a password",
        true,
        [250.0, 30.0],
    );
    ui.add_space(10.0);
    let confirm_response = forms::render_text_input(
        ui,
        "Confirm Password",
        &mut confirm_input,
        "Repeat the password",
        true,
        [250.0, 30.0],
    );
    if confirm_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        submit = true;
    }

    {
        let mut state = app.state.write();
        if let AuthState::Signup {
            username,
            password,
            confirm_password,
            ..
        } = &mut state.auth
        {
            *username = username_input.clone();
            *password = password_input.clone();
            *confirm_password = confirm_input.clone();
        }
    }

    ui.add_space(15.0);

    if let Some(error) = error {
        forms::render_error(ui, error, theme);
    }
    if let Some(notice) = notice {
        forms::render_hint(ui, notice, theme);
    }

    if forms::render_button(
        ui,
        "Sign Up",
        Some(theme.accent),
        Some(egui::Vec2::new(250.0, 32.0)),
    )
    .clicked()
    {
        submit = true;
    }

    if submit {
        app.handle_signup_click(username_input, password_input, confirm_input);
    }

    ui.add_space(10.0);
    if ui.link("Already have an account? Log in").clicked() {
        app.handle_switch_to_login();
    }
}
