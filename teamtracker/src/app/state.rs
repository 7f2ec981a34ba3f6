use shared::{Friend, Generation, PokemonSlot, Team};
use std::sync::Arc;

use crate::core::service::ApiService;
use crate::core::{AppError, Result};
use crate::utils::validation;

/// Screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Auth,
    Home,
    Editor,
    Friends,
}

impl Screen {
    /// Screens reachable from the navigation bar.
    pub fn all() -> Vec<Screen> {
        vec![Screen::Home, Screen::Friends]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Start => "Welcome",
            Screen::Auth => "Sign In",
            Screen::Home => "Teams",
            Screen::Editor => "Team Editor",
            Screen::Friends => "Friends",
        }
    }

    /// Whether this screen needs a logged-in session.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Screen::Home | Screen::Editor | Screen::Friends)
    }
}

/// Authentication UI state. The form fields live here so the render loop
/// can rebuild the widgets every frame without losing input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Login {
        username: String,
        password: String,
        error: Option<String>,
        /// In-flight progress text ("Logging in..."), kept apart from
        /// `error` so it is not rendered in the error color.
        notice: Option<String>,
    },
    Signup {
        username: String,
        password: String,
        confirm_password: String,
        error: Option<String>,
        notice: Option<String>,
    },
}

impl AuthState {
    pub fn login() -> Self {
        AuthState::Login {
            username: String::new(),
            password: String::new(),
            error: None,
            notice: None,
        }
    }

    pub fn signup() -> Self {
        AuthState::Signup {
            username: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            error: None,
            notice: None,
        }
    }

    pub fn set_error(&mut self, message: String) {
        match self {
            AuthState::Login { error, notice, .. }
            | AuthState::Signup { error, notice, .. } => {
                *error = Some(message);
                *notice = None;
            }
        }
    }

    pub fn set_notice(&mut self, message: String) {
        match self {
            AuthState::Login { error, notice, .. }
            | AuthState::Signup { error, notice, .. } => {
                *notice = Some(message);
                *error = None;
            }
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        AuthState::login()
    }
}

/// One editable Pokémon slot in the team editor. Kept as raw strings so the
/// form can hold partial input; conversion to the wire type happens on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotForm {
    pub species: String,
    pub nickname: String,
    pub level: u8,
    pub sprite_id: String,
}

impl Default for SlotForm {
    fn default() -> Self {
        Self {
            species: String::new(),
            nickname: String::new(),
            level: 1,
            sprite_id: String::new(),
        }
    }
}

impl SlotForm {
    pub fn from_slot(slot: &PokemonSlot) -> Self {
        Self {
            species: slot.species.clone(),
            nickname: slot.name.clone(),
            level: slot.level,
            sprite_id: slot.sprite_id.map(|id| id.to_string()).unwrap_or_default(),
        }
    }

    pub fn to_slot(&self) -> PokemonSlot {
        PokemonSlot {
            name: self.nickname.trim().to_string(),
            species: self.species.trim().to_string(),
            level: validation::clamp_level(self.level as i64),
            sprite_id: self.sprite_id.trim().parse().ok(),
        }
    }
}

/// Number of slots in the editor form; a team never has more.
pub const TEAM_SLOTS: usize = 6;

/// State of the team editor screen, covering both create and edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    /// `Some` when editing an existing team, `None` when creating.
    pub editing_id: Option<i64>,
    pub name: String,
    pub generation: Option<Generation>,
    pub description: String,
    pub is_favorite: bool,
    pub slots: [SlotForm; TEAM_SLOTS],
    pub saving: bool,
    pub error: Option<String>,
}

impl EditorState {
    pub fn new_team() -> Self {
        Self::default()
    }

    pub fn from_team(team: &Team) -> Self {
        let mut slots: [SlotForm; TEAM_SLOTS] = Default::default();
        for (form, slot) in slots.iter_mut().zip(team.pokemon.iter()) {
            *form = SlotForm::from_slot(slot);
        }
        Self {
            editing_id: team.id,
            name: team.name.clone(),
            generation: Some(team.generation),
            description: team.description.clone().unwrap_or_default(),
            is_favorite: team.is_favorite,
            slots,
            saving: false,
            error: None,
        }
    }

    /// Validate the form and build the wire team. Slots without a species
    /// are dropped; levels are clamped into range.
    pub fn build_team(&self) -> Result<Team> {
        let mut slots: Vec<PokemonSlot> = self.slots.iter().map(SlotForm::to_slot).collect();
        let missing = validation::missing_team_fields(&self.name, self.generation, &slots);
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }
        let generation = self
            .generation
            .ok_or_else(|| AppError::State("generation unset after validation".to_string()))?;
        slots.retain(|slot| !slot.species.is_empty());

        let description = self.description.trim();
        Ok(Team {
            id: self.editing_id,
            name: self.name.trim().to_string(),
            generation,
            description: (!description.is_empty()).then(|| description.to_string()),
            is_favorite: self.is_favorite,
            pokemon: slots,
        })
    }
}

/// State of the teams list screen.
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub teams: Vec<Team>,
    pub loading: bool,
    /// Team currently being deleted, to disable its buttons.
    pub deleting_id: Option<i64>,
    pub error: Option<String>,
    pub notice: Option<String>,
}

/// State of the friends screen.
#[derive(Debug, Clone, Default)]
pub struct FriendsState {
    pub friends: Vec<Friend>,
    pub loading: bool,
    pub search: String,
    pub add_input: String,
    pub selected: Option<Friend>,
    pub friend_teams: Vec<Team>,
    pub friend_teams_loading: bool,
    /// Set after the first "remove" click; the actual call needs a second,
    /// confirming click.
    pub confirm_remove: bool,
    pub removing: bool,
    pub error: Option<String>,
}

impl FriendsState {
    /// Friends whose username contains the search text, case-insensitive.
    pub fn filtered(&self) -> Vec<&Friend> {
        let needle = self.search.trim().to_lowercase();
        self.friends
            .iter()
            .filter(|friend| needle.is_empty() || friend.username.to_lowercase().contains(&needle))
            .collect()
    }
}

/// Top-level application state, shared between the render loop and the
/// event handlers behind an `Arc<RwLock<_>>`.
#[derive(Clone)]
pub struct AppState {
    pub current_screen: Screen,
    pub auth: AuthState,
    pub home: HomeState,
    pub editor: EditorState,
    pub friends: FriendsState,
    /// Username of the logged-in user, for the header greeting.
    pub current_user: Option<String>,
    pub api_client: Arc<dyn ApiService>,
}

impl AppState {
    pub fn new(api_client: Arc<dyn ApiService>) -> Self {
        let current_screen = if api_client.session().is_authenticated() {
            Screen::Home
        } else {
            Screen::Start
        };
        Self {
            current_screen,
            auth: AuthState::default(),
            home: HomeState::default(),
            editor: EditorState::default(),
            friends: FriendsState::default(),
            current_user: None,
            api_client,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.api_client.session().is_authenticated()
    }
}
