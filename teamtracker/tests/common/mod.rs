#![allow(dead_code)]

//! In-process mock of the TeamTracker backend for API client tests.
//!
//! Speaks the same wire contract as the real backend: bearer auth on every
//! resource route, `detail`/`error` message bodies, and a refresh endpoint
//! that reissues only the access token.

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::json;
use shared::{
    Friend, FriendActionRequest, Generation, LoginRequest, PokemonSlot, RefreshRequest,
    SignupRequest, Team,
};
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use teamtracker::services::api::{ApiClient, Session};

pub const VALID_ACCESS: &str = "access-1";
pub const REFRESHED_ACCESS: &str = "access-2";
pub const REFRESH_TOKEN: &str = "refresh-1";
pub const STALE_ACCESS: &str = "stale-access";

pub const USERNAME: &str = "ash";
pub const PASSWORD: &str = "pikapass";

/// Mutable backend state shared with the test body.
pub struct MockState {
    /// The access token the resource routes currently accept.
    pub valid_access: Mutex<String>,
    /// Whether the refresh endpoint accepts the refresh token.
    pub refresh_valid: AtomicBool,
    /// Number of refresh calls observed.
    pub refresh_calls: AtomicUsize,
    /// Artificial delay inside the refresh handler, to widen race windows.
    pub refresh_delay_ms: u64,
    /// Authorization header count per resource request, in arrival order.
    pub auth_header_counts: Mutex<Vec<usize>>,
    /// When set, `GET /teams/` returns a body that is not valid JSON.
    pub teams_malformed: AtomicBool,

    pub teams: Mutex<Vec<Team>>,
    pub next_team_id: AtomicI64,
    pub friends: Mutex<Vec<Friend>>,
    pub next_friend_id: AtomicI64,
}

impl MockState {
    fn new(refresh_delay_ms: u64) -> Self {
        Self {
            valid_access: Mutex::new(VALID_ACCESS.to_string()),
            refresh_valid: AtomicBool::new(true),
            refresh_calls: AtomicUsize::new(0),
            refresh_delay_ms,
            auth_header_counts: Mutex::new(Vec::new()),
            teams_malformed: AtomicBool::new(false),
            teams: Mutex::new(Vec::new()),
            next_team_id: AtomicI64::new(1),
            friends: Mutex::new(Vec::new()),
            next_friend_id: AtomicI64::new(1),
        }
    }
}

pub struct TestBackend {
    pub base_url: String,
    pub state: Arc<MockState>,
}

pub async fn spawn_backend() -> TestBackend {
    spawn_backend_with_refresh_delay(0).await
}

pub async fn spawn_backend_with_refresh_delay(refresh_delay_ms: u64) -> TestBackend {
    let state = Arc::new(MockState::new(refresh_delay_ms));

    let app = Router::new()
        .route("/auth/token/", post(login))
        .route("/auth/signup/", post(signup))
        .route("/auth/token/refresh/", post(refresh))
        .route("/teams/", get(list_teams).post(create_team))
        .route(
            "/teams/:id/",
            get(get_team)
                .put(update_team)
                .patch(patch_team)
                .delete(delete_team),
        )
        .route("/friends/", get(list_friends))
        .route("/friends/add/", post(add_friend))
        .route("/friends/remove/", delete(remove_friend))
        .route("/friends/:id/teams/", get(friend_teams))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock backend");
    });

    TestBackend {
        base_url: format!("http://{}", addr),
        state,
    }
}

/// Client wired to the backend with the given tokens preloaded.
pub fn client_with_tokens(
    backend: &TestBackend,
    access: &str,
    refresh: &str,
) -> (Arc<ApiClient>, Arc<Session>) {
    let session = Arc::new(Session::in_memory());
    session.set_pair(access, refresh);
    let client = Arc::new(ApiClient::with_base_url(
        backend.base_url.clone(),
        session.clone(),
    ));
    (client, session)
}

/// Client wired to the backend with an empty session.
pub fn client_without_tokens(backend: &TestBackend) -> (Arc<ApiClient>, Arc<Session>) {
    let session = Arc::new(Session::in_memory());
    let client = Arc::new(ApiClient::with_base_url(
        backend.base_url.clone(),
        session.clone(),
    ));
    (client, session)
}

pub fn sample_team(name: &str) -> Team {
    Team {
        id: None,
        name: name.to_string(),
        generation: Generation::GenI,
        description: Some("Test squad".to_string()),
        is_favorite: false,
        pokemon: vec![PokemonSlot {
            name: String::new(),
            species: "Pikachu".to_string(),
            level: 50,
            sprite_id: Some(25),
        }],
    }
}

// --- handlers -------------------------------------------------------------

fn unauthorized(message: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "detail": message }))).into_response()
}

/// Records the Authorization header count and checks the bearer token.
fn check_auth(state: &MockState, headers: &HeaderMap) -> Result<(), Response> {
    let values: Vec<String> = headers
        .get_all(header::AUTHORIZATION)
        .iter()
        .filter_map(|value| value.to_str().ok().map(str::to_string))
        .collect();
    state
        .auth_header_counts
        .lock()
        .expect("header log lock")
        .push(values.len());

    let expected = format!(
        "Bearer {}",
        state.valid_access.lock().expect("valid_access lock")
    );
    if values.len() == 1 && values[0] == expected {
        Ok(())
    } else {
        Err(unauthorized("Given token not valid for any token type"))
    }
}

async fn login(State(state): State<Arc<MockState>>, Json(body): Json<LoginRequest>) -> Response {
    if body.username == USERNAME && body.password == PASSWORD {
        *state.valid_access.lock().expect("valid_access lock") = VALID_ACCESS.to_string();
        Json(json!({ "access": VALID_ACCESS, "refresh": REFRESH_TOKEN })).into_response()
    } else {
        unauthorized("No active account found with the given credentials")
    }
}

async fn signup(Json(body): Json<SignupRequest>) -> Response {
    if body.username == "taken" {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "A user with that username already exists." })),
        )
            .into_response()
    } else {
        (
            StatusCode::CREATED,
            Json(json!({ "username": body.username })),
        )
            .into_response()
    }
}

async fn refresh(State(state): State<Arc<MockState>>, Json(body): Json<RefreshRequest>) -> Response {
    state.refresh_calls.fetch_add(1, Ordering::SeqCst);
    if state.refresh_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.refresh_delay_ms)).await;
    }

    if state.refresh_valid.load(Ordering::SeqCst) && body.refresh == REFRESH_TOKEN {
        *state.valid_access.lock().expect("valid_access lock") = REFRESHED_ACCESS.to_string();
        Json(json!({ "access": REFRESHED_ACCESS })).into_response()
    } else {
        unauthorized("Token is invalid or expired")
    }
}

async fn list_teams(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if let Err(rejection) = check_auth(&state, &headers) {
        return rejection;
    }
    if state.teams_malformed.load(Ordering::SeqCst) {
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            "this is not json",
        )
            .into_response();
    }
    Json(state.teams.lock().expect("teams lock").clone()).into_response()
}

async fn create_team(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(mut team): Json<Team>,
) -> Response {
    if let Err(rejection) = check_auth(&state, &headers) {
        return rejection;
    }
    team.id = Some(state.next_team_id.fetch_add(1, Ordering::SeqCst));
    state.teams.lock().expect("teams lock").push(team.clone());
    (StatusCode::CREATED, Json(team)).into_response()
}

async fn get_team(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    if let Err(rejection) = check_auth(&state, &headers) {
        return rejection;
    }
    let teams = state.teams.lock().expect("teams lock");
    match teams.iter().find(|team| team.id == Some(id)) {
        Some(team) => Json(team.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found." }))).into_response(),
    }
}

async fn update_team(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(mut team): Json<Team>,
) -> Response {
    if let Err(rejection) = check_auth(&state, &headers) {
        return rejection;
    }
    let mut teams = state.teams.lock().expect("teams lock");
    match teams.iter_mut().find(|existing| existing.id == Some(id)) {
        Some(existing) => {
            team.id = Some(id);
            *existing = team.clone();
            Json(team).into_response()
        }
        None => (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found." }))).into_response(),
    }
}

async fn patch_team(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    if let Err(rejection) = check_auth(&state, &headers) {
        return rejection;
    }
    let mut teams = state.teams.lock().expect("teams lock");
    match teams.iter_mut().find(|existing| existing.id == Some(id)) {
        Some(existing) => {
            if let Some(favorite) = body.get("isFavorite").and_then(|v| v.as_bool()) {
                existing.is_favorite = favorite;
            }
            Json(existing.clone()).into_response()
        }
        None => (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found." }))).into_response(),
    }
}

async fn delete_team(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    if let Err(rejection) = check_auth(&state, &headers) {
        return rejection;
    }
    let mut teams = state.teams.lock().expect("teams lock");
    let before = teams.len();
    teams.retain(|team| team.id != Some(id));
    if teams.len() < before {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found." }))).into_response()
    }
}

async fn list_friends(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if let Err(rejection) = check_auth(&state, &headers) {
        return rejection;
    }
    let friends = state.friends.lock().expect("friends lock").clone();
    Json(json!({ "friends": friends })).into_response()
}

async fn add_friend(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<FriendActionRequest>,
) -> Response {
    if let Err(rejection) = check_auth(&state, &headers) {
        return rejection;
    }
    if body.username == "missingno" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "User not found" })),
        )
            .into_response();
    }
    let mut friends = state.friends.lock().expect("friends lock");
    if friends.iter().any(|friend| friend.username == body.username) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Already friends with this user" })),
        )
            .into_response();
    }
    friends.push(Friend {
        id: state.next_friend_id.fetch_add(1, Ordering::SeqCst),
        username: body.username,
    });
    (StatusCode::CREATED, Json(json!({ "status": "ok" }))).into_response()
}

async fn remove_friend(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<FriendActionRequest>,
) -> Response {
    if let Err(rejection) = check_auth(&state, &headers) {
        return rejection;
    }
    let mut friends = state.friends.lock().expect("friends lock");
    let before = friends.len();
    friends.retain(|friend| friend.username != body.username);
    if friends.len() < before {
        Json(json!({ "status": "removed" })).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Friend not found" })),
        )
            .into_response()
    }
}

async fn friend_teams(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    if let Err(rejection) = check_auth(&state, &headers) {
        return rejection;
    }
    let known = state
        .friends
        .lock()
        .expect("friends lock")
        .iter()
        .any(|friend| friend.id == id);
    if !known {
        return (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found." }))).into_response();
    }
    let mut team = sample_team("Friend's Finest");
    team.id = Some(9000 + id);
    Json(vec![team]).into_response()
}
