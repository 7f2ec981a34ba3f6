//! Team and friend resource tests against the in-process backend.

mod common;

use common::*;
use std::sync::atomic::Ordering;
use teamtracker::services::api::ApiError;

#[tokio::test]
async fn create_team_assigns_id_and_lists_it() {
    let backend = spawn_backend().await;
    let (client, _session) = client_with_tokens(&backend, VALID_ACCESS, REFRESH_TOKEN);

    let created = client
        .create_team(&sample_team("Kanto Classics"))
        .await
        .expect("create");
    assert_eq!(created.id, Some(1));
    assert_eq!(created.name, "Kanto Classics");

    let teams = client.list_teams().await.expect("list");
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0], created);
}

#[tokio::test]
async fn update_team_replaces_contents() {
    let backend = spawn_backend().await;
    let (client, _session) = client_with_tokens(&backend, VALID_ACCESS, REFRESH_TOKEN);

    let created = client
        .create_team(&sample_team("Draft"))
        .await
        .expect("create");
    let id = created.id.expect("assigned id");

    let mut updated = created.clone();
    updated.name = "Final".to_string();
    updated.pokemon[0].level = 99;
    let saved = client.update_team(id, &updated).await.expect("update");
    assert_eq!(saved.name, "Final");

    let fetched = client.get_team(id).await.expect("get");
    assert_eq!(fetched.pokemon[0].level, 99);
}

#[tokio::test]
async fn favorite_patch_changes_only_the_flag() {
    let backend = spawn_backend().await;
    let (client, _session) = client_with_tokens(&backend, VALID_ACCESS, REFRESH_TOKEN);

    let created = client
        .create_team(&sample_team("Starters"))
        .await
        .expect("create");
    let id = created.id.expect("assigned id");
    assert!(!created.is_favorite);

    let favorited = client.set_favorite(id, true).await.expect("favorite");
    assert!(favorited.is_favorite);
    assert_eq!(favorited.name, "Starters");
    assert_eq!(favorited.pokemon, created.pokemon);

    let unfavorited = client.set_favorite(id, false).await.expect("unfavorite");
    assert!(!unfavorited.is_favorite);
}

#[tokio::test]
async fn delete_team_removes_it() {
    let backend = spawn_backend().await;
    let (client, _session) = client_with_tokens(&backend, VALID_ACCESS, REFRESH_TOKEN);

    let created = client
        .create_team(&sample_team("Short-lived"))
        .await
        .expect("create");
    let id = created.id.expect("assigned id");

    client.delete_team(id).await.expect("delete");
    let teams = client.list_teams().await.expect("list");
    assert!(teams.is_empty());
}

#[tokio::test]
async fn deleting_missing_team_surfaces_404_with_message() {
    let backend = spawn_backend().await;
    let (client, _session) = client_with_tokens(&backend, VALID_ACCESS, REFRESH_TOKEN);

    let err = client.delete_team(999).await.expect_err("must fail");
    match err {
        ApiError::Request { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not found.");
        }
        other => panic!("expected Request error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_response_yields_decode_error() {
    let backend = spawn_backend().await;
    backend.state.teams_malformed.store(true, Ordering::SeqCst);
    let (client, _session) = client_with_tokens(&backend, VALID_ACCESS, REFRESH_TOKEN);

    let err = client.list_teams().await.expect_err("must fail");
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn friends_can_be_added_listed_and_removed() {
    let backend = spawn_backend().await;
    let (client, _session) = client_with_tokens(&backend, VALID_ACCESS, REFRESH_TOKEN);

    client.add_friend("misty").await.expect("add misty");
    client.add_friend("brock").await.expect("add brock");

    let friends = client.list_friends().await.expect("list");
    assert_eq!(friends.len(), 2);
    assert!(friends.iter().any(|friend| friend.username == "misty"));

    client.remove_friend("misty").await.expect("remove");
    let friends = client.list_friends().await.expect("list again");
    assert_eq!(friends.len(), 1);
    assert_eq!(friends[0].username, "brock");
}

#[tokio::test]
async fn adding_unknown_user_surfaces_error_field_message() {
    let backend = spawn_backend().await;
    let (client, _session) = client_with_tokens(&backend, VALID_ACCESS, REFRESH_TOKEN);

    let err = client.add_friend("missingno").await.expect_err("must fail");
    match err {
        ApiError::Request { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "User not found");
        }
        other => panic!("expected Request error, got {:?}", other),
    }
}

#[tokio::test]
async fn removing_unknown_friend_surfaces_not_found() {
    let backend = spawn_backend().await;
    let (client, _session) = client_with_tokens(&backend, VALID_ACCESS, REFRESH_TOKEN);

    let err = client.remove_friend("nobody").await.expect_err("must fail");
    match err {
        ApiError::Request { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Friend not found");
        }
        other => panic!("expected Request error, got {:?}", other),
    }
}

#[tokio::test]
async fn friend_teams_are_fetched_by_friend_id() {
    let backend = spawn_backend().await;
    let (client, _session) = client_with_tokens(&backend, VALID_ACCESS, REFRESH_TOKEN);

    client.add_friend("misty").await.expect("add");
    let friends = client.list_friends().await.expect("list");
    let friend_id = friends[0].id;

    let teams = client.friend_teams(friend_id).await.expect("friend teams");
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].name, "Friend's Finest");
}

#[tokio::test]
async fn resource_calls_refresh_transparently_mid_session() {
    let backend = spawn_backend().await;
    let (client, session) = client_with_tokens(&backend, VALID_ACCESS, REFRESH_TOKEN);

    client
        .create_team(&sample_team("Before Expiry"))
        .await
        .expect("create");

    // Simulate the backend expiring the access token between calls.
    *backend
        .state
        .valid_access
        .lock()
        .expect("valid_access lock") = "rotated-away".to_string();
    backend.state.refresh_calls.store(0, Ordering::SeqCst);

    // The refresh endpoint reissues REFRESHED_ACCESS and the retry succeeds.
    let teams = client.list_teams().await.expect("list after expiry");
    assert_eq!(teams.len(), 1);
    assert_eq!(backend.state.refresh_calls.load(Ordering::SeqCst), 1);
    assert_eq!(session.access_token().as_deref(), Some(REFRESHED_ACCESS));
}
