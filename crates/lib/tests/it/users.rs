//! Tests for the user controller guard chains.

use std::sync::Arc;

use notehub::store::UserStore;
use notehub::users::{CreateUser, DeleteUser, UpdateUser, password};

use crate::helpers::{seed_note, seed_user, test_env};

fn create_input(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        password: "pw1".to_string(),
        roles: vec!["Employee".to_string()],
    }
}

fn update_input(id: &str, username: &str) -> UpdateUser {
    UpdateUser {
        id: id.to_string(),
        username: username.to_string(),
        roles: vec!["Employee".to_string()],
        active: true,
        password: None,
    }
}

#[tokio::test]
async fn list_excludes_password_everywhere() {
    let env = test_env();
    seed_user(&env, "alice").await;
    let created = env.users.create(create_input("bob")).await.unwrap();
    assert!(created.contains("bob"));

    let views = env.users.list().await.unwrap();
    assert_eq!(views.len(), 2);

    // Serialize the way the HTTP layer would and check no password-ish
    // field survives on any record.
    let json = serde_json::to_value(&views).unwrap();
    for record in json.as_array().unwrap() {
        let keys: Vec<&String> = record.as_object().unwrap().keys().collect();
        assert!(
            keys.iter().all(|k| !k.contains("password")),
            "unexpected field in {keys:?}"
        );
    }
}

#[tokio::test]
async fn empty_list_is_an_error_not_an_empty_success() {
    let env = test_env();

    let err = env.users.list().await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.is_client_error());
    assert_eq!(err.to_string(), "No users found");
}

#[tokio::test]
async fn duplicate_username_always_conflicts() {
    let env = test_env();
    seed_user(&env, "alice").await;

    // Different password and roles make no difference
    let mut input = create_input("alice");
    input.password = "completely-different".to_string();
    input.roles = vec!["Manager".to_string(), "Admin".to_string()];

    let err = env.users.create(input).await.unwrap_err();
    assert!(err.is_conflict());
}

#[tokio::test]
async fn create_stores_a_hash_not_the_password() {
    let env = test_env();
    env.users.create(create_input("bob")).await.unwrap();

    let users: Arc<dyn UserStore> = env.store.clone();
    let stored = users.find_by_username("bob").await.unwrap().unwrap();

    assert_ne!(stored.password_hash, "pw1");
    assert!(stored.password_hash.starts_with("$argon2"));
    assert!(password::verify_password("pw1", &stored.password_hash).is_ok());
    assert!(password::verify_password("wrong", &stored.password_hash).is_err());
    assert!(stored.active);
}

#[tokio::test]
async fn self_rename_is_not_a_duplicate() {
    let env = test_env();
    let alice = seed_user(&env, "alice").await;

    let message = env
        .users
        .update(update_input(&alice.id, "alice"))
        .await
        .unwrap();
    assert_eq!(message, "alice updated");
}

#[tokio::test]
async fn rename_onto_another_user_conflicts() {
    let env = test_env();
    seed_user(&env, "alice").await;
    let bob = seed_user(&env, "bob").await;

    let err = env
        .users
        .update(update_input(&bob.id, "alice"))
        .await
        .unwrap_err();
    assert!(err.is_conflict());
}

#[tokio::test]
async fn update_unknown_id_reports_not_found() {
    let env = test_env();
    seed_user(&env, "alice").await;

    let err = env
        .users
        .update(update_input("no-such-id", "carol"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(err.is_client_error());
    assert!(!err.is_conflict());
}

#[tokio::test]
async fn update_overwrites_fields_and_preserves_password_without_input() {
    let env = test_env();
    let alice = seed_user(&env, "alice").await;
    let original_hash = alice.password_hash.clone();

    let mut input = update_input(&alice.id, "alice2");
    input.roles = vec!["Manager".to_string()];
    input.active = false;
    env.users.update(input).await.unwrap();

    let users: Arc<dyn UserStore> = env.store.clone();
    let stored = UserStore::find_by_id(&*users, &alice.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.username, "alice2");
    assert_eq!(stored.roles, vec!["Manager"]);
    assert!(!stored.active);
    // No password in the input leaves the stored hash untouched
    assert_eq!(stored.password_hash, original_hash);
}

#[tokio::test]
async fn update_rehashes_when_password_provided() {
    let env = test_env();
    let alice = seed_user(&env, "alice").await;

    let mut input = update_input(&alice.id, "alice");
    input.password = Some("fresh-password".to_string());
    env.users.update(input).await.unwrap();

    let users: Arc<dyn UserStore> = env.store.clone();
    let stored = users.find_by_username("alice").await.unwrap().unwrap();
    assert_ne!(stored.password_hash, alice.password_hash);
    assert!(password::verify_password("fresh-password", &stored.password_hash).is_ok());
}

#[tokio::test]
async fn delete_is_blocked_while_notes_reference_the_user() {
    let env = test_env();
    let alice = seed_user(&env, "alice").await;
    seed_note(&env, &alice.id, "alice's note").await;

    let err = env
        .users
        .delete(DeleteUser {
            id: alice.id.clone(),
        })
        .await
        .unwrap_err();
    assert!(err.is_client_error());
    assert_eq!(err.to_string(), "User has assigned notes");

    // The user was not removed
    let users: Arc<dyn UserStore> = env.store.clone();
    assert!(
        UserStore::find_by_id(&*users, &alice.id)
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn delete_succeeds_once_notes_are_gone() {
    let env = test_env();
    let alice = seed_user(&env, "alice").await;
    let note = seed_note(&env, &alice.id, "alice's note").await;

    env.notes
        .delete(notehub::notes::DeleteNote { id: note.id })
        .await
        .unwrap();

    let reply = env
        .users
        .delete(DeleteUser {
            id: alice.id.clone(),
        })
        .await
        .unwrap();
    assert!(reply.contains("alice"));
    assert!(reply.contains(&alice.id));

    let users: Arc<dyn UserStore> = env.store.clone();
    assert!(
        UserStore::find_by_id(&*users, &alice.id)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn delete_unknown_id_reports_not_found() {
    let env = test_env();

    let err = env
        .users
        .delete(DeleteUser {
            id: "no-such-id".to_string(),
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(err.is_client_error());
}
