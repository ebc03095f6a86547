//! Integration tests for the users vertical slice
//!
//! Covers registration invariants (duplicate emails, role assignment) and
//! credential lookup.


use test_helpers::*;
use tunex_core::{types::*, TunexError};

#[tokio::test]
async fn test_create_and_get_user() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "alice@example.com", "alice", &[Role::User]).await;

    let user = tunex_storage::users::get_by_id(pool, user_id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.roles, Some(vec![Role::User]));
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_user(pool, "alice@example.com", "alice", &[Role::User]).await;

    let result = tunex_storage::users::create(
        pool,
        CreateUser {
            username: "alice2".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$2b$12$other-hash".to_string(),
            roles: vec![Role::Creator],
        },
    )
    .await;

    assert!(matches!(result, Err(TunexError::Duplicate(_))));

    // The failed attempt must not leave partial state behind
    let users = tunex_storage::users::get_all(pool).await.unwrap();
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn test_multiple_roles_are_assigned() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(
        pool,
        "bob@example.com",
        "bob",
        &[Role::Creator, Role::User],
    )
    .await;

    let roles = tunex_storage::roles::get_for_user(pool, user_id).await.unwrap();
    assert_eq!(roles.len(), 2);
    assert!(roles.contains(&Role::Creator));
    assert!(roles.contains(&Role::User));

    assert!(tunex_storage::roles::user_has_role(pool, user_id, Role::User)
        .await
        .unwrap());
    assert!(
        !tunex_storage::roles::user_has_role(pool, user_id, Role::Admin)
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_unknown_role_fails_creation() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let result = tunex_storage::users::create(
        pool,
        CreateUser {
            username: "carol".to_string(),
            email: "carol@example.com".to_string(),
            password_hash: "$2b$12$hash".to_string(),
            roles: vec![],
        },
    )
    .await;

    assert!(matches!(result, Err(TunexError::InvalidInput(_))));
}

#[tokio::test]
async fn test_password_hash_lookup() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_user(pool, "alice@example.com", "alice", &[Role::User]).await;

    let hash = tunex_storage::users::get_password_hash(pool, "alice@example.com")
        .await
        .unwrap();
    assert_eq!(hash.as_deref(), Some("$2b$12$test-hash"));

    let missing = tunex_storage::users::get_password_hash(pool, "nobody@example.com")
        .await
        .unwrap();
    assert!(missing.is_none());
}
