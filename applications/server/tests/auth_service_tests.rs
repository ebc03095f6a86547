//! Auth service integration tests
//!
//! Token pairs carry the whole session (user id, username, active role);
//! these tests pin that contract down from outside the crate.

use tunex_core::Role;
use tunex_server::middleware::AuthSession;
use tunex_server::services::AuthService;

fn service() -> AuthService {
    AuthService::new("integration-secret".to_string(), 24, 30)
}

fn session(role: Role) -> AuthSession {
    AuthSession {
        user_id: 99,
        username: "integration".to_string(),
        role,
    }
}

#[test]
fn access_token_round_trips_the_session() {
    let auth = service();
    let token = auth.create_access_token(&session(Role::Creator)).unwrap();

    let verified = auth.verify_access_token(&token).unwrap();
    assert_eq!(verified.user_id, 99);
    assert_eq!(verified.username, "integration");
    assert_eq!(verified.role, Role::Creator);
}

#[test]
fn tokens_from_another_secret_are_rejected() {
    let auth = service();
    let other = AuthService::new("different-secret".to_string(), 24, 30);

    let token = other.create_access_token(&session(Role::User)).unwrap();
    assert!(auth.verify_access_token(&token).is_err());
}

#[test]
fn refresh_token_is_not_an_access_token() {
    let auth = service();
    let refresh = auth.create_refresh_token(&session(Role::User)).unwrap();

    assert!(auth.verify_access_token(&refresh).is_err());
    assert!(auth.verify_refresh_token(&refresh).is_ok());
}

#[test]
fn garbage_tokens_are_rejected() {
    let auth = service();
    assert!(auth.verify_access_token("not-a-token").is_err());
    assert!(auth.verify_access_token("").is_err());
}
