//! End-to-end tests for the email + one-time-code login flow.
//!
//! These tests drive the public `AuthContext` surface with the in-memory
//! stores - no filesystem required.

#![allow(clippy::unwrap_used)]

use passgate::session::Role;
use passgate::{AuthContext, InMemoryOtpRepository, InMemorySessionStore};

fn create_auth() -> AuthContext<InMemoryOtpRepository, InMemorySessionStore> {
    AuthContext::new(InMemoryOtpRepository::new(), InMemorySessionStore::new())
}

#[tokio::test]
async fn test_code_verifies_exactly_once() {
    let auth = create_auth();

    let code = auth.request_code("user@example.com").await.unwrap();
    let digits = code.expose_secret().to_owned();

    assert!(auth.attempt_login("user@example.com", &digits).await.unwrap());

    // the same code a second time is rejected
    assert!(!auth.attempt_login("user@example.com", &digits).await.unwrap());
}

#[tokio::test]
async fn test_reissue_invalidates_previous_code() {
    let auth = create_auth();

    let first = auth.request_code("user@example.com").await.unwrap();
    let second = auth.request_code("user@example.com").await.unwrap();

    if first != second {
        assert!(!auth
            .attempt_login("user@example.com", first.expose_secret())
            .await
            .unwrap());
    }

    assert!(auth
        .attempt_login("user@example.com", second.expose_secret())
        .await
        .unwrap());
}

#[tokio::test]
async fn test_failed_attempt_allows_retry() {
    let auth = create_auth();

    let code = auth.request_code("user@example.com").await.unwrap();

    // a mismatch does not consume the pending code
    assert!(!auth.attempt_login("user@example.com", "000000").await.unwrap());
    assert!(!auth.attempt_login("user@example.com", "999999").await.unwrap());

    assert!(auth
        .attempt_login("user@example.com", code.expose_secret())
        .await
        .unwrap());
}

#[tokio::test]
async fn test_role_derivation() {
    let auth = create_auth();

    let code = auth.request_code("admin@x.com").await.unwrap();
    auth.attempt_login("admin@x.com", code.expose_secret())
        .await
        .unwrap();
    assert_eq!(auth.current_identity().unwrap().role, Role::Elevated);

    auth.logout().await.unwrap();

    let code = auth.request_code("company@x.com").await.unwrap();
    auth.attempt_login("company@x.com", code.expose_secret())
        .await
        .unwrap();
    assert_eq!(auth.current_identity().unwrap().role, Role::Standard);
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let auth = create_auth();

    let code = auth.request_code("user@example.com").await.unwrap();
    auth.attempt_login("user@example.com", code.expose_secret())
        .await
        .unwrap();
    assert!(auth.is_authenticated());

    auth.logout().await.unwrap();
    assert!(auth.current_identity().is_none());

    // a second logout changes nothing and does not error
    auth.logout().await.unwrap();
    assert!(auth.current_identity().is_none());
}

#[tokio::test]
async fn test_codes_are_per_email() {
    let auth = create_auth();

    let alice_code = auth.request_code("alice@example.com").await.unwrap();
    let bob_code = auth.request_code("bob@example.com").await.unwrap();

    // alice's code does not log bob in
    if alice_code != bob_code {
        assert!(!auth
            .attempt_login("bob@example.com", alice_code.expose_secret())
            .await
            .unwrap());
    }

    assert!(auth
        .attempt_login("bob@example.com", bob_code.expose_secret())
        .await
        .unwrap());
    assert_eq!(auth.current_identity().unwrap().email, "bob@example.com");
}

#[tokio::test]
async fn test_worked_example_scenario() {
    // requestCode -> wrong code -> right code -> elevated session -> logout
    let auth = create_auth();

    let code = auth.request_code("admin@acme.com").await.unwrap();

    assert!(!auth.attempt_login("admin@acme.com", "111111").await.unwrap());
    assert!(auth.current_identity().is_none());

    assert!(auth
        .attempt_login("admin@acme.com", code.expose_secret())
        .await
        .unwrap());
    let identity = auth.current_identity().unwrap();
    assert_eq!(identity.email, "admin@acme.com");
    assert_eq!(identity.role, Role::Elevated);

    auth.logout().await.unwrap();
    assert!(auth.current_identity().is_none());
}
