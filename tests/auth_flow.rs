//! Session manager integration tests
//!
//! Exercises signup, signin, rotation, replay detection and logout against
//! the in-memory credential store.

mod common;

use std::time::Duration;

use assert_matches::assert_matches;
use sessiongate::backend::auth::{hash_refresh_token, AuthError, CredentialStore};

use common::{memory_service, memory_service_with, test_config_with_refresh_ttl, PASSWORD};

#[tokio::test]
async fn signup_then_signin_succeeds() {
    let service = memory_service();
    service.signup("alice@example.com", PASSWORD).await.unwrap();

    let pair = service.signin("alice@example.com", PASSWORD).await.unwrap();
    let claims = service.codec().verify_access_token(&pair.access_token).unwrap();

    assert_eq!(claims.email, "alice@example.com");
}

#[tokio::test]
async fn signin_with_wrong_password_is_rejected() {
    let service = memory_service();
    service.signup("alice@example.com", PASSWORD).await.unwrap();

    assert_matches!(
        service.signin("alice@example.com", "not the password").await,
        Err(AuthError::InvalidCredentials)
    );
}

#[tokio::test]
async fn signin_with_unknown_email_is_rejected() {
    let service = memory_service();

    assert_matches!(
        service.signin("ghost@example.com", PASSWORD).await,
        Err(AuthError::InvalidCredentials)
    );
}

#[tokio::test]
async fn signin_ignores_email_case() {
    let service = memory_service();
    service.signup("alice@example.com", PASSWORD).await.unwrap();

    service.signin("ALICE@Example.com", PASSWORD).await.unwrap();
}

#[tokio::test]
async fn duplicate_signup_in_any_case_is_email_taken() {
    let service = memory_service();
    service.signup("A@x.com", PASSWORD).await.unwrap();

    assert_matches!(
        service.signup("a@x.com", PASSWORD).await,
        Err(AuthError::EmailTaken)
    );
}

#[tokio::test]
async fn refresh_token_is_single_use() {
    let service = memory_service();
    let original = service.signup("alice@example.com", PASSWORD).await.unwrap();

    let rotated = service.refresh(&original.refresh_token).await.unwrap();
    assert_ne!(rotated.refresh_token, original.refresh_token);

    // Replaying the rotated-out token is a security event...
    assert_matches!(
        service.refresh(&original.refresh_token).await,
        Err(AuthError::TokenMismatch)
    );

    // ...which leaves no valid session, not even for the newest token.
    assert_matches!(
        service.refresh(&rotated.refresh_token).await,
        Err(AuthError::SessionNotFound)
    );
}

#[tokio::test]
async fn rotation_chain_keeps_working() {
    let service = memory_service();
    let mut pair = service.signup("alice@example.com", PASSWORD).await.unwrap();

    for _ in 0..5 {
        pair = service.refresh(&pair.refresh_token).await.unwrap();
    }

    let claims = service.codec().verify_refresh_token(&pair.refresh_token).unwrap();
    let user = service.store().find_by_id(claims.sub).await.unwrap().unwrap();
    assert_eq!(
        user.refresh_token_hash,
        Some(hash_refresh_token(&pair.refresh_token))
    );
}

#[tokio::test]
async fn logout_then_refresh_is_session_not_found() {
    let service = memory_service();
    let pair = service.signup("alice@example.com", PASSWORD).await.unwrap();
    let claims = service.codec().verify_access_token(&pair.access_token).unwrap();

    service.logout(claims.sub).await.unwrap();

    assert_matches!(
        service.refresh(&pair.refresh_token).await,
        Err(AuthError::SessionNotFound)
    );
}

#[tokio::test]
async fn logout_is_idempotent() {
    let service = memory_service();
    let pair = service.signup("alice@example.com", PASSWORD).await.unwrap();
    let claims = service.codec().verify_access_token(&pair.access_token).unwrap();

    service.logout(claims.sub).await.unwrap();
    service.logout(claims.sub).await.unwrap();
}

#[tokio::test]
async fn access_token_is_not_a_refresh_token() {
    let service = memory_service();
    let pair = service.signup("alice@example.com", PASSWORD).await.unwrap();

    assert_matches!(
        service.refresh(&pair.access_token).await,
        Err(AuthError::TokenInvalid(_))
    );
}

#[tokio::test]
async fn garbage_refresh_token_is_invalid() {
    let service = memory_service();

    assert_matches!(
        service.refresh("not-a-jwt").await,
        Err(AuthError::TokenInvalid(_))
    );
}

#[tokio::test]
async fn refresh_token_expires_after_its_ttl() {
    let service = memory_service_with(&test_config_with_refresh_ttl(1));
    let pair = service.signup("alice@example.com", PASSWORD).await.unwrap();

    tokio::time::sleep(Duration::from_millis(2_100)).await;

    assert_matches!(
        service.refresh(&pair.refresh_token).await,
        Err(AuthError::TokenExpired)
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_refresh_has_exactly_one_winner() {
    for round in 0..20 {
        let service = memory_service();
        let email = format!("racer{round}@example.com");
        let pair = service.signup(&email, PASSWORD).await.unwrap();

        let a = {
            let service = service.clone();
            let token = pair.refresh_token.clone();
            tokio::spawn(async move { service.refresh(&token).await })
        };
        let b = {
            let service = service.clone();
            let token = pair.refresh_token.clone();
            tokio::spawn(async move { service.refresh(&token).await })
        };

        let results = [a.await.unwrap(), b.await.unwrap()];
        let winners: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
        let losers: Vec<_> = results.iter().filter_map(|r| r.as_ref().err()).collect();

        assert_eq!(winners.len(), 1, "round {round}: expected exactly one success");
        assert_eq!(losers.len(), 1);
        assert_matches!(losers[0], AuthError::TokenMismatch);

        // The race revoked the session, so no second valid session exists.
        assert_matches!(
            service.refresh(&winners[0].refresh_token).await,
            Err(AuthError::SessionNotFound)
        );
    }
}

#[tokio::test]
async fn access_token_round_trips_subject() {
    let service = memory_service();
    let pair = service.signup("alice@example.com", PASSWORD).await.unwrap();
    let claims = service.codec().verify_access_token(&pair.access_token).unwrap();

    let user = service.current_user(claims.sub).await.unwrap();
    assert_eq!(user.id, claims.sub);
}
