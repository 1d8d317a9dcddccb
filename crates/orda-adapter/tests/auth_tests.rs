/*
[INPUT]:  Mock identity provider scenarios
[OUTPUT]: Test results for the sign-in flow
[POS]:    Integration tests - identity provider
[UPDATE]: When the identity flow changes
*/

mod common;

use common::{TEST_EMAIL, TEST_PASSWORD, seeded_provider};
use orda_adapter::{AdapterError, IdentityProvider, InMemoryIdentityProvider};
use std::sync::Arc;
use tokio_test::{assert_err, assert_ok};

#[tokio::test]
async fn test_login_through_trait_object() {
    let provider: Arc<dyn IdentityProvider> = Arc::new(seeded_provider());
    assert!(provider.current_identity().is_none());

    let identity = assert_ok!(provider.login(TEST_EMAIL, TEST_PASSWORD).await);
    assert_eq!(identity.email, TEST_EMAIL);
    assert_eq!(provider.current_identity(), Some(identity));
}

#[tokio::test]
async fn test_login_is_case_insensitive_on_email() {
    let provider = seeded_provider();
    let identity = assert_ok!(provider.login("  Customer@ORDA.ng ", TEST_PASSWORD).await);
    assert_eq!(identity.email, TEST_EMAIL);
}

#[tokio::test]
async fn test_login_unknown_account() {
    let provider = InMemoryIdentityProvider::new();
    let err = assert_err!(provider.login(TEST_EMAIL, TEST_PASSWORD).await);
    assert!(matches!(err, AdapterError::Authentication { .. }));
}

#[tokio::test]
async fn test_register_then_login_again() {
    let provider = InMemoryIdentityProvider::new();
    let registered = assert_ok!(provider.register("driver@orda.ng", "okada-42").await);
    assert_ok!(provider.logout().await);
    assert!(provider.current_identity().is_none());

    let logged_in = assert_ok!(provider.login("driver@orda.ng", "okada-42").await);
    assert_eq!(registered.uid, logged_in.uid);
}

#[tokio::test]
async fn test_logout_without_session_is_ok() {
    let provider = InMemoryIdentityProvider::new();
    assert_ok!(provider.logout().await);
}
