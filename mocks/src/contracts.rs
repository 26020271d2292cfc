//! Contract test helpers for validating the HTTP seam
//!
//! Provides standardized checks that any [`HttpClient`] and any `Users`
//! accessor should pass, so the mock and the real client are held to the
//! same behavior.

use fixture_core::{FixtureError, HttpClient, User, UserValidator, Users};
use serde_json::Value;

use crate::assertions::assert_response_users;

/// Run the accessor contract against a `Users` whose endpoint serves `expected`
///
/// The endpoint must answer every call identically; the helper calls it
/// more than once.
pub async fn test_users_contract(users: &Users, expected: &[User]) {
    test_all_resolves_contract(users, expected).await;
    test_repeat_call_contract(users).await;
    test_records_valid_contract(users).await;
}

/// `all()` resolves to a success envelope carrying exactly `expected`
pub async fn test_all_resolves_contract(users: &Users, expected: &[User]) {
    let response = users.all().await.expect("all() should resolve");
    assert_response_users(&response, expected);
}

/// Each call issues its own request and sees the same data
pub async fn test_repeat_call_contract(users: &Users) {
    let first = users.all().await.expect("first call should resolve");
    let second = users.all().await.expect("second call should resolve");
    assert_eq!(first, second, "Repeated calls should return the same envelope");
}

/// Every record satisfies the user validation rules
pub async fn test_records_valid_contract(users: &Users) {
    let response = users.all().await.expect("all() should resolve");
    if let Err(e) = UserValidator::validate_users(&response.data) {
        panic!("Endpoint served invalid users: {e}");
    }
}

/// `all()` rejects with the given status instead of resolving
pub async fn test_rejection_contract(users: &Users, status: u16) {
    match users.all().await {
        Err(FixtureError::Status(code)) => {
            assert_eq!(code, status, "Rejected with the wrong status")
        }
        Err(other) => panic!("Expected Status({status}) error, got: {other:?}"),
        Ok(response) => panic!("Expected rejection, got resolved response: {response:?}"),
    }
}

/// A raw client returns a success envelope with the expected JSON body
pub async fn test_http_client_contract<C: HttpClient>(client: &C, url: &str, expected: &Value) {
    let response = client.get(url).await.expect("GET should succeed");
    assert!(
        response.is_success(),
        "Expected success status, got {}",
        response.status
    );
    assert_eq!(&response.data, expected, "Body differs from the expected JSON");
}
