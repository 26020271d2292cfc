//! Standard test fixtures for consistent testing
//!
//! Provides pre-built test data including:
//! - The two canonical users served by the mocked `/users` endpoint
//! - Response envelopes and raw JSON bodies
//! - Number sequences and string cases for the pure modules

use fixture_core::{Response, User};
use serde_json::{json, Value};

/// Create a basic test user with sensible defaults
pub fn create_test_user() -> User {
    User::new(1, "Jane", "Doe", "jane.doe@example.com")
}

/// The two users a mocked `/users` endpoint returns (ids 1 and 2)
pub fn create_test_users() -> Vec<User> {
    vec![
        create_test_user(),
        User::new(2, "John", "Smith", "john.smith@example.com"),
    ]
}

/// Create multiple unique users with ids `1..=count`
pub fn create_users(count: usize) -> Vec<User> {
    (1..=count)
        .map(|i| {
            User::new(
                i as u32,
                format!("First{i}"),
                format!("Last{i}"),
                format!("user{i}@example.com"),
            )
        })
        .collect()
}

/// Successful envelope carrying [`create_test_users`]
pub fn create_users_response() -> Response<Vec<User>> {
    Response::ok(create_test_users())
}

/// Raw JSON body of the `/users` endpoint
pub fn create_users_json() -> Value {
    json!([
        {"id": 1, "first_name": "Jane", "last_name": "Doe", "email": "jane.doe@example.com"},
        {"id": 2, "first_name": "John", "last_name": "Smith", "email": "john.smith@example.com"}
    ])
}

/// Mixed-sign sequence: sum 2, positives `[2, 1, 3]`, negatives `[-2, -1, -1]`
pub fn sample_sequence() -> Vec<f64> {
    vec![2.0, 1.0, 3.0, -2.0, -1.0, -1.0]
}

/// Sequence containing zeros between signed values
pub fn sequence_with_zeros() -> Vec<f64> {
    vec![0.0, 4.0, -3.0, 0.0, 2.5, -0.5, 0.0]
}

/// `(text, expected)` pairs for palindrome checks
pub fn palindrome_cases() -> Vec<(&'static str, bool)> {
    vec![
        ("racecar", true),
        ("hello", false),
        ("", true),
        ("noon", true),
        ("Noon", false),
    ]
}

/// `(a, b, expected)` triples for anagram checks
pub fn anagram_cases() -> Vec<(&'static str, &'static str, bool)> {
    vec![
        ("arc", "car", true),
        ("cat", "dog", false),
        ("", "", true),
        ("dusty", "study", true),
        ("aab", "abb", false),
    ]
}
