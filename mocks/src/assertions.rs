//! Custom assertion helpers for testing
//!
//! Provides specialized assertions for:
//! - User equality with per-field error messages
//! - Response envelopes from the accessor
//! - Float comparison and sequence partitioning

use fixture_core::{statistics, Response, User};

/// Assert users are equal, reporting the first mismatching field
pub fn assert_user_equals(actual: &User, expected: &User) {
    assert_eq!(actual.id, expected.id, "User IDs don't match");
    assert_eq!(actual.first_name, expected.first_name, "User first names don't match");
    assert_eq!(actual.last_name, expected.last_name, "User last names don't match");
    assert_eq!(actual.email, expected.email, "User emails don't match");
}

/// Assert two user lists are equal element by element, in order
pub fn assert_users_equal(actual: &[User], expected: &[User]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Expected {} users, got {}. Actual ids: {:?}",
        expected.len(),
        actual.len(),
        actual.iter().map(|u| u.id).collect::<Vec<_>>()
    );
    for (actual, expected) in actual.iter().zip(expected) {
        assert_user_equals(actual, expected);
    }
}

/// Assert an accessor response succeeded and carries exactly `expected`
pub fn assert_response_users(response: &Response<Vec<User>>, expected: &[User]) {
    assert!(
        response.is_success(),
        "Expected a success status, got {}",
        response.status
    );
    assert_users_equal(&response.data, expected);
}

/// Assert user list contains a user with a specific ID
pub fn assert_contains_user_with_id(users: &[User], id: u32) {
    assert!(
        users.iter().any(|u| u.id == id),
        "Expected to find user with id {} in user list, but it wasn't found. Available ids: {:?}",
        id,
        users.iter().map(|u| u.id).collect::<Vec<_>>()
    );
}

/// Assert two floats differ by at most `epsilon`
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() <= epsilon,
        "Expected {expected} ± {epsilon}, got {actual}"
    );
}

/// Assert positive/negative/zero filters partition `values`.
///
/// Every element lands in exactly one group, each group keeps the original
/// relative order, and the group sums add up to the total (within a
/// tolerance scaled to the magnitude of the input). `values` must not
/// contain NaN.
pub fn assert_partition(values: &[f64]) {
    let positive = statistics::positive(values);
    let negative = statistics::negative(values);
    let zeros = statistics::zeros(values);

    assert!(positive.iter().all(|v| *v > 0.0), "Non-positive value in {positive:?}");
    assert!(negative.iter().all(|v| *v < 0.0), "Non-negative value in {negative:?}");
    assert_eq!(
        positive.len() + negative.len() + zeros.len(),
        values.len(),
        "Partition of {values:?} lost or duplicated elements"
    );

    for group in [&positive, &negative, &zeros] {
        assert!(
            is_subsequence(group, values),
            "Group {group:?} is not in the input order of {values:?}"
        );
    }

    let magnitude: f64 = values.iter().map(|v| v.abs()).sum();
    assert_approx_eq(
        statistics::sum(&positive) + statistics::sum(&negative),
        statistics::sum(values),
        magnitude * 1e-9 + 1e-9,
    );
}

fn is_subsequence(group: &[f64], values: &[f64]) -> bool {
    let mut remaining = values.iter();
    group.iter().all(|g| remaining.any(|v| v == g))
}

/// Assert user matches partial criteria
pub fn assert_user_matches(user: &User, matcher: &UserMatcher) {
    if let Some(expected_id) = matcher.id {
        assert_eq!(user.id, expected_id, "User ID doesn't match expected");
    }
    if let Some(ref expected_first) = matcher.first_name {
        assert_eq!(user.first_name, *expected_first, "User first name doesn't match expected");
    }
    if let Some(ref expected_last) = matcher.last_name {
        assert_eq!(user.last_name, *expected_last, "User last name doesn't match expected");
    }
    if let Some(ref expected_domain) = matcher.email_domain {
        assert!(
            user.email.ends_with(&format!("@{expected_domain}")),
            "User email '{}' is not in domain '{}'",
            user.email,
            expected_domain
        );
    }
}

/// Flexible user matcher for partial assertions
#[derive(Debug, Default)]
pub struct UserMatcher {
    pub id: Option<u32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_domain: Option<String>,
}

impl UserMatcher {
    /// Create a new empty matcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Match users with specific ID
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    /// Match users with specific first name
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Match users with specific last name
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Match users whose email is in a domain
    pub fn with_email_domain(mut self, domain: impl Into<String>) -> Self {
        self.email_domain = Some(domain.into());
        self
    }
}
