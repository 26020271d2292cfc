//! Builder pattern implementations for easy test data construction
//!
//! Provides fluent builders for:
//! - User construction with sensible defaults
//! - Raw response envelopes for the mock client

use fixture_core::{Response, User};
use serde_json::{json, Value};

/// Builder for constructing User instances in tests
pub struct UserBuilder {
    user: User,
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UserBuilder {
    /// Create new builder with default values
    pub fn new() -> Self {
        Self {
            user: User::new(1, "Test", "User", "test.user@example.com"),
        }
    }

    /// Set user ID
    pub fn with_id(mut self, id: u32) -> Self {
        self.user.id = id;
        self
    }

    /// Set first name
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.user.first_name = first_name.into();
        self
    }

    /// Set last name
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.user.last_name = last_name.into();
        self
    }

    /// Set email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.user.email = email.into();
        self
    }

    /// Build the final User
    pub fn build(self) -> User {
        self.user
    }
}

/// Builder for raw envelopes served by [`crate::MockHttpClient`]
pub struct ResponseBuilder {
    status: u16,
    data: Value,
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseBuilder {
    /// Start with status 200 and an empty JSON array
    pub fn new() -> Self {
        Self {
            status: 200,
            data: json!([]),
        }
    }

    /// Set the HTTP status
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Set the body to a list of users
    pub fn with_users(mut self, users: &[User]) -> Self {
        self.data = json!(users);
        self
    }

    /// Set an arbitrary JSON body
    pub fn with_body(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// Build the final envelope
    pub fn build(self) -> Response<Value> {
        Response::with_status(self.status, self.data)
    }
}
