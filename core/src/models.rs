use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{FixtureError, Result};

/// A user record as served by the `/users` endpoint.
///
/// Records are sourced externally and never mutated by this crate. The
/// JSON shape is `{ "id": 1, "first_name": "..", "last_name": "..", "email": ".." }`.
///
/// # Examples
///
/// ```rust
/// use fixture_core::models::User;
///
/// let user = User::new(1, "Ada", "Lovelace", "ada@example.com");
/// assert_eq!(user.full_name(), "Ada Lovelace");
///
/// let json = serde_json::to_value(&user).unwrap();
/// assert_eq!(json["first_name"], "Ada");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct User {
    /// Positive identifier, unique within one response
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    pub fn new(
        id: u32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Response envelope wrapping a decoded body under `data`.
///
/// Both the real HTTP client and test doubles produce this shape, so the
/// calling code cannot tell them apart.
///
/// # Examples
///
/// ```rust
/// use fixture_core::models::Response;
///
/// let ok = Response::ok(vec![1, 2, 3]);
/// assert!(ok.is_success());
///
/// let missing = Response::with_status(404, serde_json::Value::Null);
/// assert_eq!(missing.error_for_status().unwrap_err().status_code(), Some(404));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Response<T> {
    /// HTTP status code
    pub status: u16,
    /// Decoded response body
    pub data: T,
}

impl<T> Response<T> {
    /// Envelope with status 200
    pub fn ok(data: T) -> Self {
        Self { status: 200, data }
    }

    /// Envelope with an explicit status
    pub fn with_status(status: u16, data: T) -> Self {
        Self { status, data }
    }

    /// True for any 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-success envelope into [`FixtureError::Status`]
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FixtureError::Status(self.status))
        }
    }

    /// Transform the body, keeping the status
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        Response {
            status: self.status,
            data: f(self.data),
        }
    }
}

impl Response<serde_json::Value> {
    /// Decode the raw JSON body into a typed envelope
    pub fn decode<U: DeserializeOwned>(self) -> Result<Response<U>> {
        let data = serde_json::from_value(self.data).map_err(FixtureError::decode)?;
        Ok(Response {
            status: self.status,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_json_shape() {
        let user = User::new(1, "Grace", "Hopper", "grace@example.com");
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 1,
                "first_name": "Grace",
                "last_name": "Hopper",
                "email": "grace@example.com"
            })
        );

        let decoded: User = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, user);
    }

    #[test]
    fn test_response_status_checks() {
        assert!(Response::ok(()).is_success());
        assert!(Response::with_status(204, ()).is_success());
        assert!(!Response::with_status(301, ()).is_success());
        assert!(!Response::with_status(500, ()).is_success());

        assert!(Response::ok(()).error_for_status().is_ok());
        assert_eq!(
            Response::with_status(503, ()).error_for_status(),
            Err(FixtureError::Status(503))
        );
    }

    #[test]
    fn test_response_decode() {
        let raw = Response::ok(json!([
            {"id": 1, "first_name": "A", "last_name": "B", "email": "a@b.c"}
        ]));
        let typed: Response<Vec<User>> = raw.decode().unwrap();

        assert_eq!(typed.status, 200);
        assert_eq!(typed.data, vec![User::new(1, "A", "B", "a@b.c")]);
    }

    #[test]
    fn test_response_decode_rejects_wrong_shape() {
        let raw = Response::ok(json!({"users": []}));
        let error = raw.decode::<Vec<User>>().unwrap_err();
        assert!(error.is_decode());
    }

    #[test]
    fn test_response_map() {
        let response = Response::with_status(201, 2).map(|n| n * 21);
        assert_eq!(response, Response::with_status(201, 42));
    }
}
