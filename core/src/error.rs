use thiserror::Error;

/// Result type alias for fixture operations
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Error types for the fixture harness.
///
/// The pure modules never produce these on their default paths: plain
/// arithmetic follows IEEE-754 and the predicates are total. Errors come
/// from the remote-data accessor (transport, status, decoding) and from the
/// opt-in checked helpers.
///
/// # Examples
///
/// ```rust
/// use fixture_core::error::FixtureError;
///
/// let status = FixtureError::Status(404);
/// assert!(status.is_status());
/// assert_eq!(status.status_code(), Some(404));
/// assert_eq!(status.to_string(), "Request failed with status code 404");
///
/// let refused = FixtureError::transport("connection refused");
/// assert!(refused.is_transport());
/// assert_eq!(refused.status_code(), None);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    /// The request never produced a response (connection refused, reset, DNS)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("Request failed with status code {0}")]
    Status(u16),

    /// The response body did not have the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Input rejected by a checked helper or validator
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl FixtureError {
    /// Create a transport error from any displayable cause
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        Self::Transport(cause.to_string())
    }

    /// Create a decode error from any displayable cause
    pub fn decode(cause: impl std::fmt::Display) -> Self {
        Self::Decode(cause.to_string())
    }

    /// Create a validation error for a zero divisor
    pub fn division_by_zero(dividend: f64) -> Self {
        Self::Validation(format!("Cannot divide {dividend} by zero"))
    }

    /// Create a validation error for a non-finite result
    pub fn non_finite(value: f64) -> Self {
        Self::Validation(format!("Result is not finite: {value}"))
    }

    /// Create a validation error for an invalid base URL
    pub fn invalid_base_url(url: &str) -> Self {
        Self::Configuration(format!("Base URL must start with http:// or https://, got '{url}'"))
    }

    /// Check if the request failed before a response arrived
    pub fn is_transport(&self) -> bool {
        matches!(self, FixtureError::Transport(_))
    }

    /// Check if the server answered with a non-success status
    pub fn is_status(&self) -> bool {
        matches!(self, FixtureError::Status(_))
    }

    /// Check if the response body could not be decoded
    pub fn is_decode(&self) -> bool {
        matches!(self, FixtureError::Decode(_))
    }

    /// Check if this error indicates a validation problem
    pub fn is_validation(&self) -> bool {
        matches!(self, FixtureError::Validation(_))
    }

    /// HTTP status carried by the error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FixtureError::Status(code) => Some(*code),
            _ => None,
        }
    }
}
