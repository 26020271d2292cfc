//! Fixture Core Library
//!
//! Small, pure fixture modules used as subjects under test, plus a
//! remote-data accessor whose HTTP call goes through an injectable seam.
//!
//! # Architecture
//!
//! - [`arithmetic`] - Binary operations on `f64` (IEEE-754 semantics)
//! - [`statistics`] - Sum and sign filters over number sequences
//! - [`text`] - Palindrome and anagram predicates
//! - [`models`] - `User` records and the `Response` envelope
//! - [`http`] - The `HttpClient` trait real and fake clients implement
//! - [`users`] - The `Users` accessor for the `/users` endpoint
//! - [`validation`] - Checks for externally sourced user records
//! - [`error`] - Error types and result handling
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{arithmetic, statistics, text};
//!
//! assert_eq!(arithmetic::add(2.0, 3.0), 5.0);
//! assert_eq!(statistics::positive(&[2.0, -1.0, 3.0]), vec![2.0, 3.0]);
//! assert!(text::is_anagram("arc", "car"));
//! ```

pub mod arithmetic;
pub mod error;
pub mod http;
pub mod models;
pub mod statistics;
pub mod text;
pub mod users;
pub mod validation;

// Re-export commonly used types at the crate root for convenience
pub use arithmetic::Operation;
pub use error::{FixtureError, Result};
pub use http::HttpClient;
pub use models::{Response, User};
pub use statistics::Summary;
pub use users::{Users, DEFAULT_BASE_URL, USERS_PATH};
pub use validation::UserValidator;

/// Current version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
