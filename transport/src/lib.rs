//! HTTP transport for the fixture harness
//!
//! This crate provides the reqwest implementation of the [`HttpClient`]
//! trait, the production side of the seam that `Users` calls through.
//!
//! # Usage
//!
//! ```rust,no_run
//! use transport::ReqwestHttpClient;
//! use fixture_core::Users;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let users = Users::new(ReqwestHttpClient::new());
//!
//!     let response = users.all().await?;
//!     println!("Fetched {} users", response.data.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod common;

pub use client::ReqwestHttpClient;

// Callers configuring the inner client use the same reqwest version
pub use reqwest;

// Re-export commonly used types from fixture-core for convenience
pub use fixture_core::{
    error::{FixtureError, Result},
    http::HttpClient,
    models::{Response, User},
};
