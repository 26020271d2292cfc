//! Mock implementations and test utilities for the fixture harness
//!
//! This crate provides the testing side of the HTTP seam:
//! - A deterministic `HttpClient` stand-in with error injection and call tracking
//! - Standard fixtures and fluent builders
//! - Custom assertion helpers
//! - Random data generators and property-based testing strategies
//! - Contract test helpers shared by the mock and the real client

pub mod assertions;
pub mod builders;
pub mod contracts;
pub mod fixtures;
pub mod generators;
pub mod http_client;

pub use assertions::*;
pub use builders::*;
pub use contracts::*;
pub use fixtures::*;
pub use generators::*;
pub use http_client::{MockHttpClient, ResponseGate};
