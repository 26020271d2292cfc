//! Fixtures CLI Library
//!
//! Command-line front end for the fixture modules and the users accessor,
//! including configuration loading, logging setup and accessor wiring.

pub mod cli;
pub mod commands;
pub mod config;
pub mod setup;
pub mod telemetry;

pub use cli::{Cli, Command};
pub use commands::execute;
pub use config::Config;
pub use setup::{create_http_client, create_users};
pub use telemetry::init_telemetry;
