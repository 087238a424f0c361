//! # ntt-cli — Passport Registry Command-Line Interface
//!
//! Deploys a registry to a JSON state file and drives it from the shell.
//!
//! ## Subcommands
//!
//! - `deploy` — construct a registry and grant the initial Team members
//! - `grant-role` / `revoke-role` / `renounce-role` — role administration
//! - `mint` / `revoke` — credential lifecycle
//! - `query` — read-only lookups, printed as JSON
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from registry logic.
//! - Handlers load the state file, call one registry operation, and save
//!   only on success.

pub mod config;
pub mod credentials;
pub mod deploy;
pub mod query;
pub mod roles;
pub mod state;

pub use config::{CliConfig, ConfigError, LogFormat};
