//! # culina-cli
//!
//! Admin CLI for the Culina recipe service.
//!
//! This crate provides the `culina` binary:
//! - HTTP API server launch (`serve`)
//! - Account administration (`createsuperuser`, `user list`)
//! - Configuration management (`config path|get|set|init|export`)
//! - Health checks and version info

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;

pub use app::CulinaCli;
pub use cli::CliArgs;
pub use config::CulinaConfig;
