//! Culina recipe service umbrella crate.
//!
//! This crate re-exports all Culina components for convenience.
//! Use feature flags to enable specific functionality.

#![doc = include_str!("../README.md")]

pub use culina_auth as auth;
pub use culina_core as core;
pub use culina_storage as storage;

#[cfg(feature = "api")]
pub use culina_api as api;

#[cfg(feature = "cli")]
pub use culina_cli as cli;
