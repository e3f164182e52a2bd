//! Configuration management for the vSphere storage tools.
//!
//! This crate provides types and loaders for managing vCenter connection
//! configuration from `.env` files, environment variables and CLI overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig};
