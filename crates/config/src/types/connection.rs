//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout, PBM port).
//! - Define the main `Config` structure combining connection and auth.
//!
//! Does NOT handle:
//! - Configuration loading from env/CLI (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `base_url` never carries a trailing slash.

use crate::types::auth::AuthConfig;
use std::time::Duration;

/// Connection configuration for a vCenter server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the vCenter server (e.g., https://vcenter.example.com:443)
    pub base_url: String,
    /// Whether to skip TLS certificate verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout
    pub timeout: Duration,
    /// Port of the Storage Policy endpoint. `None` uses the scheme's default port.
    pub pbm_port: Option<u16>,
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}
