//! Authentication types for vCenter connection configuration.
//!
//! Responsibilities:
//! - Define the username/password credentials used to open a vCenter session.
//!
//! Does NOT handle:
//! - The login exchange itself (see client crate).
//!
//! Invariants:
//! - The password uses `secrecy::SecretString` to prevent accidental logging.

use secrecy::SecretString;

/// Credentials for the vCenter session manager `Login` call.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// User name, e.g. `administrator@vsphere.local`.
    pub username: String,
    /// Password for `username`.
    pub password: SecretString,
}
