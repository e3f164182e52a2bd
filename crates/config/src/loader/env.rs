//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `VSPHERE_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_var<T: std::str::FromStr>(
    var: &str,
    value: &str,
    message: &str,
) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: message.to_string(),
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(host) = env_var_or_none("VSPHERE_HOST") {
        loader.set_host(Some(host));
    }
    if let Some(port) = env_var_or_none("VSPHERE_PORT") {
        loader.set_port(Some(parse_var(
            "VSPHERE_PORT",
            &port,
            "must be a port number between 0 and 65535",
        )?));
    }
    if let Some(url) = env_var_or_none("VSPHERE_BASE_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(username) = env_var_or_none("VSPHERE_USERNAME") {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none("VSPHERE_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(skip) = env_var_or_none("VSPHERE_DISABLE_SSL_VERIFICATION") {
        loader.set_skip_verify(Some(parse_var(
            "VSPHERE_DISABLE_SSL_VERIFICATION",
            &skip,
            "must be true or false",
        )?));
    }
    if let Some(timeout) = env_var_or_none("VSPHERE_TIMEOUT") {
        let secs: u64 = parse_var("VSPHERE_TIMEOUT", &timeout, "must be a number")?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(port) = env_var_or_none("VSPHERE_PBM_PORT") {
        loader.set_pbm_port(Some(parse_var(
            "VSPHERE_PBM_PORT",
            &port,
            "must be a port number between 0 and 65535",
        )?));
    }

    Ok(())
}
