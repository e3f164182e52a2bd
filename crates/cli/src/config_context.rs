//! Configuration assembly for command execution.
//!
//! Responsibilities:
//! - Layer environment variables and CLI flags into a validated `Config`.
//!
//! Does NOT handle:
//! - `.env` loading (done in `main()` before CLI parsing).
//! - CLI argument definitions (see `args` module).
//!
//! Invariants:
//! - CLI flags override environment variables; `--host` also displaces a
//!   `VSPHERE_BASE_URL` from the environment, while `--base-url` beats `--host`.
//! - Blank flag values are ignored so the environment value still applies.

use std::time::Duration;

use vsphere_config::{Config, ConfigError, ConfigLoader};

use crate::args::Cli;

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Build the connection configuration from the environment and `cli`.
pub(crate) fn build_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(host) = non_blank(&cli.host) {
        loader = loader.with_host(host);
    }
    if let Some(port) = cli.port {
        loader = loader.with_port(port);
    }
    if let Some(url) = non_blank(&cli.base_url) {
        loader = loader.with_base_url(url);
    }
    if let Some(username) = non_blank(&cli.username) {
        loader = loader.with_username(username);
    }
    if let Some(password) = cli.password.clone().filter(|p| !p.is_empty()) {
        loader = loader.with_password(password);
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    if let Some(port) = cli.pbm_port {
        loader = loader.with_pbm_port(port);
    }
    if cli.disable_ssl_verification {
        loader = loader.with_skip_verify(true);
    }

    loader.build()
}
