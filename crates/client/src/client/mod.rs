//! vSphere management API client.
//!
//! This module provides [`VimClient`], which owns the HTTP client and the
//! authenticated session for the `/sdk` endpoint.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Login and logout (private module)
//! - `inventory`: Datacenter and datastore queries (private module)
//!
//! # What this module does NOT handle:
//! - Envelope construction and HTTP exchange (delegated to [`crate::endpoints`])
//! - The Storage Policy sub-session (see [`crate::pbm`])
//!
//! # Invariants
//! - Methods that talk to the server after login fail with
//!   [`ClientError::NotAuthenticated`](crate::ClientError::NotAuthenticated)
//!   when no session is open
//! - Requests are never retried

pub mod builder;
mod inventory;
mod session;

use std::time::Duration;

use secrecy::SecretString;

use crate::error::{ClientError, Result};
use crate::models::ServiceContent;

pub use inventory::select_datacenter;

/// An authenticated vSphere session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Server authority as `host:port`.
    pub host: String,
    /// The `Set-Cookie` header returned by `Login`, kept verbatim.
    pub cookie: String,
    pub user_name: String,
    pub service_content: ServiceContent,
}

impl Session {
    /// The `name="value"` pair of the session cookie, without attributes.
    pub fn cookie_header(&self) -> &str {
        self.cookie
            .split(';')
            .next()
            .map(str::trim)
            .unwrap_or_default()
    }
}

/// vSphere management API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use vsphere_client::VimClient;
///
/// let mut client = VimClient::builder().from_config(&config).build()?;
/// client.login().await?;
/// let datastores = client.datastores_for_datacenter(Some("DC1")).await?;
/// client.logout().await?;
/// ```
#[derive(Debug)]
pub struct VimClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: url::Url,
    pub(crate) soap_action: String,
    pub(crate) username: String,
    pub(crate) password: SecretString,
    pub(crate) skip_verify: bool,
    pub(crate) timeout: Duration,
    pub(crate) pbm_port: Option<u16>,
    pub(crate) session: Option<Session>,
}

impl VimClient {
    /// Create a new client builder.
    pub fn builder() -> builder::VimClientBuilder {
        builder::VimClientBuilder::new()
    }

    /// Base URL without trailing slash, e.g. `https://vcenter.example.com`.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// URL scheme of the management endpoint (`https` or `http`).
    pub fn scheme(&self) -> &str {
        self.base_url.scheme()
    }

    pub fn skip_verify(&self) -> bool {
        self.skip_verify
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Explicit Storage Policy endpoint port, if configured.
    pub fn pbm_port(&self) -> Option<u16> {
        self.pbm_port
    }

    /// Server authority as `host:port`, using the scheme's default port when
    /// the URL has none.
    pub fn host(&self) -> String {
        let host = self.base_url.host_str().unwrap_or_default();
        match self.base_url.port_or_known_default() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        }
    }

    pub(crate) fn sdk_url(&self) -> String {
        format!("{}{}", self.base_url(), vsphere_config::constants::VIM_SDK_PATH)
    }

    /// The open session.
    pub fn session(&self) -> Result<&Session> {
        self.session.as_ref().ok_or(ClientError::NotAuthenticated)
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }
}
