//! Storage Policy (PBM) sub-session.
//!
//! A [`PbmClient`] reuses the session of a logged-in [`VimClient`]: the
//! session cookie value is forwarded both as the HTTP `Cookie` header and as
//! the `vcSessionCookie` request context entry in the SOAP header of every
//! call.
//!
//! # Invariants
//! - The PBM endpoint is on the same host as the vim endpoint, with the port
//!   stripped; only an explicitly configured port is added back
//! - The HTTP client keeps no idle connections
//! - The request context is fixed at connect time and passed explicitly to
//!   every call

mod compatibility;
mod cookie;
mod profiles;

use tracing::{debug, warn};
use vsphere_config::constants::{
    PBM_SDK_PATH, PBM_VERSION, PBM_WIRE_VERSION, SESSION_COOKIE_NAME, VC_SESSION_COOKIE_KEY,
};

use crate::client::VimClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::PbmServiceContent;
use crate::soap::RequestContext;

pub use compatibility::compatible_datastores;
pub use cookie::{extract_session_cookie, strip_port};
pub use profiles::select_profile;

/// Storage Policy endpoint URL for a parent `scheme` and `host:port`.
pub fn pbm_url(scheme: &str, host: &str, port: Option<u16>) -> String {
    let hostname = strip_port(host);
    match port {
        Some(port) => format!("{scheme}://{hostname}:{port}{PBM_SDK_PATH}"),
        None => format!("{scheme}://{hostname}{PBM_SDK_PATH}"),
    }
}

/// Authenticated handle to the Storage Policy service.
#[derive(Debug)]
pub struct PbmClient {
    http: reqwest::Client,
    url: String,
    soap_action: String,
    cookie: String,
    context: RequestContext,
    content: PbmServiceContent,
}

impl PbmClient {
    /// Open a sub-session on top of the logged-in `vim` session and fetch the
    /// PBM service content.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError::NotAuthenticated`] if `vim` has no session.
    /// Returns [`crate::ClientError::InvalidCookie`] if the session cookie has no
    /// quoted value.
    pub async fn connect(vim: &VimClient, disable_ssl_verification: bool) -> Result<Self> {
        let session = vim.session()?;
        let cookie_value = extract_session_cookie(&session.cookie)?;
        let url = pbm_url(vim.scheme(), &session.host, vim.pbm_port());

        let cookie = format!("{SESSION_COOKIE_NAME}=\"{cookie_value}\"");

        let mut http_builder = reqwest::Client::builder()
            .timeout(vim.timeout())
            .pool_max_idle_per_host(0);
        if disable_ssl_verification {
            warn!("TLS certificate verification is disabled for the Storage Policy endpoint");
            http_builder = http_builder.danger_accept_invalid_certs(true);
        }
        let http = http_builder.build()?;

        let context = RequestContext::new().with(VC_SESSION_COOKIE_KEY, cookie_value);
        let soap_action = format!("urn:pbm/{PBM_WIRE_VERSION}");

        debug!(url = %url, version = PBM_VERSION, "Connecting to Storage Policy service");
        let content =
            endpoints::retrieve_pbm_service_content(&http, &url, &soap_action, &cookie, &context)
                .await?;

        Ok(Self {
            http,
            url,
            soap_action,
            cookie,
            context,
            content,
        })
    }

    /// The endpoint URL, e.g. `https://vcenter.example.com/pbm/sdk`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Profile manager and placement solver references.
    pub fn content(&self) -> &PbmServiceContent {
        &self.content
    }
}
