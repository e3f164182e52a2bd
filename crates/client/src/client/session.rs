//! Login and logout.
//!
//! # Invariants
//! - `login()` keeps the `Set-Cookie` header verbatim; the Storage Policy
//!   sub-session extracts its cookie value from it
//! - `logout()` clears the local session even when the server call fails

use tracing::{debug, info};

use crate::client::{Session, VimClient};
use crate::endpoints;
use crate::error::{ClientError, Result};

impl VimClient {
    /// Open a session with the configured credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if the server rejects the credentials.
    /// Returns [`ClientError::InvalidCookie`] if the login response carries no
    /// session cookie.
    pub async fn login(&mut self) -> Result<&Session> {
        let url = self.sdk_url();
        let service_content =
            endpoints::retrieve_service_content(&self.http, &url, &self.soap_action).await?;
        if let Some(name) = &service_content.about.full_name {
            debug!(server = %name, "Retrieved service content");
        }

        let (user_session, cookie) = endpoints::login(
            &self.http,
            &url,
            &self.soap_action,
            &service_content.session_manager,
            &self.username,
            &self.password,
        )
        .await?;
        let cookie = cookie.ok_or_else(|| {
            ClientError::InvalidCookie("login response carried no session cookie".to_string())
        })?;

        info!(
            user = %user_session.user_name,
            full_name = user_session.full_name.as_deref().unwrap_or_default(),
            host = %self.host(),
            "Logged in to vSphere"
        );

        Ok(self.session.insert(Session {
            host: self.host(),
            cookie,
            user_name: user_session.user_name,
            service_content,
        }))
    }

    /// Close the session. Does nothing when no session is open.
    pub async fn logout(&mut self) -> Result<()> {
        let Some(session) = self.session.take() else {
            return Ok(());
        };
        endpoints::logout(
            &self.http,
            &self.sdk_url(),
            &self.soap_action,
            session.cookie_header(),
            &session.service_content.session_manager,
        )
        .await?;
        debug!(user = %session.user_name, "Logged out");
        Ok(())
    }
}
