//! Client builder for constructing [`VimClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, credentials)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # Invariants
//! - `base_url` and credentials must be provided before calling `build()`
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use secrecy::SecretString;
use vsphere_config::{
    Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS, DEFAULT_VIM_API_VERSION},
};

use crate::client::VimClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`VimClient`].
pub struct VimClientBuilder {
    base_url: Option<String>,
    credentials: Option<(String, SecretString)>,
    api_version: String,
    skip_verify: bool,
    timeout: Duration,
    pbm_port: Option<u16>,
}

impl Default for VimClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            api_version: DEFAULT_VIM_API_VERSION.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            pbm_port: None,
        }
    }
}

impl VimClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the vCenter server, e.g. `https://vcenter.example.com`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the user name and password used by `login()`.
    pub fn credentials(mut self, username: impl Into<String>, password: SecretString) -> Self {
        self.credentials = Some((username.into(), password));
        self
    }

    /// Set the API version sent in the `SOAPAction` header. Default is `7.0`.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against servers with self-signed certificates you trust.
    /// The Storage Policy sub-session inherits this setting.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the Storage Policy endpoint port. By default the scheme's port is used.
    pub fn pbm_port(mut self, port: Option<u16>) -> Self {
        self.pbm_port = port;
        self
    }

    /// Create a client builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.credentials = Some((config.auth.username.clone(), config.auth.password.clone()));
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.pbm_port = config.connection.pbm_port;
        self
    }

    /// Build the [`VimClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing or unparseable.
    /// Returns [`ClientError::AuthFailed`] if no credentials were provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<VimClient> {
        let raw = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = url::Url::parse(raw.trim_end_matches('/'))
            .map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))?;
        if base_url.host_str().is_none() {
            return Err(ClientError::InvalidUrl(format!("{raw}: missing host")));
        }

        let (username, password) = self
            .credentials
            .ok_or_else(|| ClientError::AuthFailed("credentials are required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.scheme() == "https" {
                tracing::warn!("TLS certificate verification is disabled");
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(VimClient {
            http,
            base_url,
            soap_action: format!("urn:vim25/{}", self.api_version),
            username,
            password,
            skip_verify: self.skip_verify,
            timeout: self.timeout,
            pbm_port: self.pbm_port,
            session: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vsphere_config::{AuthConfig, ConnectionConfig};

    fn config() -> Config {
        Config {
            connection: ConnectionConfig {
                base_url: "https://vcenter.example.com".to_string(),
                skip_verify: true,
                timeout: Duration::from_secs(120),
                pbm_port: Some(8443),
            },
            auth: AuthConfig {
                username: "administrator@vsphere.local".to_string(),
                password: SecretString::new("secret".to_string().into()),
            },
        }
    }

    #[test]
    fn test_from_config_preserves_settings() {
        let client = VimClient::builder().from_config(&config()).build().unwrap();

        assert_eq!(client.base_url(), "https://vcenter.example.com");
        assert!(client.skip_verify());
        assert_eq!(client.timeout(), Duration::from_secs(120));
        assert_eq!(client.pbm_port(), Some(8443));
        assert_eq!(client.username, "administrator@vsphere.local");
        assert_eq!(client.soap_action, "urn:vim25/7.0");
    }

    #[test]
    fn test_build_missing_base_url() {
        let result = VimClient::builder()
            .credentials("admin", SecretString::new("pw".to_string().into()))
            .build();
        assert!(matches!(result.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_build_missing_credentials() {
        let result = VimClient::builder()
            .base_url("https://vc.example.com".to_string())
            .build();
        assert!(matches!(result.unwrap_err(), ClientError::AuthFailed(_)));
    }

    #[test]
    fn test_build_rejects_unparseable_url() {
        let result = VimClient::builder()
            .base_url("not a url".to_string())
            .credentials("admin", SecretString::new("pw".to_string().into()))
            .build();
        assert!(matches!(result.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_api_version_sets_soap_action() {
        let client = VimClient::builder()
            .base_url("https://vc.example.com".to_string())
            .credentials("admin", SecretString::new("pw".to_string().into()))
            .api_version("8.0.1.0")
            .build()
            .unwrap();
        assert_eq!(client.soap_action, "urn:vim25/8.0.1.0");
    }
}
