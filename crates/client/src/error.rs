//! Error types for the vSphere client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during vSphere client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// An operation that needs a session was called before login.
    #[error("Not logged in; call login() first")]
    NotAuthenticated,

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-SOAP error response from the server.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// SOAP fault returned by the server.
    #[error("SOAP fault{}: {message}", .fault_type.as_ref().map(|t| format!(" ({t})")).unwrap_or_default())]
    SoapFault {
        fault_type: Option<String>,
        message: String,
    },

    /// Invalid response format from the server.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Session cookie string could not be parsed.
    #[error("Invalid session cookie: {0}")]
    InvalidCookie(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Not found.
    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl ClientError {
    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_) | Self::NotAuthenticated)
    }

    /// Check if this error is a missing profile, datacenter or similar lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
