//! Centralized constants for the vSphere storage tools workspace.
//!
//! This module contains default values and wire-level identifiers used
//! across crates to avoid magic value duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default vCenter HTTPS port.
pub const DEFAULT_VSPHERE_PORT: u16 = 443;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Wire Protocol
// =============================================================================

/// Path of the vSphere management SOAP endpoint.
pub const VIM_SDK_PATH: &str = "/sdk";

/// vSphere API version sent in the `SOAPAction` header.
pub const DEFAULT_VIM_API_VERSION: &str = "7.0";

/// Path of the Storage Policy (PBM) SOAP endpoint.
pub const PBM_SDK_PATH: &str = "/pbm/sdk";

/// Storage Policy protocol version token.
pub const PBM_VERSION: &str = "pbm.version.version1";

/// Wire version the PBM version token resolves to.
pub const PBM_WIRE_VERSION: &str = "1.0";

/// Name of the cookie carrying the vCenter session.
pub const SESSION_COOKIE_NAME: &str = "vmware_soap_session";

/// Request context key under which the session cookie is forwarded to PBM.
pub const VC_SESSION_COOKIE_KEY: &str = "vcSessionCookie";
