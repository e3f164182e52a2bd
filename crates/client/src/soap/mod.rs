//! SOAP envelope construction and response parsing.
//!
//! # What this module handles:
//! - Building request envelopes with XML-escaped arguments
//! - Carrying a [`RequestContext`] into the SOAP header
//! - Parsing response envelopes into an [`XmlNode`] tree and mapping faults
//!
//! # What this module does NOT handle:
//! - HTTP transport (see [`crate::endpoints::send_soap_request`])
//! - Typed extraction of specific records (see [`crate::models`])

mod context;
mod envelope;
mod response;
mod xml;

pub use context::RequestContext;
pub use envelope::{Envelope, escape};
pub use response::{parse_fault, parse_response};
pub use xml::{FromXml, XmlNode};

/// Namespace of the vSphere management API.
pub const VIM_NAMESPACE: &str = "urn:vim25";

/// Namespace of the Storage Policy API.
pub const PBM_NAMESPACE: &str = "urn:pbm";
