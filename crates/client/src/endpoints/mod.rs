//! SOAP method implementations.
//!
//! Each function builds one request envelope, sends it and converts the
//! `returnval` elements of the response into typed records. Callers supply
//! the HTTP client, endpoint URL, `SOAPAction` value and session cookie.

mod pbm;
mod property_spec;
mod request;
mod vim;

pub use pbm::{
    check_compatibility, query_profile, retrieve_content, retrieve_pbm_service_content,
};
pub use property_spec::{ObjectSpec, PropertyFilterSpec, PropertySpec, TraversalSpec};
pub use request::{SoapResponse, send_soap_request};
pub use vim::{login, logout, retrieve_properties, retrieve_service_content};
