//! vSphere management and Storage Policy (SPBM) SOAP client.
//!
//! This crate provides a typed client for the subset of the vSphere
//! management API used by the storage tools: session login, inventory
//! property retrieval for datacenters and datastores, and the Storage Policy
//! sub-service for profile lookup and placement compatibility checks.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod pbm;
pub mod soap;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::builder::VimClientBuilder;
pub use client::{Session, VimClient, select_datacenter};
pub use error::{ClientError, Result};
pub use models::{
    CompatibilityResult, Datacenter, Datastore, DatastoreSummary, LocalizedMethodFault,
    ManagedObjectReference, PlacementHub, Profile, ProfileId,
};
pub use pbm::{
    PbmClient, compatible_datastores, extract_session_cookie, pbm_url, select_profile, strip_port,
};
pub use soap::RequestContext;
