//! Typed records for vSphere and Storage Policy responses.
//!
//! Every record is built from the response tree at the client boundary via
//! [`FromXml`](crate::soap::FromXml); nothing downstream inspects raw XML.

mod common;
mod pbm;
mod vim;

pub use common::ManagedObjectReference;
pub use pbm::{
    CompatibilityResult, HUB_TYPE_DATASTORE, LocalizedMethodFault, PbmServiceContent,
    PlacementHub, Profile, ProfileId,
};
pub use vim::{
    AboutInfo, Datacenter, Datastore, DatastoreSummary, ObjectContent, ServiceContent,
    UserSession,
};
