//! Storage Policy Based Management records.

use serde::Serialize;

use super::common::ManagedObjectReference;
use crate::error::Result;
use crate::soap::{FromXml, XmlNode};

/// `hubType` value of placement hubs that are datastores.
pub const HUB_TYPE_DATASTORE: &str = "Datastore";

/// Root references returned by `PbmRetrieveServiceContent`.
#[derive(Debug, Clone)]
pub struct PbmServiceContent {
    pub profile_manager: ManagedObjectReference,
    pub placement_solver: ManagedObjectReference,
    pub version: Option<String>,
}

impl FromXml for PbmServiceContent {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self {
            profile_manager: ManagedObjectReference::from_xml(
                node.require_child("profileManager")?,
            )?,
            placement_solver: ManagedObjectReference::from_xml(
                node.require_child("placementSolver")?,
            )?,
            version: node
                .child("aboutInfo")
                .and_then(|about| about.child_text("version"))
                .map(str::to_string),
        })
    }
}

/// Opaque storage profile identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProfileId {
    pub unique_id: String,
}

impl ProfileId {
    pub fn new(unique_id: impl Into<String>) -> Self {
        Self {
            unique_id: unique_id.into(),
        }
    }
}

impl FromXml for ProfileId {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self::new(node.require_text("uniqueId")?.trim()))
    }
}

/// A storage policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    #[serde(rename = "id")]
    pub profile_id: ProfileId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

impl Profile {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            profile_id: ProfileId::new(id),
            name: name.into(),
            description: None,
            profile_category: None,
            resource_type: None,
        }
    }
}

impl FromXml for Profile {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        let non_empty = |name: &str| {
            node.child_text(name)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Ok(Self {
            profile_id: ProfileId::from_xml(node.require_child("profileId")?)?,
            name: node.require_text("name")?.to_string(),
            description: non_empty("description"),
            profile_category: non_empty("profileCategory"),
            resource_type: node
                .child("resourceType")
                .and_then(|rt| rt.child_text("resourceType"))
                .map(str::to_string),
        })
    }
}

/// A placement candidate: a datastore or storage pod.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementHub {
    pub hub_type: String,
    pub hub_id: String,
}

impl PlacementHub {
    pub fn new(hub_type: impl Into<String>, hub_id: impl Into<String>) -> Self {
        Self {
            hub_type: hub_type.into(),
            hub_id: hub_id.into(),
        }
    }

    pub fn is_datastore(&self) -> bool {
        self.hub_type == HUB_TYPE_DATASTORE
    }
}

impl FromXml for PlacementHub {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self::new(
            node.require_text("hubType")?.trim(),
            node.require_text("hubId")?.trim(),
        ))
    }
}

/// A server-side fault attached to a compatibility result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedMethodFault {
    pub fault_type: Option<String>,
    pub localized_message: Option<String>,
}

impl FromXml for LocalizedMethodFault {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self {
            fault_type: node
                .child("fault")
                .and_then(|f| f.attribute("xsi:type"))
                .map(str::to_string),
            localized_message: node.child_text("localizedMessage").map(str::to_string),
        })
    }
}

/// Outcome of checking one hub against a policy. An empty `errors` list means
/// the hub satisfies the policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityResult {
    pub hub: PlacementHub,
    pub errors: Vec<LocalizedMethodFault>,
}

impl CompatibilityResult {
    pub fn is_compatible(&self) -> bool {
        self.errors.is_empty()
    }
}

impl FromXml for CompatibilityResult {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self {
            hub: PlacementHub::from_xml(node.require_child("hub")?)?,
            errors: node
                .children_named("error")
                .map(LocalizedMethodFault::from_xml)
                .collect::<Result<Vec<_>>>()?,
        })
    }
}
