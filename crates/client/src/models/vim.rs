//! vSphere management API records.

use serde::Serialize;

use super::common::ManagedObjectReference;
use crate::error::{ClientError, Result};
use crate::soap::{FromXml, XmlNode};

/// Product information from the service content.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AboutInfo {
    pub full_name: Option<String>,
    pub api_version: Option<String>,
}

/// Root references returned by `RetrieveServiceContent`.
#[derive(Debug, Clone)]
pub struct ServiceContent {
    pub root_folder: ManagedObjectReference,
    pub property_collector: ManagedObjectReference,
    pub session_manager: ManagedObjectReference,
    pub about: AboutInfo,
}

impl FromXml for ServiceContent {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        let about = node
            .child("about")
            .map(|about| AboutInfo {
                full_name: about.child_text("fullName").map(str::to_string),
                api_version: about.child_text("apiVersion").map(str::to_string),
            })
            .unwrap_or_default();

        Ok(Self {
            root_folder: ManagedObjectReference::from_xml(node.require_child("rootFolder")?)?,
            property_collector: ManagedObjectReference::from_xml(
                node.require_child("propertyCollector")?,
            )?,
            session_manager: ManagedObjectReference::from_xml(
                node.require_child("sessionManager")?,
            )?,
            about,
        })
    }
}

/// The session returned by `Login`.
#[derive(Debug, Clone)]
pub struct UserSession {
    pub user_name: String,
    pub full_name: Option<String>,
}

impl FromXml for UserSession {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self {
            user_name: node.require_text("userName")?.to_string(),
            full_name: node.child_text("fullName").map(str::to_string),
        })
    }
}

/// One object returned by the property collector with its requested properties.
#[derive(Debug, Clone)]
pub struct ObjectContent {
    pub obj: ManagedObjectReference,
    properties: Vec<(String, XmlNode)>,
}

impl ObjectContent {
    /// The `<val>` element of a property, if the server returned it.
    pub fn property(&self, name: &str) -> Option<&XmlNode> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, val)| val)
    }

    fn references(&self, name: &str) -> Result<Vec<ManagedObjectReference>> {
        self.property(name)
            .map(|val| {
                val.children_named("ManagedObjectReference")
                    .map(ManagedObjectReference::from_xml)
                    .collect()
            })
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

impl FromXml for ObjectContent {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        let obj = ManagedObjectReference::from_xml(node.require_child("obj")?)?;
        let properties = node
            .children_named("propSet")
            .map(|prop| {
                let name = prop.require_text("name")?.to_string();
                let val = prop.child("val").cloned().unwrap_or_default();
                Ok((name, val))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { obj, properties })
    }
}

/// A datacenter with its datastore references.
#[derive(Debug, Clone, Serialize)]
pub struct Datacenter {
    pub reference: ManagedObjectReference,
    pub name: String,
    pub datastores: Vec<ManagedObjectReference>,
}

impl TryFrom<&ObjectContent> for Datacenter {
    type Error = ClientError;

    fn try_from(content: &ObjectContent) -> Result<Self> {
        let name = content
            .property("name")
            .map(|val| val.text().trim().to_string())
            .ok_or_else(|| {
                ClientError::InvalidResponse(format!("{} has no name property", content.obj))
            })?;
        Ok(Self {
            reference: content.obj.clone(),
            name,
            datastores: content.references("datastore")?,
        })
    }
}

/// Snapshot of a datastore's capacity and usage, in bytes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatastoreSummary {
    pub name: String,
    pub url: String,
    pub capacity: i64,
    pub free_space: i64,
    /// Space promised to thin-provisioned disks but not yet written. Absent on
    /// some datastore types.
    pub uncommitted: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub accessible: bool,
}

impl FromXml for DatastoreSummary {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self {
            name: node.require_text("name")?.to_string(),
            url: node.child_text("url").unwrap_or_default().to_string(),
            capacity: node.child_i64("capacity")?.unwrap_or(0),
            free_space: node.child_i64("freeSpace")?.unwrap_or(0),
            uncommitted: node.child_i64("uncommitted")?,
            kind: node.child_text("type").map(str::to_string),
            accessible: node.child_bool("accessible").unwrap_or(false),
        })
    }
}

/// A datastore with its summary and the hosts and VMs attached to it.
#[derive(Debug, Clone, Serialize)]
pub struct Datastore {
    pub reference: ManagedObjectReference,
    pub summary: DatastoreSummary,
    pub hosts: Vec<ManagedObjectReference>,
    pub vms: Vec<ManagedObjectReference>,
}

impl TryFrom<&ObjectContent> for Datastore {
    type Error = ClientError;

    fn try_from(content: &ObjectContent) -> Result<Self> {
        let summary = content.property("summary").ok_or_else(|| {
            ClientError::InvalidResponse(format!("{} has no summary property", content.obj))
        })?;
        let hosts = content
            .property("host")
            .map(|val| {
                val.children_named("DatastoreHostMount")
                    .map(|mount| ManagedObjectReference::from_xml(mount.require_child("key")?))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            reference: content.obj.clone(),
            summary: DatastoreSummary::from_xml(summary)?,
            hosts,
            vms: content.references("vm")?,
        })
    }
}
