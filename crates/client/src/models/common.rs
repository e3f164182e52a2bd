//! Types shared by the vim and pbm APIs.

use serde::Serialize;

use crate::error::Result;
use crate::soap::{FromXml, XmlNode};

/// Reference to a server-side managed object, e.g. `Datastore:datastore-11`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ManagedObjectReference {
    /// Managed object type (`type` attribute), e.g. `Datastore`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Server-assigned identifier, e.g. `datastore-11`.
    pub value: String,
}

impl ManagedObjectReference {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for ManagedObjectReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}

impl FromXml for ManagedObjectReference {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        let kind = node.attribute("type").ok_or_else(|| {
            crate::error::ClientError::InvalidResponse(format!(
                "<{}> reference has no type attribute",
                node.name()
            ))
        })?;
        Ok(Self::new(kind, node.text().trim()))
    }
}
