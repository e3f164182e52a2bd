//! Datacenter and datastore queries through the property collector.

use tracing::debug;

use crate::client::VimClient;
use crate::endpoints::{self, ObjectSpec, PropertyFilterSpec, PropertySpec, TraversalSpec};
use crate::error::{ClientError, Result};
use crate::models::{Datacenter, Datastore, ManagedObjectReference};

const FOLDER_TRAVERSAL: &str = "folderTraversal";

/// Pick a datacenter by exact name, or the first one when `name` is `None`.
///
/// An empty list or a name with no match is [`ClientError::NotFound`].
pub fn select_datacenter(datacenters: Vec<Datacenter>, name: Option<&str>) -> Result<Datacenter> {
    let mut datacenters = datacenters.into_iter();
    let found = match name {
        Some(name) => datacenters.find(|dc| dc.name == name),
        None => datacenters.next(),
    };
    found.ok_or_else(|| match name {
        Some(name) => ClientError::NotFound(format!("datacenter '{name}'")),
        None => ClientError::NotFound("datacenter (inventory has none)".to_string()),
    })
}

/// Order `datastores` to follow `order`, dropping any not listed there.
fn order_like(order: &[ManagedObjectReference], mut datastores: Vec<Datastore>) -> Vec<Datastore> {
    let mut ordered = Vec::with_capacity(order.len());
    for reference in order {
        if let Some(pos) = datastores.iter().position(|ds| &ds.reference == reference) {
            ordered.push(datastores.swap_remove(pos));
        }
    }
    ordered
}

impl VimClient {
    /// All datacenters reachable from the root folder, in server order.
    pub async fn list_datacenters(&self) -> Result<Vec<Datacenter>> {
        let session = self.session()?;
        let spec = PropertyFilterSpec::new(PropertySpec::new("Datacenter", &["name", "datastore"]))
            .with_object(
                ObjectSpec::new(session.service_content.root_folder.clone())
                    .with_traversal(TraversalSpec::folder_recursion(FOLDER_TRAVERSAL)),
            );

        let objects = endpoints::retrieve_properties(
            &self.http,
            &self.sdk_url(),
            &self.soap_action,
            session.cookie_header(),
            &session.service_content.property_collector,
            &spec,
        )
        .await?;

        objects
            .iter()
            .filter(|o| o.obj.kind == "Datacenter")
            .map(Datacenter::try_from)
            .collect()
    }

    /// Find a datacenter by name, or the first one when `name` is `None`.
    pub async fn find_datacenter(&self, name: Option<&str>) -> Result<Datacenter> {
        let datacenters = self.list_datacenters().await?;
        debug!(count = datacenters.len(), "Listed datacenters");
        select_datacenter(datacenters, name)
    }

    /// Summary, host mounts and VMs of the given datastores, in the given order.
    pub async fn get_datastores(
        &self,
        references: &[ManagedObjectReference],
    ) -> Result<Vec<Datastore>> {
        if references.is_empty() {
            return Ok(Vec::new());
        }
        let session = self.session()?;
        let spec = references.iter().fold(
            PropertyFilterSpec::new(PropertySpec::new("Datastore", &["summary", "host", "vm"])),
            |spec, reference| spec.with_object(ObjectSpec::new(reference.clone())),
        );

        let objects = endpoints::retrieve_properties(
            &self.http,
            &self.sdk_url(),
            &self.soap_action,
            session.cookie_header(),
            &session.service_content.property_collector,
            &spec,
        )
        .await?;

        let datastores = objects
            .iter()
            .map(Datastore::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(order_like(references, datastores))
    }

    /// Datastores of the named datacenter (or the first datacenter).
    pub async fn datastores_for_datacenter(&self, name: Option<&str>) -> Result<Vec<Datastore>> {
        let datacenter = self.find_datacenter(name).await?;
        debug!(
            datacenter = %datacenter.name,
            datastores = datacenter.datastores.len(),
            "Resolved datacenter"
        );
        self.get_datastores(&datacenter.datastores).await
    }
}
