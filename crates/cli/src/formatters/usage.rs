//! Derived datastore usage figures.

use serde::Serialize;
use vsphere_client::Datastore;

/// Capacity and provisioning of one datastore, in bytes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatastoreUsage {
    pub name: String,
    pub url: String,
    pub capacity: i64,
    pub free_space: i64,
    pub uncommitted: i64,
    /// `capacity - free_space + uncommitted`.
    pub provisioned: i64,
    /// `provisioned - capacity`; only meaningful when positive.
    pub over_provisioned: i64,
    /// `over_provisioned * 100 / capacity`, or 0 when capacity is 0.
    pub over_provisioned_pct: f64,
    pub hosts: usize,
    pub vms: usize,
    /// Whether the datastore is reachable from vCenter.
    pub accessible: bool,
}

impl DatastoreUsage {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        capacity: i64,
        free_space: i64,
        uncommitted: Option<i64>,
    ) -> Self {
        let uncommitted = uncommitted.unwrap_or(0);
        let provisioned = capacity - free_space + uncommitted;
        let over_provisioned = provisioned - capacity;
        let over_provisioned_pct = if capacity == 0 {
            0.0
        } else {
            over_provisioned as f64 * 100.0 / capacity as f64
        };

        Self {
            name: name.into(),
            url: url.into(),
            capacity,
            free_space,
            uncommitted,
            provisioned,
            over_provisioned,
            over_provisioned_pct,
            hosts: 0,
            vms: 0,
            accessible: true,
        }
    }

    pub fn is_over_provisioned(&self) -> bool {
        self.over_provisioned > 0
    }
}

impl From<&Datastore> for DatastoreUsage {
    fn from(ds: &Datastore) -> Self {
        let summary = &ds.summary;
        Self {
            hosts: ds.hosts.len(),
            vms: ds.vms.len(),
            accessible: summary.accessible,
            ..Self::new(
                summary.name.clone(),
                summary.url.clone(),
                summary.capacity,
                summary.free_space,
                summary.uncommitted,
            )
        }
    }
}
