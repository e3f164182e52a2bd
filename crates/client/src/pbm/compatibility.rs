//! Placement compatibility check and datastore filter.

use super::PbmClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{CompatibilityResult, ProfileId};

/// Hub ids of the datastores that satisfy the policy.
///
/// A result is kept when it has no errors and its hub is a datastore. Order
/// and duplicates are preserved.
pub fn compatible_datastores(results: &[CompatibilityResult]) -> Vec<String> {
    results
        .iter()
        .filter(|result| result.is_compatible() && result.hub.is_datastore())
        .map(|result| result.hub.hub_id.clone())
        .collect()
}

impl PbmClient {
    /// Check every placement hub against `profile`.
    pub async fn check_compatibility(&self, profile: &ProfileId) -> Result<Vec<CompatibilityResult>> {
        endpoints::check_compatibility(
            &self.http,
            &self.url,
            &self.soap_action,
            &self.cookie,
            &self.context,
            &self.content.placement_solver,
            profile,
        )
        .await
    }
}
