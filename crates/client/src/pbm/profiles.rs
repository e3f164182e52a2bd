//! Storage profile lookup.

use tracing::debug;

use super::PbmClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{Profile, ProfileId};

const RESOURCE_TYPE_STORAGE: &str = "STORAGE";
const CATEGORY_REQUIREMENT: &str = "REQUIREMENT";

/// The first profile, in the given order, whose name contains `name`.
///
/// Matching is a case-sensitive substring test, so `"Gold"` also matches
/// `"Gold-Replicated"` when that profile comes first.
pub fn select_profile(profiles: Vec<Profile>, name: &str) -> Result<Profile> {
    profiles
        .into_iter()
        .find(|profile| profile.name.contains(name))
        .ok_or_else(|| ClientError::NotFound(format!("storage profile matching '{name}'")))
}

impl PbmClient {
    /// Ids of all STORAGE profiles in the REQUIREMENT category.
    pub async fn query_requirement_profiles(&self) -> Result<Vec<ProfileId>> {
        endpoints::query_profile(
            &self.http,
            &self.url,
            &self.soap_action,
            &self.cookie,
            &self.context,
            &self.content.profile_manager,
            RESOURCE_TYPE_STORAGE,
            Some(CATEGORY_REQUIREMENT),
        )
        .await
    }

    /// Full profile content for `ids`, fetched in one call.
    pub async fn retrieve_profiles(&self, ids: &[ProfileId]) -> Result<Vec<Profile>> {
        endpoints::retrieve_content(
            &self.http,
            &self.url,
            &self.soap_action,
            &self.cookie,
            &self.context,
            &self.content.profile_manager,
            ids,
        )
        .await
    }

    /// All requirement profiles. No content call is made when there are none.
    pub async fn list_profiles(&self) -> Result<Vec<Profile>> {
        let ids = self.query_requirement_profiles().await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.retrieve_profiles(&ids).await
    }

    /// Resolve a profile by name substring.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] when the server has no requirement
    /// profiles (without fetching content) or none of them matches.
    pub async fn find_profile(&self, name: &str) -> Result<Profile> {
        let ids = self.query_requirement_profiles().await?;
        debug!(count = ids.len(), "Queried requirement profiles");
        if ids.is_empty() {
            return Err(ClientError::NotFound(format!(
                "storage profile matching '{name}' (no requirement profiles defined)"
            )));
        }
        let profiles = self.retrieve_profiles(&ids).await?;
        select_profile(profiles, name)
    }
}
