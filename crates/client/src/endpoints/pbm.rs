//! Storage Policy methods.
//!
//! Every call carries the caller's [`RequestContext`] as SOAP header entries.

use reqwest::Client;
use std::fmt::Write;

use super::request::send_soap_request;
use crate::error::Result;
use crate::models::{
    CompatibilityResult, ManagedObjectReference, PbmServiceContent, Profile, ProfileId,
};
use crate::soap::{Envelope, FromXml, PBM_NAMESPACE, RequestContext, escape};

/// `PbmRetrieveServiceContent` on the PBM service instance.
pub async fn retrieve_pbm_service_content(
    client: &Client,
    url: &str,
    soap_action: &str,
    cookie: &str,
    context: &RequestContext,
) -> Result<PbmServiceContent> {
    let this = ManagedObjectReference::new("PbmServiceInstance", "ServiceInstance");
    let envelope = Envelope::new(PBM_NAMESPACE, "PbmRetrieveServiceContent").this(&this);
    let response =
        send_soap_request(client, url, soap_action, Some(cookie), &envelope, Some(context)).await?;
    PbmServiceContent::from_xml(response.returnval()?)
}

/// `PbmQueryProfile`: ids of the profiles of a resource type and optional category.
#[allow(clippy::too_many_arguments)]
pub async fn query_profile(
    client: &Client,
    url: &str,
    soap_action: &str,
    cookie: &str,
    context: &RequestContext,
    profile_manager: &ManagedObjectReference,
    resource_type: &str,
    category: Option<&str>,
) -> Result<Vec<ProfileId>> {
    let mut envelope = Envelope::new(PBM_NAMESPACE, "PbmQueryProfile")
        .this(profile_manager)
        .raw(&format!(
            "<resourceType><resourceType>{}</resourceType></resourceType>",
            escape(resource_type)
        ));
    if let Some(category) = category {
        envelope = envelope.text("profileCategory", category);
    }
    let response =
        send_soap_request(client, url, soap_action, Some(cookie), &envelope, Some(context)).await?;
    response.returnvals().map(ProfileId::from_xml).collect()
}

/// `PbmRetrieveContent`: full profiles for `ids`, in server order.
pub async fn retrieve_content(
    client: &Client,
    url: &str,
    soap_action: &str,
    cookie: &str,
    context: &RequestContext,
    profile_manager: &ManagedObjectReference,
    ids: &[ProfileId],
) -> Result<Vec<Profile>> {
    let mut profile_ids = String::new();
    for id in ids {
        let _ = write!(
            profile_ids,
            "<profileIds><uniqueId>{}</uniqueId></profileIds>",
            escape(&id.unique_id)
        );
    }
    let envelope = Envelope::new(PBM_NAMESPACE, "PbmRetrieveContent")
        .this(profile_manager)
        .raw(&profile_ids);
    let response =
        send_soap_request(client, url, soap_action, Some(cookie), &envelope, Some(context)).await?;
    response.returnvals().map(Profile::from_xml).collect()
}

/// `PbmCheckCompatibility` of every hub the solver knows against `profile`.
pub async fn check_compatibility(
    client: &Client,
    url: &str,
    soap_action: &str,
    cookie: &str,
    context: &RequestContext,
    placement_solver: &ManagedObjectReference,
    profile: &ProfileId,
) -> Result<Vec<CompatibilityResult>> {
    let envelope = Envelope::new(PBM_NAMESPACE, "PbmCheckCompatibility")
        .this(placement_solver)
        .raw(&format!(
            "<profile><uniqueId>{}</uniqueId></profile>",
            escape(&profile.unique_id)
        ));
    let response =
        send_soap_request(client, url, soap_action, Some(cookie), &envelope, Some(context)).await?;
    response.returnvals().map(CompatibilityResult::from_xml).collect()
}
