//! vim25 methods: service content, session and property collector.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use super::property_spec::PropertyFilterSpec;
use super::request::send_soap_request;
use crate::error::Result;
use crate::models::{ManagedObjectReference, ObjectContent, ServiceContent, UserSession};
use crate::soap::{Envelope, FromXml, VIM_NAMESPACE, XmlNode};

fn service_instance() -> ManagedObjectReference {
    ManagedObjectReference::new("ServiceInstance", "ServiceInstance")
}

/// `RetrieveServiceContent`; needs no session.
pub async fn retrieve_service_content(
    client: &Client,
    url: &str,
    soap_action: &str,
) -> Result<ServiceContent> {
    let envelope = Envelope::new(VIM_NAMESPACE, "RetrieveServiceContent").this(&service_instance());
    let response = send_soap_request(client, url, soap_action, None, &envelope, None).await?;
    ServiceContent::from_xml(response.returnval()?)
}

/// `Login`. Returns the user session and the raw `Set-Cookie` header.
pub async fn login(
    client: &Client,
    url: &str,
    soap_action: &str,
    session_manager: &ManagedObjectReference,
    username: &str,
    password: &SecretString,
) -> Result<(UserSession, Option<String>)> {
    debug!("Logging in to vSphere as {}", username);

    let envelope = Envelope::new(VIM_NAMESPACE, "Login")
        .this(session_manager)
        .text("userName", username)
        .text("password", password.expose_secret());
    let response = send_soap_request(client, url, soap_action, None, &envelope, None).await?;
    let session = UserSession::from_xml(response.returnval()?)?;
    Ok((session, response.set_cookie))
}

/// `Logout` for the session identified by `cookie`.
pub async fn logout(
    client: &Client,
    url: &str,
    soap_action: &str,
    cookie: &str,
    session_manager: &ManagedObjectReference,
) -> Result<()> {
    let envelope = Envelope::new(VIM_NAMESPACE, "Logout").this(session_manager);
    send_soap_request(client, url, soap_action, Some(cookie), &envelope, None).await?;
    Ok(())
}

fn collect_objects(result: Option<&XmlNode>, out: &mut Vec<ObjectContent>) -> Result<Option<String>> {
    let Some(result) = result else {
        return Ok(None);
    };
    for object in result.children_named("objects") {
        out.push(ObjectContent::from_xml(object)?);
    }
    Ok(result
        .child_text("token")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string))
}

/// `RetrievePropertiesEx`, following continuation tokens until the result
/// set is exhausted.
pub async fn retrieve_properties(
    client: &Client,
    url: &str,
    soap_action: &str,
    cookie: &str,
    property_collector: &ManagedObjectReference,
    spec: &PropertyFilterSpec,
) -> Result<Vec<ObjectContent>> {
    let envelope = Envelope::new(VIM_NAMESPACE, "RetrievePropertiesEx")
        .this(property_collector)
        .raw(&spec.to_xml())
        .raw("<options></options>");
    let response = send_soap_request(client, url, soap_action, Some(cookie), &envelope, None).await?;

    let mut objects = Vec::new();
    let mut token = collect_objects(response.payload.child("returnval"), &mut objects)?;

    while let Some(current) = token {
        debug!(fetched = objects.len(), "Continuing property retrieval");
        let envelope = Envelope::new(VIM_NAMESPACE, "ContinueRetrievePropertiesEx")
            .this(property_collector)
            .text("token", &current);
        let response =
            send_soap_request(client, url, soap_action, Some(cookie), &envelope, None).await?;
        token = collect_objects(response.payload.child("returnval"), &mut objects)?;
    }

    Ok(objects)
}
