//! Response envelope parsing and SOAP fault mapping.

use super::xml::XmlNode;
use crate::error::{ClientError, Result};

/// Fault types that mean the credentials or session were rejected.
const AUTH_FAULTS: [&str; 2] = ["InvalidLogin", "NotAuthenticated"];

fn body_content(envelope: &XmlNode) -> Result<&XmlNode> {
    if envelope.name() != "Envelope" {
        return Err(ClientError::InvalidResponse(format!(
            "expected SOAP Envelope, got <{}>",
            envelope.name()
        )));
    }
    envelope
        .require_child("Body")?
        .children()
        .first()
        .ok_or_else(|| ClientError::InvalidResponse("SOAP Body is empty".to_string()))
}

/// Parse a successful response envelope and return the `<MethodResponse>` element.
///
/// A `Fault` found in the body is turned into an error even when the HTTP
/// status was 2xx.
pub fn parse_response(xml: &str) -> Result<XmlNode> {
    let envelope = XmlNode::parse(xml)?;
    let content = body_content(&envelope)?;
    if content.name() == "Fault" {
        return Err(fault_to_error(content));
    }
    Ok(content.clone())
}

/// Parse a fault envelope into a [`ClientError`].
///
/// Returns `None` when `xml` is not a SOAP fault, so callers can fall back to
/// a plain HTTP error.
pub fn parse_fault(xml: &str) -> Option<ClientError> {
    let envelope = XmlNode::parse(xml).ok()?;
    let content = body_content(&envelope).ok()?;
    (content.name() == "Fault").then(|| fault_to_error(content))
}

fn fault_to_error(fault: &XmlNode) -> ClientError {
    let message = fault
        .child_text("faultstring")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("unknown fault")
        .to_string();
    let fault_type = fault_type(fault);

    match fault_type.as_deref() {
        Some(t) if AUTH_FAULTS.contains(&t) => ClientError::AuthFailed(message),
        _ => ClientError::SoapFault {
            fault_type,
            message,
        },
    }
}

/// The fault type from `<detail>`: the `xsi:type` of its first element, or
/// the element name with its `Fault` suffix removed.
fn fault_type(fault: &XmlNode) -> Option<String> {
    let detail = fault.child("detail")?.children().first()?;
    let kind = detail
        .attribute("xsi:type")
        .unwrap_or_else(|| detail.name().strip_suffix("Fault").unwrap_or(detail.name()));
    Some(kind.to_string())
}
