//! Single SOAP request/response exchange.

use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::soap::{Envelope, RequestContext, XmlNode, parse_fault, parse_response};

/// A parsed SOAP response.
#[derive(Debug, Clone)]
pub struct SoapResponse {
    /// The `<MethodResponse>` element from the body.
    pub payload: XmlNode,
    /// Raw `Set-Cookie` header, when the server sent one.
    pub set_cookie: Option<String>,
}

impl SoapResponse {
    /// All `returnval` children of the response.
    pub fn returnvals(&self) -> impl Iterator<Item = &XmlNode> {
        self.payload.children_named("returnval")
    }

    /// The single `returnval` child, failing when absent.
    pub fn returnval(&self) -> Result<&XmlNode> {
        self.payload.require_child("returnval")
    }
}

/// POST one envelope to `url` and parse the reply.
///
/// A non-2xx reply carrying a SOAP fault becomes [`ClientError::SoapFault`] or
/// [`ClientError::AuthFailed`]; any other non-2xx reply becomes
/// [`ClientError::ApiError`]. There is no retry.
pub async fn send_soap_request(
    client: &Client,
    url: &str,
    soap_action: &str,
    cookie: Option<&str>,
    envelope: &Envelope,
    context: Option<&RequestContext>,
) -> Result<SoapResponse> {
    debug!(method = envelope.method(), url, "Sending SOAP request");

    let mut builder = client
        .post(url)
        .header(CONTENT_TYPE, "text/xml; charset=utf-8")
        .header("SOAPAction", format!("\"{soap_action}\""))
        .body(envelope.build(context));
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }

    let response = builder.send().await?;
    let status = response.status();
    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);
    let response_url = response.url().to_string();
    let body = response.text().await?;

    if !status.is_success() {
        debug!(
            method = envelope.method(),
            status = status.as_u16(),
            "SOAP request failed"
        );
        return Err(parse_fault(&body).unwrap_or_else(|| ClientError::ApiError {
            status: status.as_u16(),
            url: response_url,
            message: body,
        }));
    }

    Ok(SoapResponse {
        payload: parse_response(&body)?,
        set_cookie,
    })
}
