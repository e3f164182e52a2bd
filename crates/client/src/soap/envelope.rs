//! Request envelope builder.

use std::fmt::Write;

use super::context::RequestContext;
use crate::models::ManagedObjectReference;

const ENVELOPE_OPEN: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    r#"<soapenv:Envelope xmlns:soapenc="http://schemas.xmlsoap.org/soap/encoding/""#,
    r#" xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/""#,
    r#" xmlns:xsd="http://www.w3.org/2001/XMLSchema""#,
    r#" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
);

/// Escape text for use inside an XML element or attribute.
pub fn escape(raw: &str) -> String {
    quick_xml::escape::escape(raw).into_owned()
}

/// Builder for a single SOAP method call.
///
/// Arguments are appended in WSDL order; the builder never reorders them.
///
/// ```rust,ignore
/// let body = Envelope::new("urn:vim25", "Login")
///     .this(&session_manager)
///     .text("userName", "admin")
///     .text("password", password)
///     .build(None);
/// ```
#[derive(Debug, Clone)]
pub struct Envelope {
    namespace: &'static str,
    method: &'static str,
    body: String,
}

impl Envelope {
    pub fn new(namespace: &'static str, method: &'static str) -> Self {
        Self {
            namespace,
            method,
            body: String::new(),
        }
    }

    /// The method name, used for logging.
    pub fn method(&self) -> &'static str {
        self.method
    }

    /// Append the `_this` target reference.
    pub fn this(self, target: &ManagedObjectReference) -> Self {
        self.reference("_this", target)
    }

    /// Append a managed object reference argument.
    pub fn reference(mut self, name: &str, reference: &ManagedObjectReference) -> Self {
        let _ = write!(
            self.body,
            r#"<{name} type="{}">{}</{name}>"#,
            escape(&reference.kind),
            escape(&reference.value)
        );
        self
    }

    /// Append a text argument.
    pub fn text(mut self, name: &str, value: &str) -> Self {
        let _ = write!(self.body, "<{name}>{}</{name}>", escape(value));
        self
    }

    /// Append pre-rendered XML. The caller is responsible for escaping.
    pub fn raw(mut self, xml: &str) -> Self {
        self.body.push_str(xml);
        self
    }

    /// Render the full envelope, including SOAP header entries from `context`.
    pub fn build(&self, context: Option<&RequestContext>) -> String {
        let mut out = String::with_capacity(ENVELOPE_OPEN.len() + self.body.len() + 256);
        out.push_str(ENVELOPE_OPEN);
        if let Some(ctx) = context.filter(|c| !c.is_empty()) {
            out.push_str("<soapenv:Header>");
            out.push_str(&ctx.to_header_xml());
            out.push_str("</soapenv:Header>");
        }
        let _ = write!(
            out,
            r#"<soapenv:Body><{method} xmlns="{ns}">{body}</{method}></soapenv:Body></soapenv:Envelope>"#,
            method = self.method,
            ns = self.namespace,
            body = self.body
        );
        out
    }
}
