//! Immutable request context forwarded as SOAP header entries.

use std::collections::BTreeMap;

use super::envelope::escape;

/// Key/value pairs sent as SOAP header elements on every request of a client.
///
/// The context is built once when a client is created and then only read;
/// it is passed explicitly to each call that needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    entries: BTreeMap<String, String>,
}

impl RequestContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of this context with `key` set to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the entries as header elements, e.g. `<vcSessionCookie>abc</vcSessionCookie>`.
    pub fn to_header_xml(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("<{key}>{}</{key}>", escape(value)))
            .collect()
    }
}
