//! Minimal owned XML tree used to read SOAP responses.
//!
//! vSphere responses tag values with `xsi:type` next to plain `type`
//! attributes and nest polymorphic records, so responses are read into a
//! generic tree first and converted to typed records by [`FromXml`].
//!
//! Element names are stored without their namespace prefix. Attribute names
//! are stored exactly as written (`type` and `xsi:type` stay distinct).

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{ClientError, Result};

/// Conversion from a response element into a typed record.
pub trait FromXml: Sized {
    fn from_xml(node: &XmlNode) -> Result<Self>;
}

/// An XML element with its attributes, text content and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlNode>,
}

fn xml_error(e: impl std::fmt::Display) -> ClientError {
    ClientError::InvalidResponse(format!("malformed XML: {e}"))
}

impl XmlNode {
    /// Parse a document and return its root element.
    pub fn parse(xml: &str) -> Result<XmlNode> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event().map_err(xml_error)? {
                Event::Start(start) => stack.push(Self::from_start(&start)?),
                Event::Empty(start) => {
                    let node = Self::from_start(&start)?;
                    Self::attach(&mut stack, &mut root, node);
                }
                Event::End(_) => {
                    let node = stack
                        .pop()
                        .ok_or_else(|| xml_error("unbalanced end tag"))?;
                    Self::attach(&mut stack, &mut root, node);
                }
                Event::Text(text) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&text.unescape().map_err(xml_error)?);
                    }
                }
                Event::CData(data) => {
                    if let Some(current) = stack.last_mut() {
                        let raw = data.into_inner();
                        current
                            .text
                            .push_str(std::str::from_utf8(&raw).map_err(xml_error)?);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(xml_error("unexpected end of document"));
        }
        root.ok_or_else(|| xml_error("document has no root element"))
    }

    fn from_start(start: &BytesStart<'_>) -> Result<XmlNode> {
        let name = std::str::from_utf8(start.local_name().as_ref())
            .map_err(xml_error)?
            .to_string();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(xml_error)?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(xml_error)?
                .to_string();
            let value = attr.unescape_value().map_err(xml_error)?.into_owned();
            attributes.push((key, value));
        }

        Ok(XmlNode {
            name,
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) {
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => *root = Some(node),
        }
    }

    /// Local element name (namespace prefix removed).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text content of this element.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attribute value by its name as written, e.g. `type` or `xsi:type`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All child elements in document order.
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// First child with the given local name.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children with the given local name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text of the first child with the given name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(XmlNode::text)
    }

    /// Like [`child`](Self::child) but fails with `InvalidResponse` when missing.
    pub fn require_child(&self, name: &str) -> Result<&XmlNode> {
        self.child(name).ok_or_else(|| {
            ClientError::InvalidResponse(format!("<{}> is missing <{}>", self.name, name))
        })
    }

    /// Like [`child_text`](Self::child_text) but fails with `InvalidResponse` when missing.
    pub fn require_text(&self, name: &str) -> Result<&str> {
        self.require_child(name).map(XmlNode::text)
    }

    /// Parse the text of an optional child as an integer.
    pub fn child_i64(&self, name: &str) -> Result<Option<i64>> {
        self.child_text(name)
            .map(|raw| {
                raw.trim().parse::<i64>().map_err(|_| {
                    ClientError::InvalidResponse(format!(
                        "<{name}> is not an integer: {raw:?}"
                    ))
                })
            })
            .transpose()
    }

    /// Parse the text of an optional child as a boolean.
    pub fn child_bool(&self, name: &str) -> Option<bool> {
        self.child_text(name).map(|raw| raw.trim() == "true")
    }
}
