//! PropertyCollector filter specifications.

use std::fmt::Write;

use crate::models::ManagedObjectReference;
use crate::soap::escape;

/// Properties to fetch for one managed object type.
#[derive(Debug, Clone)]
pub struct PropertySpec {
    pub kind: String,
    pub paths: Vec<String>,
}

impl PropertySpec {
    pub fn new(kind: &str, paths: &[&str]) -> Self {
        Self {
            kind: kind.to_string(),
            paths: paths.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// A named traversal from objects of `kind` through property `path`.
///
/// `select` lists traversal names to apply to the objects reached, which is
/// how recursion through nested folders is expressed.
#[derive(Debug, Clone)]
pub struct TraversalSpec {
    pub name: String,
    pub kind: String,
    pub path: String,
    pub skip: bool,
    pub select: Vec<String>,
}

impl TraversalSpec {
    /// Recursive walk of `Folder.childEntity`.
    pub fn folder_recursion(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: "Folder".to_string(),
            path: "childEntity".to_string(),
            skip: false,
            select: vec![name.to_string()],
        }
    }
}

/// Starting object for a property query.
#[derive(Debug, Clone)]
pub struct ObjectSpec {
    pub obj: ManagedObjectReference,
    pub skip: bool,
    pub select: Vec<TraversalSpec>,
}

impl ObjectSpec {
    pub fn new(obj: ManagedObjectReference) -> Self {
        Self {
            obj,
            skip: false,
            select: Vec::new(),
        }
    }

    pub fn with_traversal(mut self, traversal: TraversalSpec) -> Self {
        self.select.push(traversal);
        self
    }
}

/// The `specSet` argument of `RetrievePropertiesEx`.
#[derive(Debug, Clone, Default)]
pub struct PropertyFilterSpec {
    pub prop_set: Vec<PropertySpec>,
    pub object_set: Vec<ObjectSpec>,
}

impl PropertyFilterSpec {
    pub fn new(prop: PropertySpec) -> Self {
        Self {
            prop_set: vec![prop],
            object_set: Vec::new(),
        }
    }

    pub fn with_object(mut self, object: ObjectSpec) -> Self {
        self.object_set.push(object);
        self
    }

    /// Render as a `<specSet>` element. Children follow WSDL order.
    pub fn to_xml(&self) -> String {
        let mut out = String::from("<specSet>");
        for prop in &self.prop_set {
            let _ = write!(out, "<propSet><type>{}</type><all>false</all>", escape(&prop.kind));
            for path in &prop.paths {
                let _ = write!(out, "<pathSet>{}</pathSet>", escape(path));
            }
            out.push_str("</propSet>");
        }
        for object in &self.object_set {
            let _ = write!(
                out,
                r#"<objectSet><obj type="{}">{}</obj><skip>{}</skip>"#,
                escape(&object.obj.kind),
                escape(&object.obj.value),
                object.skip
            );
            for traversal in &object.select {
                let _ = write!(
                    out,
                    r#"<selectSet xsi:type="TraversalSpec"><name>{}</name><type>{}</type><path>{}</path><skip>{}</skip>"#,
                    escape(&traversal.name),
                    escape(&traversal.kind),
                    escape(&traversal.path),
                    traversal.skip
                );
                for name in &traversal.select {
                    let _ = write!(out, "<selectSet><name>{}</name></selectSet>", escape(name));
                }
                out.push_str("</selectSet>");
            }
            out.push_str("</objectSet>");
        }
        out.push_str("</specSet>");
        out
    }
}
