//! Browser compatibility database model.
//!
//! Only the parts of `@mdn/browser-compat-data` the generator reads are
//! modelled: the `svg` and `html` namespaces, each node's `__compat`
//! statement and its named children.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalogs::{ELEMENTS_CATEGORY, GLOBAL_ATTRIBUTES_CATEGORY, HOST_NAMESPACE, NAMESPACE};
use crate::error::GenerateResult;
use crate::files::read_json;
use crate::types::TagData;

// ---------------------------------------------------------------------------
// Support data
// ---------------------------------------------------------------------------

/// `version_added` of a support statement: `true`/`false` or a version string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionValue {
    Flag(bool),
    Version(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportStatement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_added: Option<VersionValue>,
}

/// Per-browser support state as it appears in either data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SupportValue {
    /// Bare `true`/`false` or version string (feature-status data).
    Added(VersionValue),
    Statement(SupportStatement),
    /// Ordered statements; the first one describes current support.
    Statements(Vec<SupportStatement>),
}

impl SupportValue {
    pub fn version_added(&self) -> Option<&VersionValue> {
        match self {
            SupportValue::Added(value) => Some(value),
            SupportValue::Statement(statement) => statement.version_added.as_ref(),
            SupportValue::Statements(statements) => statements.first()?.version_added.as_ref(),
        }
    }
}

/// Browser identifier to support state.
pub type SupportBlock = BTreeMap<String, SupportValue>;

// ---------------------------------------------------------------------------
// Compat nodes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CompatStatus {
    #[serde(default)]
    pub experimental: bool,
    #[serde(default)]
    pub standard_track: bool,
    #[serde(default)]
    pub deprecated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CompatStatement {
    #[serde(default)]
    pub mdn_url: Option<String>,
    /// A single URL or a list of URLs.
    #[serde(default)]
    pub spec_url: Option<serde_json::Value>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub support: SupportBlock,
    #[serde(default)]
    pub status: Option<CompatStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CompatNode {
    #[serde(default, rename = "__compat")]
    pub compat: Option<CompatStatement>,
    #[serde(flatten)]
    pub children: BTreeMap<String, CompatNode>,
}

impl CompatNode {
    /// Marked deprecated or experimental in its own statement.
    pub fn is_unstable(&self) -> bool {
        self.compat
            .as_ref()
            .and_then(|c| c.status.as_ref())
            .is_some_and(|s| s.deprecated || s.experimental)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CompatNamespace {
    #[serde(default)]
    pub elements: BTreeMap<String, CompatNode>,
    #[serde(default)]
    pub global_attributes: BTreeMap<String, CompatNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CompatData {
    #[serde(default)]
    pub svg: CompatNamespace,
    #[serde(default)]
    pub html: CompatNamespace,
}

// ---------------------------------------------------------------------------
// Attribute lookup
// ---------------------------------------------------------------------------

/// Tables searched for an attribute's compat record, tried in [`ORDER`](Self::ORDER).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeLookup {
    /// `svg.elements.<element>.<attribute>`
    OwningElement,
    /// `svg.global_attributes.<attribute>`
    NamespaceGlobal,
    /// `html.global_attributes.<attribute>`
    HostGlobal,
}

impl AttributeLookup {
    pub const ORDER: [AttributeLookup; 3] = [
        AttributeLookup::OwningElement,
        AttributeLookup::NamespaceGlobal,
        AttributeLookup::HostGlobal,
    ];

    pub fn find<'a>(
        self,
        compat: &'a CompatData,
        element: &str,
        attribute: &str,
    ) -> Option<CompatMatch<'a>> {
        let (node, key) = match self {
            AttributeLookup::OwningElement => (
                compat.element(element)?.children.get(attribute)?,
                format!("{NAMESPACE}.{ELEMENTS_CATEGORY}.{element}.{attribute}"),
            ),
            AttributeLookup::NamespaceGlobal => (
                compat.svg.global_attributes.get(attribute)?,
                format!("{NAMESPACE}.{GLOBAL_ATTRIBUTES_CATEGORY}.{attribute}"),
            ),
            AttributeLookup::HostGlobal => (
                compat.html.global_attributes.get(attribute)?,
                format!("{HOST_NAMESPACE}.{GLOBAL_ATTRIBUTES_CATEGORY}.{attribute}"),
            ),
        };
        Some(CompatMatch {
            node,
            key,
            lookup: self,
        })
    }
}

/// A compat record together with the dotted key of the table it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct CompatMatch<'a> {
    pub node: &'a CompatNode,
    pub key: String,
    pub lookup: AttributeLookup,
}

impl CompatData {
    pub fn from_path(path: &Path) -> GenerateResult<Self> {
        read_json(path)
    }

    pub fn element(&self, name: &str) -> Option<&CompatNode> {
        self.svg.elements.get(name)
    }

    /// Dotted compat key of an element record.
    pub fn element_key(name: &str) -> String {
        format!("{NAMESPACE}.{ELEMENTS_CATEGORY}.{name}")
    }

    /// First hit of [`AttributeLookup::ORDER`].
    pub fn find_attribute(&self, element: &str, attribute: &str) -> Option<CompatMatch<'_>> {
        AttributeLookup::ORDER
            .iter()
            .find_map(|lookup| lookup.find(self, element, attribute))
    }

    /// Stable compat keys under the element's record that the tag does not declare.
    pub fn missing_attributes(&self, tag: &TagData) -> Vec<String> {
        let Some(node) = self.element(&tag.name) else {
            return vec![];
        };
        node.children
            .iter()
            .filter(|(name, child)| tag.attribute(name).is_none() && !child.is_unstable())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Stable compat elements that no tag describes.
    pub fn missing_elements(&self, tags: &[TagData]) -> Vec<String> {
        self.svg
            .elements
            .iter()
            .filter(|(name, node)| {
                !tags.iter().any(|t| &t.name == *name) && !node.is_unstable()
            })
            .map(|(name, _)| name.clone())
            .collect()
    }
}
