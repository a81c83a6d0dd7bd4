use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalogs::{DATA_VERSION, REFERENCE_NAME};

// ---------------------------------------------------------------------------
// Descriptions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupKind {
    PlainText,
    Markdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkupContent {
    pub kind: MarkupKind,
    pub value: String,
}

/// Either a bare string or markup content with an explicit kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Markup(MarkupContent),
    Text(String),
}

impl Description {
    /// Text of the description regardless of its representation.
    pub fn value(&self) -> &str {
        match self {
            Description::Markup(m) => &m.value,
            Description::Text(s) => s,
        }
    }

    /// Promote a bare string to markdown markup. Markup is left untouched.
    pub fn into_markdown(self) -> Self {
        match self {
            Description::Text(value) => Description::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value,
            }),
            markup => markup,
        }
    }
}

impl From<&str> for Description {
    fn from(s: &str) -> Self {
        Description::Text(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// References / values
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub name: String,
    pub url: String,
}

impl Reference {
    /// The single documentation link attached by the generator.
    pub fn mdn(url: impl Into<String>) -> Vec<Reference> {
        vec![Reference {
            name: REFERENCE_NAME.into(),
            url: url.into(),
        }]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<Reference>>,
}

impl ValueData {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            references: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSet {
    pub name: String,
    pub values: Vec<ValueData>,
}

// ---------------------------------------------------------------------------
// Baseline status
// ---------------------------------------------------------------------------

/// Cross-browser availability level: `false`, `"low"` or `"high"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    Limited,
    Low,
    High,
}

impl Serialize for Baseline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Baseline::Limited => serializer.serialize_bool(false),
            Baseline::Low => serializer.serialize_str("low"),
            Baseline::High => serializer.serialize_str("high"),
        }
    }
}

impl<'de> Deserialize<'de> for Baseline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Level(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(false) => Ok(Baseline::Limited),
            Raw::Level(level) if level == "low" => Ok(Baseline::Low),
            Raw::Level(level) if level == "high" => Ok(Baseline::High),
            Raw::Flag(true) => Err(de::Error::custom("baseline must be false, \"low\" or \"high\"")),
            Raw::Level(level) => Err(de::Error::custom(format!(
                "unknown baseline level \"{level}\""
            ))),
        }
    }
}

/// Summary attached to a descriptor. The per-browser support block is not
/// kept here; it is summarized into the descriptor's `browsers` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineStatus {
    pub baseline: Baseline,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_low_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_high_date: Option<String>,
    /// Any further metadata from the status source, passed through verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Descriptors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<ValueData>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "valueSet")]
    pub value_set: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<Reference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browsers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BaselineStatus>,
}

impl AttributeData {
    pub fn new(name: impl Into<String>, description: impl Into<Description>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            values: None,
            value_set: None,
            references: None,
            browsers: None,
            status: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(default)]
    pub attributes: Vec<AttributeData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<Reference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browsers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BaselineStatus>,
}

impl TagData {
    pub fn new(name: impl Into<String>, description: impl Into<Description>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            attributes: vec![],
            references: None,
            browsers: None,
            status: None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeData> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// Top-level custom data document (`svg.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlData {
    #[serde(default = "default_version")]
    pub version: f64,
    #[serde(default)]
    pub tags: Vec<TagData>,
    #[serde(default, rename = "valueSets")]
    pub value_sets: Vec<ValueSet>,
    #[serde(default, rename = "globalAttributes")]
    pub global_attributes: Vec<AttributeData>,
}

fn default_version() -> f64 {
    DATA_VERSION
}

impl HtmlData {
    pub fn tag(&self, name: &str) -> Option<&TagData> {
        self.tags.iter().find(|t| t.name == name)
    }

    pub fn value_set(&self, name: &str) -> Option<&ValueSet> {
        self.value_sets.iter().find(|v| v.name == name)
    }
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: String,
    pub severity: DiagnosticSeverity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidateResult {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}
