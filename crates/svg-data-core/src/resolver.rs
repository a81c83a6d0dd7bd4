use std::collections::HashSet;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use tracing::debug;

use crate::catalog::{
    AttrDef, AttrRef, AttributeSetName, ElementDef, ValueSetDef, Values, ATTRIBUTE_SETS,
    ELEMENTS, GENERIC_ATTRIBUTES, SHARED_ATTRIBUTES, VALUE_SETS,
};
use crate::catalogs::{attribute_url, element_url, DATA_VERSION};
use crate::error::{GenerateError, GenerateResult};
use crate::types::*;

/// Static tables a catalog is resolved from.
#[derive(Debug, Clone, Copy)]
pub struct CatalogSource<'a> {
    pub elements: &'a [ElementDef],
    pub shared: &'a [AttrDef],
    pub sets: &'a [(AttributeSetName, &'a [AttrRef])],
    pub generic: &'a [AttrRef],
    pub value_sets: &'a [ValueSetDef],
}

impl CatalogSource<'static> {
    /// The built-in SVG catalog.
    pub fn builtin() -> Self {
        Self {
            elements: ELEMENTS,
            shared: SHARED_ATTRIBUTES,
            sets: ATTRIBUTE_SETS,
            generic: GENERIC_ATTRIBUTES,
            value_sets: VALUE_SETS,
        }
    }
}

/// Resolved attribute sets in declaration order, serialized as an object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSets(Vec<(AttributeSetName, Vec<AttributeData>)>);

impl AttributeSets {
    pub fn get(&self, name: AttributeSetName) -> Option<&[AttributeData]> {
        self.0
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, attrs)| attrs.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (AttributeSetName, &[AttributeData])> {
        self.0.iter().map(|(n, attrs)| (*n, attrs.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for AttributeSets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, attrs) in &self.0 {
            map.serialize_entry(name.as_str(), attrs)?;
        }
        map.end()
    }
}

/// Output of [`resolve`]: the custom data document and the attribute sets.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub data: HtmlData,
    pub attribute_sets: AttributeSets,
}

/// Resolve the built-in catalog against host-language custom data.
pub fn build_catalog(host: &HtmlData) -> GenerateResult<Catalog> {
    resolve(&CatalogSource::builtin(), host)
}

/// Expand the static tables into descriptors.
///
/// `aria*`/`role` host global attributes form the Aria set, `on*` ones are
/// appended to the global attributes, and any value set they reference is
/// imported from the host data.
pub fn resolve(source: &CatalogSource<'_>, host: &HtmlData) -> GenerateResult<Catalog> {
    let mut sets: Vec<(AttributeSetName, Vec<AttributeData>)> = Vec::new();
    for (name, refs) in source.sets {
        let owner = format!("attribute set {name}");
        let attrs = expand_refs(source, refs, &sets, &owner)?;
        sets.push((*name, dedupe_attributes(attrs, &owner)));
    }
    let aria: Vec<AttributeData> = host
        .global_attributes
        .iter()
        .filter(|a| a.name.starts_with("aria") || a.name == "role")
        .map(imported_attribute)
        .collect();
    debug!(count = aria.len(), "imported aria attributes");
    sets.push((AttributeSetName::Aria, aria));

    let mut tags = Vec::with_capacity(source.elements.len());
    for element in source.elements {
        let owner = format!("element <{}>", element.name);
        let attrs = expand_refs(source, element.attributes, &sets, &owner)?;
        let mut tag = TagData::new(element.name, element.description);
        tag.attributes = dedupe_attributes(attrs, &owner);
        tag.references = Some(Reference::mdn(element_url(element.name)));
        tags.push(tag);
    }

    let mut global_attributes =
        expand_refs(source, source.generic, &sets, "global attributes")?;
    let events: Vec<AttributeData> = host
        .global_attributes
        .iter()
        .filter(|a| a.name.starts_with("on"))
        .map(imported_attribute)
        .collect();
    debug!(count = events.len(), "imported event attributes");
    global_attributes.extend(events);
    let global_attributes = dedupe_attributes(global_attributes, "global attributes");

    let mut value_sets: Vec<ValueSet> = source
        .value_sets
        .iter()
        .map(|def| ValueSet {
            name: def.name.to_string(),
            values: values_of(def.values.iter().map(|v| v.to_string())),
        })
        .collect();

    let referencing = tags
        .iter()
        .flat_map(|t| t.attributes.iter())
        .chain(sets.iter().flat_map(|(_, attrs)| attrs.iter()))
        .chain(global_attributes.iter());
    for attr in referencing {
        let Some(name) = attr.value_set.as_deref() else {
            continue;
        };
        if value_sets.iter().any(|v| v.name == name) {
            continue;
        }
        let imported = host
            .value_set(name)
            .ok_or_else(|| GenerateError::UnknownValueSet {
                value_set: name.to_string(),
                attribute: attr.name.clone(),
            })?;
        debug!(value_set = name, "imported value set");
        value_sets.push(imported.clone());
    }

    Ok(Catalog {
        data: HtmlData {
            version: DATA_VERSION,
            tags,
            value_sets,
            global_attributes,
        },
        attribute_sets: AttributeSets(sets),
    })
}

fn expand_refs(
    source: &CatalogSource<'_>,
    refs: &[AttrRef],
    sets: &[(AttributeSetName, Vec<AttributeData>)],
    owner: &str,
) -> GenerateResult<Vec<AttributeData>> {
    let mut attrs = Vec::with_capacity(refs.len());
    for r in refs {
        match r {
            AttrRef::Inline(def) => attrs.push(attribute_data(def)),
            AttrRef::Shared(name) => {
                let def = source.shared.iter().find(|d| d.name == *name).ok_or_else(|| {
                    GenerateError::UnknownSharedAttribute {
                        name: name.to_string(),
                        owner: owner.to_string(),
                    }
                })?;
                attrs.push(attribute_data(def));
            }
            AttrRef::Set(set) => {
                let (_, resolved) = sets.iter().find(|(n, _)| n == set).ok_or_else(|| {
                    GenerateError::UnknownAttributeSet {
                        name: set.to_string(),
                        owner: owner.to_string(),
                    }
                })?;
                attrs.extend(resolved.iter().cloned());
            }
        }
    }
    Ok(attrs)
}

fn attribute_data(def: &AttrDef) -> AttributeData {
    let mut attr = AttributeData::new(def.name, def.description);
    match def.values {
        Values::Free => {}
        Values::Enumerated(list) => attr.values = Some(values_of(list.iter().map(|v| v.to_string()))),
        Values::Shared(name) => attr.value_set = Some(name.to_string()),
        Values::Derived(derived) => attr.values = Some(values_of(derived.expand())),
    }
    attr.references = Some(Reference::mdn(attribute_url(def.name)));
    attr
}

fn imported_attribute(attr: &AttributeData) -> AttributeData {
    let mut attr = attr.clone();
    if attr.references.as_ref().map_or(true, Vec::is_empty) {
        attr.references = Some(Reference::mdn(attribute_url(&attr.name)));
    }
    attr
}

/// Literal values with repeats dropped, first occurrence kept.
fn values_of(values: impl IntoIterator<Item = String>) -> Vec<ValueData> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .map(ValueData::named)
        .collect()
}

fn dedupe_attributes(attrs: Vec<AttributeData>, owner: &str) -> Vec<AttributeData> {
    let mut seen: HashSet<String> = HashSet::new();
    attrs
        .into_iter()
        .filter(|a| {
            let first = seen.insert(a.name.clone());
            if !first {
                debug!(attribute = %a.name, owner, "dropped duplicate attribute");
            }
            first
        })
        .collect()
}
