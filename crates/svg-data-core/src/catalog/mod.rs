//! Static SVG catalog: elements, shared attributes, attribute sets and value
//! sets, expressed as `const` tables. The [`resolver`](crate::resolver) turns
//! these definitions into serializable descriptors.

mod elements;
mod sets;
mod shared;
mod value_sets;

pub use elements::ELEMENTS;
pub use sets::{
    ANIMATION_ADDITION_ATTRIBUTES, ANIMATION_ATTRIBUTE_TARGET_ATTRIBUTES,
    ANIMATION_TARGET_ELEMENT_ATTRIBUTES, ANIMATION_TIMING_ATTRIBUTES, ANIMATION_VALUE_ATTRIBUTES,
    ATTRIBUTE_SETS, FILTER_PRIMITIVE_ATTRIBUTES, GENERIC_ATTRIBUTES, PRESENTATION_ATTRIBUTES,
    TRANSFER_FUNCTION_ATTRIBUTES,
};
pub use shared::SHARED_ATTRIBUTES;
pub use value_sets::VALUE_SETS;

use std::fmt;

/// How the permitted values of an attribute are described.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Values {
    /// No enumeration; any value is accepted.
    Free,
    /// Literal list. Repeated entries are dropped on resolution.
    Enumerated(&'static [&'static str]),
    /// Name of a shared [`ValueSetDef`] (or of a host-language value set).
    Shared(&'static str),
    /// List computed from a small grammar.
    Derived(DerivedValues),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedValues {
    /// `none` plus every `x<align>Y<align> <meetOrSlice>` combination.
    AspectRatio,
    /// `<keyword> meet` / `<keyword> slice` for `none` and each alignment keyword.
    AlignmentMeetOrSlice,
}

const ALIGNMENTS: [&str; 3] = ["Min", "Mid", "Max"];
const MEET_OR_SLICE: [&str; 2] = ["meet", "slice"];
const ALIGNMENT_KEYWORDS: [&str; 10] = [
    "none", "xMinYMin", "xMidYMin", "xMaxYMin", "xMinYMid", "xMidYMid", "xMaxYMid", "xMinYMax",
    "xMidYMax", "xMaxYMax",
];

impl DerivedValues {
    pub fn expand(self) -> Vec<String> {
        match self {
            DerivedValues::AspectRatio => {
                let mut values = vec!["none".to_string()];
                for x in ALIGNMENTS {
                    for y in ALIGNMENTS {
                        for m in MEET_OR_SLICE {
                            values.push(format!("x{x}Y{y} {m}"));
                        }
                    }
                }
                values
            }
            DerivedValues::AlignmentMeetOrSlice => ALIGNMENT_KEYWORDS
                .iter()
                .flat_map(|k| MEET_OR_SLICE.iter().map(move |m| format!("{k} {m}")))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrDef {
    pub name: &'static str,
    pub description: &'static str,
    pub values: Values,
}

impl AttrDef {
    pub const fn free(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            values: Values::Free,
        }
    }

    pub const fn enumerated(
        name: &'static str,
        description: &'static str,
        values: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            description,
            values: Values::Enumerated(values),
        }
    }

    pub const fn value_set(
        name: &'static str,
        description: &'static str,
        value_set: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            values: Values::Shared(value_set),
        }
    }

    pub const fn derived(
        name: &'static str,
        description: &'static str,
        values: DerivedValues,
    ) -> Self {
        Self {
            name,
            description,
            values: Values::Derived(values),
        }
    }
}

/// Named groups of attributes reused across elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeSetName {
    Presentation,
    FilterPrimitive,
    TransferFunction,
    AnimationTargetElement,
    AnimationAttributeTarget,
    AnimationTiming,
    AnimationValue,
    AnimationAddition,
    /// Imported from the host-language global attributes (`aria-*`, `role`).
    Aria,
}

impl AttributeSetName {
    /// Every set in `attributeSets.json` order.
    pub const ALL: [AttributeSetName; 9] = [
        AttributeSetName::Presentation,
        AttributeSetName::FilterPrimitive,
        AttributeSetName::TransferFunction,
        AttributeSetName::AnimationTargetElement,
        AttributeSetName::AnimationAttributeTarget,
        AttributeSetName::AnimationTiming,
        AttributeSetName::AnimationValue,
        AttributeSetName::AnimationAddition,
        AttributeSetName::Aria,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AttributeSetName::Presentation => "PresentationAttributes",
            AttributeSetName::FilterPrimitive => "FilterPrimitiveAttributes",
            AttributeSetName::TransferFunction => "TransferFunctionAttributes",
            AttributeSetName::AnimationTargetElement => "AnimationTargetElementAttributes",
            AttributeSetName::AnimationAttributeTarget => "AnimationAttributeTargetAttributes",
            AttributeSetName::AnimationTiming => "AnimationTimingAttributes",
            AttributeSetName::AnimationValue => "AnimationValueAttributes",
            AttributeSetName::AnimationAddition => "AnimationAdditionAttributes",
            AttributeSetName::Aria => "AriaAttributes",
        }
    }
}

impl fmt::Display for AttributeSetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of an element's (or a set's) attribute list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrRef {
    Inline(AttrDef),
    /// Name of an entry in [`SHARED_ATTRIBUTES`].
    Shared(&'static str),
    Set(AttributeSetName),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementDef {
    pub name: &'static str,
    pub description: &'static str,
    pub attributes: &'static [AttrRef],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueSetDef {
    pub name: &'static str,
    pub values: &'static [&'static str],
}

// Table shorthands.

pub(crate) const fn free(name: &'static str, description: &'static str) -> AttrRef {
    AttrRef::Inline(AttrDef::free(name, description))
}

pub(crate) const fn enumerated(
    name: &'static str,
    description: &'static str,
    values: &'static [&'static str],
) -> AttrRef {
    AttrRef::Inline(AttrDef::enumerated(name, description, values))
}

pub(crate) const fn with_value_set(
    name: &'static str,
    description: &'static str,
    value_set: &'static str,
) -> AttrRef {
    AttrRef::Inline(AttrDef::value_set(name, description, value_set))
}

pub(crate) const fn shared(name: &'static str) -> AttrRef {
    AttrRef::Shared(name)
}

pub(crate) const fn set(name: AttributeSetName) -> AttrRef {
    AttrRef::Set(name)
}

/// Look up a shared attribute definition by name.
pub fn shared_attribute(name: &str) -> Option<&'static AttrDef> {
    SHARED_ATTRIBUTES.iter().find(|a| a.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn aspect_ratio_values() {
        let values = DerivedValues::AspectRatio.expand();
        assert_eq!(values.len(), 19);
        assert_eq!(values[0], "none");
        assert_eq!(values[1], "xMinYMin meet");
        assert_eq!(values[2], "xMinYMin slice");
        assert_eq!(values[3], "xMinYMid meet");
        assert_eq!(values[18], "xMaxYMax slice");
    }

    #[test]
    fn alignment_meet_or_slice_values() {
        let values = DerivedValues::AlignmentMeetOrSlice.expand();
        assert_eq!(values.len(), 20);
        assert_eq!(&values[..4], ["none meet", "none slice", "xMinYMin meet", "xMinYMin slice"]);
        assert_eq!(values[19], "xMaxYMax slice");
    }

    #[test]
    fn set_names_are_unique() {
        let mut names: Vec<&str> = AttributeSetName::ALL.iter().map(|s| s.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), AttributeSetName::ALL.len());
    }

    #[test]
    fn every_shared_reference_exists() {
        let lists = ELEMENTS
            .iter()
            .map(|e| e.attributes)
            .chain(ATTRIBUTE_SETS.iter().map(|(_, refs)| *refs))
            .chain(std::iter::once(GENERIC_ATTRIBUTES));
        for list in lists {
            for r in list {
                if let AttrRef::Shared(name) = r {
                    assert!(shared_attribute(name).is_some(), "missing shared attribute {name}");
                }
            }
        }
    }
}
