//! Attaches documentation links, baseline status and browser support
//! summaries from the compat database to resolved descriptors.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::catalogs::{attribute_url, element_url, BROWSER_ABBREVIATIONS};
use crate::compat::{CompatData, CompatStatement, SupportBlock, VersionValue};
use crate::status::{FeatureStatus, StatusSource};
use crate::types::*;

/// `web-features:<id>` tag on a compat statement.
static RE_FEATURE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^web-features:([^:]*)$").unwrap());

/// Feature id from the first `web-features:<id>` tag of a statement.
/// An empty id on that tag means no feature id.
pub fn feature_id(statement: Option<&CompatStatement>) -> Option<&str> {
    statement?
        .tags
        .iter()
        .find_map(|tag| RE_FEATURE_TAG.captures(tag).and_then(|c| c.get(1)))
        .map(|m| m.as_str())
        .filter(|id| !id.is_empty())
}

/// Short support tokens (`C`, `FF79`) in abbreviation order.
pub fn browser_compat_tokens(support: &SupportBlock, abbreviations: &[(&str, &str)]) -> Vec<String> {
    abbreviations
        .iter()
        .filter_map(|(browser, abbreviation)| {
            match support.get(*browser)?.version_added()? {
                VersionValue::Flag(true) => Some(abbreviation.to_string()),
                VersionValue::Version(version) if !version.is_empty() => {
                    Some(format!("{abbreviation}{version}"))
                }
                _ => None,
            }
        })
        .collect()
}

pub struct Enricher<'a> {
    compat: &'a CompatData,
    status: &'a dyn StatusSource,
    abbreviations: &'a [(&'a str, &'a str)],
}

impl<'a> Enricher<'a> {
    pub fn new(compat: &'a CompatData, status: &'a dyn StatusSource) -> Self {
        Self {
            compat,
            status,
            abbreviations: BROWSER_ABBREVIATIONS,
        }
    }

    pub fn with_abbreviations(mut self, abbreviations: &'a [(&'a str, &'a str)]) -> Self {
        self.abbreviations = abbreviations;
        self
    }

    /// Enrich every tag. Value sets and global attributes are copied as is.
    pub fn enrich_catalog(&self, data: &HtmlData) -> HtmlData {
        HtmlData {
            tags: data.tags.iter().map(|t| self.enrich_tag(t)).collect(),
            ..data.clone()
        }
    }

    /// Annotated copy of `tag`. Missing compat records or statuses leave
    /// the corresponding fields unset; this never fails.
    pub fn enrich_tag(&self, tag: &TagData) -> TagData {
        let mut tag = tag.clone();
        tag.description = tag.description.map(Description::into_markdown);

        let statement = self
            .compat
            .element(&tag.name)
            .and_then(|node| node.compat.as_ref());
        let url = statement
            .and_then(|s| s.mdn_url.clone())
            .unwrap_or_else(|| element_url(&tag.name));
        tag.references = Some(Reference::mdn(url));

        // Attribute statuses are derived only under an element that has one.
        let element_feature = match feature_id(statement) {
            Some(id) => {
                let key = CompatData::element_key(&tag.name);
                match self.status.status(id, &key) {
                    Some(status) => {
                        (tag.status, tag.browsers) = self.summarize(status);
                        Some(id)
                    }
                    None => {
                        debug!(element = %tag.name, feature = id, "no status");
                        None
                    }
                }
            }
            None => {
                debug!(element = %tag.name, "no feature id");
                None
            }
        };

        let element = tag.name.clone();
        for attr in &mut tag.attributes {
            self.enrich_attribute(&element, element_feature, attr);
        }

        let missing = self.compat.missing_attributes(&tag);
        if !missing.is_empty() {
            info!(element = %tag.name, ?missing, "missing attributes");
        }
        tag
    }

    fn enrich_attribute(&self, element: &str, element_feature: Option<&str>, attr: &mut AttributeData) {
        let found = self.compat.find_attribute(element, &attr.name);
        let statement = found.as_ref().and_then(|m| m.node.compat.as_ref());

        attr.references = statement
            .and_then(|s| s.mdn_url.clone())
            .map(Reference::mdn)
            .or_else(|| attr.references.take().filter(|r| !r.is_empty()))
            .or_else(|| Some(Reference::mdn(attribute_url(&attr.name))));

        let Some(found) = found else {
            debug!(element, attribute = %attr.name, "no compat record");
            return;
        };
        let Some(element_feature) = element_feature else {
            return;
        };
        let id = feature_id(statement).unwrap_or(element_feature);
        if let Some(status) = self.status.status(id, &found.key) {
            (attr.status, attr.browsers) = self.summarize(status);
        }
    }

    fn summarize(&self, status: FeatureStatus) -> (Option<BaselineStatus>, Option<Vec<String>>) {
        let (summary, support) = status.into_parts();
        let tokens = browser_compat_tokens(&support, self.abbreviations);
        (Some(summary), (!tokens.is_empty()).then_some(tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::{SupportValue, VersionValue};
    use crate::status::NoStatus;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::cell::RefCell;

    fn compat() -> CompatData {
        serde_json::from_value(json!({
            "svg": {
                "elements": {
                    "circle": {
                        "__compat": {
                            "mdn_url": "https://developer.mozilla.org/docs/Web/SVG/Element/circle",
                            "tags": ["web-platform", "web-features:svg-shapes"],
                            "support": {}
                        },
                        "r": {
                            "__compat": {
                                "mdn_url": "https://developer.mozilla.org/docs/Web/SVG/Attribute/r",
                                "tags": ["web-features:svg-r"],
                                "support": {}
                            }
                        },
                        "cx": { "__compat": { "support": {} } },
                        "requiredFeatures": {
                            "__compat": { "support": {}, "status": { "deprecated": true } }
                        }
                    },
                    "g": {
                        "__compat": { "tags": ["web-features:a:b"], "support": {} }
                    }
                },
                "global_attributes": {
                    "fill": {
                        "__compat": {
                            "mdn_url": "https://developer.mozilla.org/docs/Web/SVG/Attribute/fill",
                            "support": {}
                        }
                    }
                }
            },
            "html": {
                "global_attributes": {
                    "tabindex": {
                        "__compat": {
                            "mdn_url": "https://developer.mozilla.org/docs/Web/HTML/Global_attributes/tabindex",
                            "support": {}
                        }
                    }
                }
            }
        }))
        .unwrap()
    }

    fn status_with(baseline: Baseline, support: serde_json::Value) -> FeatureStatus {
        serde_json::from_value(json!({
            "baseline": baseline,
            "baseline_low_date": "2020-01-15",
            "support": support
        }))
        .unwrap()
    }

    fn circle() -> TagData {
        let mut tag = TagData::new("circle", "Create circles.");
        for name in ["cx", "r", "fill", "tabindex", "unknown"] {
            tag.attributes.push(AttributeData::new(name, "An attribute."));
        }
        tag
    }

    fn source(id: &str, _key: &str) -> Option<FeatureStatus> {
        match id {
            "svg-shapes" => Some(status_with(
                Baseline::High,
                json!({ "chrome": "1", "firefox": "1.5", "safari": "3" }),
            )),
            "svg-r" => Some(status_with(Baseline::Low, json!({ "chrome": "1" }))),
            _ => None,
        }
    }

    #[test]
    fn tokens_from_example_support() {
        let support: SupportBlock = serde_json::from_value(json!({
            "chrome": true,
            "firefox": "79"
        }))
        .unwrap();
        let tokens = browser_compat_tokens(&support, &[("chrome", "C"), ("firefox", "FF")]);
        assert_eq!(tokens, vec!["C", "FF79"]);
    }

    #[test]
    fn tokens_skip_unsupported_and_unknown_browsers() {
        let mut support = SupportBlock::new();
        support.insert("safari".into(), SupportValue::Added(VersionValue::Flag(false)));
        support.insert("opera".into(), SupportValue::Added(VersionValue::Version("12".into())));
        support.insert(
            "edge".into(),
            serde_json::from_value(json!([{ "version_added": "12" }, { "version_added": "79" }]))
                .unwrap(),
        );
        let tokens = browser_compat_tokens(&support, BROWSER_ABBREVIATIONS);
        assert_eq!(tokens, vec!["E12"]);
    }

    #[test]
    fn feature_id_requires_two_parts() {
        let data = compat();
        let circle = data.element("circle").unwrap().compat.as_ref();
        assert_eq!(feature_id(circle), Some("svg-shapes"));
        let g = data.element("g").unwrap().compat.as_ref();
        assert_eq!(feature_id(g), None);
        assert_eq!(feature_id(None), None);
    }

    #[test]
    fn element_status_and_browsers() {
        let data = compat();
        let enricher = Enricher::new(&data, &source);
        let tag = enricher.enrich_tag(&circle());

        assert_eq!(
            tag.references,
            Some(Reference::mdn(
                "https://developer.mozilla.org/docs/Web/SVG/Element/circle"
            ))
        );
        assert_eq!(tag.status.as_ref().unwrap().baseline, Baseline::High);
        assert_eq!(
            tag.browsers,
            Some(vec!["C1".to_string(), "FF1.5".to_string(), "S3".to_string()])
        );
        assert_eq!(
            tag.description,
            Some(Description::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value: "Create circles.".into(),
            }))
        );
    }

    #[test]
    fn attribute_uses_own_feature_id_then_element_one() {
        let data = compat();
        let enricher = Enricher::new(&data, &source);
        let tag = enricher.enrich_tag(&circle());

        let r = tag.attribute("r").unwrap();
        assert_eq!(r.status.as_ref().unwrap().baseline, Baseline::Low);
        assert_eq!(r.browsers, Some(vec!["C1".to_string()]));

        let cx = tag.attribute("cx").unwrap();
        assert_eq!(cx.status.as_ref().unwrap().baseline, Baseline::High);
    }

    #[test]
    fn attribute_lookup_paths() {
        let data = compat();
        let keys = RefCell::new(Vec::new());
        let recording = |id: &str, key: &str| {
            keys.borrow_mut().push(key.to_string());
            source(id, key)
        };
        Enricher::new(&data, &recording).enrich_tag(&circle());

        assert_eq!(
            keys.into_inner(),
            vec![
                "svg.elements.circle",
                "svg.elements.circle.cx",
                "svg.elements.circle.r",
                "svg.global_attributes.fill",
                "html.global_attributes.tabindex",
            ]
        );
    }

    #[test]
    fn global_fallback_references() {
        let data = compat();
        let tag = Enricher::new(&data, &NoStatus).enrich_tag(&circle());

        let fill = tag.attribute("fill").unwrap();
        assert_eq!(
            fill.references,
            Some(Reference::mdn(
                "https://developer.mozilla.org/docs/Web/SVG/Attribute/fill"
            ))
        );
        let tabindex = tag.attribute("tabindex").unwrap();
        assert_eq!(
            tabindex.references.as_ref().unwrap()[0].url,
            "https://developer.mozilla.org/docs/Web/HTML/Global_attributes/tabindex"
        );
        let unknown = tag.attribute("unknown").unwrap();
        assert_eq!(
            unknown.references,
            Some(Reference::mdn(
                "https://developer.mozilla.org/en-US/docs/Web/SVG/Attribute/unknown"
            ))
        );
        assert!(unknown.status.is_none());
    }

    #[test]
    fn existing_references_kept_without_compat_url() {
        let data = compat();
        let mut tag = circle();
        tag.attributes[0].references = Some(vec![Reference {
            name: "Spec".into(),
            url: "https://www.w3.org/TR/SVG2/shapes.html#CircleElementCXAttribute".into(),
        }]);
        let tag = Enricher::new(&data, &NoStatus).enrich_tag(&tag);
        assert_eq!(tag.attribute("cx").unwrap().references.as_ref().unwrap()[0].name, "Spec");
    }

    #[test]
    fn no_feature_tag_gives_references_only() {
        let data = compat();
        let tag = Enricher::new(&data, &source).enrich_tag(&TagData::new("g", "Group."));
        assert!(tag.references.is_some());
        assert!(tag.status.is_none());
        assert!(tag.browsers.is_none());

        let tag = Enricher::new(&data, &source).enrich_tag(&TagData::new("hatch", "Hatch."));
        assert_eq!(
            tag.references,
            Some(Reference::mdn(
                "https://developer.mozilla.org/en-US/docs/Web/SVG/Element/hatch"
            ))
        );
        assert!(tag.status.is_none());
    }

    fn tagged_attributes() -> CompatData {
        serde_json::from_value(json!({
            "svg": {
                "elements": {
                    "g": {
                        "__compat": { "support": {} },
                        "x": { "__compat": { "tags": ["web-features:svg-x"], "support": {} } }
                    },
                    "path": {
                        "__compat": { "tags": ["web-features:svg-path"], "support": {} },
                        "d": { "__compat": { "tags": ["web-features:svg-d"], "support": {} } }
                    }
                }
            }
        }))
        .unwrap()
    }

    fn with_attribute(element: &str, attribute: &str) -> TagData {
        let mut tag = TagData::new(element, "An element.");
        tag.attributes.push(AttributeData::new(attribute, "An attribute."));
        tag
    }

    #[test]
    fn untagged_element_skips_attribute_status() {
        let data = tagged_attributes();
        let always =
            |_: &str, _: &str| Some(status_with(Baseline::High, json!({ "chrome": "1" })));
        let tag = Enricher::new(&data, &always).enrich_tag(&with_attribute("g", "x"));

        assert!(tag.status.is_none());
        let x = tag.attribute("x").unwrap();
        assert!(x.status.is_none());
        assert!(x.browsers.is_none());
        assert_eq!(
            x.references,
            Some(Reference::mdn(
                "https://developer.mozilla.org/en-US/docs/Web/SVG/Attribute/x"
            ))
        );
    }

    #[test]
    fn element_without_status_skips_attribute_status() {
        let data = tagged_attributes();
        let attributes_only = |id: &str, _: &str| match id {
            "svg-d" => Some(status_with(Baseline::Low, json!({ "chrome": "1" }))),
            _ => None,
        };
        let tag = Enricher::new(&data, &attributes_only).enrich_tag(&with_attribute("path", "d"));

        assert!(tag.status.is_none());
        assert!(tag.browsers.is_none());
        let d = tag.attribute("d").unwrap();
        assert!(d.status.is_none());
        assert!(d.browsers.is_none());
        assert!(d.references.is_some());
    }

    #[test]
    fn empty_feature_id_ends_the_search() {
        let statement: CompatStatement = serde_json::from_value(json!({
            "tags": ["web-features:", "web-features:svg"],
            "support": {}
        }))
        .unwrap();
        assert_eq!(feature_id(Some(&statement)), None);

        let statement: CompatStatement = serde_json::from_value(json!({
            "tags": ["web-platform", "web-features:a:b", "web-features:svg"],
            "support": {}
        }))
        .unwrap();
        assert_eq!(feature_id(Some(&statement)), Some("svg"));
    }

    #[test]
    fn enrichment_is_idempotent() {
        let data = compat();
        let enricher = Enricher::new(&data, &source);
        let once = enricher.enrich_tag(&circle());
        let twice = enricher.enrich_tag(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn input_is_not_mutated() {
        let data = compat();
        let original = circle();
        let catalog = HtmlData {
            version: 1.1,
            tags: vec![original.clone()],
            value_sets: vec![],
            global_attributes: vec![AttributeData::new("id", "Identifier.")],
        };
        let enriched = Enricher::new(&data, &source).enrich_catalog(&catalog);
        assert_eq!(catalog.tags[0], original);
        assert_eq!(enriched.global_attributes, catalog.global_attributes);
        assert!(enriched.tags[0].status.is_some());
    }

    #[test]
    fn round_trips_through_json() {
        let data = compat();
        let catalog = HtmlData {
            version: 1.1,
            tags: vec![circle(), TagData::new("g", "Group.")],
            value_sets: vec![],
            global_attributes: vec![],
        };
        let enriched = Enricher::new(&data, &source).enrich_catalog(&catalog);
        let json = serde_json::to_string_pretty(&enriched).unwrap();
        let back: HtmlData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, enriched);
    }
}
