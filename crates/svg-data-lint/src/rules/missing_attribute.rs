//! Rule: missing-attribute
//!
//! Reports attributes recorded under an element in the compat database
//! that the element's descriptor does not declare.

use crate::{LintContext, LintDiagnostic, LintRule, LintSeverity};

pub struct MissingAttributeRule;

impl LintRule for MissingAttributeRule {
    fn id(&self) -> &str {
        "missing-attribute"
    }

    fn description(&self) -> &str {
        "Reports compat database attributes an element does not declare"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Info
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        let Some(compat) = ctx.compat else {
            return vec![];
        };

        let mut diagnostics = Vec::new();
        for tag in &ctx.data.tags {
            for name in compat.missing_attributes(tag) {
                diagnostics.push(LintDiagnostic {
                    rule: self.id().into(),
                    severity: self.default_severity(),
                    element: Some(tag.name.clone()),
                    message: format!("Element \"{}\" does not declare attribute \"{}\"", tag.name, name),
                    attribute: Some(name),
                });
            }
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{empty_data, empty_source};
    use pretty_assertions::assert_eq;
    use svg_data_core::compat::CompatData;
    use svg_data_core::types::{AttributeData, TagData};

    #[test]
    fn reports_undeclared_attributes() {
        let compat: CompatData = serde_json::from_str(
            r#"{
                "svg": {
                    "elements": {
                        "image": {
                            "__compat": { "support": {} },
                            "href": { "__compat": { "support": {} } },
                            "decoding": { "__compat": { "support": {} } },
                            "externalResourcesRequired": {
                                "__compat": { "support": {}, "status": { "deprecated": true } }
                            },
                            "fetchpriority": {
                                "__compat": { "support": {}, "status": { "experimental": true } }
                            }
                        }
                    }
                }
            }"#,
        )
        .unwrap();
        let mut image = TagData::new("image", "An image.");
        image.attributes.push(AttributeData::new("href", "Link."));
        let mut data = empty_data();
        data.tags.push(image);
        let ctx = LintContext {
            data: &data,
            source: empty_source(),
            compat: Some(&compat),
        };

        let results = MissingAttributeRule.check(&ctx);
        let attrs: Vec<_> = results.iter().map(|d| d.attribute.as_deref()).collect();
        assert_eq!(attrs, vec![Some("decoding")]);
        assert_eq!(results[0].element.as_deref(), Some("image"));
    }
}
