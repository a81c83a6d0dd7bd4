//! Rule: missing-tag
//!
//! Reports elements of the compat database that the catalog does not
//! describe. Deprecated and experimental elements are ignored.

use crate::{LintContext, LintDiagnostic, LintRule, LintSeverity};

pub struct MissingTagRule;

impl LintRule for MissingTagRule {
    fn id(&self) -> &str {
        "missing-tag"
    }

    fn description(&self) -> &str {
        "Reports compat database elements absent from the catalog"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Info
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        let Some(compat) = ctx.compat else {
            return vec![];
        };

        compat
            .missing_elements(&ctx.data.tags)
            .into_iter()
            .map(|name| LintDiagnostic {
                rule: self.id().into(),
                severity: self.default_severity(),
                message: format!("Element \"{name}\" is in the compat data but not in the catalog"),
                element: Some(name),
                attribute: None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{empty_data, empty_source};
    use pretty_assertions::assert_eq;
    use svg_data_core::compat::CompatData;
    use svg_data_core::types::TagData;

    fn compat() -> CompatData {
        serde_json::from_str(
            r#"{
                "svg": {
                    "elements": {
                        "circle": { "__compat": { "support": {} } },
                        "hatch": { "__compat": { "support": {} } },
                        "font": { "__compat": { "support": {}, "status": { "deprecated": true } } }
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn reports_stable_missing_elements() {
        let mut data = empty_data();
        data.tags.push(TagData::new("circle", "A circle."));
        let compat = compat();
        let ctx = LintContext {
            data: &data,
            source: empty_source(),
            compat: Some(&compat),
        };

        let results = MissingTagRule.check(&ctx);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].element.as_deref(), Some("hatch"));
        assert_eq!(
            results[0].message,
            "Element \"hatch\" is in the compat data but not in the catalog"
        );
    }

    #[test]
    fn no_compat_data_no_diagnostics() {
        let data = empty_data();
        let ctx = LintContext {
            data: &data,
            source: empty_source(),
            compat: None,
        };
        assert!(MissingTagRule.check(&ctx).is_empty());
    }
}
