//! Rule: duplicate-value
//!
//! Detects enumerated literal values listed more than once for the same
//! attribute in the static tables. The resolver drops the repeats; this
//! rule points at the table entry so it can be cleaned up.

use std::collections::HashSet;

use svg_data_core::catalog::{AttrDef, AttrRef, Values};

use crate::{LintContext, LintDiagnostic, LintRule, LintSeverity};

pub struct DuplicateValueRule;

impl LintRule for DuplicateValueRule {
    fn id(&self) -> &str {
        "duplicate-value"
    }

    fn description(&self) -> &str {
        "Detects enumerated values repeated within one attribute definition"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        let source = &ctx.source;
        let mut diagnostics = Vec::new();

        for element in source.elements {
            for def in inline_defs(element.attributes) {
                self.check_def(def, Some(element.name), &format!("element \"{}\"", element.name), &mut diagnostics);
            }
        }
        for def in source.shared {
            self.check_def(def, None, "shared attributes", &mut diagnostics);
        }
        for (set, refs) in source.sets {
            for def in inline_defs(refs) {
                self.check_def(def, None, &format!("attribute set {set}"), &mut diagnostics);
            }
        }
        for def in inline_defs(source.generic) {
            self.check_def(def, None, "global attributes", &mut diagnostics);
        }

        diagnostics
    }
}

impl DuplicateValueRule {
    fn check_def(
        &self,
        def: &AttrDef,
        element: Option<&str>,
        owner: &str,
        diagnostics: &mut Vec<LintDiagnostic>,
    ) {
        for value in repeated(def) {
            diagnostics.push(LintDiagnostic {
                rule: self.id().into(),
                severity: self.default_severity(),
                element: element.map(String::from),
                attribute: Some(def.name.to_string()),
                message: format!(
                    "Value \"{}\" is listed more than once for attribute \"{}\" in {}",
                    value, def.name, owner
                ),
            });
        }
    }
}

fn inline_defs(refs: &[AttrRef]) -> impl Iterator<Item = &AttrDef> {
    refs.iter().filter_map(|r| match r {
        AttrRef::Inline(def) => Some(def),
        _ => None,
    })
}

/// Each value listed more than once, reported once, in first-repeat order.
fn repeated(def: &AttrDef) -> Vec<&'static str> {
    let Values::Enumerated(values) = def.values else {
        return vec![];
    };
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    values
        .iter()
        .copied()
        .filter(|v| !seen.insert(*v) && reported.insert(*v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{empty_data, empty_source};
    use pretty_assertions::assert_eq;
    use svg_data_core::resolver::CatalogSource;

    #[test]
    fn repeated_values_reported_once() {
        let def = AttrDef::enumerated("mode", "Mode.", &["a", "b", "a", "a", "c", "b"]);
        assert_eq!(repeated(&def), vec!["a", "b"]);
        assert!(repeated(&AttrDef::free("d", "Path.")).is_empty());
    }

    #[test]
    fn builtin_tables_report_stroke_linejoin() {
        let data = empty_data();
        let ctx = LintContext {
            data: &data,
            source: CatalogSource::builtin(),
            compat: None,
        };
        let results = DuplicateValueRule.check(&ctx);
        let linejoin = results
            .iter()
            .find(|d| d.attribute.as_deref() == Some("stroke-linejoin"))
            .unwrap();
        assert_eq!(
            linejoin.message,
            "Value \"round\" is listed more than once for attribute \"stroke-linejoin\" in attribute set PresentationAttributes"
        );
    }

    #[test]
    fn clean_tables_no_diagnostics() {
        let data = empty_data();
        let ctx = LintContext {
            data: &data,
            source: empty_source(),
            compat: None,
        };
        assert!(DuplicateValueRule.check(&ctx).is_empty());
    }
}
