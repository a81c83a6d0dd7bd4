//! SVG custom data linter: configurable rules for catalog coverage and quality.
//!
//! Provides a trait-based rule framework that inspects the resolved catalog,
//! its static tables and the compat database.

mod rules;

pub use rules::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use svg_data_core::compat::CompatData;
use svg_data_core::resolver::CatalogSource;
use svg_data_core::types::HtmlData;

/// Severity of a lint finding. Independent of validator diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintSeverity {
    Error,
    Warning,
    Info,
}

/// One finding, located by element and/or attribute name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintDiagnostic {
    pub rule: String,
    pub severity: LintSeverity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    pub message: String,
}

/// Everything a rule may inspect.
pub struct LintContext<'a> {
    /// Resolved catalog.
    pub data: &'a HtmlData,
    /// Static tables the catalog was resolved from.
    pub source: CatalogSource<'a>,
    /// Compat database, when one was loaded.
    pub compat: Option<&'a CompatData>,
}

pub trait LintRule: Send + Sync {
    /// Config key, e.g. "missing-tag".
    fn id(&self) -> &str;

    fn description(&self) -> &str;

    /// Severity used when the config does not name the rule.
    fn default_severity(&self) -> LintSeverity;

    fn check(&self, ctx: &LintContext<'_>) -> Vec<LintDiagnostic>;
}

/// Per-rule level in the `lint.rules` config map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Off,
    #[default]
    Warn,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LintConfig {
    #[serde(default)]
    pub rules: HashMap<String, RuleLevel>,
}

impl LintConfig {
    /// Effective severity of `rule`, or `None` when it is turned off.
    pub fn severity(&self, rule: &dyn LintRule) -> Option<LintSeverity> {
        match self.rules.get(rule.id()) {
            Some(RuleLevel::Off) => None,
            Some(RuleLevel::Warn) => Some(LintSeverity::Warning),
            Some(RuleLevel::Error) => Some(LintSeverity::Error),
            None => Some(rule.default_severity()),
        }
    }
}

/// Runs the built-in rules with configured levels.
pub struct Linter {
    rules: Vec<Box<dyn LintRule>>,
    config: LintConfig,
}

impl Linter {
    pub fn new(config: LintConfig) -> Self {
        Self {
            rules: builtin_rules(),
            config,
        }
    }

    /// Findings of every enabled rule, in rule order, each carrying the
    /// rule's effective severity.
    pub fn lint(&self, ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        self.rules
            .iter()
            .filter_map(|rule| Some((rule, self.config.severity(rule.as_ref())?)))
            .flat_map(|(rule, severity)| {
                rule.check(ctx)
                    .into_iter()
                    .map(move |d| LintDiagnostic { severity, ..d })
            })
            .collect()
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(LintConfig::default())
    }
}

/// Return all built-in lint rules.
fn builtin_rules() -> Vec<Box<dyn LintRule>> {
    vec![
        Box::new(MissingTagRule),
        Box::new(MissingAttributeRule),
        Box::new(DuplicateValueRule),
    ]
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use svg_data_core::catalog::{AttrRef, ElementDef};
    use svg_data_core::types::TagData;

    pub(crate) fn empty_data() -> HtmlData {
        HtmlData {
            version: 1.1,
            tags: vec![],
            value_sets: vec![],
            global_attributes: vec![],
        }
    }

    pub(crate) fn empty_source() -> CatalogSource<'static> {
        CatalogSource {
            elements: &[],
            shared: &[],
            sets: &[],
            generic: &[],
            value_sets: &[],
        }
    }

    #[test]
    fn linter_empty_catalog_no_diagnostics() {
        let linter = Linter::default();
        let data = empty_data();
        let ctx = LintContext {
            data: &data,
            source: empty_source(),
            compat: None,
        };
        assert!(linter.lint(&ctx).is_empty());
    }

    #[test]
    fn config_levels() {
        struct TestRule;
        impl LintRule for TestRule {
            fn id(&self) -> &str {
                "test-rule"
            }
            fn description(&self) -> &str {
                "test"
            }
            fn default_severity(&self) -> LintSeverity {
                LintSeverity::Warning
            }
            fn check(&self, _ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
                vec![]
            }
        }

        let mut config = LintConfig::default();
        assert_eq!(config.severity(&TestRule), Some(LintSeverity::Warning));
        config.rules.insert("test-rule".into(), RuleLevel::Error);
        assert_eq!(config.severity(&TestRule), Some(LintSeverity::Error));
        config.rules.insert("test-rule".into(), RuleLevel::Off);
        assert_eq!(config.severity(&TestRule), None);
    }

    #[test]
    fn disabled_rule_is_skipped_and_levels_apply() {
        const ATTRS: &[AttrRef] = &[AttrRef::Inline(
            svg_data_core::catalog::AttrDef::enumerated("kind", "Kind.", &["a", "a"]),
        )];
        const ELEMENTS: &[ElementDef] = &[ElementDef {
            name: "thing",
            description: "A thing.",
            attributes: ATTRS,
        }];
        let mut data = empty_data();
        data.tags.push(TagData::new("thing", "A thing."));
        let source = CatalogSource {
            elements: ELEMENTS,
            ..empty_source()
        };
        let ctx = LintContext {
            data: &data,
            source,
            compat: None,
        };

        let mut config = LintConfig::default();
        config.rules.insert("duplicate-value".into(), RuleLevel::Error);
        let results = Linter::new(config.clone()).lint(&ctx);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].severity, LintSeverity::Error);

        config.rules.insert("duplicate-value".into(), RuleLevel::Off);
        assert!(Linter::new(config).lint(&ctx).is_empty());
    }

    #[test]
    fn config_parses_from_json() {
        let config: LintConfig =
            serde_json::from_str(r#"{ "rules": { "missing-tag": "off", "duplicate-value": "error" } }"#)
                .unwrap();
        assert_eq!(config.rules["missing-tag"], RuleLevel::Off);
        assert_eq!(config.rules["duplicate-value"], RuleLevel::Error);
    }
}
