use std::path::Path;

use svg_data_core::build_catalog;
use svg_data_core::resolver::CatalogSource;
use svg_data_lint::{LintContext, LintDiagnostic, LintSeverity, Linter};
use tracing::warn;

use crate::reader::{read_compat_data, read_config, read_host_data, PathOverrides, Paths};

pub fn run_lint(config_path: Option<&Path>, format: &str) -> Result<String, String> {
    let config = read_config(config_path)?;
    let paths = Paths::resolve(&config, PathOverrides::default());

    let host = read_host_data(&paths.html_data)?;
    let catalog = build_catalog(&host).map_err(|e| e.to_string())?;
    let compat = if paths.compat_data.exists() {
        Some(read_compat_data(&paths.compat_data)?)
    } else {
        warn!(
            path = %paths.compat_data.display(),
            "compat data not found, coverage rules skipped"
        );
        None
    };

    let linter = Linter::new(config.lint);
    let ctx = LintContext {
        data: &catalog.data,
        source: CatalogSource::builtin(),
        compat: compat.as_ref(),
    };
    let results = linter.lint(&ctx);

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "diagnostics": results,
                "summary": {
                    "count": results.len(),
                    "elements": catalog.data.tags.len(),
                }
            }))
            .map_err(|e| format!("JSON serialization error: {e}"))?;
            Ok(json)
        }
        _ => {
            // Human-readable format
            let mut lines: Vec<String> = Vec::new();

            for d in &results {
                let severity = match d.severity {
                    LintSeverity::Error => "error",
                    LintSeverity::Warning => "warning",
                    LintSeverity::Info => "info",
                };
                lines.push(format!(
                    "{}[{}] {}: {}",
                    severity,
                    d.rule,
                    location(d),
                    d.message
                ));
            }

            let count = results.len();
            let element_count = catalog.data.tags.len();
            let issue_word = if count == 1 { "issue" } else { "issues" };
            let element_word = if element_count == 1 { "element" } else { "elements" };
            lines.push(format!(
                "{count} lint {issue_word} in {element_count} {element_word}."
            ));

            Ok(lines.join("\n"))
        }
    }
}

fn location(d: &LintDiagnostic) -> String {
    match (&d.element, &d.attribute) {
        (Some(e), Some(a)) => format!("{e}.{a}"),
        (Some(e), None) => e.clone(),
        (None, Some(a)) => a.clone(),
        (None, None) => "catalog".to_string(),
    }
}
