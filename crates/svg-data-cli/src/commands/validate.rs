use std::path::PathBuf;

use svg_data_core::{build_catalog, validate, Diagnostic, DiagnosticSeverity};

use crate::reader::{read_config, read_host_data, PathOverrides, Paths};

/// Build the catalog and report validator diagnostics.
/// Returns the rendered report and the error count.
pub fn run_validate(html_data: Option<PathBuf>, format: &str) -> Result<(String, usize), String> {
    let config = read_config(None)?;
    let paths = Paths::resolve(
        &config,
        PathOverrides {
            html_data,
            ..PathOverrides::default()
        },
    );

    let host = read_host_data(&paths.html_data)?;
    let catalog = build_catalog(&host).map_err(|e| e.to_string())?;
    let result = validate(&catalog.data);

    let error_count = result.errors.len();
    let warning_count = result.warnings.len();
    let element_count = catalog.data.tags.len();

    if format == "json" {
        let diagnostics: Vec<&Diagnostic> =
            result.errors.iter().chain(result.warnings.iter()).collect();
        let output = serde_json::json!({
            "diagnostics": diagnostics,
            "summary": {
                "errors": error_count,
                "warnings": warning_count,
                "elements": element_count,
            }
        });
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        return Ok((json, error_count));
    }

    // Human-readable format
    let mut lines: Vec<String> = Vec::new();

    for d in result.errors.iter().chain(result.warnings.iter()) {
        let severity = match d.severity {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
        };
        lines.push(format!("{}[{}] {}: {}", severity, d.code, location(d), d.message));
    }

    let error_word = if error_count == 1 { "error" } else { "errors" };
    let warning_word = if warning_count == 1 {
        "warning"
    } else {
        "warnings"
    };
    let element_word = if element_count == 1 { "element" } else { "elements" };
    lines.push(format!(
        "{error_count} {error_word}, {warning_count} {warning_word} in {element_count} {element_word}."
    ));

    Ok((lines.join("\n"), error_count))
}

/// `element.attribute`, `element`, `globalAttributes.attribute` or `valueSets`.
fn location(d: &Diagnostic) -> String {
    match (&d.element, &d.attribute) {
        (Some(e), Some(a)) => format!("{e}.{a}"),
        (Some(e), None) => e.clone(),
        (None, Some(a)) => format!("globalAttributes.{a}"),
        (None, None) => "valueSets".to_string(),
    }
}
