use std::collections::HashSet;

use tracing::warn;

use crate::error::{GenerateError, GenerateResult};
use crate::types::*;

/// Check a resolved catalog for structural errors and authoring warnings.
pub fn validate(data: &HtmlData) -> ValidateResult {
    let mut errors: Vec<Diagnostic> = Vec::new();
    let mut warnings: Vec<Diagnostic> = Vec::new();

    let value_set_names: HashSet<&str> = data.value_sets.iter().map(|v| v.name.as_str()).collect();

    // SVG-E001: Duplicate element name
    let mut seen_tags: HashSet<&str> = HashSet::new();
    for tag in &data.tags {
        if !seen_tags.insert(&tag.name) {
            errors.push(Diagnostic {
                code: "SVG-E001".into(),
                severity: DiagnosticSeverity::Error,
                element: Some(tag.name.clone()),
                attribute: None,
                message: format!("Duplicate element name \"{}\"", tag.name),
            });
        }
        if is_blank(tag.description.as_ref()) {
            warnings.push(empty_description(Some(&tag.name), None));
        }
        check_attributes(Some(&tag.name), &tag.attributes, &value_set_names, &mut errors, &mut warnings);
    }

    check_attributes(None, &data.global_attributes, &value_set_names, &mut errors, &mut warnings);

    // SVG-E004: Duplicate value set name
    let mut seen_sets: HashSet<&str> = HashSet::new();
    for set in &data.value_sets {
        if !seen_sets.insert(&set.name) {
            errors.push(Diagnostic {
                code: "SVG-E004".into(),
                severity: DiagnosticSeverity::Error,
                element: None,
                attribute: None,
                message: format!("Duplicate value set name \"{}\"", set.name),
            });
        }
    }

    ValidateResult { errors, warnings }
}

/// [`validate`], failing with [`GenerateError::Invalid`] when any error is found.
/// Warnings are logged.
pub fn ensure_valid(data: &HtmlData) -> GenerateResult<ValidateResult> {
    let result = validate(data);
    for w in &result.warnings {
        warn!(code = %w.code, "{}", w.message);
    }
    if result.errors.is_empty() {
        Ok(result)
    } else {
        Err(GenerateError::Invalid(result.errors))
    }
}

fn check_attributes(
    element: Option<&str>,
    attributes: &[AttributeData],
    value_set_names: &HashSet<&str>,
    errors: &mut Vec<Diagnostic>,
    warnings: &mut Vec<Diagnostic>,
) {
    let owner = match element {
        Some(name) => format!("element \"{name}\""),
        None => "global attributes".to_string(),
    };
    let mut seen: HashSet<&str> = HashSet::new();
    for attr in attributes {
        // SVG-E002: Duplicate attribute name
        if !seen.insert(&attr.name) {
            errors.push(Diagnostic {
                code: "SVG-E002".into(),
                severity: DiagnosticSeverity::Error,
                element: element.map(String::from),
                attribute: Some(attr.name.clone()),
                message: format!("Duplicate attribute \"{}\" in {}", attr.name, owner),
            });
        }

        // SVG-E003: Unknown value set
        if let Some(ref set) = attr.value_set {
            if !value_set_names.contains(set.as_str()) {
                errors.push(Diagnostic {
                    code: "SVG-E003".into(),
                    severity: DiagnosticSeverity::Error,
                    element: element.map(String::from),
                    attribute: Some(attr.name.clone()),
                    message: format!(
                        "Attribute \"{}\" in {} references unknown value set \"{}\"",
                        attr.name, owner, set
                    ),
                });
            }
            // SVG-W001: Both values and valueSet
            if attr.values.is_some() {
                warnings.push(Diagnostic {
                    code: "SVG-W001".into(),
                    severity: DiagnosticSeverity::Warning,
                    element: element.map(String::from),
                    attribute: Some(attr.name.clone()),
                    message: format!(
                        "Attribute \"{}\" in {} has both values and valueSet \"{}\"",
                        attr.name, owner, set
                    ),
                });
            }
        }

        if is_blank(attr.description.as_ref()) {
            warnings.push(empty_description(element, Some(&attr.name)));
        }
    }
}

fn is_blank(description: Option<&Description>) -> bool {
    description.map_or(true, |d| d.value().trim().is_empty())
}

// SVG-W002: Empty description
fn empty_description(element: Option<&str>, attribute: Option<&str>) -> Diagnostic {
    let subject = match (element, attribute) {
        (Some(e), Some(a)) => format!("Attribute \"{a}\" of element \"{e}\""),
        (None, Some(a)) => format!("Global attribute \"{a}\""),
        (Some(e), None) => format!("Element \"{e}\""),
        (None, None) => "Descriptor".to_string(),
    };
    Diagnostic {
        code: "SVG-W002".into(),
        severity: DiagnosticSeverity::Warning,
        element: element.map(String::from),
        attribute: attribute.map(String::from),
        message: format!("{subject} has an empty description"),
    }
}
