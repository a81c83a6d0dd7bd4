/// Custom data format version written to `svg.json`.
pub const DATA_VERSION: f64 = 1.1;

/// Language namespace of the catalog in the compat database.
pub const NAMESPACE: &str = "svg";

/// Host markup language whose global attributes are the last lookup fallback.
pub const HOST_NAMESPACE: &str = "html";

/// Compat database category holding per-element records.
pub const ELEMENTS_CATEGORY: &str = "elements";

/// Compat database category holding attributes valid on every element.
pub const GLOBAL_ATTRIBUTES_CATEGORY: &str = "global_attributes";

/// Display name of every documentation reference the generator attaches.
pub const REFERENCE_NAME: &str = "MDN Reference";

/// Documentation base for SVG pages.
pub const MDN_BASE_URL: &str = "https://developer.mozilla.org/en-US/docs/Web/SVG";

/// Output file names inside the output directory.
pub const DATA_FILE_NAME: &str = "svg.json";
pub const ATTRIBUTE_SETS_FILE_NAME: &str = "attributeSets.json";

/// Short browser tokens used in `browsers`, in output order.
pub const BROWSER_ABBREVIATIONS: &[(&str, &str)] = &[
    ("chrome", "C"),
    ("chrome_android", "CA"),
    ("edge", "E"),
    ("firefox", "FF"),
    ("firefox_android", "FFA"),
    ("safari", "S"),
    ("safari_ios", "SM"),
];

/// Default documentation URL of an SVG element.
pub fn element_url(name: &str) -> String {
    format!("{MDN_BASE_URL}/Element/{name}")
}

/// Default documentation URL of an SVG attribute.
pub fn attribute_url(name: &str) -> String {
    format!("{MDN_BASE_URL}/Attribute/{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_urls() {
        assert_eq!(
            element_url("circle"),
            "https://developer.mozilla.org/en-US/docs/Web/SVG/Element/circle"
        );
        assert_eq!(
            attribute_url("viewBox"),
            "https://developer.mozilla.org/en-US/docs/Web/SVG/Attribute/viewBox"
        );
    }
}
