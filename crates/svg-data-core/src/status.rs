//! Feature-status lookup (baseline availability per web feature).

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compat::SupportBlock;
use crate::error::GenerateResult;
use crate::files::read_json;
use crate::types::{Baseline, BaselineStatus};

/// Status record as returned by a [`StatusSource`], support block included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureStatus {
    pub baseline: Baseline,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_low_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_high_date: Option<String>,
    #[serde(default)]
    pub support: SupportBlock,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl FeatureStatus {
    /// Split into the stored summary and the raw support block.
    pub fn into_parts(self) -> (BaselineStatus, SupportBlock) {
        let FeatureStatus {
            baseline,
            baseline_low_date,
            baseline_high_date,
            support,
            extra,
        } = self;
        (
            BaselineStatus {
                baseline,
                baseline_low_date,
                baseline_high_date,
                extra,
            },
            support,
        )
    }
}

/// Looks up the status of a feature, optionally narrowed to one compat key
/// (`svg.elements.circle.cx`).
pub trait StatusSource {
    fn status(&self, feature_id: &str, compat_key: &str) -> Option<FeatureStatus>;
}

impl<F> StatusSource for F
where
    F: Fn(&str, &str) -> Option<FeatureStatus>,
{
    fn status(&self, feature_id: &str, compat_key: &str) -> Option<FeatureStatus> {
        self(feature_id, compat_key)
    }
}

/// Source that never has a status.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStatus;

impl StatusSource for NoStatus {
    fn status(&self, _feature_id: &str, _compat_key: &str) -> Option<FeatureStatus> {
        None
    }
}

// ---------------------------------------------------------------------------
// web-features data file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
struct FeatureEntry {
    #[serde(default)]
    status: Option<FeatureEntryStatus>,
}

#[derive(Debug, Clone, Deserialize)]
struct FeatureEntryStatus {
    #[serde(default)]
    by_compat_key: BTreeMap<String, FeatureStatus>,
    #[serde(flatten)]
    status: FeatureStatus,
}

/// Statuses read from the `data.json` of the web-features package.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebFeatures {
    #[serde(default)]
    features: BTreeMap<String, FeatureEntry>,
}

impl WebFeatures {
    pub fn from_path(path: &Path) -> GenerateResult<Self> {
        read_json(path)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl StatusSource for WebFeatures {
    /// The per-key status wins over the feature-level one.
    fn status(&self, feature_id: &str, compat_key: &str) -> Option<FeatureStatus> {
        let entry = self.features.get(feature_id)?.status.as_ref()?;
        Some(
            entry
                .by_compat_key
                .get(compat_key)
                .unwrap_or(&entry.status)
                .clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::{SupportValue, VersionValue};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn features() -> WebFeatures {
        serde_json::from_value(json!({
            "browsers": {},
            "features": {
                "svg": {
                    "name": "SVG",
                    "status": {
                        "baseline": "high",
                        "baseline_low_date": "2015-07-29",
                        "baseline_high_date": "2018-01-29",
                        "support": { "chrome": "1", "firefox": "1.5" },
                        "by_compat_key": {
                            "svg.elements.circle.pathLength": {
                                "baseline": false,
                                "support": { "chrome": "1" }
                            }
                        }
                    }
                },
                "moved-away": { "kind": "moved", "redirect_target": "svg" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn feature_level_status() {
        let status = features().status("svg", "svg.elements.circle").unwrap();
        assert_eq!(status.baseline, Baseline::High);
        assert_eq!(status.baseline_low_date.as_deref(), Some("2015-07-29"));
        assert_eq!(
            status.support["firefox"],
            SupportValue::Added(VersionValue::Version("1.5".into()))
        );
    }

    #[test]
    fn compat_key_status_preferred() {
        let status = features()
            .status("svg", "svg.elements.circle.pathLength")
            .unwrap();
        assert_eq!(status.baseline, Baseline::Limited);
        assert_eq!(status.support.len(), 1);
    }

    #[test]
    fn unknown_or_statusless_feature() {
        let data = features();
        assert!(data.status("nope", "svg.elements.circle").is_none());
        assert!(data.status("moved-away", "svg.elements.circle").is_none());
    }

    #[test]
    fn into_parts_drops_support_keeps_extra() {
        let status: FeatureStatus = serde_json::from_value(json!({
            "baseline": "low",
            "baseline_low_date": "2023-03-27",
            "support": { "safari": "16.4" },
            "discouraged": true
        }))
        .unwrap();
        let (summary, support) = status.into_parts();
        assert_eq!(summary.baseline, Baseline::Low);
        assert_eq!(summary.extra.get("discouraged"), Some(&json!(true)));
        assert!(support.contains_key("safari"));
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("support").is_none());
    }

    #[test]
    fn closures_are_sources() {
        let source = |id: &str, _key: &str| {
            (id == "svg").then(|| FeatureStatus {
                baseline: Baseline::High,
                baseline_low_date: None,
                baseline_high_date: None,
                support: SupportBlock::new(),
                extra: BTreeMap::new(),
            })
        };
        assert!(source.status("svg", "svg.elements.g").is_some());
        assert!(source.status("other", "svg.elements.g").is_none());
    }
}
