use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use svg_data_core::{read_json, CompatData, HtmlData, WebFeatures};
use svg_data_lint::LintConfig;
use tracing::debug;

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "svg-data.config.yaml";

pub const DEFAULT_HTML_DATA: &str =
    "node_modules/@vscode/web-custom-data/data/browsers.html-data.json";
pub const DEFAULT_COMPAT_DATA: &str = "node_modules/@mdn/browser-compat-data/data.json";
pub const DEFAULT_WEB_FEATURES: &str = "node_modules/web-features/data.json";
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Project configuration from svg-data.config.yaml.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgDataConfig {
    pub html_data: Option<PathBuf>,
    pub compat_data: Option<PathBuf>,
    pub web_features: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    #[serde(default)]
    pub lint: LintConfig,
}

/// Read the config file. An explicit path must exist; the default one is optional.
/// Relative paths inside the file are resolved against the file's directory.
pub fn read_config(explicit: Option<&Path>) -> Result<SvgDataConfig, String> {
    let config_path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(format!("Config file does not exist: {}", path.display()));
            }
            path.to_path_buf()
        }
        None => {
            let path = PathBuf::from(CONFIG_FILE_NAME);
            if !path.exists() {
                debug!("no {CONFIG_FILE_NAME}, using defaults");
                return Ok(SvgDataConfig::default());
            }
            path
        }
    };

    let yaml_content = fs::read_to_string(&config_path)
        .map_err(|e| format!("Failed to read {}: {}", config_path.display(), e))?;
    let mut config: SvgDataConfig = serde_yaml::from_str(&yaml_content)
        .map_err(|e| format!("Invalid YAML config {}: {}", config_path.display(), e))?;

    let base_dir = config_path.parent().unwrap_or(Path::new(""));
    for path in [
        &mut config.html_data,
        &mut config.compat_data,
        &mut config.web_features,
        &mut config.out_dir,
    ]
    .into_iter()
    .flatten()
    {
        if path.is_relative() {
            *path = base_dir.join(&*path);
        }
    }
    debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

/// Input and output locations after applying flags, config and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub html_data: PathBuf,
    pub compat_data: PathBuf,
    pub web_features: PathBuf,
    pub out_dir: PathBuf,
}

/// Paths given on the command line; each overrides the config file.
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub html_data: Option<PathBuf>,
    pub compat_data: Option<PathBuf>,
    pub web_features: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
}

impl Paths {
    pub fn resolve(config: &SvgDataConfig, flags: PathOverrides) -> Self {
        fn pick(flag: Option<PathBuf>, configured: &Option<PathBuf>, default: &str) -> PathBuf {
            flag.or_else(|| configured.clone())
                .unwrap_or_else(|| PathBuf::from(default))
        }

        Self {
            html_data: pick(flags.html_data, &config.html_data, DEFAULT_HTML_DATA),
            compat_data: pick(flags.compat_data, &config.compat_data, DEFAULT_COMPAT_DATA),
            web_features: pick(flags.web_features, &config.web_features, DEFAULT_WEB_FEATURES),
            out_dir: pick(flags.out_dir, &config.out_dir, DEFAULT_OUT_DIR),
        }
    }
}

pub fn read_host_data(path: &Path) -> Result<HtmlData, String> {
    read_json(path).map_err(|e| e.to_string())
}

pub fn read_compat_data(path: &Path) -> Result<CompatData, String> {
    CompatData::from_path(path).map_err(|e| e.to_string())
}

pub fn read_web_features(path: &Path) -> Result<WebFeatures, String> {
    WebFeatures::from_path(path).map_err(|e| e.to_string())
}
