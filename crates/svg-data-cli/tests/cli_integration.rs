use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Fixture directory holding host data, compat data, web-features and a config file
fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn svg_data_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_svg-data"));
    cmd.current_dir(fixtures_dir());
    cmd.env("SVG_DATA_LOG", "warn");
    cmd
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn read_json(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("output file missing");
    serde_json::from_str(&content).expect("invalid JSON output")
}

#[test]
fn cli_help() {
    let output = svg_data_bin().arg("--help").output().expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SVG custom data generator"));
    assert!(stdout.contains("generate"));
    assert!(stdout.contains("validate"));
    assert!(stdout.contains("lint"));
}

#[test]
fn cli_version() {
    let output = svg_data_bin().arg("--version").output().expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0.4.1"));
}

#[test]
fn cli_generate_writes_both_files() {
    let out = tempfile::tempdir().unwrap();
    let output = svg_data_bin()
        .args(["generate", "--config", "svg-data.config.yaml", "--out-dir"])
        .arg(out.path())
        .output()
        .expect("failed to run");
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("svg.json"));
    assert!(stdout.contains("attributeSets.json"));

    let data = read_json(&out.path().join("svg.json"));
    assert_eq!(data["version"], 1.1);
    let tags = data["tags"].as_array().expect("tags should be array");
    assert!(!tags.is_empty());

    let circle = tags
        .iter()
        .find(|t| t["name"] == "circle")
        .expect("circle element");
    assert_eq!(circle["description"]["kind"], "markdown");
    assert_eq!(
        circle["references"][0]["url"],
        "https://developer.mozilla.org/docs/Web/SVG/Element/circle"
    );
    assert_eq!(circle["status"]["baseline"], "high");
    assert_eq!(
        circle["browsers"],
        serde_json::json!(["C1", "CA18", "E12", "FF1.5", "FFA4", "S3", "SM2"])
    );

    let drop_shadow = tags
        .iter()
        .find(|t| t["name"] == "feDropShadow")
        .expect("feDropShadow element");
    assert_eq!(drop_shadow["status"]["baseline"], false);

    let sets = read_json(&out.path().join("attributeSets.json"));
    let set_names: Vec<&String> = sets.as_object().expect("object").keys().collect();
    assert!(set_names.iter().any(|n| n.as_str() == "PresentationAttributes"));

    let value_sets = data["valueSets"].as_array().expect("valueSets");
    let names: Vec<&str> = value_sets
        .iter()
        .filter_map(|v| v["name"].as_str())
        .collect();
    assert!(names.contains(&"target"));
    assert!(!names.contains(&"unused"));
}

#[test]
fn cli_generate_is_deterministic() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    for dir in [first.path(), second.path()] {
        let output = svg_data_bin()
            .args(["generate", "--config", "svg-data.config.yaml", "--out-dir"])
            .arg(dir)
            .output()
            .expect("failed to run");
        assert_success(&output);
    }
    for file in ["svg.json", "attributeSets.json"] {
        assert_eq!(
            fs::read(first.path().join(file)).unwrap(),
            fs::read(second.path().join(file)).unwrap(),
            "{file} differs between runs"
        );
    }
}

#[test]
fn cli_generate_no_compat() {
    let out = tempfile::tempdir().unwrap();
    let output = svg_data_bin()
        .args([
            "generate",
            "--html-data",
            "html-data.json",
            "--compat-data",
            "does-not-exist.json",
            "--no-compat",
            "--out-dir",
        ])
        .arg(out.path())
        .output()
        .expect("failed to run");
    assert_success(&output);

    let data = read_json(&out.path().join("svg.json"));
    let circle = data["tags"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["name"] == "circle")
        .expect("circle element");
    assert!(circle.get("browsers").is_none());
    assert!(circle.get("status").is_none());
}

#[test]
fn cli_generate_missing_input() {
    let cwd = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_svg-data"))
        .current_dir(cwd.path())
        .arg("generate")
        .output()
        .expect("failed to run");
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("browsers.html-data.json"));
}

#[test]
fn cli_generate_missing_config() {
    let output = svg_data_bin()
        .args(["generate", "--config", "nope.yaml"])
        .output()
        .expect("failed to run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config file does not exist"));
}

#[test]
fn cli_validate_human() {
    let output = svg_data_bin()
        .arg("validate")
        .output()
        .expect("failed to run");
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0 errors,"));
    assert!(stdout.trim_end().ends_with("elements."));
}

#[test]
fn cli_validate_json() {
    let output = svg_data_bin()
        .args(["validate", "--html-data", "html-data.json", "--format", "json"])
        .output()
        .expect("failed to run");
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);

    let result: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON output");
    assert!(result["diagnostics"].is_array());
    assert_eq!(result["summary"]["errors"], 0);
    assert!(result["summary"]["elements"].as_u64().unwrap() > 0);
}

#[test]
fn cli_validate_unknown_value_set() {
    let dir = tempfile::tempdir().unwrap();
    let host = dir.path().join("host.json");
    fs::write(
        &host,
        r#"{ "version": 1.1, "tags": [], "globalAttributes": [], "valueSets": [] }"#,
    )
    .unwrap();

    let output = svg_data_bin()
        .arg("validate")
        .arg("--html-data")
        .arg(&host)
        .output()
        .expect("failed to run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Unknown value set \"target\""));
}

#[test]
fn cli_lint_human() {
    let output = svg_data_bin().arg("lint").output().expect("failed to run");
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("info[missing-tag] hatch:"));
    assert!(!stdout.contains("discard:"));
    assert!(!stdout.contains("duplicate-value"));
    assert!(stdout.contains("lint issue"));
}

#[test]
fn cli_lint_json() {
    let output = svg_data_bin()
        .args(["lint", "--format", "json"])
        .output()
        .expect("failed to run");
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);

    let result: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON output");
    let diagnostics = result["diagnostics"].as_array().expect("diagnostics");
    assert_eq!(result["summary"]["count"], diagnostics.len());
    assert!(diagnostics
        .iter()
        .any(|d| d["rule"] == "missing-tag" && d["element"] == "hatch"));
}
