//! Reading inputs and writing the generated JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use crate::catalogs::{ATTRIBUTE_SETS_FILE_NAME, DATA_FILE_NAME};
use crate::error::{GenerateError, GenerateResult};
use crate::resolver::AttributeSets;
use crate::types::HtmlData;

/// Read and parse a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> GenerateResult<T> {
    let content = fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| GenerateError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Pretty-print with two-space indentation, no trailing newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> GenerateResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Paths of the files written by [`write_outputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    pub data: PathBuf,
    pub attribute_sets: PathBuf,
}

/// Write `svg.json` and `attributeSets.json`, creating `out_dir` if needed.
pub fn write_outputs(
    out_dir: &Path,
    data: &HtmlData,
    attribute_sets: &AttributeSets,
) -> GenerateResult<OutputFiles> {
    fs::create_dir_all(out_dir).map_err(|source| GenerateError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let files = OutputFiles {
        data: out_dir.join(DATA_FILE_NAME),
        attribute_sets: out_dir.join(ATTRIBUTE_SETS_FILE_NAME),
    };
    write_file(&files.data, &to_json(data)?)?;
    write_file(&files.attribute_sets, &to_json(attribute_sets)?)?;
    Ok(files)
}

fn write_file(path: &Path, content: &str) -> GenerateResult<()> {
    fs::write(path, content).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = content.len(), "wrote");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TagData;

    #[test]
    fn writes_both_files_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("dist");
        let data = HtmlData {
            version: 1.1,
            tags: vec![TagData::new("g", "Group.")],
            value_sets: vec![],
            global_attributes: vec![],
        };

        let files = write_outputs(&out, &data, &AttributeSets::default()).unwrap();

        let written = fs::read_to_string(&files.data).unwrap();
        assert!(written.starts_with("{\n  \"version\": 1.1,"));
        assert!(!written.ends_with('\n'));
        let back: HtmlData = serde_json::from_str(&written).unwrap();
        assert_eq!(back, data);
        assert_eq!(fs::read_to_string(&files.attribute_sets).unwrap(), "{}");
    }

    #[test]
    fn read_errors_carry_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_json::<HtmlData>(&path).unwrap_err();
        assert!(matches!(err, GenerateError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));

        let err = read_json::<HtmlData>(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, GenerateError::Read { .. }));
    }
}
