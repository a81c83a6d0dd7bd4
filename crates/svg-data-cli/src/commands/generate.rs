use std::path::PathBuf;

use svg_data_core::{build_catalog, ensure_valid, write_outputs, Enricher};
use tracing::info;

use crate::reader::{
    read_compat_data, read_config, read_host_data, read_web_features, PathOverrides, Paths,
};

pub struct GenerateArgs {
    pub config: Option<PathBuf>,
    pub paths: PathOverrides,
    pub no_compat: bool,
}

/// Build, validate, enrich and write `svg.json` and `attributeSets.json`.
pub fn run_generate(args: GenerateArgs) -> Result<String, String> {
    let config = read_config(args.config.as_deref())?;
    let paths = Paths::resolve(&config, args.paths);

    let host = read_host_data(&paths.html_data)?;
    let catalog = build_catalog(&host).map_err(|e| e.to_string())?;
    let validation = ensure_valid(&catalog.data).map_err(|e| e.to_string())?;

    let data = if args.no_compat {
        info!("skipping compat enrichment");
        catalog.data
    } else {
        let compat = read_compat_data(&paths.compat_data)?;
        let features = read_web_features(&paths.web_features)?;
        info!(features = features.len(), "loaded compat data");

        let missing = compat.missing_elements(&catalog.data.tags);
        if !missing.is_empty() {
            info!(?missing, "missing elements");
        }
        Enricher::new(&compat, &features).enrich_catalog(&catalog.data)
    };

    let files = write_outputs(&paths.out_dir, &data, &catalog.attribute_sets)
        .map_err(|e| e.to_string())?;

    let warning_count = validation.warnings.len();
    let warning_word = if warning_count == 1 { "warning" } else { "warnings" };
    Ok(format!(
        "Wrote {} ({} elements, {} value sets) and {} ({} attribute sets), {} {}.",
        files.data.display(),
        data.tags.len(),
        data.value_sets.len(),
        files.attribute_sets.display(),
        catalog.attribute_sets.len(),
        warning_count,
        warning_word
    ))
}
