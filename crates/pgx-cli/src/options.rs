//! Turning command-line input into engine inputs.

use std::path::Path;

use pgx_core::{ConfigError, LoadConfig};

/// Effective table locations: `--data-dir`, then `--config`, then
/// `PGX_DATA_DIR`, then the workspace `data/` directory.
pub fn resolve_load_config(
    data_dir: Option<&Path>,
    config_file: Option<&Path>,
) -> Result<LoadConfig, ConfigError> {
    let mut config = match config_file {
        Some(path) => LoadConfig::from_toml_file(path)?,
        None => LoadConfig::default(),
    };
    if let Some(dir) = data_dir {
        config.data_dir = dir.to_path_buf();
    }
    Ok(config)
}

/// Parse a `GENE=DIPLOTYPE` argument such as `CYP2D6=*1/*4`.
pub fn parse_diplotype_pair(value: &str) -> Result<(String, String), String> {
    let (gene, diplotype) = value
        .split_once('=')
        .ok_or_else(|| format!("expected GENE=DIPLOTYPE, got `{value}`"))?;
    let (gene, diplotype) = (gene.trim(), diplotype.trim());
    if gene.is_empty() || diplotype.is_empty() {
        return Err(format!("gene and diplotype must both be non-empty in `{value}`"));
    }
    Ok((gene.to_string(), diplotype.to_string()))
}
