//! Where the external reference tables are found.
//!
//! Resolution order for the data directory:
//! 1. an explicit directory (CLI flag or [`LoadConfig::with_data_dir`])
//! 2. `[data] dir` in a TOML config file
//! 3. the `PGX_DATA_DIR` environment variable
//! 4. `data/` at the workspace root

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the default data directory.
pub const DATA_DIR_ENV_VAR: &str = "PGX_DATA_DIR";

/// Default file name of the CPIC DPYD diplotype/phenotype table.
pub const DIPLOTYPE_TABLE_FILE: &str = "DPYD_Diplotype_Phenotype_Table.csv";

/// Default file name of the PharmGKB relationship table.
pub const RELATIONSHIPS_TABLE_FILE: &str = "relationships.csv";

/// Default data directory: `PGX_DATA_DIR` if set, else `data/` at the workspace root.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV_VAR) {
        return PathBuf::from(dir);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Locations of the two external tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadConfig {
    pub data_dir: PathBuf,
    /// Override for the diplotype table; relative paths resolve against `data_dir`.
    pub diplotype_table: Option<PathBuf>,
    /// Override for the relationship table; relative paths resolve against `data_dir`.
    pub relationships_table: Option<PathBuf>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self::with_data_dir(default_data_dir())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    data: DataSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DataSection {
    dir: Option<PathBuf>,
    diplotype_table: Option<PathBuf>,
    relationships_table: Option<PathBuf>,
}

impl LoadConfig {
    /// Both tables under `data_dir` with their default file names.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            diplotype_table: None,
            relationships_table: None,
        }
    }

    /// Read a TOML config file.
    ///
    /// ```toml
    /// [data]
    /// dir = "reference"
    /// diplotype_table = "DPYD_Diplotype_Phenotype_Table.csv"
    /// relationships_table = "/srv/pharmgkb/relationships.csv"
    /// ```
    ///
    /// Relative paths resolve against the config file's directory.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let base = config_base_dir(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, &base).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse TOML config text; relative paths resolve against `base_dir`.
    ///
    /// `base_dir` should be absolute. Otherwise a relative table override
    /// ends up joined onto `data_dir` by the `*_table_path` methods.
    pub fn from_toml_str(text: &str, base_dir: &Path) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(text)?;
        let data_dir = file
            .data
            .dir
            .map_or_else(default_data_dir, |dir| base_dir.join(dir));
        Ok(Self {
            data_dir,
            diplotype_table: file.data.diplotype_table.map(|p| base_dir.join(p)),
            relationships_table: file.data.relationships_table.map(|p| base_dir.join(p)),
        })
    }

    /// Path of the DPYD diplotype table.
    pub fn diplotype_table_path(&self) -> PathBuf {
        match &self.diplotype_table {
            Some(path) => self.data_dir.join(path),
            None => self.data_dir.join(DIPLOTYPE_TABLE_FILE),
        }
    }

    /// Path of the PharmGKB relationship table.
    pub fn relationships_table_path(&self) -> PathBuf {
        match &self.relationships_table {
            Some(path) => self.data_dir.join(path),
            None => self.data_dir.join(RELATIONSHIPS_TABLE_FILE),
        }
    }
}

/// Absolute directory of a config file, whether given as `pgx.toml`,
/// `conf/pgx.toml` or an absolute path.
fn config_base_dir(path: &Path) -> std::io::Result<PathBuf> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::path::absolute(parent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_names_under_data_dir() {
        let config = LoadConfig::with_data_dir("/srv/pgx");
        assert_eq!(
            config.diplotype_table_path(),
            PathBuf::from("/srv/pgx/DPYD_Diplotype_Phenotype_Table.csv")
        );
        assert_eq!(
            config.relationships_table_path(),
            PathBuf::from("/srv/pgx/relationships.csv")
        );
    }

    #[test]
    fn absolute_override_replaces_data_dir() {
        let config = LoadConfig {
            relationships_table: Some(PathBuf::from("/other/rel.csv")),
            ..LoadConfig::with_data_dir("/srv/pgx")
        };
        assert_eq!(
            config.relationships_table_path(),
            PathBuf::from("/other/rel.csv")
        );
    }

    #[test]
    fn toml_paths_resolve_against_base() {
        let config = LoadConfig::from_toml_str(
            "[data]\ndir = \"reference\"\nrelationships_table = \"/abs/rel.csv\"\n",
            Path::new("/etc/pgx"),
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/etc/pgx/reference"));
        assert_eq!(
            config.diplotype_table_path(),
            PathBuf::from("/etc/pgx/reference/DPYD_Diplotype_Phenotype_Table.csv")
        );
        assert_eq!(
            config.relationships_table_path(),
            PathBuf::from("/abs/rel.csv")
        );
    }

    #[test]
    fn toml_rejects_unknown_keys() {
        assert!(LoadConfig::from_toml_str("[data]\ndirectory = \"x\"\n", Path::new(".")).is_err());
    }

    #[test]
    fn config_base_dir_is_always_absolute() {
        let cwd = std::env::current_dir().unwrap();
        for path in ["pgx.toml", "conf/pgx.toml", "./conf/pgx.toml"] {
            let base = config_base_dir(Path::new(path)).unwrap();
            assert!(base.is_absolute(), "{path} -> {}", base.display());
            assert!(base.starts_with(&cwd), "{path} -> {}", base.display());
        }
        assert_eq!(
            config_base_dir(Path::new("/etc/pgx/pgx.toml")).unwrap(),
            PathBuf::from("/etc/pgx")
        );
    }
}
