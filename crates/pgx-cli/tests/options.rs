//! Config precedence and argument parsing.

use std::fs;
use std::path::Path;

use pgx_cli::options::{parse_diplotype_pair, resolve_load_config};
use tempfile::TempDir;

fn write_config(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("pgx.toml");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn data_dir_flag_beats_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(dir.path(), "[data]\ndir = \"from-config\"\n");

    let config = resolve_load_config(Some(Path::new("/flag/dir")), Some(&config_path)).unwrap();
    assert_eq!(config.data_dir, Path::new("/flag/dir"));
}

#[test]
fn config_file_dir_is_relative_to_the_file() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(dir.path(), "[data]\ndir = \"from-config\"\n");

    let config = resolve_load_config(None, Some(&config_path)).unwrap();
    assert_eq!(config.data_dir, dir.path().join("from-config"));
    assert_eq!(
        config.relationships_table_path(),
        dir.path().join("from-config").join("relationships.csv")
    );
}

#[test]
fn table_override_in_config_survives_data_dir_flag() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(dir.path(), "[data]\nrelationships_table = \"rel.csv\"\n");

    let config = resolve_load_config(Some(Path::new("/flag/dir")), Some(&config_path)).unwrap();
    assert_eq!(config.relationships_table_path(), dir.path().join("rel.csv"));
    assert_eq!(
        config.diplotype_table_path(),
        Path::new("/flag/dir/DPYD_Diplotype_Phenotype_Table.csv")
    );
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = resolve_load_config(None, Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn diplotype_pairs_are_trimmed() {
    assert_eq!(
        parse_diplotype_pair(" CYP2D6 = *1/*4 ").unwrap(),
        ("CYP2D6".to_string(), "*1/*4".to_string())
    );
    assert_eq!(
        parse_diplotype_pair("DPYD=Reference/Reference").unwrap().1,
        "Reference/Reference"
    );
}

#[test]
fn malformed_diplotype_pairs_are_rejected() {
    assert!(parse_diplotype_pair("CYP2D6").is_err());
    assert!(parse_diplotype_pair("=*1/*1").is_err());
    assert!(parse_diplotype_pair("CYP2D6=  ").is_err());
}
