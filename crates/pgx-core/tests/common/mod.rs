#![allow(dead_code)]

use std::fs;
use std::path::Path;

use pgx_core::LoadConfig;
use tempfile::TempDir;

pub const DPYD_TABLE: &str = "\
DPYD Diplotype,Coded Diplotype/Phenotype Summary
Reference/Reference,DPYD Normal Metabolizer
c.1905+1G>A/Reference,DPYD Intermediate Metabolizer
c.1905+1G>A/c.1905+1G>A,DPYD Poor Metabolizer
";

/// Warfarin is linked to CYP2D6 here, conflicting with the curated CYP2C9.
pub const RELATIONSHIPS_TABLE: &str = "\
Entity1_id,Entity1_name,Entity1_type,Entity2_id,Entity2_name,Entity2_type,Evidence,Association,PK,PD,PMIDs
PA128,CYP2D6,Gene,PA451906,warfarin,Chemical,ClinicalAnnotation,associated,,PD,
PA449088,codeine,Chemical,PA128,CYP2D6,Gene,ClinicalAnnotation,associated,PK,,
PA126,CYP2C9,Gene,PA448497,aspirin,Chemical,Literature,ambiguous,,,
";

pub fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

/// A data directory holding both fixture tables.
pub fn data_dir() -> (TempDir, LoadConfig) {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "DPYD_Diplotype_Phenotype_Table.csv", DPYD_TABLE);
    write(dir.path(), "relationships.csv", RELATIONSHIPS_TABLE);
    let config = LoadConfig::with_data_dir(dir.path());
    (dir, config)
}
