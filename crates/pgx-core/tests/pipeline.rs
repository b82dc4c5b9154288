//! Per-patient resolution against the fixture tables.

mod common;

use std::collections::BTreeMap;

use pgx_core::{LookupEngine, run_pipeline};
use pgx_model::PhenotypeCode;

use common::data_dir;

fn calls(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(gene, diplotype)| ((*gene).to_string(), (*diplotype).to_string()))
        .collect()
}

fn drugs(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn patient_profile_snapshot() {
    let (_dir, config) = data_dir();
    let engine = LookupEngine::load(&config).unwrap();

    let result = run_pipeline(
        &engine,
        "PATIENT_001",
        &calls(&[
            ("cyp2d6", "*4/*1"),
            ("CYP2C19", "*2/*2"),
            ("dpyd", "Reference/Reference"),
        ]),
        &drugs(&["codeine", "Clopidogrel", "fluorouracil", "warfarin", "aspirin"]),
    );

    insta::assert_json_snapshot!("patient_profile", result);
}

#[test]
fn engine_summary_snapshot() {
    let (_dir, config) = data_dir();
    let engine = LookupEngine::load(&config).unwrap();
    insta::assert_json_snapshot!("engine_summary", engine.summary());
}

#[test]
fn no_calls_defaults_every_gene() {
    let (_dir, config) = data_dir();
    let engine = LookupEngine::load(&config).unwrap();

    let result = run_pipeline(&engine, "P2", &BTreeMap::new(), &[]);
    assert_eq!(result.gene_profiles.len(), 6);
    assert!(result.gene_profiles.iter().all(|g| g.diplotype == "*1/*1" && !g.from_input));

    // DPYD has no star-allele table, so the default call does not resolve.
    let dpyd = result.gene_profiles.last().unwrap();
    assert_eq!(dpyd.gene, "DPYD");
    assert_eq!(dpyd.phenotype, PhenotypeCode::Unknown);
    assert_eq!(result.quality_metrics.unknown_phenotypes, 1);
    assert_eq!(result.quality_metrics.genes_with_input, 0);
}

#[test]
fn unknown_drug_gets_placeholder_fields() {
    let (_dir, config) = data_dir();
    let engine = LookupEngine::load(&config).unwrap();

    let result = run_pipeline(&engine, "P3", &BTreeMap::new(), &drugs(&["  ibuprofen "]));
    let drug = &result.drug_results[0];
    assert_eq!(drug.drug, "IBUPROFEN");
    assert_eq!(drug.primary_gene, "Unknown");
    assert_eq!(drug.diplotype_used, "N/A");
    assert_eq!(drug.phenotype, PhenotypeCode::Unknown);
    assert!(!drug.gene_found_in_input);
    assert_eq!(result.quality_metrics.drugs_unknown, 1);
    assert_eq!(result.quality_metrics.drugs_resolved, 0);
}

#[test]
fn result_serializes_codes_as_strings() {
    let (_dir, config) = data_dir();
    let engine = LookupEngine::load(&config).unwrap();

    let result = run_pipeline(
        &engine,
        "P4",
        &calls(&[("CYP2C9", "*3/*2")]),
        &drugs(&["warfarin"]),
    );
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["drug_results"][0]["phenotype"], "PM");
    assert_eq!(json["gene_profiles"][2]["gene"], "CYP2C9");
    assert_eq!(json["gene_profiles"][2]["phenotype"], "PM");
}
