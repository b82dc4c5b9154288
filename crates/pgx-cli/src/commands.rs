use std::collections::BTreeMap;

use anyhow::{Context, Result};
use pgx_core::{LoadConfig, LookupEngine, run_pipeline};
use tracing::info_span;

use crate::cli::{DrugArgs, PhenotypeArgs, ResolveArgs};
use crate::summary::print_check;

pub fn run_check(config: &LoadConfig) -> Result<()> {
    let engine = load_engine(config)?;
    print_check(&engine);
    Ok(())
}

pub fn run_phenotype(config: &LoadConfig, args: &PhenotypeArgs) -> Result<()> {
    let engine = load_engine(config)?;
    let phenotype = engine.phenotype_lookup(&args.gene, &args.diplotype);
    println!("{phenotype}");
    Ok(())
}

pub fn run_drug(config: &LoadConfig, args: &DrugArgs) -> Result<()> {
    let engine = load_engine(config)?;
    let gene = engine.drug_gene_label(&args.drug);
    match engine.drug_evidence(&args.drug) {
        Some(level) => println!("{gene} (CPIC level {level})"),
        None => println!("{gene}"),
    }
    Ok(())
}

pub fn run_resolve(config: &LoadConfig, args: &ResolveArgs) -> Result<()> {
    let span = info_span!("resolve", patient_id = %args.patient);
    let _guard = span.enter();

    let engine = load_engine(config)?;
    let diplotypes: BTreeMap<String, String> = args.diplotypes.iter().cloned().collect();
    let result = run_pipeline(&engine, &args.patient, &diplotypes, &args.drugs);
    let json = serde_json::to_string_pretty(&result).context("serialize pipeline result")?;
    println!("{json}");
    Ok(())
}

fn load_engine(config: &LoadConfig) -> Result<LookupEngine> {
    LookupEngine::load(config).context("load pharmacogenomic reference data")
}
