//! Per-patient resolution: diplotypes to phenotypes, drugs to genes.

use std::collections::BTreeMap;

use pgx_model::{PhenotypeCode, UNKNOWN, normalize_drug, normalize_gene};
use pgx_standards::TARGET_GENES;
use serde::Serialize;
use tracing::{info, warn};

use crate::engine::LookupEngine;

/// Diplotype assumed for a target gene the patient has no call for.
pub const DEFAULT_DIPLOTYPE: &str = "*1/*1";

/// Diplotype reported for a drug whose primary gene is unknown.
pub const NOT_APPLICABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneResult {
    pub gene: String,
    pub diplotype: String,
    pub phenotype: PhenotypeCode,
    /// Whether the diplotype came from the input rather than the default.
    pub from_input: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrugResult {
    pub drug: String,
    pub primary_gene: String,
    pub diplotype_used: String,
    pub phenotype: PhenotypeCode,
    pub gene_found_in_input: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct QualityMetrics {
    pub genes_resolved: usize,
    pub genes_with_input: usize,
    pub drugs_requested: usize,
    pub drugs_resolved: usize,
    pub drugs_unknown: usize,
    /// Target genes whose phenotype came back `Unknown`.
    pub unknown_phenotypes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineResult {
    pub patient_id: String,
    /// One entry per target gene, in target-gene order.
    pub gene_profiles: Vec<GeneResult>,
    /// One entry per requested drug, in request order.
    pub drug_results: Vec<DrugResult>,
    pub quality_metrics: QualityMetrics,
}

/// Resolve a patient's diplotype calls and requested drugs.
///
/// Diplotype keys are gene symbols in any case. Every target gene gets a
/// profile; genes without a call use [`DEFAULT_DIPLOTYPE`]. A drug takes
/// the phenotype of its primary gene's profile.
pub fn run_pipeline(
    engine: &LookupEngine,
    patient_id: &str,
    diplotypes: &BTreeMap<String, String>,
    drugs: &[String],
) -> PipelineResult {
    let calls: BTreeMap<String, &str> = diplotypes
        .iter()
        .map(|(gene, diplotype)| (normalize_gene(gene), diplotype.as_str()))
        .collect();

    let gene_profiles: Vec<GeneResult> = TARGET_GENES
        .iter()
        .map(|&gene| {
            let call = calls.get(gene).copied();
            let diplotype = call.unwrap_or(DEFAULT_DIPLOTYPE);
            GeneResult {
                gene: gene.to_string(),
                diplotype: diplotype.to_string(),
                phenotype: engine.phenotype_lookup(gene, diplotype),
                from_input: call.is_some(),
            }
        })
        .collect();

    let drug_results: Vec<DrugResult> = drugs
        .iter()
        .map(|drug| resolve_drug(engine, &gene_profiles, &calls, drug))
        .collect();

    let drugs_unknown = drug_results
        .iter()
        .filter(|result| result.primary_gene == UNKNOWN)
        .count();
    let quality_metrics = QualityMetrics {
        genes_resolved: gene_profiles.len(),
        genes_with_input: gene_profiles.iter().filter(|g| g.from_input).count(),
        drugs_requested: drug_results.len(),
        drugs_resolved: drug_results.len() - drugs_unknown,
        drugs_unknown,
        unknown_phenotypes: gene_profiles
            .iter()
            .filter(|g| g.phenotype == PhenotypeCode::Unknown)
            .count(),
    };

    info!(
        patient_id,
        genes = quality_metrics.genes_resolved,
        drugs = quality_metrics.drugs_requested,
        unknown_drugs = quality_metrics.drugs_unknown,
        "Pipeline complete"
    );

    PipelineResult {
        patient_id: patient_id.to_string(),
        gene_profiles,
        drug_results,
        quality_metrics,
    }
}

fn resolve_drug(
    engine: &LookupEngine,
    gene_profiles: &[GeneResult],
    calls: &BTreeMap<String, &str>,
    drug: &str,
) -> DrugResult {
    let name = normalize_drug(drug);
    let Some(gene) = engine.drug_gene_lookup(&name) else {
        warn!(drug = %name, "Unknown drug; no primary gene");
        return DrugResult {
            drug: name,
            primary_gene: UNKNOWN.to_string(),
            diplotype_used: NOT_APPLICABLE.to_string(),
            phenotype: PhenotypeCode::Unknown,
            gene_found_in_input: false,
        };
    };

    let call = calls.get(gene.as_str()).copied();
    let phenotype = gene_profiles
        .iter()
        .find(|profile| profile.gene == gene.as_str())
        .map_or(PhenotypeCode::Unknown, |profile| profile.phenotype);
    DrugResult {
        drug: name,
        primary_gene: gene.to_string(),
        diplotype_used: call.unwrap_or(DEFAULT_DIPLOTYPE).to_string(),
        phenotype,
        gene_found_in_input: call.is_some(),
    }
}
