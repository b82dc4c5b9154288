//! Conversion of the embedded tables into shared record shapes.

use pgx_model::{DrugGeneEntry, DrugName, GeneSymbol, PhenotypeCode, PhenotypeEntry};

use crate::embedded::{
    CPIC_DRUG_GENES, DRUG_NAME_ALIASES, PHENOTYPE_KEYWORDS, STAR_ALLELE_PHENOTYPES, TARGET_GENES,
};

/// Embedded star-allele phenotypes, normalized, in table order.
pub fn star_allele_entries() -> Vec<PhenotypeEntry> {
    let entries: Vec<PhenotypeEntry> = STAR_ALLELE_PHENOTYPES
        .iter()
        .map(|row| PhenotypeEntry::star_allele(row.gene, row.diplotype, row.phenotype))
        .collect();
    tracing::debug!(entries = entries.len(), "Loaded embedded star-allele entries");
    entries
}

/// Authoritative CPIC drug -> gene overrides, normalized, in table order.
pub fn drug_overrides() -> Vec<DrugGeneEntry> {
    CPIC_DRUG_GENES
        .iter()
        .map(|row| DrugGeneEntry {
            drug: DrugName::new(row.drug),
            gene: GeneSymbol::new(row.gene),
            evidence: Some(row.evidence),
        })
        .collect()
}

/// Map a PharmGKB chemical name to its canonical drug, if it is a known alias.
///
/// The name is lowercased before matching; there is no fuzzy matching.
pub fn drug_alias(chemical: &str) -> Option<&'static str> {
    let key = chemical.trim().to_lowercase();
    DRUG_NAME_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, drug)| *drug)
}

/// Whether an already-uppercased gene symbol is one of the target genes.
pub fn is_target_gene(gene: &str) -> bool {
    TARGET_GENES.contains(&gene)
}

/// Classify a free-text phenotype summary by keyword.
///
/// The text is lowercased and matched against the keyword list in order;
/// the first substring hit wins and no hit yields `Unknown`. Because
/// "rapid metabolizer" is checked before "ultrarapid metabolizer", an
/// ultrarapid summary classifies as rapid.
pub fn classify_phenotype_text(text: &str) -> PhenotypeCode {
    let lowered = text.to_lowercase();
    PHENOTYPE_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map_or(PhenotypeCode::Unknown, |(_, code)| *code)
}
