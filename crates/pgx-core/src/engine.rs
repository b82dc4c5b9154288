//! The immutable lookup engine and its ordered merge.

use std::fmt;

use pgx_ingest::{DataFormatError, DiplotypeTableSpec, TableReport};
use pgx_model::{
    DrugGeneEntry, EvidenceLevel, GeneSymbol, PhenotypeCode, PhenotypeEntry, UNKNOWN,
    normalize_diplotype, normalize_drug, normalize_gene,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::LoadConfig;
use crate::tables::{DrugGeneTable, PhenotypeTable};

/// Counts describing a loaded engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub genes_loaded: usize,
    pub diplotype_entries: usize,
    pub drugs_loaded: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} genes, {} diplotype entries, {} drugs",
            self.genes_loaded, self.diplotype_entries, self.drugs_loaded
        )
    }
}

/// Collects the four entry sources and merges them in a fixed order.
///
/// Call order on the builder does not matter. [`EngineBuilder::build`]
/// always applies:
/// 1. reference phenotypes (a later duplicate replaces an earlier one)
/// 2. external phenotypes (never replace an existing key)
/// 3. drug overrides (first per drug wins)
/// 4. discovered drug candidates (never replace an existing drug)
#[derive(Debug, Default)]
pub struct EngineBuilder {
    reference_phenotypes: Vec<PhenotypeEntry>,
    external_phenotypes: Vec<PhenotypeEntry>,
    drug_overrides: Vec<DrugGeneEntry>,
    drug_candidates: Vec<DrugGeneEntry>,
    sources: Vec<TableReport>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reference_phenotypes(mut self, entries: impl IntoIterator<Item = PhenotypeEntry>) -> Self {
        self.reference_phenotypes.extend(entries);
        self
    }

    pub fn external_phenotypes(mut self, entries: impl IntoIterator<Item = PhenotypeEntry>) -> Self {
        self.external_phenotypes.extend(entries);
        self
    }

    pub fn drug_overrides(mut self, entries: impl IntoIterator<Item = DrugGeneEntry>) -> Self {
        self.drug_overrides.extend(entries);
        self
    }

    pub fn drug_candidates(mut self, entries: impl IntoIterator<Item = DrugGeneEntry>) -> Self {
        self.drug_candidates.extend(entries);
        self
    }

    /// Record the report of a table that contributed entries.
    pub fn source(mut self, report: TableReport) -> Self {
        self.sources.push(report);
        self
    }

    pub fn build(self) -> LookupEngine {
        let mut phenotypes = PhenotypeTable::new();
        for entry in self.reference_phenotypes {
            let key = (entry.gene.clone(), entry.diplotype.clone());
            if let Some(previous) = phenotypes.insert(entry) {
                debug!(
                    gene = %key.0,
                    diplotype = %key.1,
                    replaced = %previous,
                    "Duplicate reference diplotype; later entry wins"
                );
            }
        }

        let mut external_kept = 0usize;
        for entry in self.external_phenotypes {
            if phenotypes.insert_if_absent(entry) {
                external_kept += 1;
            }
        }

        let mut drug_genes = DrugGeneTable::new();
        for entry in self.drug_overrides {
            drug_genes.insert_if_absent(entry);
        }
        let overrides = drug_genes.len();

        let mut discovered = 0usize;
        let mut shadowed = 0usize;
        for entry in self.drug_candidates {
            if drug_genes.insert_if_absent(entry) {
                discovered += 1;
            } else {
                shadowed += 1;
            }
        }

        debug!(
            external_kept,
            overrides, discovered, shadowed, "Merged reference and external entries"
        );

        LookupEngine {
            phenotypes,
            drug_genes,
            sources: self.sources,
        }
    }
}

/// Read-only phenotype and drug-gene lookups.
///
/// Built once and never mutated afterwards, so an `Arc<LookupEngine>` can be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct LookupEngine {
    phenotypes: PhenotypeTable,
    drug_genes: DrugGeneTable,
    sources: Vec<TableReport>,
}

impl LookupEngine {
    /// Read both external tables and merge them with the embedded reference data.
    ///
    /// The diplotype table is read first; either table failing aborts the load.
    pub fn load(config: &LoadConfig) -> Result<Self, DataFormatError> {
        let diplotype_path = config.diplotype_table_path();
        let relationships_path = config.relationships_table_path();
        info!(
            diplotype_table = %diplotype_path.display(),
            relationships_table = %relationships_path.display(),
            "Loading pharmacogenomic reference data"
        );

        let diplotypes =
            pgx_ingest::ingest_diplotype_table(&DiplotypeTableSpec::dpyd(), &diplotype_path)?;
        let relationships = pgx_ingest::ingest_relationships(&relationships_path)?;

        let engine = EngineBuilder::new()
            .reference_phenotypes(pgx_standards::star_allele_entries())
            .external_phenotypes(diplotypes.entries)
            .drug_overrides(pgx_standards::drug_overrides())
            .drug_candidates(relationships.candidates)
            .source(diplotypes.report)
            .source(relationships.report)
            .build();

        let summary = engine.summary();
        info!(
            genes = summary.genes_loaded,
            diplotype_entries = summary.diplotype_entries,
            drugs = summary.drugs_loaded,
            "Lookup engine ready"
        );
        Ok(engine)
    }

    /// Start an engine from explicit entry sources.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Phenotype for a gene/diplotype pair; never fails.
    ///
    /// The diplotype is tried in normalized form first, then trimmed as given
    /// so verbatim keys such as DPYD's `Reference/Reference` still match.
    pub fn phenotype_lookup(&self, gene: &str, diplotype: &str) -> PhenotypeCode {
        let gene = normalize_gene(gene);
        if !self.phenotypes.contains_gene(&gene) {
            debug!(gene = %gene, "Gene has no phenotype table");
            return PhenotypeCode::Unknown;
        }

        let normalized = normalize_diplotype(diplotype);
        let found = self
            .phenotypes
            .get(&gene, &normalized)
            .or_else(|| self.phenotypes.get(&gene, diplotype.trim()));
        match found {
            Some(phenotype) => phenotype,
            None => {
                debug!(gene = %gene, diplotype = %normalized, "Diplotype not found");
                PhenotypeCode::Unknown
            }
        }
    }

    /// Primary gene for a drug, if the drug is known.
    pub fn drug_gene_lookup(&self, drug: &str) -> Option<&GeneSymbol> {
        self.drug_genes.get(&normalize_drug(drug)).map(|entry| &entry.gene)
    }

    /// Primary gene symbol for a drug, or `"Unknown"`.
    pub fn drug_gene_label(&self, drug: &str) -> &str {
        match self.drug_gene_lookup(drug) {
            Some(gene) => gene.as_str(),
            None => {
                debug!(drug = %normalize_drug(drug), "Drug has no known primary gene");
                UNKNOWN
            }
        }
    }

    /// CPIC evidence level, present only for curated overrides.
    pub fn drug_evidence(&self, drug: &str) -> Option<EvidenceLevel> {
        self.drug_genes.get(&normalize_drug(drug))?.evidence
    }

    /// Genes with at least one phenotype entry, sorted.
    pub fn all_genes(&self) -> Vec<&GeneSymbol> {
        let mut genes: Vec<_> = self.phenotypes.genes().collect();
        genes.sort();
        genes
    }

    /// Known drugs with their primary genes, sorted by drug.
    pub fn all_drugs(&self) -> Vec<&DrugGeneEntry> {
        let mut drugs: Vec<_> = self.drug_genes.entries().collect();
        drugs.sort_by(|a, b| a.drug.cmp(&b.drug));
        drugs
    }

    pub fn summary(&self) -> Summary {
        Summary {
            genes_loaded: self.phenotypes.gene_count(),
            diplotype_entries: self.phenotypes.entry_count(),
            drugs_loaded: self.drug_genes.len(),
        }
    }

    /// Reports for the external tables this engine was built from.
    pub fn sources(&self) -> &[TableReport] {
        &self.sources
    }
}

#[cfg(test)]
mod tests {
    use pgx_model::{DrugName, GeneSymbol};

    use super::*;

    fn drug(name: &str, gene: &str, evidence: Option<EvidenceLevel>) -> DrugGeneEntry {
        DrugGeneEntry {
            drug: DrugName::new(name),
            gene: GeneSymbol::new(gene),
            evidence,
        }
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LookupEngine>();
    }

    #[test]
    fn merge_order_ignores_builder_call_order() {
        let engine = EngineBuilder::new()
            .drug_candidates([drug("warfarin", "VKORC1", None)])
            .drug_overrides([drug("warfarin", "CYP2C9", Some(EvidenceLevel::A))])
            .build();
        assert_eq!(engine.drug_gene_label("Warfarin"), "CYP2C9");
        assert_eq!(engine.drug_evidence("warfarin"), Some(EvidenceLevel::A));
    }

    #[test]
    fn external_never_replaces_reference() {
        let engine = EngineBuilder::new()
            .external_phenotypes([PhenotypeEntry {
                gene: GeneSymbol::new("CYP2C9"),
                diplotype: pgx_model::Diplotype::verbatim("*1/*1"),
                phenotype: PhenotypeCode::Poor,
            }])
            .reference_phenotypes([PhenotypeEntry::star_allele(
                "CYP2C9",
                "*1/*1",
                PhenotypeCode::Normal,
            )])
            .build();
        assert_eq!(engine.phenotype_lookup("CYP2C9", "*1/*1"), PhenotypeCode::Normal);
    }

    #[test]
    fn duplicate_reference_entry_last_wins() {
        let engine = EngineBuilder::new()
            .reference_phenotypes([
                PhenotypeEntry::star_allele("CYP2D6", "*1/*41", PhenotypeCode::Intermediate),
                PhenotypeEntry::star_allele("CYP2D6", "*41/*1", PhenotypeCode::Normal),
            ])
            .build();
        assert_eq!(engine.phenotype_lookup("CYP2D6", "*1/*41"), PhenotypeCode::Normal);
        assert_eq!(engine.summary().diplotype_entries, 1);
    }

    #[test]
    fn misses_resolve_to_unknown() {
        let engine = EngineBuilder::new()
            .reference_phenotypes([PhenotypeEntry::star_allele(
                "TPMT",
                "*1/*1",
                PhenotypeCode::Normal,
            )])
            .build();
        assert_eq!(engine.phenotype_lookup("TPMT", "*9/*9"), PhenotypeCode::Unknown);
        assert_eq!(engine.phenotype_lookup("NOPE", "*1/*1"), PhenotypeCode::Unknown);
        assert_eq!(engine.phenotype_lookup("", ""), PhenotypeCode::Unknown);
        assert_eq!(engine.drug_gene_lookup("aspirin"), None);
        assert_eq!(engine.drug_gene_label("aspirin"), UNKNOWN);
        assert_eq!(engine.drug_evidence("aspirin"), None);
    }

    #[test]
    fn listings_are_sorted() {
        let engine = EngineBuilder::new()
            .reference_phenotypes([
                PhenotypeEntry::star_allele("TPMT", "*1/*1", PhenotypeCode::Normal),
                PhenotypeEntry::star_allele("CYP2C9", "*1/*1", PhenotypeCode::Normal),
            ])
            .drug_overrides([
                drug("warfarin", "CYP2C9", Some(EvidenceLevel::A)),
                drug("azathioprine", "TPMT", Some(EvidenceLevel::A)),
            ])
            .build();
        let genes: Vec<_> = engine.all_genes().iter().map(|g| g.as_str()).collect();
        assert_eq!(genes, ["CYP2C9", "TPMT"]);
        let drugs: Vec<_> = engine.all_drugs().iter().map(|d| d.drug.as_str()).collect();
        assert_eq!(drugs, ["AZATHIOPRINE", "WARFARIN"]);
    }
}
