//! Record shapes shared by the embedded reference data and ingested tables.
//!
//! Both sources are reduced to these records before merging, so the same
//! precedence code path handles either.

use serde::Serialize;

use crate::ids::{Diplotype, DrugName, GeneSymbol};
use crate::phenotype::{EvidenceLevel, PhenotypeCode};

/// One (gene, diplotype) -> phenotype mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhenotypeEntry {
    pub gene: GeneSymbol,
    pub diplotype: Diplotype,
    pub phenotype: PhenotypeCode,
}

impl PhenotypeEntry {
    /// Build an entry from raw star-allele text, normalizing gene and diplotype.
    pub fn star_allele(gene: &str, diplotype: &str, phenotype: PhenotypeCode) -> Self {
        Self {
            gene: GeneSymbol::new(gene),
            diplotype: Diplotype::new(diplotype),
            phenotype,
        }
    }
}

/// One drug -> primary gene mapping.
///
/// `evidence` is only present for curated CPIC overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrugGeneEntry {
    pub drug: DrugName,
    pub gene: GeneSymbol,
    pub evidence: Option<EvidenceLevel>,
}
