//! The two lookup maps behind [`LookupEngine`](crate::LookupEngine).

use std::collections::HashMap;

use pgx_model::{Diplotype, DrugGeneEntry, DrugName, GeneSymbol, PhenotypeCode, PhenotypeEntry};

/// `gene -> (diplotype -> phenotype)`.
#[derive(Debug, Clone, Default)]
pub struct PhenotypeTable {
    genes: HashMap<GeneSymbol, HashMap<Diplotype, PhenotypeCode>>,
}

impl PhenotypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert, replacing any existing phenotype for the same key.
    /// Returns the replaced phenotype.
    pub fn insert(&mut self, entry: PhenotypeEntry) -> Option<PhenotypeCode> {
        self.genes
            .entry(entry.gene)
            .or_default()
            .insert(entry.diplotype, entry.phenotype)
    }

    /// Insert only when the key is not present yet. Returns whether it was inserted.
    pub fn insert_if_absent(&mut self, entry: PhenotypeEntry) -> bool {
        let diplotypes = self.genes.entry(entry.gene).or_default();
        if diplotypes.contains_key(&entry.diplotype) {
            return false;
        }
        diplotypes.insert(entry.diplotype, entry.phenotype);
        true
    }

    /// Exact-key lookup; `gene` and `diplotype` must already be in key form.
    pub fn get(&self, gene: &str, diplotype: &str) -> Option<PhenotypeCode> {
        self.genes.get(gene)?.get(diplotype).copied()
    }

    pub fn contains_gene(&self, gene: &str) -> bool {
        self.genes.contains_key(gene)
    }

    pub fn genes(&self) -> impl Iterator<Item = &GeneSymbol> {
        self.genes.keys()
    }

    pub fn gene_count(&self) -> usize {
        self.genes.len()
    }

    /// Total diplotype entries across all genes.
    pub fn entry_count(&self) -> usize {
        self.genes.values().map(HashMap::len).sum()
    }
}

/// `drug -> primary gene` with optional CPIC evidence level.
#[derive(Debug, Clone, Default)]
pub struct DrugGeneTable {
    drugs: HashMap<DrugName, DrugGeneEntry>,
}

impl DrugGeneTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert only when the drug has no gene yet. Returns whether it was inserted.
    pub fn insert_if_absent(&mut self, entry: DrugGeneEntry) -> bool {
        if self.drugs.contains_key(&entry.drug) {
            return false;
        }
        self.drugs.insert(entry.drug.clone(), entry);
        true
    }

    /// Exact-key lookup; `drug` must already be normalized.
    pub fn get(&self, drug: &str) -> Option<&DrugGeneEntry> {
        self.drugs.get(drug)
    }

    pub fn entries(&self) -> impl Iterator<Item = &DrugGeneEntry> {
        self.drugs.values()
    }

    pub fn len(&self) -> usize {
        self.drugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drugs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrites_and_insert_if_absent_keeps() {
        let mut table = PhenotypeTable::new();
        let entry = |phenotype| PhenotypeEntry::star_allele("CYP2D6", "*1/*1", phenotype);

        assert_eq!(table.insert(entry(PhenotypeCode::Poor)), None);
        assert_eq!(
            table.insert(entry(PhenotypeCode::Normal)),
            Some(PhenotypeCode::Poor)
        );
        assert!(!table.insert_if_absent(entry(PhenotypeCode::Rapid)));
        assert_eq!(table.get("CYP2D6", "*1/*1"), Some(PhenotypeCode::Normal));
        assert_eq!(table.entry_count(), 1);
    }

    #[test]
    fn first_drug_mapping_is_kept() {
        let mut table = DrugGeneTable::new();
        assert!(table.is_empty());
        let entry = |gene: &str| DrugGeneEntry {
            drug: DrugName::new("warfarin"),
            gene: GeneSymbol::new(gene),
            evidence: None,
        };
        assert!(table.insert_if_absent(entry("CYP2C9")));
        assert!(!table.insert_if_absent(entry("VKORC1")));
        assert_eq!(table.get("WARFARIN").map(|e| e.gene.as_str()), Some("CYP2C9"));
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }
}
