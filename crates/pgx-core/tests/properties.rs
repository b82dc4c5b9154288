//! Lookups are total and curated data always wins.

use pgx_core::LookupEngine;
use pgx_model::{DrugGeneEntry, DrugName, GeneSymbol, PhenotypeCode};
use pgx_standards::{TARGET_GENES, drug_overrides, star_allele_entries};
use proptest::prelude::*;

fn embedded_engine() -> LookupEngine {
    LookupEngine::builder()
        .reference_phenotypes(star_allele_entries())
        .drug_overrides(drug_overrides())
        .build()
}

proptest! {
    #[test]
    fn phenotype_lookup_is_total(gene in any::<String>(), diplotype in any::<String>()) {
        let engine = embedded_engine();
        let phenotype = engine.phenotype_lookup(&gene, &diplotype);
        if !TARGET_GENES.contains(&gene.trim().to_uppercase().as_str()) {
            prop_assert_eq!(phenotype, PhenotypeCode::Unknown);
        }
    }

    #[test]
    fn drug_lookup_is_total(drug in any::<String>()) {
        let engine = embedded_engine();
        let label = engine.drug_gene_label(&drug);
        prop_assert!(label == "Unknown" || TARGET_GENES.contains(&label));
    }

    #[test]
    fn drug_lookup_ignores_case_and_padding(
        index in 0usize..28,
        pad in "[ \t]{0,3}",
        upper in any::<bool>(),
    ) {
        let engine = embedded_engine();
        let overrides = drug_overrides();
        let canonical = overrides[index].drug.as_str();
        let cased = if upper { canonical.to_string() } else { canonical.to_lowercase() };
        let query = format!("{pad}{cased}{pad}");
        prop_assert_eq!(engine.drug_gene_label(&query), overrides[index].gene.as_str());
    }

    #[test]
    fn discovered_pairs_never_replace_curated(
        index in 0usize..28,
        gene in proptest::sample::select(TARGET_GENES.to_vec()),
    ) {
        let overrides = drug_overrides();
        let curated = &overrides[index];
        let engine = LookupEngine::builder()
            .drug_candidates([DrugGeneEntry {
                drug: DrugName::new(curated.drug.as_str()),
                gene: GeneSymbol::new(gene),
                evidence: None,
            }])
            .drug_overrides(drug_overrides())
            .build();
        prop_assert_eq!(engine.drug_gene_label(curated.drug.as_str()), curated.gene.as_str());
        prop_assert_eq!(engine.drug_evidence(curated.drug.as_str()), curated.evidence);
    }

    #[test]
    fn star_allele_lookup_ignores_allele_order(index in 0usize..52) {
        let engine = embedded_engine();
        let entry = &star_allele_entries()[index];
        let swapped = match entry.diplotype.as_str().split_once('/') {
            Some((a, b)) => format!("{b}/{a}"),
            None => entry.diplotype.to_string(),
        };
        prop_assert_eq!(
            engine.phenotype_lookup(&entry.gene.as_str().to_lowercase(), &swapped),
            entry.phenotype
        );
    }
}
