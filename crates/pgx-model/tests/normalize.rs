//! Property tests for diplotype, gene and drug normalization.

use pgx_model::{normalize_diplotype, normalize_drug, normalize_gene};
use proptest::prelude::*;

/// Allele designators without a `/`, with optional surrounding whitespace.
fn allele() -> impl Strategy<Value = String> {
    "[ \t]{0,2}\\*?[0-9A-Za-z]{1,4}[ \t]{0,2}"
}

proptest! {
    #[test]
    fn diplotype_is_order_independent(a in allele(), b in allele()) {
        prop_assert_eq!(
            normalize_diplotype(&format!("{a}/{b}")),
            normalize_diplotype(&format!("{b}/{a}"))
        );
    }

    #[test]
    fn single_allele_matches_homozygous_pair(a in allele()) {
        prop_assert_eq!(
            normalize_diplotype(&a),
            normalize_diplotype(&format!("{a}/{a}"))
        );
    }

    #[test]
    fn diplotype_is_idempotent(a in allele(), b in allele()) {
        let once = normalize_diplotype(&format!("{a}/{b}"));
        prop_assert_eq!(normalize_diplotype(&once), once.clone());

        let single = normalize_diplotype(&a);
        prop_assert_eq!(normalize_diplotype(&single), single.clone());
    }

    #[test]
    fn diplotype_never_panics(raw in any::<String>()) {
        let _ = normalize_diplotype(&raw);
    }

    #[test]
    fn gene_and_drug_are_case_insensitive(name in "[A-Za-z0-9]{1,12}") {
        prop_assert_eq!(normalize_gene(&name.to_lowercase()), normalize_gene(&name.to_uppercase()));
        prop_assert_eq!(normalize_drug(&format!("  {name} ")), name.to_uppercase());
    }
}
