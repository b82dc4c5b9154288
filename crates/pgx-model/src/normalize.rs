//! Canonicalization of gene symbols, drug names and diplotype notation.
//!
//! All functions are total: any input, including the empty string, yields
//! a (possibly degenerate) canonical form. Rejecting garbage is the
//! caller's job.

/// Canonical gene symbol: trimmed and uppercased.
///
/// No validation against a known gene set is performed.
pub fn normalize_gene(gene: &str) -> String {
    gene.trim().to_uppercase()
}

/// Canonical drug name: trimmed and uppercased.
pub fn normalize_drug(drug: &str) -> String {
    drug.trim().to_uppercase()
}

/// Canonical diplotype in `LOW/HIGH` form.
///
/// A single allele is expanded to a homozygous pair. Otherwise the input is
/// split once on the first `/`, each side trimmed and uppercased, and the two
/// sides sorted by plain string comparison (so `*17` sorts before `*2`).
///
/// ```
/// use pgx_model::normalize_diplotype;
///
/// assert_eq!(normalize_diplotype("*4/*1"), "*1/*4");
/// assert_eq!(normalize_diplotype("  *17/*1"), "*1/*17");
/// assert_eq!(normalize_diplotype("*2a/*1"), "*1/*2A");
/// assert_eq!(normalize_diplotype("*1"), "*1/*1");
/// ```
pub fn normalize_diplotype(diplotype: &str) -> String {
    let trimmed = diplotype.trim();
    let Some((left, right)) = trimmed.split_once('/') else {
        let allele = trimmed.to_uppercase();
        return format!("{allele}/{allele}");
    };

    let left = left.trim().to_uppercase();
    let right = right.trim().to_uppercase();
    if left <= right {
        format!("{left}/{right}")
    } else {
        format!("{right}/{left}")
    }
}
