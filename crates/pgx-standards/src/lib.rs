//! Embedded CPIC reference data.
//!
//! The curated tables live in [`embedded`] as plain record arrays; the
//! functions in [`reference`] turn them into the shared record shapes from
//! `pgx-model` so that embedded and ingested data follow one merge path.
//!
//! # Tables
//!
//! - Star-allele phenotypes for CYP2D6, CYP2C19, CYP2C9, SLCO1B1 and TPMT.
//!   DPYD is not embedded; it is ingested from the CPIC DPYD table.
//! - CPIC level A/B drug -> primary gene overrides (authoritative).
//! - Lowercase chemical name -> canonical drug aliases used when scanning
//!   PharmGKB relationships.
//! - The target gene set and the free-text phenotype keyword list.

pub mod embedded;
pub mod reference;

pub use embedded::{DrugOverride, StarAlleleRow, TARGET_GENES};
pub use reference::{
    classify_phenotype_text, drug_alias, drug_overrides, is_target_gene, star_allele_entries,
};
