//! Core types for pharmacogenomic reference lookups.
//!
//! - [`normalize`]: canonical forms for gene symbols, drug names and diplotypes
//! - [`ids`]: newtypes carrying already-normalized keys
//! - [`phenotype`]: metabolizer phenotype codes and CPIC evidence levels
//! - [`records`]: the record shapes shared by embedded and ingested tables

pub mod ids;
pub mod normalize;
pub mod phenotype;
pub mod records;

pub use ids::{Diplotype, DrugName, GeneSymbol};
pub use normalize::{normalize_diplotype, normalize_drug, normalize_gene};
pub use phenotype::{EvidenceLevel, PhenotypeCode};
pub use records::{DrugGeneEntry, PhenotypeEntry};

/// Text returned in place of a gene or phenotype when a lookup misses.
pub const UNKNOWN: &str = "Unknown";
