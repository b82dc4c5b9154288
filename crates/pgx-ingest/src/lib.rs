//! External reference table ingestion.
//!
//! Two independent ingestors turn externally supplied CSV tables into the
//! record shapes used by the lookup engine:
//!
//! - [`diplotype`]: a gene-specific diplotype/phenotype table (CPIC DPYD).
//!   Strict: the required columns must be present and the table non-empty.
//! - [`relationships`]: the PharmGKB gene-chemical relationship table.
//!   Lenient: missing columns read as empty strings.
//!
//! Any failure is reported as a [`DataFormatError`] naming the table and its
//! location. Nothing in this crate swallows those errors.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pgx_ingest::{DiplotypeTableSpec, ingest_diplotype_table, ingest_relationships};
//!
//! let dpyd = ingest_diplotype_table(&DiplotypeTableSpec::dpyd(), Path::new("data/DPYD_Diplotype_Phenotype_Table.csv"))?;
//! let pairs = ingest_relationships(Path::new("data/relationships.csv"))?;
//! ```

mod csv_table;
mod diplotype;
mod error;
mod relationships;
mod report;

pub use csv_table::{CsvTable, Row};
pub use diplotype::{
    DiplotypeIngest, DiplotypeTableSpec, DPYD_DIPLOTYPE_COLUMN, DPYD_PHENOTYPE_COLUMN,
    ingest_diplotype_rows, ingest_diplotype_table,
};
pub use error::{DataFormatError, Result, TableKind};
pub use relationships::{
    RelationshipIngest, ingest_relationship_rows, ingest_relationships,
};
pub use report::TableReport;
