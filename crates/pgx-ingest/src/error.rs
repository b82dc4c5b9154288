//! Error types for reference table ingestion.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which external table an error or report refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum TableKind {
    /// Gene-specific diplotype -> phenotype table.
    Diplotype,
    /// Gene-chemical relationship table.
    Relationships,
}

impl TableKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Diplotype => "diplotype table",
            Self::Relationships => "relationships table",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The only failure the reference core produces.
///
/// Raised when an external table is missing, unreadable, empty, or lacks a
/// required column. Fatal to loading.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataFormatError {
    /// The table file does not exist.
    #[error("{table} not found: {path}")]
    NotFound { table: TableKind, path: PathBuf },

    /// The table exists but could not be read.
    #[error("cannot read {table} {path}: {source}")]
    Read {
        table: TableKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table could not be parsed as CSV.
    #[error("failed to parse {table} {path}: {source}")]
    Csv {
        table: TableKind,
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The table has no data rows.
    #[error("{table} is empty: {path}")]
    Empty { table: TableKind, path: PathBuf },

    /// Required columns are absent from the header.
    #[error(
        "{table} missing required columns: {}. Found: {}. File: {path}",
        .missing.join(", "),
        .found.join(", ")
    )]
    MissingColumns {
        table: TableKind,
        path: PathBuf,
        /// Missing column names, lowercased.
        missing: Vec<String>,
        /// Header columns that were found, lowercased.
        found: Vec<String>,
    },
}

impl DataFormatError {
    /// The table the error refers to.
    pub fn table(&self) -> TableKind {
        match self {
            Self::NotFound { table, .. }
            | Self::Read { table, .. }
            | Self::Csv { table, .. }
            | Self::Empty { table, .. }
            | Self::MissingColumns { table, .. } => *table,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, DataFormatError>;
