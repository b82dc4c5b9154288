//! Gene-specific diplotype/phenotype table ingestion (CPIC DPYD table).
//!
//! Diplotype keys in this table are not star-allele notation, so they are
//! kept verbatim rather than normalized. Phenotypes are classified from the
//! free-text summary column by keyword.

use std::collections::BTreeSet;
use std::path::Path;

use pgx_model::{Diplotype, GeneSymbol, PhenotypeEntry};
use pgx_standards::classify_phenotype_text;

use crate::csv_table::{CsvTable, get_field};
use crate::error::{DataFormatError, Result, TableKind};
use crate::report::TableReport;

/// Diplotype column of the CPIC DPYD table.
pub const DPYD_DIPLOTYPE_COLUMN: &str = "DPYD Diplotype";
/// Free-text phenotype column of the CPIC DPYD table.
pub const DPYD_PHENOTYPE_COLUMN: &str = "Coded Diplotype/Phenotype Summary";

/// Which gene a diplotype table describes and where its two columns are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiplotypeTableSpec {
    pub gene: GeneSymbol,
    pub diplotype_column: String,
    pub phenotype_column: String,
}

impl DiplotypeTableSpec {
    /// The CPIC DPYD Diplotype/Phenotype table layout.
    pub fn dpyd() -> Self {
        Self {
            gene: GeneSymbol::new("DPYD"),
            diplotype_column: DPYD_DIPLOTYPE_COLUMN.to_string(),
            phenotype_column: DPYD_PHENOTYPE_COLUMN.to_string(),
        }
    }
}

/// Entries produced from a diplotype table, in first-seen order.
#[derive(Debug, Clone)]
pub struct DiplotypeIngest {
    pub entries: Vec<PhenotypeEntry>,
    pub report: TableReport,
}

/// Read and ingest a diplotype table from disk.
pub fn ingest_diplotype_table(spec: &DiplotypeTableSpec, path: &Path) -> Result<DiplotypeIngest> {
    let table = CsvTable::from_path(TableKind::Diplotype, path)?;
    ingest_diplotype_rows(spec, &table)
}

/// Ingest an already-read diplotype table.
///
/// Fails when the table has no data rows or lacks either required column
/// (matched case-insensitively). Rows with a blank diplotype or phenotype
/// are skipped; for repeated diplotype keys the first row wins.
pub fn ingest_diplotype_rows(spec: &DiplotypeTableSpec, table: &CsvTable) -> Result<DiplotypeIngest> {
    if table.rows.is_empty() {
        return Err(DataFormatError::Empty {
            table: TableKind::Diplotype,
            path: table.path.clone(),
        });
    }

    let diplotype_column = table.find_column(&spec.diplotype_column);
    let phenotype_column = table.find_column(&spec.phenotype_column);
    let (Some(diplotype_column), Some(phenotype_column)) = (diplotype_column, phenotype_column)
    else {
        let missing = [
            (&spec.diplotype_column, diplotype_column),
            (&spec.phenotype_column, phenotype_column),
        ]
        .into_iter()
        .filter(|(_, found)| found.is_none())
        .map(|(name, _)| name.to_lowercase())
        .collect();
        return Err(DataFormatError::MissingColumns {
            table: TableKind::Diplotype,
            path: table.path.clone(),
            missing,
            found: table.headers_lower(),
        });
    };

    let mut report = TableReport::new(table);
    let mut seen = BTreeSet::new();
    let mut entries = Vec::new();

    for row in &table.rows {
        let diplotype_raw = get_field(row, diplotype_column);
        let phenotype_text = get_field(row, phenotype_column).to_lowercase();
        if diplotype_raw.is_empty() || phenotype_text.is_empty() {
            report.rows_skipped += 1;
            continue;
        }
        if !seen.insert(diplotype_raw.to_string()) {
            report.duplicates_dropped += 1;
            continue;
        }

        let phenotype = classify_phenotype_text(&phenotype_text);
        tracing::trace!(
            gene = %spec.gene,
            diplotype = diplotype_raw,
            phenotype = %phenotype,
            "Diplotype table entry"
        );
        entries.push(PhenotypeEntry {
            gene: spec.gene.clone(),
            diplotype: Diplotype::verbatim(diplotype_raw),
            phenotype,
        });
    }

    report.entries_accepted = entries.len();
    if report.rows_skipped > 0 || report.duplicates_dropped > 0 {
        tracing::debug!(
            gene = %spec.gene,
            skipped = report.rows_skipped,
            duplicates = report.duplicates_dropped,
            "Diplotype table rows not used"
        );
    }
    tracing::info!(
        gene = %spec.gene,
        entries = entries.len(),
        path = %table.path.display(),
        "Loaded diplotype table"
    );

    Ok(DiplotypeIngest { entries, report })
}
