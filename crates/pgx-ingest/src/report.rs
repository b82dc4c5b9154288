use std::path::PathBuf;

use serde::Serialize;

use crate::csv_table::CsvTable;
use crate::error::TableKind;

/// What was read from one external table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableReport {
    pub table: TableKind,
    pub path: PathBuf,
    pub rows_read: usize,
    pub entries_accepted: usize,
    /// Rows ignored because a required value was blank or the row did not qualify.
    pub rows_skipped: usize,
    /// Rows whose key had already been taken by an earlier row.
    pub duplicates_dropped: usize,
    pub sha256: String,
}

impl TableReport {
    pub(crate) fn new(table: &CsvTable) -> Self {
        Self {
            table: table.kind,
            path: table.path.clone(),
            rows_read: table.rows.len(),
            entries_accepted: 0,
            rows_skipped: 0,
            duplicates_dropped: 0,
            sha256: table.sha256.clone(),
        }
    }
}
