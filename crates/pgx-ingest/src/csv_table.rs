//! Header-keyed CSV rows.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use sha2::{Digest, Sha256};

use crate::error::{DataFormatError, Result, TableKind};

/// One record keyed by header name. Values are trimmed.
pub type Row = BTreeMap<String, String>;

/// A fully read CSV table plus the provenance of its bytes.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub kind: TableKind,
    pub path: PathBuf,
    /// Header names, trimmed and stripped of a leading BOM, in file order.
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
    /// Lowercase hex SHA-256 of the raw bytes.
    pub sha256: String,
}

impl CsvTable {
    /// Read a table from disk.
    pub fn from_path(kind: TableKind, path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DataFormatError::NotFound {
                table: kind,
                path: path.to_path_buf(),
            });
        }
        let bytes = std::fs::read(path).map_err(|source| DataFormatError::Read {
            table: kind,
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(kind, path, &bytes)
    }

    /// Read a table from any reader; `path` is only used for reporting.
    pub fn from_reader<R: Read>(kind: TableKind, path: &Path, mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| DataFormatError::Read {
                table: kind,
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_bytes(kind, path, &bytes)
    }

    fn from_bytes(kind: TableKind, path: &Path, bytes: &[u8]) -> Result<Self> {
        let csv_error = |source: csv::Error| DataFormatError::Csv {
            table: kind,
            path: path.to_path_buf(),
            source,
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()
            .map_err(csv_error)?
            .iter()
            .map(|h| h.trim_matches('\u{feff}').trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(csv_error)?;
            let mut row = Row::new();
            for (idx, value) in record.iter().enumerate() {
                let Some(key) = headers.get(idx) else {
                    continue;
                };
                row.insert(key.clone(), value.trim().to_string());
            }
            rows.push(row);
        }

        tracing::trace!(
            table = %kind,
            path = %path.display(),
            columns = headers.len(),
            rows = rows.len(),
            "Read CSV table"
        );

        Ok(Self {
            kind,
            path: path.to_path_buf(),
            headers,
            rows,
            sha256: hex::encode(Sha256::digest(bytes)),
        })
    }

    /// Header names lowercased, for case-insensitive column checks.
    pub fn headers_lower(&self) -> Vec<String> {
        self.headers.iter().map(|h| h.to_lowercase()).collect()
    }

    /// Resolve a column name case-insensitively to the header as written.
    pub fn find_column(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }
}

/// Get a field value from a row, returning an empty string if absent.
pub(crate) fn get_field<'a>(row: &'a Row, key: &str) -> &'a str {
    row.get(key).map_or("", String::as_str)
}
