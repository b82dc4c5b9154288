//! PharmGKB gene-chemical relationship scanning.
//!
//! Discovers candidate drug -> gene pairs for the target genes. The scan is
//! lenient about schema: absent columns read as empty strings. Whether a
//! candidate is used is decided by the merge step, which never lets a
//! discovered pair replace a drug that is already mapped.

use std::collections::BTreeSet;
use std::path::Path;

use pgx_model::{DrugGeneEntry, DrugName, GeneSymbol};
use pgx_standards::{drug_alias, is_target_gene};

use crate::csv_table::{CsvTable, Row, get_field};
use crate::error::{Result, TableKind};
use crate::report::TableReport;

const ENTITY1_NAME: &str = "Entity1_name";
const ENTITY1_TYPE: &str = "Entity1_type";
const ENTITY2_NAME: &str = "Entity2_name";
const ENTITY2_TYPE: &str = "Entity2_type";
const ASSOCIATION: &str = "Association";

const GENE_TYPE: &str = "Gene";
const CHEMICAL_TYPE: &str = "Chemical";

/// Candidate pairs from a relationship table, in row order.
#[derive(Debug, Clone)]
pub struct RelationshipIngest {
    /// At most one candidate per drug: the first qualifying row.
    pub candidates: Vec<DrugGeneEntry>,
    pub report: TableReport,
}

/// Read and scan a relationship table from disk.
pub fn ingest_relationships(path: &Path) -> Result<RelationshipIngest> {
    let table = CsvTable::from_path(TableKind::Relationships, path)?;
    Ok(ingest_relationship_rows(&table))
}

/// Scan an already-read relationship table.
///
/// A row yields a candidate only when its association is `associated`
/// (case-insensitive), exactly one entity is a `Gene` and the other a
/// `Chemical`, the gene is a target gene, and the chemical name is a known
/// drug alias.
pub fn ingest_relationship_rows(table: &CsvTable) -> RelationshipIngest {
    let mut report = TableReport::new(table);
    let mut seen = BTreeSet::new();
    let mut candidates = Vec::new();

    for row in &table.rows {
        let Some((gene, drug)) = candidate_pair(row) else {
            report.rows_skipped += 1;
            continue;
        };
        if !seen.insert(drug.clone()) {
            report.duplicates_dropped += 1;
            continue;
        }
        tracing::trace!(drug = %drug, gene = %gene, "Relationship candidate");
        candidates.push(DrugGeneEntry {
            drug,
            gene,
            evidence: None,
        });
    }

    report.entries_accepted = candidates.len();
    if report.rows_skipped > 0 || report.duplicates_dropped > 0 {
        tracing::debug!(
            skipped = report.rows_skipped,
            duplicates = report.duplicates_dropped,
            "Relationship table rows not used"
        );
    }
    tracing::info!(
        rows = report.rows_read,
        candidates = candidates.len(),
        path = %table.path.display(),
        "Scanned relationships table"
    );

    RelationshipIngest { candidates, report }
}

fn candidate_pair(row: &Row) -> Option<(GeneSymbol, DrugName)> {
    if !get_field(row, ASSOCIATION).eq_ignore_ascii_case("associated") {
        return None;
    }

    let e1_type = get_field(row, ENTITY1_TYPE);
    let e2_type = get_field(row, ENTITY2_TYPE);
    let (gene_raw, chemical_raw) = match (e1_type, e2_type) {
        (GENE_TYPE, CHEMICAL_TYPE) => (get_field(row, ENTITY1_NAME), get_field(row, ENTITY2_NAME)),
        (CHEMICAL_TYPE, GENE_TYPE) => (get_field(row, ENTITY2_NAME), get_field(row, ENTITY1_NAME)),
        _ => return None,
    };

    let gene = gene_raw.to_uppercase();
    if !is_target_gene(&gene) {
        return None;
    }
    let drug = drug_alias(chemical_raw)?;
    Some((GeneSymbol::new(gene), DrugName::new(drug)))
}
