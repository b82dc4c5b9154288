use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use pgx_core::{LookupEngine, TableReport};

/// Hex digits of the SHA-256 shown in the sources table.
const DIGEST_PREFIX: usize = 12;

pub fn print_check(engine: &LookupEngine) {
    println!("Loaded: {}", engine.summary());
    println!();
    println!("Sources:");
    println!("{}", sources_table(engine.sources()));

    let genes: Vec<&str> = engine.all_genes().iter().map(|g| g.as_str()).collect();
    println!();
    println!("Genes: {}", genes.join(", "));

    let mut drugs = Table::new();
    drugs.set_header(vec![
        header_cell("Drug"),
        header_cell("Primary gene"),
        header_cell("CPIC level"),
    ]);
    apply_table_style(&mut drugs);
    align_column(&mut drugs, 2, CellAlignment::Center);
    for entry in engine.all_drugs() {
        let evidence = match entry.evidence {
            Some(level) => Cell::new(level),
            None => dim_cell("-"),
        };
        drugs.add_row(vec![
            Cell::new(&entry.drug),
            Cell::new(&entry.gene),
            evidence,
        ]);
    }
    println!();
    println!("Drugs:");
    println!("{drugs}");
}

fn sources_table(reports: &[TableReport]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Path"),
        header_cell("Rows"),
        header_cell("Accepted"),
        header_cell("Skipped"),
        header_cell("Duplicates"),
        header_cell("SHA-256"),
    ]);
    apply_table_style(&mut table);
    for column in 2..=5 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for report in reports {
        let digest = report.sha256.get(..DIGEST_PREFIX).unwrap_or(&report.sha256);
        table.add_row(vec![
            Cell::new(report.table),
            Cell::new(report.path.display()),
            Cell::new(report.rows_read),
            Cell::new(report.entries_accepted).fg(Color::Green),
            count_cell(report.rows_skipped, Color::Yellow),
            count_cell(report.duplicates_dropped, Color::Yellow),
            dim_cell(digest),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}
