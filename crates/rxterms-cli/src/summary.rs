use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rxterms_model::IndexDocument;

use crate::types::LoadResult;

/// Builds the stage counter table for a finished load.
pub fn summary_table(result: &LoadResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Metric"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);

    let aggregate = &result.aggregate;
    let build = &result.build;
    let rows: [(&str, &str, usize, Option<Color>); 11] = [
        ("Ingest", "Records read", aggregate.records_read, None),
        ("Ingest", "Retired", aggregate.retired, Some(Color::Yellow)),
        ("Ingest", "Suppressed", aggregate.suppressed, Some(Color::Yellow)),
        ("Ingest", "Excluded", aggregate.excluded(), Some(Color::Yellow)),
        ("Ingest", "Active", aggregate.active, None),
        ("Ingest", "Display names", aggregate.display_names, None),
        ("Ingest", "Mixed groups", aggregate.mixed_groups, None),
        ("Build", "Documents", build.documents, None),
        ("Build", "Strength-and-form texts", build.texts, None),
        ("Build", "Duplicates dropped", build.duplicates, Some(Color::Yellow)),
        ("Output", "Documents written", result.documents_written, Some(Color::Green)),
    ];
    for (stage, metric, count, color) in rows {
        table.add_row(vec![stage_cell(stage), Cell::new(metric), count_cell(count, color)]);
    }
    table
}

/// Lists a document's strength-and-form texts beside their RXCUIs.
pub fn document_table(document: &IndexDocument) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Strength and form"), header_cell("RXCUI")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (text, rxcui) in document.entries() {
        table.add_row(vec![Cell::new(text), Cell::new(rxcui)]);
    }
    table
}

pub fn print_summary(result: &LoadResult) {
    eprintln!("Data file: {}", result.data_file.display());
    eprintln!("Index: {}", result.index);
    match (&result.output, result.dry_run) {
        (_, true) => eprintln!("Output: (dry run)"),
        (Some(path), false) => eprintln!("Output: {}", path.display()),
        (None, false) => eprintln!("Output: stdout"),
    }
    eprintln!("{}", summary_table(result));
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
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

fn stage_cell(stage: &str) -> Cell {
    Cell::new(stage)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Option<Color>) -> Cell {
    match color {
        _ if count == 0 => dim_cell(count),
        Some(color) => Cell::new(count).fg(color).add_attribute(Attribute::Bold),
        None => Cell::new(count),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
