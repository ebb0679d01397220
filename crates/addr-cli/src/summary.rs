use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use addr_cli::pipeline::RunSummary;
use addr_model::SkipReason;

const SKIP_REASONS: [SkipReason; 4] = [
    SkipReason::NoHouseNumber,
    SkipReason::Retired,
    SkipReason::MissingStreet,
    SkipReason::MissingLabel,
];

/// Print the run summary to stderr; stdout may carry the OSM output.
pub fn print_summary(summary: &RunSummary) {
    let report = &summary.report;
    eprintln!("Input: {}", summary.input);
    eprintln!("Output: {}", summary.output);
    if let Some(path) = &summary.report_path {
        eprintln!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Records"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Accepted"), count_cell(report.accepted, Color::Green)]);
    for reason in SKIP_REASONS {
        let count = report.skipped_for(reason);
        table.add_row(vec![
            dim_cell(format!("  skipped: {reason}")),
            count_cell(count, Color::Yellow),
        ]);
    }
    table.add_row(vec![Cell::new("Skipped"), count_cell(report.skipped, Color::Yellow)]);
    let advisories = report.diagnostics.iter().filter(|d| !d.is_skip()).count();
    table.add_row(vec![Cell::new("Advisories"), count_cell(advisories, Color::Yellow)]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.total).add_attribute(Attribute::Bold),
    ]);
    eprintln!("{table}");

    if let (Some(first), Some(last)) = (report.first_id, report.last_id) {
        eprintln!("Node ids: {first} .. {last}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(60);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
