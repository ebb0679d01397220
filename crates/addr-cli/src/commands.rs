use anyhow::{Result, bail};
use comfy_table::Table;

use addr_cli::pipeline::{InputSource, OutputTarget, RunConfig, RunSummary, TableSource, resolve_tables};
use addr_output::OsmXmlOptions;
use addr_standards::{ExpansionTable, TableMergeMode};

use crate::cli::{NormalizeArgs, TableArgs};
use crate::summary::{apply_table_style, header_cell};

pub fn run_normalize(args: &NormalizeArgs) -> Result<RunSummary> {
    if args.initial_id > 0 {
        bail!("--initial-id must be zero or negative, got {}", args.initial_id);
    }
    let output = if args.dry_run {
        OutputTarget::Discard
    } else {
        match &args.output {
            Some(path) => OutputTarget::File(path.clone()),
            None => OutputTarget::Stdout,
        }
    };
    let config = RunConfig {
        input: InputSource::from_arg(args.input.as_deref()),
        output,
        tables: table_source(&args.tables),
        initial_id: args.initial_id,
        xml: OsmXmlOptions::new(args.generator.clone()),
        report_path: args.report.clone(),
    };
    addr_cli::pipeline::run(&config)
}

pub fn run_tables(args: &TableArgs) -> Result<()> {
    let tables = resolve_tables(&table_source(args))?;
    print_table("Direction", &tables.directions);
    print_table("Street type", &tables.road_types);
    Ok(())
}

fn table_source(args: &TableArgs) -> TableSource {
    TableSource {
        path: args.tables.clone(),
        mode: if args.replace_tables {
            TableMergeMode::Replace
        } else {
            TableMergeMode::Merge
        },
    }
}

fn print_table(title: &str, entries: &ExpansionTable) {
    let mut table = Table::new();
    table.set_header(vec![header_cell(title), header_cell("Expansion")]);
    apply_table_style(&mut table);
    for (abbreviation, word) in entries.iter() {
        table.add_row(vec![abbreviation, word]);
    }
    println!("{table}");
}
