//! Run pipeline with explicit stages.
//!
//! 1. **Tables**: built-in expansion tables, optionally merged with a TOML file
//! 2. **Ingest**: read raw nodes from OSM XML (file or stdin)
//! 3. **Normalize**: run the address pipeline over every node
//! 4. **Output**: write OSM XML (file or stdout) and the optional JSON report
//!
//! A failure in stages 1-3 aborts the run before anything is written.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use addr_ingest::{read_osm, read_osm_file};
use addr_model::{BatchReport, RawRecord};
use addr_output::{OsmXmlOptions, write_osm_xml, write_osm_xml_file, write_report_json};
use addr_standards::{ExpansionTables, TableMergeMode, load_tables};
use addr_transform::{BatchOutput, PipelineOptions, run_batch};

/// Where raw nodes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `None` and `-` mean stdin.
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => InputSource::File(path.to_path_buf()),
            _ => InputSource::Stdin,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// Where normalized nodes go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
    /// Dry run: nothing is written.
    Discard,
}

impl OutputTarget {
    pub fn describe(&self) -> String {
        match self {
            OutputTarget::Stdout => "<stdout>".to_string(),
            OutputTarget::File(path) => path.display().to_string(),
            OutputTarget::Discard => "(dry run)".to_string(),
        }
    }
}

/// Table source for stage 1.
#[derive(Debug, Clone, Default)]
pub struct TableSource {
    pub path: Option<PathBuf>,
    pub mode: TableMergeMode,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: InputSource,
    pub output: OutputTarget,
    pub tables: TableSource,
    pub initial_id: i64,
    pub xml: OsmXmlOptions,
    pub report_path: Option<PathBuf>,
}

/// What a completed run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub input: String,
    pub output: String,
    pub report_path: Option<PathBuf>,
    pub report: BatchReport,
}

// ============================================================================
// Stage 1: Tables
// ============================================================================

pub fn resolve_tables(source: &TableSource) -> Result<ExpansionTables> {
    match &source.path {
        Some(path) => {
            let tables = load_tables(path, source.mode)
                .with_context(|| format!("load expansion tables from {}", path.display()))?;
            info!(
                path = %path.display(),
                directions = tables.directions.len(),
                road_types = tables.road_types.len(),
                "loaded expansion tables"
            );
            Ok(tables)
        }
        None => Ok(ExpansionTables::builtin()),
    }
}

// ============================================================================
// Stage 2: Ingest
// ============================================================================

pub fn ingest(source: &InputSource) -> Result<Vec<RawRecord>> {
    match source {
        InputSource::File(path) => {
            read_osm_file(path).with_context(|| format!("read {}", path.display()))
        }
        InputSource::Stdin => {
            let records = read_osm(io::stdin().lock()).context("read OSM from stdin")?;
            info!(record_count = records.len(), "read OSM input from stdin");
            Ok(records)
        }
    }
}

// ============================================================================
// Stage 3: Normalize
// ============================================================================

pub fn normalize(records: &[RawRecord], options: &PipelineOptions) -> Result<BatchOutput> {
    run_batch(records, options).context("normalize addresses")
}

// ============================================================================
// Stage 4: Output
// ============================================================================

pub fn output(
    target: &OutputTarget,
    batch: &BatchOutput,
    xml: &OsmXmlOptions,
    report_path: Option<&Path>,
) -> Result<()> {
    match target {
        OutputTarget::File(path) => write_osm_xml_file(path, &batch.records, xml)?,
        OutputTarget::Stdout => {
            let mut stdout = BufWriter::new(io::stdout().lock());
            write_osm_xml(&mut stdout, &batch.records, xml)?;
            stdout.flush().context("flush stdout")?;
        }
        OutputTarget::Discard => {}
    }
    if let Some(path) = report_path {
        write_report_json(path, &batch.report)?;
    }
    Ok(())
}

/// Run all stages.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let span = info_span!("run", input = %config.input.describe());
    let _guard = span.enter();
    let start = Instant::now();

    let tables = resolve_tables(&config.tables)?;
    let records = ingest(&config.input)?;
    let options = PipelineOptions::new(tables).with_initial_id(config.initial_id);
    let batch = normalize(&records, &options)?;
    output(
        &config.output,
        &batch,
        &config.xml,
        config.report_path.as_deref(),
    )?;

    info!(
        accepted = batch.report.accepted,
        skipped = batch.report.skipped,
        output = %config.output.describe(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );
    Ok(RunSummary {
        input: config.input.describe(),
        output: config.output.describe(),
        report_path: config.report_path.clone(),
        report: batch.report,
    })
}
