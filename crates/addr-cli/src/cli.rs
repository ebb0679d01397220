//! CLI argument definitions for osm-addr.

use std::path::PathBuf;

use addr_output::DEFAULT_GENERATOR;
use addr_transform::INITIAL_ID;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "osm-addr",
    version,
    about = "Normalize address points into upload-ready OpenStreetMap nodes",
    long_about = "Normalize address points into upload-ready OpenStreetMap nodes.\n\n\
                  Reads OSM XML nodes tagged with county address fields (HOUSE_NUMB,\n\
                  DIR, STREET, TYPE, ADDRESS_LA, STATUS) and writes new nodes tagged\n\
                  addr:housenumber and addr:street with expanded, capitalized street names."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize an OSM XML address export.
    Normalize(NormalizeArgs),

    /// Print the effective expansion tables.
    Tables(TableArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Input OSM XML file ("-" or omitted for stdin).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output OSM XML file (default: stdout).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Ids are allocated downward starting one below this value.
    #[arg(
        long = "initial-id",
        value_name = "ID",
        default_value_t = INITIAL_ID,
        allow_negative_numbers = true
    )]
    pub initial_id: i64,

    /// Value of the generator attribute on the output root.
    #[arg(long = "generator", default_value = DEFAULT_GENERATOR)]
    pub generator: String,

    #[command(flatten)]
    pub tables: TableArgs,

    /// Write counts and diagnostics as JSON.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Process and report without writing OSM output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct TableArgs {
    /// TOML file with [directions] and [road_types] entries.
    #[arg(long = "tables", value_name = "PATH")]
    pub tables: Option<PathBuf>,

    /// Use only the file's entries instead of extending the built-in tables.
    #[arg(long = "replace-tables", requires = "tables")]
    pub replace_tables: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
