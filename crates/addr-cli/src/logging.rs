//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Every diagnostic of a run (skipped records, unexpanded abbreviations,
//! the closing counts) is a `tracing` event, so the log is the diagnostic
//! stream.
//!
//! # Log Levels
//!
//! - `error`: fatal errors
//! - `warn`: abbreviations that could not be expanded
//! - `info`: skipped records, missing street types, stage progress, summary counts
//! - `debug`: every normalized address
//! - `trace`: unused

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Crates whose events pass the configured level.
const CRATE_TARGETS: &[&str] = &[
    "osm_addr",
    "addr_cli",
    "addr_ingest",
    "addr_model",
    "addr_output",
    "addr_standards",
    "addr_transform",
];

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level filter for the workspace crates.
    pub level_filter: LevelFilter,
    /// Whether `RUST_LOG` may override `level_filter`.
    pub use_env_filter: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
    /// Output format: "pretty", "compact", or "json".
    pub format: LogFormat,
    /// Optional log file path. When set, logs are written to the file.
    pub log_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::INFO,
            use_env_filter: true,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// This should be called once at application startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
///
/// # Panics
///
/// Panics if called more than once or if subscriber initialization fails.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        init_logging_with_writer(config, SharedFileWriter::new(file));
    } else {
        init_logging_with_writer(config, io::stderr);
    }
    Ok(())
}

/// Initialize logging with a custom writer (useful for testing).
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(build_env_filter(config));
    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(false)
        .without_time();

    match config.format {
        LogFormat::Json => registry.with(layer.json()).init(),
        LogFormat::Compact => registry
            .with(layer.compact().with_ansi(config.with_ansi))
            .init(),
        LogFormat::Pretty => registry.with(layer.with_ansi(config.with_ansi)).init(),
    }
}

#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<std::fs::File>>,
}

impl SharedFileWriter {
    fn new(file: std::fs::File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<std::fs::File>>,
}

impl Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}

/// Filter directive string: workspace crates at `level`, everything else at warn.
pub fn filter_directives(level_filter: LevelFilter) -> String {
    let level = level_filter.to_string().to_lowercase();
    let mut directives = String::from("warn");
    for target in CRATE_TARGETS {
        directives.push_str(&format!(",{target}={level}"));
    }
    directives
}

/// Build an `EnvFilter`, letting `RUST_LOG` win when allowed.
fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(filter_directives(config.level_filter));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_cover_workspace_crates() {
        let directives = filter_directives(LevelFilter::DEBUG);
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("addr_transform=debug"));
        assert!(directives.contains("osm_addr=debug"));
    }

    #[test]
    fn off_level_is_lowercase() {
        assert!(filter_directives(LevelFilter::OFF).contains("addr_cli=off"));
    }

    // The only test in this binary that installs the global subscriber.
    #[test]
    fn json_events_go_to_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        let config = LogConfig {
            level_filter: LevelFilter::DEBUG,
            use_env_filter: false,
            with_ansi: false,
            format: LogFormat::Json,
            log_file: Some(path.clone()),
        };
        init_logging(&config).unwrap();

        tracing::debug!(target: "addr_transform", accepted = 2, "batch done");
        tracing::debug!(target: "other_crate", "filtered out");

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1, "{text}");
        let event: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(event["level"], "DEBUG");
        assert_eq!(event["fields"]["message"], "batch done");
        assert_eq!(event["fields"]["accepted"], 2);
    }
}
