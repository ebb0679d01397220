use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use addr_model::BatchReport;

use crate::common::ensure_parent_dir;

/// Write the run report as pretty-printed JSON.
pub fn write_report_json(output_path: &Path, report: &BatchReport) -> Result<()> {
    ensure_parent_dir(output_path)?;
    let file =
        File::create(output_path).with_context(|| format!("create {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report).context("serialize report")?;
    writer.write_all(b"\n")?;
    writer
        .flush()
        .with_context(|| format!("flush {}", output_path.display()))?;
    Ok(())
}
