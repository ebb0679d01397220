//! Batch driver: runs the pipeline over a full input collection.

use addr_model::{BatchReport, NormalizedRecord, RawRecord};
use tracing::{info, info_span};

use crate::error::TransformError;
use crate::ids::IdAllocator;
use crate::options::PipelineOptions;
use crate::pipeline::{AddressPipeline, RecordOutcome};

/// Accepted records in input order, plus counters and diagnostics.
#[derive(Debug, Clone, Default)]
pub struct BatchOutput {
    pub records: Vec<NormalizedRecord>,
    pub report: BatchReport,
}

/// Normalize every record in order.
///
/// Record-level problems are absorbed into the report; the only error is
/// an invalid or exhausted id range.
pub fn run_batch(
    records: &[RawRecord],
    options: &PipelineOptions,
) -> Result<BatchOutput, TransformError> {
    let span = info_span!("normalize", record_count = records.len());
    let _guard = span.enter();

    let pipeline = AddressPipeline::new(&options.tables);
    let mut ids = IdAllocator::new(options.initial_id)?;
    let mut output = BatchOutput::default();

    for record in records {
        let result = pipeline.process(record, &mut ids)?;
        match result.outcome {
            RecordOutcome::Accepted(normalized) => {
                output.report.record_accept(normalized.id);
                output.records.push(normalized);
            }
            RecordOutcome::Skipped(reason) => output.report.record_skip(reason),
        }
        output.report.diagnostics.extend(result.diagnostics);
    }

    let [skipped_line, total_line] = output.report.summary_lines();
    info!("----");
    info!(skipped = output.report.skipped, "{skipped_line}");
    info!(total = output.report.total, "{total_line}");
    Ok(output)
}
