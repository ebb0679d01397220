//! Address normalization.
//!
//! - **normalization**: capitalization and abbreviation expansion
//! - **extract**: pulling address fields out of a raw record
//! - **ids**: negative node id allocation
//! - **pipeline**: per-record decision logic producing normalized nodes
//! - **batch**: running the pipeline over a whole input collection

pub mod batch;
pub mod error;
pub mod extract;
pub mod ids;
pub mod normalization;
pub mod options;
pub mod pipeline;

pub use batch::{BatchOutput, run_batch};
pub use error::TransformError;
pub use extract::{AddressFields, RecordFields};
pub use ids::{INITIAL_ID, IdAllocator};
pub use options::PipelineOptions;
pub use pipeline::{AddressPipeline, RecordOutcome, RecordResult, Resolution, compose_street};
