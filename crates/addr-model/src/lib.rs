//! Address record model.
//!
//! - **record**: raw input nodes (position plus loosely structured tags)
//! - **normalized**: cleaned output nodes carrying house number and street
//! - **report**: skip reasons, per-record diagnostics and batch counters
//! - **keys**: tag keys consumed from the source data and written to OSM

#![deny(unsafe_code)]

pub mod error;
pub mod keys;
pub mod normalized;
pub mod record;
pub mod report;

pub use error::{ModelError, Result};
pub use normalized::{NodeId, NormalizedRecord};
pub use record::{Position, RawRecord};
pub use report::{BatchReport, Diagnostic, SkipReason};
