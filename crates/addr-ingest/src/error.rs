//! Errors raised while reading the input container.
//!
//! All of these are fatal for a run.

use std::path::PathBuf;

use addr_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML error at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("malformed OSM document at byte {position}: {message}")]
    Malformed { position: u64, message: String },

    #[error("node {node} has an invalid position: {source}")]
    InvalidPosition {
        node: String,
        #[source]
        source: ModelError,
    },
}
