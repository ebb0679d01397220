#![deny(unsafe_code)]

pub mod builtin;
pub mod error;
pub mod loader;
pub mod tables;

pub use crate::error::StandardsError;
pub use crate::loader::{TableMergeMode, load_tables, parse_tables};
pub use crate::tables::{ExpansionTable, ExpansionTables};
