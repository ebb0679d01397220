//! Loading expansion tables from a TOML file.
//!
//! ```toml
//! [directions]
//! N = "North"
//!
//! [road_types]
//! RD = "Road"
//! ```

#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::StandardsError;
use crate::tables::{ExpansionTable, ExpansionTables};

/// How file entries combine with the built-in tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableMergeMode {
    /// File entries extend the built-ins and win on conflicts.
    #[default]
    Merge,
    /// Only the file entries are used.
    Replace,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    #[serde(default)]
    directions: BTreeMap<String, String>,
    #[serde(default)]
    road_types: BTreeMap<String, String>,
}

/// Load tables from `path`, combined with the built-ins according to `mode`.
pub fn load_tables(path: &Path, mode: TableMergeMode) -> Result<ExpansionTables, StandardsError> {
    let text = fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    let file: TableFile = toml::from_str(&text).map_err(|source| StandardsError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    build_tables(file, mode)
}

/// Parse tables from TOML text, combined with the built-ins according to `mode`.
pub fn parse_tables(text: &str, mode: TableMergeMode) -> Result<ExpansionTables, StandardsError> {
    let file: TableFile = toml::from_str(text).map_err(|source| StandardsError::Toml {
        path: "<inline>".into(),
        source,
    })?;
    build_tables(file, mode)
}

fn build_tables(file: TableFile, mode: TableMergeMode) -> Result<ExpansionTables, StandardsError> {
    let directions = checked_table("directions", file.directions)?;
    let road_types = checked_table("road_types", file.road_types)?;
    match mode {
        TableMergeMode::Replace => Ok(ExpansionTables::new(directions, road_types)),
        TableMergeMode::Merge => {
            let mut tables = ExpansionTables::builtin();
            tables.directions.extend(directions);
            tables.road_types.extend(road_types);
            Ok(tables)
        }
    }
}

fn checked_table(
    name: &str,
    entries: BTreeMap<String, String>,
) -> Result<ExpansionTable, StandardsError> {
    for (key, value) in &entries {
        if key.trim().is_empty() {
            return Err(StandardsError::InvalidEntry {
                table: name.to_string(),
                message: "empty abbreviation".to_string(),
            });
        }
        if value.trim().is_empty() {
            return Err(StandardsError::InvalidEntry {
                table: name.to_string(),
                message: format!("empty expansion for {key}"),
            });
        }
    }
    Ok(ExpansionTable::new(entries))
}
