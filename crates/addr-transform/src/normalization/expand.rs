//! Abbreviation expansion against the lookup tables.
//!
//! Expansion is best effort: an abbreviation missing from its table comes
//! back unchanged and the caller decides how to report it.

use addr_standards::{ExpansionTable, ExpansionTables};

/// Result of looking up one abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion<'a> {
    /// Found in the table; holds the full word.
    Expanded(&'a str),
    /// Not in the table; holds the abbreviation as given.
    Unresolved(&'a str),
}

impl<'a> Expansion<'a> {
    pub fn text(self) -> &'a str {
        match self {
            Expansion::Expanded(text) | Expansion::Unresolved(text) => text,
        }
    }
}

fn lookup<'a>(table: &'a ExpansionTable, abbreviation: &'a str) -> Expansion<'a> {
    match table.get(abbreviation) {
        Some(word) => Expansion::Expanded(word),
        None => Expansion::Unresolved(abbreviation),
    }
}

pub fn resolve_direction<'a>(tables: &'a ExpansionTables, abbreviation: &'a str) -> Expansion<'a> {
    lookup(&tables.directions, abbreviation)
}

pub fn resolve_road_type<'a>(tables: &'a ExpansionTables, abbreviation: &'a str) -> Expansion<'a> {
    lookup(&tables.road_types, abbreviation)
}

/// Full direction word, or the abbreviation unchanged.
pub fn expand_direction(tables: &ExpansionTables, abbreviation: &str) -> String {
    resolve_direction(tables, abbreviation).text().to_string()
}

/// Full street-type word, or the abbreviation unchanged.
pub fn expand_road_type(tables: &ExpansionTables, abbreviation: &str) -> String {
    resolve_road_type(tables, abbreviation).text().to_string()
}
