//! Per-record address pipeline.
//!
//! Steps, in order:
//! 1. skip records without a house number
//! 2. skip records whose status is `RETIRED`
//! 3. require street and label, capitalize the street base name
//! 4. resolve the street type (capitalized pass-through when unknown)
//! 5. resolve the direction (raw pass-through when unknown)
//! 6. compose `[direction, name, type]`; an empty result skips the record
//! 7. allocate an id and emit the normalized node
//!
//! Steps 1-6 are pure ([`AddressPipeline::resolve`]); only step 7 touches the
//! id allocator.

use addr_model::{Diagnostic, NormalizedRecord, RawRecord, SkipReason};
use addr_standards::ExpansionTables;
use tracing::{debug, info, warn};

use crate::error::TransformError;
use crate::extract::RecordFields;
use crate::ids::IdAllocator;
use crate::normalization::{Expansion, capitalize, resolve_direction, resolve_road_type};

/// Outcome of the pure part of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Address { house_number: String, street: String },
    Skip(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Accepted(NormalizedRecord),
    Skipped(SkipReason),
}

/// Outcome of one record plus the diagnostics it produced, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordResult {
    pub outcome: RecordOutcome,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, Copy)]
pub struct AddressPipeline<'t> {
    tables: &'t ExpansionTables,
}

impl<'t> AddressPipeline<'t> {
    pub fn new(tables: &'t ExpansionTables) -> Self {
        Self { tables }
    }

    /// Runs steps 1-6, appending diagnostics to `diagnostics`.
    pub fn resolve(&self, record: &RawRecord, diagnostics: &mut Vec<Diagnostic>) -> Resolution {
        let fields = RecordFields::extract(record);
        let label = fields.label;
        let skip = |reason: SkipReason, diagnostics: &mut Vec<Diagnostic>| {
            diagnostics.push(Diagnostic::Skipped {
                reason,
                label: label.map(str::to_string),
            });
            Resolution::Skip(reason)
        };

        if fields.house_number.is_none() {
            return skip(SkipReason::NoHouseNumber, diagnostics);
        }
        if fields.is_retired() {
            return skip(SkipReason::Retired, diagnostics);
        }
        let address = match fields.require() {
            Ok(address) => address,
            Err(reason) => return skip(reason, diagnostics),
        };

        let street_name = capitalize(address.street_base);

        let street_type = match address.street_type {
            Some(abbreviation) => match resolve_road_type(self.tables, abbreviation) {
                Expansion::Expanded(word) => Some(word.to_string()),
                Expansion::Unresolved(raw) => {
                    diagnostics.push(Diagnostic::UnresolvedStreetType {
                        label: address.label.to_string(),
                        abbreviation: raw.to_string(),
                    });
                    Some(capitalize(raw))
                }
            },
            None => {
                diagnostics.push(Diagnostic::MissingStreetType {
                    label: address.label.to_string(),
                });
                None
            }
        };

        // Unknown directions stay exactly as written, unlike street types.
        let direction = match address.direction {
            Some(abbreviation) => match resolve_direction(self.tables, abbreviation) {
                Expansion::Expanded(word) => Some(word.to_string()),
                Expansion::Unresolved(raw) => {
                    diagnostics.push(Diagnostic::UnresolvedDirection {
                        label: address.label.to_string(),
                        abbreviation: raw.to_string(),
                    });
                    Some(raw.to_string())
                }
            },
            None => None,
        };

        let street = compose_street(direction.as_deref(), &street_name, street_type.as_deref());
        // An empty addr:street is not a usable address.
        if street.is_empty() {
            return skip(SkipReason::MissingStreet, diagnostics);
        }

        Resolution::Address {
            house_number: address.house_number.to_string(),
            street,
        }
    }

    /// Runs the full pipeline for one record and logs its diagnostics.
    pub fn process(
        &self,
        record: &RawRecord,
        ids: &mut IdAllocator,
    ) -> Result<RecordResult, TransformError> {
        let mut diagnostics = Vec::new();
        let resolution = self.resolve(record, &mut diagnostics);
        for diagnostic in &diagnostics {
            log_diagnostic(diagnostic);
        }
        let outcome = match resolution {
            Resolution::Skip(reason) => RecordOutcome::Skipped(reason),
            Resolution::Address {
                house_number,
                street,
            } => {
                let id = ids.next_id()?;
                debug!(id = %id, house_number = %house_number, street = %street, "normalized address");
                RecordOutcome::Accepted(NormalizedRecord {
                    id,
                    position: record.position().clone(),
                    house_number,
                    street,
                })
            }
        };
        Ok(RecordResult {
            outcome,
            diagnostics,
        })
    }
}

/// Joins the present, non-empty parts with single spaces.
pub fn compose_street(direction: Option<&str>, name: &str, street_type: Option<&str>) -> String {
    [direction, Some(name), street_type]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn log_diagnostic(diagnostic: &Diagnostic) {
    match diagnostic {
        Diagnostic::Skipped { reason, label } => {
            info!(reason = %reason, label = label.as_deref().unwrap_or(""), "{diagnostic}");
        }
        Diagnostic::UnresolvedStreetType { label, .. }
        | Diagnostic::UnresolvedDirection { label, .. } => {
            warn!(label = %label, "{diagnostic}");
        }
        Diagnostic::MissingStreetType { label } => {
            info!(label = %label, "{diagnostic}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_skips_absent_and_empty_parts() {
        assert_eq!(compose_street(Some("North"), "Main", Some("Street")), "North Main Street");
        assert_eq!(compose_street(None, "Elm", Some("Ave")), "Elm Ave");
        assert_eq!(compose_street(Some(""), "Elm", None), "Elm");
        assert_eq!(compose_street(Some("W"), "", Some("Road")), "W Road");
    }
}
