//! Skip reasons, diagnostics and batch counters.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::NodeId;
use crate::keys::{ADDRESS_LABEL, HOUSE_NUMBER, STREET};

/// Why a record was left out of the output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NoHouseNumber,
    Retired,
    MissingStreet,
    MissingLabel,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::NoHouseNumber => "no house number",
            SkipReason::Retired => "retired",
            SkipReason::MissingStreet => "no street name",
            SkipReason::MissingLabel => "no address label",
        }
    }

    /// Source tag whose absence causes this skip, if any.
    pub fn missing_key(self) -> Option<&'static str> {
        match self {
            SkipReason::NoHouseNumber => Some(HOUSE_NUMBER),
            SkipReason::MissingStreet => Some(STREET),
            SkipReason::MissingLabel => Some(ADDRESS_LABEL),
            SkipReason::Retired => None,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One advisory message produced while processing a record.
///
/// None of these are fatal; they only ever go to the diagnostic stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    Skipped {
        reason: SkipReason,
        label: Option<String>,
    },
    UnresolvedStreetType {
        label: String,
        abbreviation: String,
    },
    UnresolvedDirection {
        label: String,
        abbreviation: String,
    },
    MissingStreetType {
        label: String,
    },
}

impl Diagnostic {
    pub fn is_skip(&self) -> bool {
        matches!(self, Diagnostic::Skipped { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Skipped {
                reason: SkipReason::Retired,
                label,
            } => write!(
                f,
                "Skipping retired addr: {}",
                label.as_deref().unwrap_or("<unlabelled>")
            ),
            Diagnostic::Skipped { reason, .. } => match reason.missing_key() {
                Some(key) => write!(f, "Skipping node without {key}"),
                None => write!(f, "Skipping node: {reason}"),
            },
            Diagnostic::UnresolvedStreetType { abbreviation, .. } => {
                write!(f, "Could not expand street type {abbreviation}")
            }
            Diagnostic::UnresolvedDirection { abbreviation, .. } => {
                write!(f, "Could not expand direction {abbreviation}")
            }
            Diagnostic::MissingStreetType { label } => {
                write!(f, "{label} does not have a street type")
            }
        }
    }
}

/// Counters and diagnostics of one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub total: usize,
    pub accepted: usize,
    pub skipped: usize,
    pub skipped_by_reason: BTreeMap<SkipReason, usize>,
    pub diagnostics: Vec<Diagnostic>,
    pub first_id: Option<NodeId>,
    pub last_id: Option<NodeId>,
}

impl BatchReport {
    pub fn record_skip(&mut self, reason: SkipReason) {
        self.total += 1;
        self.skipped += 1;
        *self.skipped_by_reason.entry(reason).or_insert(0) += 1;
    }

    pub fn record_accept(&mut self, id: NodeId) {
        self.total += 1;
        self.accepted += 1;
        if self.first_id.is_none() {
            self.first_id = Some(id);
        }
        self.last_id = Some(id);
    }

    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        self.skipped_by_reason.get(&reason).copied().unwrap_or(0)
    }

    /// Every record is either accepted or skipped.
    pub fn is_balanced(&self) -> bool {
        self.total == self.accepted + self.skipped
    }

    /// The closing two lines of the diagnostic stream.
    pub fn summary_lines(&self) -> [String; 2] {
        [
            format!("{} records skipped", self.skipped),
            format!("{} records total", self.total),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_stay_balanced() {
        let mut report = BatchReport::default();
        report.record_skip(SkipReason::Retired);
        report.record_accept(NodeId::new(-748).unwrap());
        report.record_accept(NodeId::new(-749).unwrap());
        assert!(report.is_balanced());
        assert_eq!(report.total, 3);
        assert_eq!(report.first_id.map(NodeId::value), Some(-748));
        assert_eq!(report.last_id.map(NodeId::value), Some(-749));
        assert_eq!(report.skipped_for(SkipReason::Retired), 1);
        assert_eq!(report.skipped_for(SkipReason::NoHouseNumber), 0);
    }

    #[test]
    fn diagnostic_messages() {
        let skip = Diagnostic::Skipped {
            reason: SkipReason::NoHouseNumber,
            label: None,
        };
        assert_eq!(skip.to_string(), "Skipping node without HOUSE_NUMB");
        let retired = Diagnostic::Skipped {
            reason: SkipReason::Retired,
            label: Some("12 ELM ST".to_string()),
        };
        assert_eq!(retired.to_string(), "Skipping retired addr: 12 ELM ST");
        let missing = Diagnostic::MissingStreetType {
            label: "4 OAK".to_string(),
        };
        assert_eq!(missing.to_string(), "4 OAK does not have a street type");
    }
}
