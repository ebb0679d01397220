//! Field extraction from raw records.

use addr_model::keys::{
    ADDRESS_LABEL, DIRECTION, HOUSE_NUMBER, RETIRED_STATUS, STATUS, STREET, STREET_TYPE,
};
use addr_model::{RawRecord, SkipReason};

/// Every field the pipeline reads, each explicitly present or absent.
///
/// `Some("")` is a tag that exists with an empty value; `None` is a missing
/// tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordFields<'a> {
    pub house_number: Option<&'a str>,
    pub street_base: Option<&'a str>,
    pub label: Option<&'a str>,
    pub direction: Option<&'a str>,
    pub street_type: Option<&'a str>,
    pub status: Option<&'a str>,
}

impl<'a> RecordFields<'a> {
    pub fn extract(record: &'a RawRecord) -> Self {
        Self {
            house_number: record.tag(HOUSE_NUMBER),
            street_base: record.tag(STREET),
            label: record.tag(ADDRESS_LABEL),
            direction: record.tag(DIRECTION),
            street_type: record.tag(STREET_TYPE),
            status: record.tag(STATUS),
        }
    }

    /// True only for the exact status value `RETIRED`.
    pub fn is_retired(&self) -> bool {
        self.status == Some(RETIRED_STATUS)
    }

    /// Checks the required fields, in order house number, street, label.
    pub fn require(self) -> Result<AddressFields<'a>, SkipReason> {
        let house_number = self.house_number.ok_or(SkipReason::NoHouseNumber)?;
        let street_base = self.street_base.ok_or(SkipReason::MissingStreet)?;
        let label = self.label.ok_or(SkipReason::MissingLabel)?;
        Ok(AddressFields {
            house_number,
            street_base,
            label,
            direction: self.direction,
            street_type: self.street_type,
        })
    }
}

/// Fields of a record that carries every required tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressFields<'a> {
    pub house_number: &'a str,
    pub street_base: &'a str,
    pub label: &'a str,
    pub direction: Option<&'a str>,
    pub street_type: Option<&'a str>,
}
