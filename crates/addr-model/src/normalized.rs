use std::fmt;

use serde::{Deserialize, Serialize};

use crate::keys::{OSM_HOUSE_NUMBER, OSM_STREET};
use crate::{ModelError, Position, Result};

/// Identifier of a newly created OSM node.
///
/// Negative ids mark objects that have not been assigned a permanent id by
/// the server yet.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct NodeId(i64);

impl NodeId {
    pub fn new(value: i64) -> Result<Self> {
        if value >= 0 {
            return Err(ModelError::NonNegativeId(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for NodeId {
    type Error = ModelError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<NodeId> for i64 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cleaned address node: id, unchanged position, house number and street.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub id: NodeId,
    pub position: Position,
    pub house_number: String,
    pub street: String,
}

impl NormalizedRecord {
    /// Output tags in write order.
    pub fn tags(&self) -> [(&'static str, &str); 2] {
        [
            (OSM_HOUSE_NUMBER, self.house_number.as_str()),
            (OSM_STREET, self.street.as_str()),
        ]
    }
}
