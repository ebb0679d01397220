use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ModelError, Result};

/// A point position, kept as the source text so it round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    lat: String,
    lon: String,
}

impl Position {
    /// Builds a position, checking both coordinates parse as finite numbers.
    pub fn new(lat: impl Into<String>, lon: impl Into<String>) -> Result<Self> {
        let lat = lat.into();
        let lon = lon.into();
        check_coordinate("lat", &lat)?;
        check_coordinate("lon", &lon)?;
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> &str {
        &self.lat
    }

    pub fn lon(&self) -> &str {
        &self.lon
    }
}

fn check_coordinate(axis: &'static str, value: &str) -> Result<()> {
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(()),
        _ => Err(ModelError::InvalidCoordinate {
            axis,
            value: value.to_string(),
        }),
    }
}

/// One input node: a position and an unordered bag of string tags.
///
/// Records are read-only once handed to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    source_id: Option<String>,
    position: Position,
    tags: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new(position: Position) -> Self {
        Self {
            source_id: None,
            position,
            tags: BTreeMap::new(),
        }
    }

    /// Sets the identifier the node carried in the source file.
    #[must_use]
    pub fn with_source_id(mut self, id: impl Into<String>) -> Self {
        self.source_id = Some(id.into());
        self
    }

    /// Adds a tag; chaining form of [`RawRecord::insert_tag`].
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert_tag(key, value);
        self
    }

    /// Inserts a tag unless the key is already present.
    ///
    /// Returns `false` when the key was a duplicate; the first value wins.
    pub fn insert_tag(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.tags.contains_key(&key) {
            return false;
        }
        self.tags.insert(key, value.into());
        true
    }

    /// Looks up a tag value. `Some("")` means the tag is present but empty.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn tags(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }
}
