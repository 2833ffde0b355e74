//! Identity type for placed map entries

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one placed building or terrain tile
///
/// Unique across both collections of a map. Written to the save file as a
/// plain string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceableId(pub String);

impl PlaceableId {
    /// Create a new placeable ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlaceableId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PlaceableId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
