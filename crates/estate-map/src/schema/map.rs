//! Map payload, metadata envelope and document root

use crate::schema::placeable::{Building, PlacedRef, Terrain};
use crate::validate::{self, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placed buildings and terrain of one map
///
/// Both sequences keep editing-session insertion order so saved files diff
/// cleanly. Both are required on read and always written, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapData {
    pub buildings: Vec<Building>,
    pub terrain: Vec<Terrain>,
}

impl MapData {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_building(&mut self, building: Building) {
        self.buildings.push(building);
    }

    pub fn push_terrain(&mut self, terrain: Terrain) {
        self.terrain.push(terrain);
    }

    /// Total number of placed entries
    pub fn len(&self) -> usize {
        self.buildings.len() + self.terrain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty() && self.terrain.is_empty()
    }

    /// Buildings first, then terrain, each in stored order
    pub fn placements(&self) -> impl Iterator<Item = PlacedRef<'_>> {
        self.buildings
            .iter()
            .map(PlacedRef::Building)
            .chain(self.terrain.iter().map(PlacedRef::Terrain))
    }

    /// First entry with the given id
    pub fn find(&self, id: &str) -> Option<PlacedRef<'_>> {
        self.placements().find(|p| p.id().as_str() == id)
    }

    /// Check id uniqueness across both collections
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        validate::validate_map_data(self)
    }
}

/// Metadata envelope around one map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapInfo {
    /// Author's user id
    pub user: String,
    pub description: String,
    pub version: String,
    /// Creation or last-modified time; the Unix epoch when default-built
    pub date: DateTime<Utc>,
    #[serde(rename = "mapData")]
    pub map_data: MapData,
}

impl MapInfo {
    /// Create a blank map stamped with the current time
    pub fn new(
        user: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            description: description.into(),
            version: version.into(),
            date: Utc::now(),
            map_data: MapData::new(),
        }
    }

    /// Set the date to the current time
    pub fn touch(&mut self) {
        self.date = Utc::now();
    }
}

/// Document root: `{"mapinfo": {...}}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapInfoRoot {
    pub mapinfo: MapInfo,
}

impl MapInfoRoot {
    pub fn new(mapinfo: MapInfo) -> Self {
        Self { mapinfo }
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        self.mapinfo.map_data.validate()
    }
}

impl From<MapInfo> for MapInfoRoot {
    fn from(mapinfo: MapInfo) -> Self {
        Self::new(mapinfo)
    }
}
