//! Placed entries: the shared base record and its building/terrain roles

use crate::enums::Rotation;
use crate::identity::PlaceableId;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// Grid cell coordinate
///
/// Either axis may be negative; maps grow in any direction from the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Anything placed on the map
///
/// Every field is required when reading a save file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeable {
    /// Instance identifier, unique within one map
    pub id: PlaceableId,
    /// Key into the external building/terrain type catalog
    #[serde(rename = "typeId")]
    pub type_id: i32,
    pub position: Position,
    pub rotation: Rotation,
}

impl Placeable {
    /// Create a new placed entry
    pub fn new(
        id: impl Into<PlaceableId>,
        type_id: i32,
        position: impl Into<Position>,
        rotation: Rotation,
    ) -> Self {
        Self {
            id: id.into(),
            type_id,
            position: position.into(),
            rotation,
        }
    }
}

/// One placed structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Building(pub Placeable);

/// One placed ground feature (road, decorative floor)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Terrain(pub Placeable);

impl Building {
    /// Create a new building placement
    pub fn new(
        id: impl Into<PlaceableId>,
        type_id: i32,
        position: impl Into<Position>,
        rotation: Rotation,
    ) -> Self {
        Self(Placeable::new(id, type_id, position, rotation))
    }

    pub fn into_inner(self) -> Placeable {
        self.0
    }
}

impl Terrain {
    /// Create a new terrain placement
    pub fn new(
        id: impl Into<PlaceableId>,
        type_id: i32,
        position: impl Into<Position>,
        rotation: Rotation,
    ) -> Self {
        Self(Placeable::new(id, type_id, position, rotation))
    }

    pub fn into_inner(self) -> Placeable {
        self.0
    }
}

impl From<Placeable> for Building {
    fn from(p: Placeable) -> Self {
        Self(p)
    }
}

impl From<Placeable> for Terrain {
    fn from(p: Placeable) -> Self {
        Self(p)
    }
}

impl Deref for Building {
    type Target = Placeable;

    fn deref(&self) -> &Placeable {
        &self.0
    }
}

impl DerefMut for Building {
    fn deref_mut(&mut self) -> &mut Placeable {
        &mut self.0
    }
}

impl Deref for Terrain {
    type Target = Placeable;

    fn deref(&self) -> &Placeable {
        &self.0
    }
}

impl DerefMut for Terrain {
    fn deref_mut(&mut self) -> &mut Placeable {
        &mut self.0
    }
}

/// Borrowed view of a placed entry that keeps its role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacedRef<'a> {
    Building(&'a Building),
    Terrain(&'a Terrain),
}

impl<'a> PlacedRef<'a> {
    /// The shared base record
    pub fn placeable(&self) -> &'a Placeable {
        match *self {
            PlacedRef::Building(b) => &b.0,
            PlacedRef::Terrain(t) => &t.0,
        }
    }

    pub fn id(&self) -> &'a PlaceableId {
        &self.placeable().id
    }

    pub fn is_building(&self) -> bool {
        matches!(self, PlacedRef::Building(_))
    }

    pub fn is_terrain(&self) -> bool {
        matches!(self, PlacedRef::Terrain(_))
    }
}
