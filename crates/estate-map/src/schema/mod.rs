//! Save-file record types

pub mod map;
pub mod placeable;

pub use map::{MapData, MapInfo, MapInfoRoot};
pub use placeable::{Building, Placeable, PlacedRef, Position, Terrain};
