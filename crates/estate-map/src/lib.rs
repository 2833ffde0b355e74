//! Estate Map - save-file schema for building layouts
//!
//! Describes what a saved map looks like and moves it to and from disk:
//! - Placed buildings and terrain tiles (`Building`, `Terrain`)
//! - Map metadata envelope (`MapInfo`) under a single `mapinfo` root key
//! - Integer-valued enums (`Rotation`, `BuildingCategory`, `BuildingState`)
//! - Id-uniqueness validation across buildings and terrain
//! - JSON codec (canonical) with a RON alternative
//!
//! ## Document shape
//!
//! ```json
//! {"mapinfo": {"user": "", "description": "", "version": "",
//!   "date": "1970-01-01T00:00:00Z",
//!   "mapData": {"buildings": [], "terrain": []}}}
//! ```
//!
//! ## Example
//!
//! ```
//! use estate_map::{Building, MapInfo, MapInfoRoot, Rotation, Terrain};
//!
//! let mut info = MapInfo::new("alice", "river village", "1.0");
//! info.map_data.push_building(Building::new("b1", 3, (2, 5), Rotation::East));
//! info.map_data.push_terrain(Terrain::new("t1", 7, (2, 6), Rotation::North));
//! let root = MapInfoRoot::new(info);
//!
//! let json = estate_map::to_json(&root).unwrap();
//! assert_eq!(estate_map::from_json(&json).unwrap(), root);
//! ```

mod codec;
mod config;
mod enums;
mod error;
mod files;
mod identity;
pub mod schema;
pub mod validate;

pub use codec::{from_json, to_json, Codec, MapFormat};
pub use config::CodecConfig;
pub use enums::{BuildingCategory, BuildingState, InvalidEnumValue, Rotation};
pub use error::{Error, Result, SchemaError};
pub use files::{format_for_path, load_directory, load_map, save_map};
pub use identity::PlaceableId;
pub use schema::{Building, MapData, MapInfo, MapInfoRoot, Placeable, PlacedRef, Position, Terrain};
pub use validate::{duplicate_ids, validate_map_data, Collection, Slot, ValidationError};
