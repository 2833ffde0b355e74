//! Map invariants checked after decoding or before saving
//!
//! Ids must be unique across the union of `buildings` and `terrain`. Type ids
//! are references into an external catalog and are not checked here.

use crate::identity::PlaceableId;
use crate::schema::MapData;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Which sequence of `MapData` an entry lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Buildings,
    Terrain,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Buildings => f.write_str("buildings"),
            Collection::Terrain => f.write_str("terrain"),
        }
    }
}

/// Location of one entry, e.g. `terrain[3]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub collection: Collection,
    pub index: usize,
}

impl Slot {
    pub fn new(collection: Collection, index: usize) -> Self {
        Self { collection, index }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.collection, self.index)
    }
}

/// A map that decodes fine but breaks a cross-entry invariant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Duplicate id \"{id}\" at {duplicate} (first used at {first})")]
    DuplicateId {
        id: PlaceableId,
        first: Slot,
        duplicate: Slot,
    },
}

fn slots(data: &MapData) -> impl Iterator<Item = (Slot, &PlaceableId)> {
    let buildings = data
        .buildings
        .iter()
        .enumerate()
        .map(|(i, b)| (Slot::new(Collection::Buildings, i), &b.id));
    let terrain = data
        .terrain
        .iter()
        .enumerate()
        .map(|(i, t)| (Slot::new(Collection::Terrain, i), &t.id));
    buildings.chain(terrain)
}

/// Every repeated id, in document order (buildings, then terrain)
///
/// Each error points at the first slot that used the id.
pub fn duplicate_ids(data: &MapData) -> Vec<ValidationError> {
    let mut seen: HashMap<&PlaceableId, Slot> = HashMap::with_capacity(data.len());
    let mut duplicates = Vec::new();

    for (slot, id) in slots(data) {
        match seen.get(id) {
            Some(&first) => duplicates.push(ValidationError::DuplicateId {
                id: id.clone(),
                first,
                duplicate: slot,
            }),
            None => {
                seen.insert(id, slot);
            }
        }
    }

    duplicates
}

/// Fail on the first repeated id
pub fn validate_map_data(data: &MapData) -> Result<(), ValidationError> {
    match duplicate_ids(data).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
