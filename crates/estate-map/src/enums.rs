//! Closed integer enumerations carried by the save format
//!
//! Every enum here is written as its numeric value, never its name. Type
//! configuration tables outside this crate refer to the same numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// An integer outside an enum's closed set
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid {kind} value: {value}")]
pub struct InvalidEnumValue {
    /// Field the value was read for (`rotation`, `category`, `state`)
    pub kind: &'static str,
    pub value: i32,
}

macro_rules! numeric_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i32", into = "i32")]
        #[repr(i32)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value ),+
        }

        impl $name {
            /// All variants in ascending numeric order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Numeric value as written to the save file
            pub fn value(self) -> i32 {
                self as i32
            }
        }

        impl TryFrom<i32> for $name {
            type Error = InvalidEnumValue;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                match value {
                    $( $value => Ok($name::$variant), )+
                    _ => Err(InvalidEnumValue { kind: $kind, value }),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(v: $name) -> i32 {
                v.value()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $( $name::$variant => f.write_str(stringify!($variant)), )+
                }
            }
        }
    };
}

numeric_enum! {
    /// Facing of a placed entry, in degrees clockwise from north
    pub enum Rotation : "rotation" {
        North = 0,
        East = 90,
        South = 180,
        West = 270,
    }
}

numeric_enum! {
    /// Classification of a building type
    ///
    /// Looked up from the external type catalog by `typeId`; never stored on
    /// a placed building.
    pub enum BuildingCategory : "category" {
        Production = 0,
        Housing = 1,
        Comfort = 2,
        Military = 3,
        Function = 4,
        Decoration = 5,
    }
}

numeric_enum! {
    /// Lifecycle state of a building at runtime
    ///
    /// Not part of any saved record; kept for layers built on top of the
    /// save format.
    pub enum BuildingState : "state" {
        /// Under construction
        Building = 0,
        Active = 1,
        Inactive = 2,
        Destroyed = 3,
    }
}

impl Rotation {
    /// Degrees clockwise from north
    pub fn degrees(self) -> i32 {
        self.value()
    }

    /// Turn a quarter clockwise
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Turn a quarter counter-clockwise
    pub fn rotate_ccw(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    pub fn opposite(self) -> Self {
        self.rotate_cw().rotate_cw()
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::North
    }
}
