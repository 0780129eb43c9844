//! Tile variants stored in the map.

use core::fmt;
use core::str::FromStr;

use crate::error::IsoError;

/// The content of a single grid cell.
///
/// Tiles are plain tags. How a variant looks on screen is decided by whatever
/// draws it, never by the tile itself.
#[repr(u8)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Tile {
    /// Nothing placed yet
    #[default]
    Blank = 0,
    /// Grass ground
    Grass = 1,
    /// Stone ground
    Stone = 2,
    /// Stone with its raised edge facing north
    StoneEdgeNorth = 3,
    /// Stone with its raised edge facing east
    StoneEdgeEast = 4,
    /// Stone with its raised edge facing south
    StoneEdgeSouth = 5,
    /// Stone with its raised edge facing west
    StoneEdgeWest = 6,
    /// Decorative tree
    Tree = 7,
    /// Decorative flower patch
    Flowers = 8,
    /// Marker drawn over the hovered cell
    Selected = 9,
}

impl Tile {
    /// Every variant, in declaration order.
    pub const ALL: [Tile; 10] = [
        Tile::Blank,
        Tile::Grass,
        Tile::Stone,
        Tile::StoneEdgeNorth,
        Tile::StoneEdgeEast,
        Tile::StoneEdgeSouth,
        Tile::StoneEdgeWest,
        Tile::Tree,
        Tile::Flowers,
        Tile::Selected,
    ];

    /// Converts the Tile to its u8 representation
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Creates a Tile from a u8 value
    ///
    /// # Errors
    ///
    /// Returns `Err(IsoError::InvalidTileId)` for ids with no matching variant.
    pub fn from_u8(value: u8) -> Result<Self, IsoError> {
        Tile::ALL
            .get(value as usize)
            .copied()
            .ok_or(IsoError::InvalidTileId(value))
    }

    /// Whether this tile is world terrain, as opposed to an empty cell or the selection marker.
    pub fn is_terrain(&self) -> bool {
        !matches!(self, Tile::Blank | Tile::Selected)
    }

    /// The terrain variant following this one, wrapping around.
    ///
    /// `Blank` and `Selected` both step to the first terrain variant.
    pub fn next_terrain(&self) -> Tile {
        match self {
            Tile::Blank | Tile::Selected | Tile::Flowers => Tile::Grass,
            other => Tile::ALL[other.as_u8() as usize + 1],
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Tile::Blank => "blank",
            Tile::Grass => "grass",
            Tile::Stone => "stone",
            Tile::StoneEdgeNorth => "stone_edge_north",
            Tile::StoneEdgeEast => "stone_edge_east",
            Tile::StoneEdgeSouth => "stone_edge_south",
            Tile::StoneEdgeWest => "stone_edge_west",
            Tile::Tree => "tree",
            Tile::Flowers => "flowers",
            Tile::Selected => "selected",
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tile::ALL
            .iter()
            .copied()
            .find(|tile| tile.name() == s)
            .ok_or_else(|| format!("unknown tile name `{}`", s))
    }
}
