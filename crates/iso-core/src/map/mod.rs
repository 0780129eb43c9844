//! Map-related types for the isometric world.
//!
//! This module provides the tile map that owns the world's cells, the tile
//! variants stored in it, and the grid and screen point types.

pub mod point_types;
pub mod tile;
pub mod tilemap;

pub use point_types::{GridPoint, ScreenPoint};
pub use tile::Tile;
pub use tilemap::TileMap;
