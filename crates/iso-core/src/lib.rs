#![warn(missing_docs)]
#![doc = "Isometric grid projection and pointer picking."]
#![doc = ""]
#![doc = "This crate maps grid cells to screen positions on a 2:1 diamond lattice,"]
#![doc = "resolves a pointer position back to the cell under it, and owns the tile map"]
#![doc = "those cells index into."]

pub mod config;
pub mod error;
pub mod frame;
pub mod map;
pub mod picker;
pub mod projection;

pub use config::{GridSize, IsoConfig, Origin, TileSize};
pub use error::IsoError;
pub use frame::{PointerSource, TileCanvas, render_frame};
pub use map::{GridPoint, ScreenPoint, Tile, TileMap};
pub use picker::{PickTrace, Region, pick, resolve, trace};
pub use projection::{diamond, project};
