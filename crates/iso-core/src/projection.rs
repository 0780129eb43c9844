//! Grid-to-screen projection.
//!
//! Cells are laid out on a 2:1 diamond lattice. Moving one cell along +x shifts
//! the tile half a tile right and half a tile down the screen; moving one cell
//! along +y shifts it half a tile left and half a tile down.

use crate::config::IsoConfig;
use crate::map::{GridPoint, ScreenPoint};

/// Screen position of the center of `cell`'s diamond.
///
/// The center is the rendering anchor: drawing every tile centered on this
/// point makes neighbouring diamonds meet edge to edge.
pub fn project(cell: GridPoint, config: &IsoConfig) -> ScreenPoint {
    let tile = config.tile_size();
    let origin = config.origin();
    let half_w = tile.width / 2.0;
    let half_h = tile.height / 2.0;

    // Widened so every pair of i32 coordinates has a sum and difference
    let (x, y) = (cell.x as i64, cell.y as i64);
    ScreenPoint::new(
        origin.x as f32 * tile.width + (x - y) as f32 * half_w + half_w,
        origin.y as f32 * tile.height + (x + y) as f32 * half_h + half_h,
    )
}

/// Apexes of `cell`'s diamond in the order top, right, bottom, left.
///
/// "Top" is the apex with the smallest screen y.
pub fn diamond(cell: GridPoint, config: &IsoConfig) -> [ScreenPoint; 4] {
    let center = project(cell, config);
    let tile = config.tile_size();
    let half_w = tile.width / 2.0;
    let half_h = tile.height / 2.0;

    [
        ScreenPoint::new(center.x, center.y - half_h),
        ScreenPoint::new(center.x + half_w, center.y),
        ScreenPoint::new(center.x, center.y + half_h),
        ScreenPoint::new(center.x - half_w, center.y),
    ]
}

impl IsoConfig {
    /// See [`project`].
    pub fn project(&self, cell: GridPoint) -> ScreenPoint {
        project(cell, self)
    }
}
