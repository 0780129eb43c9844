//! Per-frame composition: pointer sampling, picking and tile drawing.

use tracing::trace;

use crate::config::IsoConfig;
use crate::map::{GridPoint, ScreenPoint, Tile, TileMap};
use crate::picker;

/// Source of the pointer position, sampled once per frame.
pub trait PointerSource {
    /// Current pointer position in viewport pixels.
    fn pointer_position(&self) -> ScreenPoint;
}

/// Sink for tile draw requests.
pub trait TileCanvas {
    /// Draws `tile` for `cell`, centered on `at`.
    fn draw_tile(&mut self, tile: Tile, cell: GridPoint, at: ScreenPoint);
}

/// Composes one frame: samples the pointer, picks the hovered cell, draws every
/// map cell back to front and finally the selection marker.
///
/// Returns the hovered cell, if any.
pub fn render_frame<P, C>(map: &TileMap, config: &IsoConfig, input: &P, canvas: &mut C) -> Option<GridPoint>
where
    P: PointerSource + ?Sized,
    C: TileCanvas + ?Sized,
{
    let pointer = input.pointer_position();
    let pick = picker::trace(pointer, config);
    let hovered = (config.contains(pick.cell) && map.contains(pick.cell)).then_some(pick.cell);
    trace!(%pointer, coarse = %pick.coarse, region = %pick.region, cell = %pick.cell, ?hovered, "pointer resolved");

    // Row-major is back to front: every cell drawn later sits lower on screen
    map.for_each(|cell, tile| canvas.draw_tile(tile, cell, config.project(cell)));

    if let Some(cell) = hovered {
        canvas.draw_tile(Tile::Selected, cell, config.project(cell));
    }
    hovered
}
