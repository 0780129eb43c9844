//! Startup configuration shared by the projection and the picker.
//!
//! An [`IsoConfig`] is validated once when it is built and never changes
//! afterwards, so the per-frame code paths never need to re-check it.

use core::fmt;

use crate::error::IsoError;
use crate::map::GridPoint;

/// Logical extent of the world in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl GridSize {
    /// Creates a new `GridSize`.
    pub const fn new(width: u32, height: u32) -> Self {
        GridSize { width, height }
    }
}

/// Pixel size of a single tile's bounding diamond.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileSize {
    /// Diamond width (px), left apex to right apex.
    pub width: f32,
    /// Diamond height (px), top apex to bottom apex.
    pub height: f32,
}

impl TileSize {
    /// Creates a new `TileSize`.
    pub const fn new(width: f32, height: f32) -> Self {
        TileSize { width, height }
    }
}

/// Offset of grid cell `(0, 0)` in whole tile rectangles from the viewport corner.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Origin {
    /// Horizontal offset in tile widths.
    pub x: i32,
    /// Vertical offset in tile heights.
    pub y: i32,
}

impl Origin {
    /// Creates a new `Origin`.
    pub const fn new(x: i32, y: i32) -> Self {
        Origin { x, y }
    }
}

/// Validated grid, tile and origin configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IsoConfig {
    grid: GridSize,
    tile: TileSize,
    origin: Origin,
}

impl IsoConfig {
    /// Construct a new configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err(IsoError::InvalidGridSize)` if either grid dimension is zero or
    /// exceeds `i32::MAX`, or the cell count does not fit in `usize`.
    /// Returns `Err(IsoError::InvalidTileSize)` if either tile dimension is not a
    /// positive, finite number.
    pub fn new(grid: GridSize, tile: TileSize, origin: Origin) -> Result<Self, IsoError> {
        if grid.width == 0 || grid.height == 0 {
            return Err(IsoError::InvalidGridSize("Width and height must be non-zero"));
        }
        if grid.width > i32::MAX as u32 || grid.height > i32::MAX as u32 {
            return Err(IsoError::InvalidGridSize("Grid dimensions must fit in i32 coordinates"));
        }
        if (grid.width as usize).checked_mul(grid.height as usize).is_none() {
            return Err(IsoError::InvalidGridSize("Grid dimensions too large, would cause overflow"));
        }
        if !(tile.width.is_finite() && tile.width > 0.0) {
            return Err(IsoError::InvalidTileSize("Tile width must be positive and finite"));
        }
        if !(tile.height.is_finite() && tile.height > 0.0) {
            return Err(IsoError::InvalidTileSize("Tile height must be positive and finite"));
        }
        Ok(IsoConfig { grid, tile, origin })
    }

    /// Returns the grid size.
    pub fn grid_size(&self) -> GridSize {
        self.grid
    }

    /// Returns the tile size.
    pub fn tile_size(&self) -> TileSize {
        self.tile
    }

    /// Returns the origin.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Whether `p` names a cell inside the grid.
    pub fn contains(&self, p: GridPoint) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.grid.width && (p.y as u32) < self.grid.height
    }

    /// Viewport size (px) that shows the whole grid.
    ///
    /// The width leaves one spare tile on each side of the grid's bounding box.
    /// The height covers the rows above the origin plus the full diamond below it.
    pub fn viewport_size(&self) -> (f32, f32) {
        let width = (self.grid.width as f32 + 2.0) * self.tile.width;
        let rows_above = self.origin.y.max(0) as f32 + 1.0;
        let diamond = (self.grid.width as f32 + self.grid.height as f32) * self.tile.height / 2.0;
        (width, rows_above * self.tile.height + diamond)
    }
}

impl fmt::Display for IsoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IsoConfig (grid: {}x{}, tile: {:.1}x{:.1} px, origin: ({}, {}))",
            self.grid.width, self.grid.height, self.tile.width, self.tile.height, self.origin.x, self.origin.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> IsoConfig {
        IsoConfig::new(GridSize::new(10, 10), TileSize::new(63.0, 32.0), Origin::new(5, 1)).unwrap()
    }

    #[test]
    fn test_config_creation() {
        let cfg = config();
        assert_eq!(cfg.grid_size(), GridSize::new(10, 10));
        assert_eq!(cfg.tile_size(), TileSize::new(63.0, 32.0));
        assert_eq!(cfg.origin(), Origin::new(5, 1));
    }

    #[test]
    fn test_invalid_grid_size() {
        let tile = TileSize::new(63.0, 32.0);
        assert!(matches!(
            IsoConfig::new(GridSize::new(0, 10), tile, Origin::default()),
            Err(IsoError::InvalidGridSize(_))
        ));
        assert!(matches!(
            IsoConfig::new(GridSize::new(10, 0), tile, Origin::default()),
            Err(IsoError::InvalidGridSize(_))
        ));
        // Cells are addressed with i32 coordinates
        assert!(matches!(
            IsoConfig::new(GridSize::new(i32::MAX as u32 + 1, 1), tile, Origin::default()),
            Err(IsoError::InvalidGridSize(_))
        ));
        assert!(matches!(
            IsoConfig::new(GridSize::new(1, u32::MAX), tile, Origin::default()),
            Err(IsoError::InvalidGridSize(_))
        ));
        assert!(IsoConfig::new(GridSize::new(i32::MAX as u32, 1), tile, Origin::default()).is_ok());
    }

    #[test]
    fn test_invalid_tile_size() {
        let grid = GridSize::new(10, 10);
        for tile in [
            TileSize::new(0.0, 32.0),
            TileSize::new(63.0, 0.0),
            TileSize::new(-63.0, 32.0),
            TileSize::new(63.0, -1.0),
            TileSize::new(f32::NAN, 32.0),
            TileSize::new(63.0, f32::INFINITY),
        ] {
            assert!(
                matches!(IsoConfig::new(grid, tile, Origin::default()), Err(IsoError::InvalidTileSize(_))),
                "{:?} should be rejected",
                tile
            );
        }
    }

    #[test]
    fn test_contains() {
        let cfg = config();
        assert!(cfg.contains(GridPoint::new(0, 0)));
        assert!(cfg.contains(GridPoint::new(9, 9)));
        assert!(!cfg.contains(GridPoint::new(10, 0)));
        assert!(!cfg.contains(GridPoint::new(0, 10)));
        assert!(!cfg.contains(GridPoint::new(-1, 3)));
        assert!(!cfg.contains(GridPoint::new(3, -1)));
    }

    #[test]
    fn test_viewport_size() {
        let (w, h) = config().viewport_size();
        assert_eq!(w, 12.0 * 63.0);
        // two rows above the grid plus a diamond 20 half-tiles tall
        assert_eq!(h, 2.0 * 32.0 + 20.0 * 16.0);
    }
}
