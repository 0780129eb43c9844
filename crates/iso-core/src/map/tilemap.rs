//! Dense row-major storage of one tile per grid cell.

#![warn(missing_docs)]

use rand::Rng;
use rand::distr::{Distribution, weighted::WeightedIndex};

use super::{GridPoint, Tile};
use crate::config::GridSize;
use crate::error::IsoError;

/// A dense 2D map holding exactly one [`Tile`] per cell.
///
/// Cells are stored row-major and visited in the same order (y outer, x inner),
/// which is back-to-front on screen for the isometric projection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TileMap {
    /// Width of the map in cells
    width: usize,
    /// Height of the map in cells
    height: usize,
    /// Vector storing the tile for each cell
    data: Vec<Tile>,
}

impl TileMap {
    /// Creates a new TileMap with every cell set to `fill`.
    ///
    /// # Arguments
    /// * `size` - Width and height of the map in cells
    /// * `fill` - Tile to place in every cell
    ///
    /// # Returns
    /// * `Result<Self, IsoError>` - The created TileMap or an error if the size is invalid
    pub fn new(size: GridSize, fill: Tile) -> Result<Self, IsoError> {
        let (width, height) = Self::checked_dims(size)?;
        Ok(TileMap {
            width,
            height,
            data: vec![fill; width * height],
        })
    }

    /// Creates a new TileMap with each cell drawn independently from a weighted tile table.
    ///
    /// # Arguments
    /// * `size` - Width and height of the map in cells
    /// * `weights` - `(tile, weight)` pairs; a tile's chance is its weight over the total
    /// * `rng` - Random source
    ///
    /// # Returns
    /// * `Result<Self, IsoError>` - The created TileMap, or an error if the size or weights are invalid
    pub fn new_rand<R: Rng + ?Sized>(
        size: GridSize,
        weights: &[(Tile, u32)],
        rng: &mut R,
    ) -> Result<Self, IsoError> {
        let (width, height) = Self::checked_dims(size)?;
        let dist = WeightedIndex::new(weights.iter().map(|(_, w)| *w))
            .map_err(|_| IsoError::InvalidWeights("Weights must be non-empty with a positive total"))?;

        let data = (0..width * height)
            .map(|_| weights[dist.sample(rng)].0)
            .collect();

        Ok(TileMap { width, height, data })
    }

    fn checked_dims(size: GridSize) -> Result<(usize, usize), IsoError> {
        let width = size.width as usize;
        let height = size.height as usize;
        if width == 0 || height == 0 {
            return Err(IsoError::InvalidGridSize("Width and height must be non-zero"));
        }
        if size.width > i32::MAX as u32 || size.height > i32::MAX as u32 {
            return Err(IsoError::InvalidGridSize("Map dimensions must fit in i32 coordinates"));
        }
        if width.checked_mul(height).is_none() {
            return Err(IsoError::InvalidGridSize("Map dimensions too large, would cause overflow"));
        }
        Ok((width, height))
    }

    /// Calculates the index in the data vector for a given grid point, if it is in range
    fn get_index(&self, p: GridPoint) -> Result<usize, IsoError> {
        if self.contains(p) {
            Ok(p.y as usize * self.width + p.x as usize)
        } else {
            Err(IsoError::OutOfBounds {
                x: p.x,
                y: p.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Width of the map in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the map in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Size of the map as a [`GridSize`].
    pub fn size(&self) -> GridSize {
        GridSize::new(self.width as u32, self.height as u32)
    }

    /// Number of cells in the map.
    pub fn total_cells(&self) -> usize {
        self.data.len()
    }

    /// Whether `p` lies inside the map.
    pub fn contains(&self, p: GridPoint) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Gets the tile at a grid coordinate position.
    ///
    /// # Arguments
    /// * `p` - Point in grid frame (cells)
    ///
    /// # Returns
    /// * `Result<Tile, IsoError>` - The tile at the specified position or an error if out of bounds
    pub fn get(&self, p: GridPoint) -> Result<Tile, IsoError> {
        let index = self.get_index(p)?;
        Ok(self.data[index])
    }

    /// Sets the tile at a grid coordinate position.
    ///
    /// # Arguments
    /// * `p` - Point in grid frame (cells)
    /// * `tile` - The tile to place at the specified position
    ///
    /// # Returns
    /// * `Result<(), IsoError>` - Success or error if out of bounds
    pub fn set(&mut self, p: GridPoint, tile: Tile) -> Result<(), IsoError> {
        let index = self.get_index(p)?;
        self.data[index] = tile;
        Ok(())
    }

    /// Sets every cell to `tile`.
    pub fn fill(&mut self, tile: Tile) {
        self.data.fill(tile);
    }

    /// Gets a reference to the underlying tile data, row-major.
    pub fn as_slice(&self) -> &[Tile] {
        &self.data
    }

    /// Iterates over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (GridPoint, Tile)> + '_ {
        let width = self.width;
        self.data.iter().enumerate().map(move |(i, tile)| {
            let p = GridPoint::new((i % width) as i32, (i / width) as i32);
            (p, *tile)
        })
    }

    /// Calls `visitor` for every cell in row-major order.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(GridPoint, Tile),
    {
        for (p, tile) in self.iter() {
            visitor(p, tile);
        }
    }
}

impl std::fmt::Display for TileMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "TileMap ({}x{})", self.width, self.height)?;
        for row in self.data.chunks(self.width) {
            for tile in row {
                write!(f, "{:2} ", tile.as_u8())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
