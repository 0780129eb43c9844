//! This module defines the error types used by the `iso-core` crate.

#![warn(missing_docs)]

/// Error type for isometric grid operations.
///
/// Covers rejected configuration and out-of-range tile map access. A pointer
/// that lands outside the grid is not an error; the picker reports it as `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum IsoError {
    /// Error for invalid grid dimensions.
    /// This variant is returned when grid width or height is zero, or the cell count overflows.
    InvalidGridSize(&'static str),
    /// Error for invalid tile dimensions.
    /// This variant is returned when a tile width or height is not a positive, finite number.
    InvalidTileSize(&'static str),
    /// Error for out-of-bounds access.
    /// This variant is returned when a tile map is accessed outside `[0, width) x [0, height)`.
    OutOfBounds {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
        /// Map width in cells.
        width: usize,
        /// Map height in cells.
        height: usize,
    },
    /// Error for a numeric tile id with no matching variant.
    InvalidTileId(u8),
    /// Error for an unusable weight table passed to a randomized fill.
    InvalidWeights(&'static str),
}

impl core::fmt::Display for IsoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IsoError::InvalidGridSize(msg) => write!(f, "Invalid grid size: {}", msg),
            IsoError::InvalidTileSize(msg) => write!(f, "Invalid tile size: {}", msg),
            IsoError::OutOfBounds { x, y, width, height } => write!(
                f,
                "Tile map access out of bounds: ({}, {}) outside {}x{}",
                x, y, width, height
            ),
            IsoError::InvalidTileId(id) => write!(f, "Invalid tile id: {}", id),
            IsoError::InvalidWeights(msg) => write!(f, "Invalid tile weights: {}", msg),
        }
    }
}

impl core::error::Error for IsoError {}
