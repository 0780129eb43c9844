//! Screen-to-grid picking.
//!
//! The screen is first cut into axis-aligned rectangles of one tile each. Every
//! rectangle fully contains one diamond (the one centered in it), and its four
//! corner triangles belong to the four diagonal neighbours of that diamond.
//! Picking finds the rectangle under the pointer, maps it to its central
//! diamond, then uses one half-plane test per diamond edge to move to the
//! neighbour when the pointer sits in a corner.
//!
//! Edges are walked A -> B -> C -> D, where
//!
//! ```text
//!   O ------- A ------- +
//!   |       /   \       |
//!   |     /       \     |
//!   B   <           >   D
//!   |     \       /     |
//!   |       \   /       |
//!   + ------- C ------- +
//! ```
//!
//! and `O` is the rectangle corner with the smallest coordinates. For every edge
//! `E -> F` the cross product `(F - E) x (P - E)` is negative for points inside
//! the diamond and positive for points in the corner triangle beyond that edge.
//! A point on an edge (cross product exactly zero) belongs to the central diamond.

use core::fmt;

use crate::config::IsoConfig;
use crate::map::{GridPoint, ScreenPoint};

/// Where a pointer fell inside its coarse rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Inside (or on the edge of) the central diamond.
    Center,
    /// Corner triangle touching `O`, beyond edge A -> B.
    LowXLowY,
    /// Corner triangle below-left, beyond edge B -> C.
    LowXHighY,
    /// Corner triangle opposite `O`, beyond edge C -> D.
    HighXHighY,
    /// Corner triangle above-right, beyond edge D -> A.
    HighXLowY,
}

impl Region {
    /// Grid step from the rectangle's central diamond to the diamond owning this region.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Region::Center => (0, 0),
            Region::LowXLowY => (-1, 0),
            Region::LowXHighY => (0, 1),
            Region::HighXHighY => (1, 0),
            Region::HighXLowY => (0, -1),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Region::Center => "center",
            Region::LowXLowY => "low-x/low-y corner",
            Region::LowXHighY => "low-x/high-y corner",
            Region::HighXHighY => "high-x/high-y corner",
            Region::HighXLowY => "high-x/low-y corner",
        };
        f.write_str(s)
    }
}

/// Every intermediate value of one pointer resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickTrace {
    /// Rectangle (in tile-rectangle units) containing the pointer.
    pub coarse: GridPoint,
    /// Edge midpoints A, B, C, D of the coarse rectangle.
    pub apexes: [ScreenPoint; 4],
    /// Cross products for edges A->B, B->C, C->D, D->A.
    pub crosses: [f32; 4],
    /// Region the pointer was classified into.
    pub region: Region,
    /// Resolved cell, not yet bounds-checked.
    pub cell: GridPoint,
}

/// `(to - from) x (p - from)`.
fn cross(from: ScreenPoint, to: ScreenPoint, p: ScreenPoint) -> f32 {
    (to.x - from.x) * (p.y - from.y) - (to.y - from.y) * (p.x - from.x)
}

/// Coarse coordinates are clamped to this magnitude. It is far beyond the
/// reach of any grid, since cells and origins are both bounded by `i32`.
const COARSE_LIMIT: i64 = 1 << 40;

/// Rectangle index along one axis. NaN lands beyond the limit, off every grid.
fn coarse_axis(v: f32, size: f32) -> i64 {
    let q = (v / size).floor();
    if q.is_nan() {
        return -COARSE_LIMIT;
    }
    (q as i64).clamp(-COARSE_LIMIT, COARSE_LIMIT)
}

fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Runs the full resolution for `pointer` and reports every step.
///
/// Coordinates that do not fit an `i32` saturate, so they never name a cell
/// inside a grid.
pub fn trace(pointer: ScreenPoint, config: &IsoConfig) -> PickTrace {
    let tile = config.tile_size();
    let origin = config.origin();
    let (w, h) = (tile.width, tile.height);

    let cx = coarse_axis(pointer.x, w);
    let cy = coarse_axis(pointer.y, h);

    let rel_x = cx - origin.x as i64;
    let rel_y = cy - origin.y as i64;
    let (central_x, central_y) = (rel_y + rel_x, rel_y - rel_x);

    let o = ScreenPoint::new(cx as f32 * w, cy as f32 * h);
    let a = ScreenPoint::new(o.x + w / 2.0, o.y);
    let b = ScreenPoint::new(o.x, o.y + h / 2.0);
    let c = ScreenPoint::new(o.x + w / 2.0, o.y + h);
    let d = ScreenPoint::new(o.x + w, o.y + h / 2.0);

    let crosses = [
        cross(a, b, pointer),
        cross(b, c, pointer),
        cross(c, d, pointer),
        cross(d, a, pointer),
    ];

    let region = if crosses[0] > 0.0 {
        Region::LowXLowY
    } else if crosses[1] > 0.0 {
        Region::LowXHighY
    } else if crosses[2] > 0.0 {
        Region::HighXHighY
    } else if crosses[3] > 0.0 {
        Region::HighXLowY
    } else {
        Region::Center
    };

    let (dx, dy) = region.offset();
    PickTrace {
        coarse: GridPoint::new(saturate(cx), saturate(cy)),
        apexes: [a, b, c, d],
        crosses,
        region,
        cell: GridPoint::new(saturate(central_x + dx as i64), saturate(central_y + dy as i64)),
    }
}

/// Cell whose diamond contains `pointer`, without checking it against the grid.
pub fn resolve(pointer: ScreenPoint, config: &IsoConfig) -> GridPoint {
    trace(pointer, config).cell
}

/// Cell under `pointer`, or `None` when the pointer is outside the grid or not finite.
pub fn pick(pointer: ScreenPoint, config: &IsoConfig) -> Option<GridPoint> {
    if !(pointer.x.is_finite() && pointer.y.is_finite()) {
        return None;
    }
    let cell = resolve(pointer, config);
    config.contains(cell).then_some(cell)
}

impl IsoConfig {
    /// See [`pick`].
    pub fn pick(&self, pointer: ScreenPoint) -> Option<GridPoint> {
        pick(pointer, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GridSize, Origin, TileSize};

    fn config() -> IsoConfig {
        IsoConfig::new(GridSize::new(10, 10), TileSize::new(63.0, 32.0), Origin::new(5, 1)).unwrap()
    }

    #[test]
    fn test_center_of_origin_cell() {
        let cfg = config();
        let t = trace(ScreenPoint::new(346.5, 48.0), &cfg);
        assert_eq!(t.coarse, GridPoint::new(5, 1));
        assert_eq!(t.region, Region::Center);
        assert_eq!(t.cell, GridPoint::new(0, 0));
        assert_eq!(pick(ScreenPoint::new(346.5, 48.0), &cfg), Some(GridPoint::new(0, 0)));
    }

    #[test]
    fn test_inside_crosses_are_negative() {
        let cfg = config();
        let t = trace(ScreenPoint::new(346.5, 48.0), &cfg);
        assert!(t.crosses.iter().all(|&c| c < 0.0), "{:?}", t.crosses);
    }

    #[test]
    fn test_corner_corrections() {
        // Coarse rectangle (7, 3): O = (441, 96), central diamond (2 + 2, 2 - 2) = (4, 0)
        let cfg = config();
        let cases = [
            (ScreenPoint::new(445.0, 99.0), Region::LowXLowY, GridPoint::new(3, 0)),
            (ScreenPoint::new(445.0, 125.0), Region::LowXHighY, GridPoint::new(4, 1)),
            (ScreenPoint::new(500.0, 125.0), Region::HighXHighY, GridPoint::new(5, 0)),
            (ScreenPoint::new(500.0, 99.0), Region::HighXLowY, GridPoint::new(4, -1)),
        ];
        for (pointer, region, cell) in cases {
            let t = trace(pointer, &cfg);
            assert_eq!(t.coarse, GridPoint::new(7, 3));
            assert_eq!(t.region, region, "pointer {}", pointer);
            assert_eq!(t.cell, cell, "pointer {}", pointer);
        }
    }

    #[test]
    fn test_only_one_edge_violated() {
        let cfg = config();
        for pointer in [
            ScreenPoint::new(445.0, 99.0),
            ScreenPoint::new(445.0, 125.0),
            ScreenPoint::new(500.0, 125.0),
            ScreenPoint::new(500.0, 99.0),
        ] {
            let t = trace(pointer, &cfg);
            assert_eq!(t.crosses.iter().filter(|&&c| c > 0.0).count(), 1, "pointer {}", pointer);
        }
    }

    #[test]
    fn test_edge_points_stay_in_central_diamond() {
        let cfg = config();
        // Midpoint of edge A -> B of rectangle (7, 3): A = (472.5, 96), B = (441, 112)
        let t = trace(ScreenPoint::new(456.75, 104.0), &cfg);
        assert_eq!(t.crosses[0], 0.0);
        assert_eq!(t.region, Region::Center);
        assert_eq!(t.cell, GridPoint::new(4, 0));
    }

    #[test]
    fn test_every_edge_midpoint_stays_in_central_diamond() {
        let cfg = config();
        // Rectangle (7, 3): B = (441, 112), C = (472.5, 128), D = (504, 112), A = (472.5, 96)
        let cases = [
            (ScreenPoint::new(456.75, 120.0), 1),
            (ScreenPoint::new(488.25, 120.0), 2),
            (ScreenPoint::new(488.25, 104.0), 3),
        ];
        for (pointer, edge) in cases {
            let t = trace(pointer, &cfg);
            assert_eq!(t.coarse, GridPoint::new(7, 3));
            assert_eq!(t.crosses[edge], 0.0, "pointer {}", pointer);
            assert_eq!(t.region, Region::Center, "pointer {}", pointer);
            assert_eq!(t.cell, GridPoint::new(4, 0), "pointer {}", pointer);
        }
    }

    #[test]
    fn test_rectangle_corner_belongs_to_corner_diamond() {
        let cfg = config();
        // O of rectangle (7, 3) is the center of the diamond one step back along x
        let t = trace(ScreenPoint::new(441.0, 96.0), &cfg);
        assert_eq!(t.region, Region::LowXLowY);
        assert_eq!(t.cell, GridPoint::new(3, 0));
        assert_eq!(cfg.project(GridPoint::new(3, 0)), ScreenPoint::new(441.0, 96.0));
    }

    #[test]
    fn test_outside_grid() {
        let cfg = config();
        assert_eq!(pick(ScreenPoint::new(-1000.0, -1000.0), &cfg), None);
        assert_eq!(pick(ScreenPoint::new(0.0, 0.0), &cfg), None);
        assert_eq!(pick(ScreenPoint::new(5000.0, 5000.0), &cfg), None);
    }

    #[test]
    fn test_far_pointers_do_not_overflow() {
        let at_origin = IsoConfig::new(GridSize::new(10, 10), TileSize::new(63.0, 32.0), Origin::new(0, 0)).unwrap();
        let shifted = IsoConfig::new(GridSize::new(10, 10), TileSize::new(63.0, 32.0), Origin::new(-5, 1)).unwrap();

        assert_eq!(pick(ScreenPoint::new(1e11, 1e11), &at_origin), None);
        assert_eq!(pick(ScreenPoint::new(1e12, 10.0), &shifted), None);
        assert_eq!(pick(ScreenPoint::new(-1e12, 1e12), &shifted), None);
        assert_eq!(pick(ScreenPoint::new(f32::MAX, f32::MIN), &at_origin), None);

        // Both axes past the limit: the sum saturates instead of wrapping
        let t = trace(ScreenPoint::new(f32::MAX, f32::MAX), &at_origin);
        assert_eq!(t.coarse, GridPoint::new(i32::MAX, i32::MAX));
        assert_eq!(t.cell.x, i32::MAX);
    }

    #[test]
    fn test_extreme_origins_do_not_overflow() {
        let tile = TileSize::new(64.0, 32.0);
        for origin in [
            Origin::new(i32::MIN, i32::MAX),
            Origin::new(i32::MAX, i32::MIN),
            Origin::new(i32::MIN, i32::MIN),
            Origin::new(i32::MAX, i32::MAX),
        ] {
            let cfg = IsoConfig::new(GridSize::new(10, 10), tile, origin).unwrap();
            for pointer in [
                ScreenPoint::new(0.0, 0.0),
                ScreenPoint::new(-1e12, -1e12),
                ScreenPoint::new(1e12, -1e12),
                ScreenPoint::new(1e12, 1e12),
            ] {
                assert_eq!(pick(pointer, &cfg), None, "{} pointer {}", cfg, pointer);
            }
        }
    }

    #[test]
    fn test_non_finite_pointer_picks_nothing() {
        let cfg = IsoConfig::new(GridSize::new(10, 10), TileSize::new(63.0, 32.0), Origin::new(0, 0)).unwrap();
        for pointer in [
            ScreenPoint::new(f32::NAN, f32::NAN),
            ScreenPoint::new(f32::NAN, 10.0),
            ScreenPoint::new(10.0, f32::NAN),
            ScreenPoint::new(f32::INFINITY, 10.0),
            ScreenPoint::new(10.0, f32::NEG_INFINITY),
        ] {
            assert_eq!(pick(pointer, &cfg), None, "pointer {}", pointer);
            assert!(!cfg.contains(resolve(pointer, &cfg)), "pointer {}", pointer);
        }
    }

    #[test]
    fn test_left_apex_of_first_rectangle_row() {
        // (315, 16) is apex B of rectangle (5, 0), whose central diamond is (-1, -1)
        let cfg = config();
        let t = trace(ScreenPoint::new(315.0, 16.0), &cfg);
        assert_eq!(t.coarse, GridPoint::new(5, 0));
        assert_eq!(t.region, Region::Center);
        assert_eq!(t.cell, GridPoint::new(-1, -1));
        assert_eq!(cfg.pick(ScreenPoint::new(315.0, 16.0)), None);
    }

    #[test]
    fn test_region_offsets_are_distinct() {
        let regions = [
            Region::Center,
            Region::LowXLowY,
            Region::LowXHighY,
            Region::HighXHighY,
            Region::HighXLowY,
        ];
        for (i, a) in regions.iter().enumerate() {
            for b in &regions[i + 1..] {
                assert_ne!(a.offset(), b.offset());
            }
        }
    }
}
