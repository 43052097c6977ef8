//! Planar hex geometry - axial-to-pixel transform, polygon vertices, viewport
//!
//! Everything here is a pure function of the topology and the fixed hex
//! radius, so results can be computed once per board size and cached.

use crate::board::{Cell, Topology};
use serde::{Deserialize, Serialize};

/// Hex radius in display units (center to vertex)
pub const HEX_RADIUS: f32 = 26.0;

/// Extra padding around the board bounding box
pub const VIEWPORT_PADDING: f32 = 24.0;

const SQRT_3: f32 = 1.732_050_8;

/// A point in pixel coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Center of a cell (pointy-top axial layout)
pub fn cell_center(cell: Cell) -> Point {
    let q = cell.q as f32;
    let r = cell.r as f32;
    Point::new(
        HEX_RADIUS * (SQRT_3 * q + SQRT_3 / 2.0 * r),
        HEX_RADIUS * (3.0 / 2.0) * r,
    )
}

/// The six hexagon vertices around a center, at angles 60°·i − 30°
///
/// Ordered closed polygon: consecutive vertices are adjacent, the last
/// connects back to the first without repeating it.
pub fn cell_corners(center: Point) -> [Point; 6] {
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f32 - 30.0).to_radians();
        Point::new(
            center.x + HEX_RADIUS * angle.cos(),
            center.y + HEX_RADIUS * angle.sin(),
        )
    })
}

/// Render geometry of one cell
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellGeometry {
    pub cell: Cell,
    pub center: Point,
    pub corners: [Point; 6],
}

/// Geometry record for every cell, in topology order
pub fn board_geometry(topology: &Topology) -> Vec<CellGeometry> {
    topology
        .cells()
        .iter()
        .map(|&cell| {
            let center = cell_center(cell);
            CellGeometry {
                cell,
                center,
                corners: cell_corners(center),
            }
        })
        .collect()
}

/// Display viewport for a board
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
}

/// Minimal bounding rectangle of all cell centers, expanded by one hex
/// radius plus the fixed padding on every edge
pub fn viewport(topology: &Topology) -> Viewport {
    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;

    // Topology always holds at least one cell
    for &cell in topology.cells() {
        let center = cell_center(cell);
        min_x = min_x.min(center.x);
        min_y = min_y.min(center.y);
        max_x = max_x.max(center.x);
        max_y = max_y.max(center.y);
    }

    let expand = HEX_RADIUS + VIEWPORT_PADDING;
    Viewport {
        min_x: min_x - expand,
        min_y: min_y - expand,
        width: max_x - min_x + 2.0 * expand,
        height: max_y - min_y + 2.0 * expand,
    }
}
