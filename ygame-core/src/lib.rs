//! YGAME Core - Triangular hex connection game engine
//!
//! This crate provides the core logic for YGAME:
//! - Board topology (triangular grid of hex cells, axial coordinates)
//! - Side classification (which triangle edges a cell touches)
//! - Planar geometry (hex centers, polygon vertices, viewport)
//! - Placement state machine (alternating turns, hover, reset)
//! - View projection consumed by the rendering frontend
//!
//! Win detection is intentionally absent: the game plays on indefinitely,
//! and a future connection-detection pass would hook in after each placement.

pub mod board;
pub mod game;
pub mod geometry;
pub mod view;

// Re-exports for convenient access
pub use board::{Cell, InvalidBoardSize, Side, SideSet, Topology, MAX_BOARD_SIZE};
pub use game::{Event, GameState, Player};
pub use geometry::{
    board_geometry, cell_center, cell_corners, viewport, CellGeometry, Point, Viewport,
    HEX_RADIUS, VIEWPORT_PADDING,
};
pub use view::{project, side_legend, BoardView, CellView, SideInfo};
