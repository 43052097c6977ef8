//! Triangular board topology with axial coordinates

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest supported board size (keeps q + r within i8 range)
pub const MAX_BOARD_SIZE: u8 = 127;

/// Axial cell coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub q: i8,
    pub r: i8,
}

impl Cell {
    pub const fn new(q: i8, r: i8) -> Self {
        Self { q, r }
    }
}

/// One of the triangle's three boundary edges
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Top,
    Bottom,
}

impl Side {
    pub const ALL: [Side; 3] = [Side::Left, Side::Top, Side::Bottom];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of boundary edges a cell touches
///
/// Empty for interior cells, one side for edge cells, two for the three
/// corners. The single cell of a size-1 board touches all three sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SideSet(u8);

impl SideSet {
    pub const EMPTY: SideSet = SideSet(0);

    pub fn insert(&mut self, side: Side) {
        self.0 |= side.bit();
    }

    pub fn contains(self, side: Side) -> bool {
        self.0 & side.bit() != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Corner cells touch at least two sides
    pub fn is_corner(self) -> bool {
        self.len() >= 2
    }

    /// Iterate members in Left, Top, Bottom order
    pub fn iter(self) -> impl Iterator<Item = Side> {
        Side::ALL.into_iter().filter(move |&side| self.contains(side))
    }
}

/// Board size outside the supported range
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid board size {0}: must be between 1 and {}", MAX_BOARD_SIZE)]
pub struct InvalidBoardSize(pub u8);

/// The fixed cell set of a board of a given size
///
/// Cells satisfy 0 <= q, 0 <= r, q + r < size and are enumerated in
/// row-major order (q ascending outer, r ascending inner).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    size: u8,
    cells: Vec<Cell>,
}

impl Topology {
    pub fn new(size: u8) -> Result<Self, InvalidBoardSize> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(InvalidBoardSize(size));
        }
        let n = size as i8;
        let mut cells = Vec::with_capacity(triangular(size));
        for q in 0..n {
            for r in 0..(n - q) {
                cells.push(Cell::new(q, r));
            }
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if a cell belongs to this board
    pub fn contains(&self, cell: Cell) -> bool {
        cell.q >= 0 && cell.r >= 0 && (cell.q as i16 + cell.r as i16) < self.size as i16
    }

    /// Which boundary edges a cell touches (each rule evaluated independently)
    pub fn sides(&self, cell: Cell) -> SideSet {
        let mut set = SideSet::EMPTY;
        if cell.q == 0 {
            set.insert(Side::Left);
        }
        if cell.r == 0 {
            set.insert(Side::Top);
        }
        if cell.q as i16 + cell.r as i16 == self.size as i16 - 1 {
            set.insert(Side::Bottom);
        }
        set
    }

    /// Cells touching two or more sides, in topology order
    pub fn corners(&self) -> Vec<Cell> {
        self.cells
            .iter()
            .copied()
            .filter(|&cell| self.sides(cell).is_corner())
            .collect()
    }
}

/// size-th triangular number
fn triangular(size: u8) -> usize {
    let n = size as usize;
    n * (n + 1) / 2
}
