//! The standard B3/S23 Life rule.

use crate::grid::Cell;

/// What happens to a single cell across one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    /// Alive with fewer than two live neighbors.
    Underpopulated,

    /// Alive with more than three live neighbors.
    Overpopulated,

    /// Dead with exactly three live neighbors.
    Born,

    /// Alive with two or three live neighbors.
    Survives,

    /// Dead without exactly three live neighbors.
    StaysDead,
}

impl Fate {
    pub fn of(cell: Cell, alive_neighbors: usize) -> Self {
        match (cell, alive_neighbors) {
            (Cell::Alive, 0..=1) => Fate::Underpopulated,
            (Cell::Alive, 2..=3) => Fate::Survives,
            (Cell::Alive, _) => Fate::Overpopulated,
            (Cell::Dead, 3) => Fate::Born,
            (Cell::Dead, _) => Fate::StaysDead,
        }
    }

    pub fn next_cell(self) -> Cell {
        match self {
            Fate::Underpopulated | Fate::Overpopulated | Fate::StaysDead => Cell::Dead,
            Fate::Born | Fate::Survives => Cell::Alive,
        }
    }
}
