//! Conway's Game of Life on a fixed-size, non-wrapping grid.

use std::mem;

pub use error::InvalidSeed;
pub use grid::{Cell, Grid};
pub use pos::Position;
pub use rule::Fate;

pub mod error;
pub mod grid;
pub mod pos;
pub mod render;
pub mod rule;

impl Grid {
    /// Advances the grid by one generation.
    ///
    /// The next generation is written into the spare buffer while the current one is only
    /// read, then the two buffers trade places.
    pub fn step(&mut self) {
        let mut next_cells = mem::take(&mut self.next_cells);

        for (next_cell, (cell_pos, cell)) in next_cells.iter_mut().zip(self.enumerate_cells()) {
            let alive_neighbors = self.neighbor_count(cell_pos.row, cell_pos.col);
            *next_cell = Fate::of(cell, alive_neighbors).next_cell();
        }

        self.next_cells = mem::replace(&mut self.cells, next_cells);
        self.generation += 1;

        tracing::trace!(
            generation = self.generation,
            alive = self.alive_count(),
            "Stepped grid"
        );
    }

    /// Counts the live cells among the up to eight cells touching `(row, col)`.
    ///
    /// Positions outside the grid don't count; the grid does not wrap around.
    pub fn neighbor_count(&self, row: usize, col: usize) -> usize {
        const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
            [-1, -1],
            [-1, 0],
            [-1, 1],
            [0, -1],
            [0, 1],
            [1, -1],
            [1, 0],
            [1, 1],
        ];

        let center = Position { row, col };

        NEIGHBOR_RELATIVE_POSITIONS
            .iter()
            .filter_map(|&[d_row, d_col]| self.cell(center.offset(d_row, d_col)?))
            .filter(|neighbor| neighbor.is_alive())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_counts_only_in_bounds_neighbors() {
        let grid = Grid::new(&[[1u8, 1, 1], [1, 1, 1], [1, 1, 1]]).unwrap();

        assert_eq!(grid.neighbor_count(0, 0), 3);
        assert_eq!(grid.neighbor_count(0, 1), 5);
        assert_eq!(grid.neighbor_count(1, 1), 8);
        assert_eq!(grid.neighbor_count(2, 2), 3);
    }

    #[test]
    fn neighbor_count_excludes_the_cell_itself() {
        let grid = Grid::new(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap();

        assert_eq!(grid.neighbor_count(1, 1), 0);
        assert_eq!(grid.neighbor_count(0, 0), 1);
    }

    #[test]
    fn step_reads_only_the_previous_generation() {
        // A blinker flips between horizontal and vertical. Updating in place would
        // corrupt it on the first step.
        let mut grid = Grid::new(&[[0u8, 0, 0], [1, 1, 1], [0, 0, 0]]).unwrap();

        grid.step();
        assert_eq!(grid.to_seed(), [[0, 1, 0], [0, 1, 0], [0, 1, 0]]);

        grid.step();
        assert_eq!(grid.to_seed(), [[0, 0, 0], [1, 1, 1], [0, 0, 0]]);
        assert_eq!(grid.generation(), 2);
    }

    #[test]
    fn single_row_grid_steps() {
        let mut grid = Grid::new(&[[1u8, 1, 1, 1]]).unwrap();

        grid.step();
        assert_eq!(grid.to_seed(), [[0, 1, 1, 0]]);

        grid.step();
        assert_eq!(grid.to_seed(), [[0, 0, 0, 0]]);
    }
}
