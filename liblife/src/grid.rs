use itertools::Itertools;

use crate::{error::InvalidSeed, pos::Position};

/// A fixed-size generation of cells plus the buffer the next one is written into.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    pub(crate) cells: Vec<Cell>,
    pub(crate) next_cells: Vec<Cell>,
    pub(crate) generation: u64,
}

impl Grid {
    /// Builds the initial generation from rows of `0` (dead) and `1` (alive).
    ///
    /// The seed must have at least one row and one column, and every row must be as long as
    /// the first one.
    pub fn new<R>(seed: &[R]) -> Result<Self, InvalidSeed>
    where
        R: AsRef<[u8]>,
    {
        let height = seed.len();
        let width = seed.first().ok_or(InvalidSeed::NoRows)?.as_ref().len();

        if width == 0 {
            return Err(InvalidSeed::NoColumns);
        }

        let mut cells = Vec::with_capacity(width * height);

        for (row, seed_row) in seed.iter().enumerate() {
            let seed_row = seed_row.as_ref();

            if seed_row.len() != width {
                return Err(InvalidSeed::RaggedRow {
                    row,
                    expected: width,
                    found: seed_row.len(),
                });
            }

            for (col, &value) in seed_row.iter().enumerate() {
                let cell = Cell::try_from(value)
                    .map_err(|value| InvalidSeed::InvalidCell { row, col, value })?;
                cells.push(cell);
            }
        }

        tracing::debug!(width, height, "Constructed grid from seed");

        Ok(Self {
            width,
            height,
            next_cells: vec![Cell::default(); cells.len()],
            cells,
            generation: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// How many times [`Grid::step`] has been called.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cell<P>(&self, pos: P) -> Option<Cell>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get(index).copied()
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.index_to_pos(index), *cell))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// The current generation in the same `0`/`1` encoding [`Grid::new`] accepts.
    pub fn to_seed(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|&cell| u8::from(cell)).collect_vec())
            .collect_vec()
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if col >= self.width {
            return None;
        }

        if row >= self.height {
            return None;
        }

        Some(col + (row * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let row = index / self.width;
        let col = index % self.width;
        Position { row, col }
    }
}

/// Grids are equal when they hold the same pattern, however many steps it took to get there.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Grid {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    Alive,

    #[default]
    Dead,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<Cell> for u8 {
    fn from(value: Cell) -> Self {
        match value {
            Cell::Alive => 1,
            Cell::Dead => 0,
        }
    }
}

impl TryFrom<u8> for Cell {
    /// The rejected value.
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Alive),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_dimensions_and_cells_row_major() {
        let grid = Grid::new(&[[0u8, 1, 0], [1, 1, 0]]).unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.cell(Position::new(0, 1)), Some(Cell::Alive));
        assert_eq!(grid.cell(Position::new(1, 0)), Some(Cell::Alive));
        assert_eq!(grid.cell(Position::new(1, 2)), Some(Cell::Dead));
        assert_eq!(grid.alive_count(), 3);
    }

    #[test]
    fn out_of_bounds_cells_are_none() {
        let grid = Grid::new(&[[1u8, 1], [1, 1]]).unwrap();

        assert_eq!(grid.cell(Position::new(2, 0)), None);
        assert_eq!(grid.cell(Position::new(0, 2)), None);
        assert_eq!(grid.cell((usize::MAX, 0)), None);
    }

    #[test]
    fn rejects_empty_seeds() {
        let no_rows: [[u8; 3]; 0] = [];
        assert_eq!(Grid::new(&no_rows), Err(InvalidSeed::NoRows));

        let no_cols: [[u8; 0]; 2] = [[], []];
        assert_eq!(Grid::new(&no_cols), Err(InvalidSeed::NoColumns));
    }

    #[test]
    fn rejects_ragged_seeds() {
        let seed: Vec<Vec<u8>> = vec![vec![0, 1, 0], vec![1, 0], vec![0, 0, 0]];

        assert_eq!(
            Grid::new(&seed),
            Err(InvalidSeed::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn rejects_values_other_than_zero_and_one() {
        assert_eq!(
            Grid::new(&[[0u8, 0], [0, 2]]),
            Err(InvalidSeed::InvalidCell {
                row: 1,
                col: 1,
                value: 2
            })
        );
    }

    #[test]
    fn enumerates_in_row_major_order() {
        let grid = Grid::new(&[[1u8, 0], [0, 1], [1, 1]]).unwrap();

        let alive = grid
            .enumerate_cells()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(pos, _)| <[usize; 2]>::from(pos))
            .collect_vec();

        assert_eq!(alive, [[0, 0], [1, 1], [2, 0], [2, 1]]);
    }

    #[test]
    fn to_seed_reproduces_the_seed() {
        let seed: Vec<Vec<u8>> = vec![vec![0, 1, 1, 0], vec![1, 0, 0, 1]];
        let grid = Grid::new(&seed).unwrap();

        assert_eq!(grid.to_seed(), seed);
    }

    #[test]
    fn equality_ignores_generation() {
        let block = [[0u8, 0, 0, 0], [0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0]];
        let mut stepped = Grid::new(&block).unwrap();
        stepped.step();

        assert_eq!(stepped.generation(), 1);
        assert_eq!(stepped, Grid::new(&block).unwrap());
    }

    #[test]
    fn cell_encoding() {
        assert_eq!(Cell::try_from(0), Ok(Cell::Dead));
        assert_eq!(Cell::try_from(1), Ok(Cell::Alive));
        assert_eq!(Cell::try_from(7), Err(7));
        assert_eq!(u8::from(Cell::Alive), 1);
        assert_eq!(Cell::default(), Cell::Dead);
    }
}
