//! Text form of a grid: two characters per cell, one line per row.

use std::fmt;

use itertools::Itertools;

use crate::grid::{Cell, Grid};

pub const ALIVE_GLYPH: &str = "+ ";
pub const DEAD_GLYPH: &str = "  ";

impl Cell {
    pub fn glyph(self) -> &'static str {
        match self {
            Cell::Alive => ALIVE_GLYPH,
            Cell::Dead => DEAD_GLYPH,
        }
    }
}

impl Grid {
    /// Renders the current generation; every row, the last included, ends with `'\n'`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().map(|cell| cell.glyph()).format(""))?;
        }

        Ok(())
    }
}
