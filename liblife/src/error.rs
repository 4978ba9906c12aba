use thiserror::Error;

/// Why a seed could not become a [`Grid`](crate::Grid).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidSeed {
    #[error("seed has no rows")]
    NoRows,

    #[error("seed has no columns")]
    NoColumns,

    #[error("seed row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("seed cell ({row}, {col}) is {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },
}
