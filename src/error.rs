use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("source coordinate lies outside the grid")]
    SourceOutsideGrid,
    #[error("source coordinate is a wall")]
    SourceWall,
    #[error("target coordinate lies outside the grid")]
    TargetOutsideGrid,
    #[error("distance map and grid differ in size")]
    SizeMismatch,
}

/// Failure to read terrain from text. Rows and columns count from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid cell: '{ch}' (row {row}, column {column})")]
    InvalidCell { ch: char, row: usize, column: usize },
    #[error("row {row} has {found} cells but row 0 has {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("terrain is empty")]
    Empty,
}
