use thiserror::Error;

/// Errors raised at the edges of the engine: configuration and board parsing.
///
/// Simulation operations themselves are total and never return these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("board must have at least one row and one column (got {rows}x{cols})")]
    EmptyBoard { rows: usize, cols: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell {found:?} at ({row}, {col}); use '#' for alive and '.' for dead")]
    InvalidCell { row: usize, col: usize, found: char },

    #[error("{var}={value:?} is not a positive integer")]
    InvalidEnv { var: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
