//! Error types for the Fix-a-Pix core

use thiserror::Error;

/// Errors raised while building, encoding or solving a puzzle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixAPixError {
    /// A clue asks for more painted cells than its neighborhood holds
    #[error("clue {clue} at ({row}, {col}) exceeds its neighborhood of {neighborhood} cells")]
    InvalidClue {
        row: usize,
        col: usize,
        clue: u8,
        neighborhood: usize,
    },

    /// Grid has no rows or no columns
    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    /// Rows of differing length
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Clue value outside 0..=9
    #[error("clue value {value} at ({row}, {col}) is outside 0..=9")]
    ClueOutOfRange { row: usize, col: usize, value: i32 },

    #[error("cell ({row}, {col}) is out of bounds for a {height}x{width} grid")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// Literal is zero or names a variable that was never allocated
    #[error("literal {literal} is invalid (max variable {max_variable})")]
    InvalidLiteral { literal: i32, max_variable: i32 },

    /// More variables than the signed 32-bit literal range holds
    #[error("encoding needs variable {requested}, above the literal limit {}", i32::MAX)]
    VariableOverflow { requested: usize },

    #[error("clause {index} is empty")]
    EmptyClause { index: usize },

    /// The encoded puzzle has no solution
    #[error("puzzle is unsatisfiable")]
    Unsatisfiable,

    /// The decision procedure reported an internal error
    #[error("solver failure: {0}")]
    SolverFailure(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, FixAPixError>;
