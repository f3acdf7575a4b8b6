//! Construction errors
//!
//! Gameplay never fails; only building an engine from a degenerate
//! configuration does.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Grid has zero rows
    ZeroRows,
    /// Grid has zero columns
    ZeroCols,
    /// Palette has no entries
    EmptyPalette,
    /// Shape matrix is empty or has no occupied cell
    EmptyShape,
    /// Shape matrix rows differ in length
    RaggedShape {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A palette shape can never fit inside the grid
    ShapeTooLarge {
        name: char,
        height: usize,
        width: usize,
        rows: usize,
        cols: usize,
    },
    /// Supplied grid does not match the configured dimensions
    GridMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },
    /// Supplied grid rows differ in length
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::ZeroRows => write!(f, "grid must have at least one row"),
            EngineError::ZeroCols => write!(f, "grid must have at least one column"),
            EngineError::EmptyPalette => write!(f, "palette must contain at least one shape"),
            EngineError::EmptyShape => write!(f, "shape must have at least one occupied cell"),
            EngineError::RaggedShape {
                row,
                expected,
                found,
            } => write!(
                f,
                "shape row {} has {} cells, expected {}",
                row, found, expected
            ),
            EngineError::ShapeTooLarge {
                name,
                height,
                width,
                rows,
                cols,
            } => write!(
                f,
                "shape {} is {}x{} but the grid is only {}x{}",
                name, height, width, rows, cols
            ),
            EngineError::GridMismatch {
                expected_rows,
                expected_cols,
                rows,
                cols,
            } => write!(
                f,
                "grid is {}x{}, configuration expects {}x{}",
                rows, cols, expected_rows, expected_cols
            ),
            EngineError::RaggedGrid {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid row {} has {} cells, expected {}",
                row, found, expected
            ),
        }
    }
}

impl std::error::Error for EngineError {}
