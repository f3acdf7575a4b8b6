//! Grid module - the playfield of settled blocks
//!
//! A `rows x cols` grid where each cell is empty or holds a color.
//! Cells live in one flat row-major vector; the dimensions are fixed at
//! construction and never change.
//! Coordinates are `(row, col)` with row 0 at the top.

use crate::error::EngineError;
use crate::types::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major cells (row * cols + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        if rows == 0 {
            return Err(EngineError::ZeroRows);
        }
        if cols == 0 {
            return Err(EngineError::ZeroCols);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        })
    }

    /// Build a grid from nested rows (row 0 first)
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, EngineError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut grid = Self::new(height, width)?;

        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(EngineError::RaggedGrid {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            let start = r * width;
            grid.cells[start..start + width].copy_from_slice(&row);
        }

        Ok(grid)
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `(row, col)`, or `None` when out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set the cell at `(row, col)`; returns false when out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and holding a block
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// A row is full when none of its cells are empty
    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.rows && self.row(row).iter().all(Option::is_some)
    }

    /// Cells of one row
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Remove every full row in one pass and return how many were removed
    ///
    /// Surviving rows keep their relative order and drop to fill the gaps;
    /// the same number of empty rows appear at the top.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.cols;
        let mut write_row = self.rows;
        let mut cleared = 0;

        // Compact from the bottom up.
        for read_row in (0..self.rows).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * width;
                self.cells.copy_within(src..src + width, write_row * width);
            }
        }

        self.cells[..write_row * width].fill(None);
        cleared
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Nested copy of the cells (row 0 first)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.cols).map(<[Cell]>::to_vec).collect()
    }
}
