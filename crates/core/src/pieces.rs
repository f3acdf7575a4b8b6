//! Pieces module - shape matrices and the standard palette
//!
//! A shape is a boolean occupancy matrix for one rotation state. Rotation
//! produces a new matrix; there are no precomputed rotation tables and no
//! wall kicks.

use crate::error::EngineError;
use crate::types::Color;

/// Occupancy matrix of a piece in its current rotation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    height: usize,
    width: usize,
    /// Row-major occupancy
    cells: Vec<bool>,
}

impl Shape {
    /// Build a shape from a nested boolean matrix
    pub fn new(matrix: Vec<Vec<bool>>) -> Result<Self, EngineError> {
        let height = matrix.len();
        let width = matrix.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(EngineError::EmptyShape);
        }

        let mut cells = Vec::with_capacity(height * width);
        for (r, row) in matrix.into_iter().enumerate() {
            if row.len() != width {
                return Err(EngineError::RaggedShape {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }

        if !cells.iter().any(|&v| v) {
            return Err(EngineError::EmptyShape);
        }

        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Build a shape from rows of 0/1 values
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::Shape;
    ///
    /// let t = Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]).unwrap();
    /// assert_eq!((t.height(), t.width()), (2, 3));
    /// assert!(t.get(1, 1));
    /// assert!(!t.get(1, 0));
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, EngineError> {
        Self::new(
            rows.iter()
                .map(|row| row.iter().map(|&v| v != 0).collect())
                .collect(),
        )
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Occupancy at local `(r, c)`; false outside the bounding box
    pub fn get(&self, r: usize, c: usize) -> bool {
        r < self.height && c < self.width && self.cells[r * self.width + c]
    }

    /// Local `(r, c)` of every occupied cell, row by row
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v)
            .map(move |(i, _)| (i / width, i % width))
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v).count()
    }

    /// Rotate 90° clockwise: `new[c][height - 1 - r] = old[r][c]`
    ///
    /// The bounding box swaps height and width.
    pub fn rotate_cw(&self) -> Shape {
        let new_height = self.width;
        let new_width = self.height;
        let mut cells = vec![false; self.cells.len()];

        for (r, c) in self.occupied() {
            let nr = c;
            let nc = self.height - 1 - r;
            cells[nr * new_width + nc] = true;
        }

        Shape {
            height: new_height,
            width: new_width,
            cells,
        }
    }

    /// Nested copy of the matrix
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells.chunks(self.width).map(<[bool]>::to_vec).collect()
    }
}

/// A shape paired with the color its pieces are drawn in
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaletteEntry {
    /// Single-letter name (I, O, T, ...)
    pub name: char,
    pub shape: Shape,
    pub color: Color,
}

impl PaletteEntry {
    pub fn new(name: char, shape: Shape, color: Color) -> Self {
        Self { name, shape, color }
    }
}

/// Canonical matrices in palette order
const STANDARD_SHAPES: [(char, &[&[u8]], Color); 7] = [
    ('I', &[&[1, 1, 1, 1]], Color::Cyan),
    ('O', &[&[1, 1], &[1, 1]], Color::Yellow),
    ('T', &[&[1, 1, 1], &[0, 1, 0]], Color::Purple),
    ('L', &[&[1, 1, 1], &[1, 0, 0]], Color::Orange),
    ('J', &[&[1, 1, 1], &[0, 0, 1]], Color::Blue),
    ('Z', &[&[1, 1, 0], &[0, 1, 1]], Color::Red),
    ('S', &[&[0, 1, 1], &[1, 1, 0]], Color::Green),
];

/// The seven standard pieces, in the order I, O, T, L, J, Z, S
pub fn standard_palette() -> Vec<PaletteEntry> {
    STANDARD_SHAPES
        .iter()
        .filter_map(|&(name, rows, color)| {
            Shape::from_rows(rows)
                .ok()
                .map(|shape| PaletteEntry::new(name, shape, color))
        })
        .collect()
}

/// Look up a standard entry by its letter
pub fn standard_entry(name: char) -> Option<PaletteEntry> {
    standard_palette()
        .into_iter()
        .find(|entry| entry.name == name.to_ascii_uppercase())
}
