//! Render-ready copy of the engine state
//!
//! A presentation layer keeps one snapshot and refills it with
//! [`Engine::snapshot_into`](crate::Engine::snapshot_into) after every call,
//! so the view never borrows the engine.

use crate::engine::Piece;
use crate::types::Cell;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major settled cells
    pub grid: Vec<Cell>,
    pub active: Option<Piece>,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl EngineSnapshot {
    /// Settled cell at `(row, col)`; empty when out of bounds
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.grid.get(row * self.cols + col).copied().flatten()
    }

    /// Active-piece cells that fall inside the visible grid
    pub fn visible_active_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (rows, cols) = (self.rows as i32, self.cols as i32);
        self.active
            .iter()
            .flat_map(|piece| piece.cells())
            .filter(move |&(r, c)| r >= 0 && r < rows && c >= 0 && c < cols)
            .map(|(r, c)| (r as usize, c as usize))
    }
}
