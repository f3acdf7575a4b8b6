//! Engine configuration
//!
//! Defaults reproduce the classic 10x20 playfield with the seven standard
//! pieces and 100 points per row.

use crate::error::EngineError;
use crate::pieces::{standard_palette, PaletteEntry};
use crate::types::{DEFAULT_COLS, DEFAULT_ROWS, LINE_SCORE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    /// Shapes a spawn chooses from, each with its color
    pub palette: Vec<PaletteEntry>,
    /// Points per cleared row
    pub line_score: u32,
    /// Seed for shape selection
    pub seed: u32,
}

impl EngineConfig {
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    pub fn with_palette(mut self, palette: Vec<PaletteEntry>) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_line_score(mut self, line_score: u32) -> Self {
        self.line_score = line_score;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Reject configurations that cannot produce a playable engine
    ///
    /// Every shape must fit inside the grid in its spawn orientation.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.rows == 0 {
            return Err(EngineError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(EngineError::ZeroCols);
        }
        if self.palette.is_empty() {
            return Err(EngineError::EmptyPalette);
        }

        for entry in &self.palette {
            let (height, width) = (entry.shape.height(), entry.shape.width());
            if height > self.rows || width > self.cols {
                return Err(EngineError::ShapeTooLarge {
                    name: entry.name,
                    height,
                    width,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            palette: standard_palette(),
            line_score: LINE_SCORE,
            seed: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::standard_entry;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert_eq!((config.rows, config.cols), (20, 10));
        assert_eq!(config.palette.len(), 7);
        assert_eq!(config.line_score, 100);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_degenerate_configs_rejected() {
        let base = EngineConfig::default();
        assert_eq!(
            base.clone().with_rows(0).validate(),
            Err(EngineError::ZeroRows)
        );
        assert_eq!(
            base.clone().with_cols(0).validate(),
            Err(EngineError::ZeroCols)
        );
        assert_eq!(
            base.with_palette(Vec::new()).validate(),
            Err(EngineError::EmptyPalette)
        );
    }

    #[test]
    fn test_shape_wider_than_grid_rejected() {
        let config = EngineConfig::default().with_cols(3);
        assert_eq!(
            config.validate(),
            Err(EngineError::ShapeTooLarge {
                name: 'I',
                height: 1,
                width: 4,
                rows: 20,
                cols: 3,
            })
        );

        let only_o = EngineConfig::default()
            .with_cols(3)
            .with_palette(standard_entry('O').into_iter().collect());
        assert_eq!(only_o.validate(), Ok(()));
    }
}
