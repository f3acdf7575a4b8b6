//! Engine module - the falling-block state machine
//!
//! Owns the grid, the active piece, the score and the game-over flag.
//! A driver calls [`Engine::advance`] on a timer and forwards player input to
//! [`Engine::try_move`] and [`Engine::rotate`]; the engine runs each call to
//! completion and never does I/O.
//!
//! States are `Running` and `GameOver`. The only transition is a lock whose
//! freshly spawned piece already collides; after that every mutating call is
//! a no-op.

use log::{debug, info, trace, warn};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::grid::Grid;
use crate::pieces::{PaletteEntry, Shape};
use crate::rng::SimpleRng;
use crate::snapshot::EngineSnapshot;
use crate::types::{Color, GameAction, MoveResult};

/// The controllable piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    /// Current rotation state
    pub shape: Shape,
    pub color: Color,
    /// Grid row of the bounding box's top edge; may be negative
    pub origin_row: i32,
    /// Grid column of the bounding box's left edge
    pub origin_col: i32,
}

impl Piece {
    /// A piece from `entry`, horizontally centered on row 0
    pub fn spawn(entry: &PaletteEntry, cols: usize) -> Self {
        Self {
            shape: entry.shape.clone(),
            color: entry.color,
            origin_row: 0,
            origin_col: (cols / 2) as i32 - (entry.shape.width() / 2) as i32,
        }
    }

    /// Grid `(row, col)` of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied()
            .map(move |(r, c)| (self.origin_row + r as i32, self.origin_col + c as i32))
    }
}

/// What happened on the most recent lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_gained: u32,
    /// The replacement piece collided at spawn
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    grid: Grid,
    active: Piece,
    rng: SimpleRng,
    score: u32,
    lines: u32,
    game_over: bool,
    last_event: Option<LockEvent>,
}

impl Engine {
    /// Create an engine with an empty grid and one spawned piece
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::{Engine, EngineConfig};
    /// use blockfall_types::MoveResult;
    ///
    /// let mut engine = Engine::new(EngineConfig::default().with_seed(7)).unwrap();
    /// assert_eq!(engine.score(), 0);
    /// assert!(!engine.game_over());
    /// assert_eq!(engine.advance(), MoveResult::Moved);
    /// assert_eq!(engine.active().origin_row, 1);
    /// ```
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.cols)?;
        Self::with_grid(config, grid)
    }

    /// Create an engine on top of an existing grid
    ///
    /// The grid must match the configured dimensions. If the first piece
    /// already collides, the engine starts in the game-over state.
    pub fn with_grid(config: EngineConfig, grid: Grid) -> Result<Self, EngineError> {
        config.validate()?;
        if grid.rows() != config.rows || grid.cols() != config.cols {
            return Err(EngineError::GridMismatch {
                expected_rows: config.rows,
                expected_cols: config.cols,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }

        let mut rng = SimpleRng::new(config.seed);
        let active = spawn_from(&config, &mut rng);
        let mut engine = Self {
            config,
            grid,
            active,
            rng,
            score: 0,
            lines: 0,
            game_over: false,
            last_event: None,
        };

        if engine.active_collides() {
            warn!("first piece collides at spawn; starting in game over");
            engine.game_over = true;
        }

        Ok(engine)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared since the last (re)start
    pub fn lines_cleared(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Produce a fresh piece from a uniformly chosen palette entry
    ///
    /// Does not check collision and does not replace the active piece.
    pub fn spawn(&mut self) -> Piece {
        spawn_from(&self.config, &mut self.rng)
    }

    /// Whether `shape` placed at the given origin hits a wall, the floor or
    /// a settled block
    ///
    /// Cells above the top edge (row < 0) never collide.
    pub fn collides(&self, shape: &Shape, origin_row: i32, origin_col: i32) -> bool {
        let rows = self.grid.rows() as i64;
        let cols = self.grid.cols() as i64;

        // Widened so origins near the i32 limits cannot overflow.
        shape.occupied().any(|(r, c)| {
            let row = origin_row as i64 + r as i64;
            let col = origin_col as i64 + c as i64;
            if col < 0 || col >= cols || row >= rows {
                return true;
            }
            row >= 0 && self.grid.is_occupied(row as i32, col as i32)
        })
    }

    fn active_collides(&self) -> bool {
        let piece = &self.active;
        self.collides(&piece.shape, piece.origin_row, piece.origin_col)
    }

    /// Try to shift the active piece by `(dx, dy)`
    ///
    /// A blocked downward move (`dy > 0`) locks the piece; any other blocked
    /// move leaves it where it was.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> MoveResult {
        if self.game_over {
            return MoveResult::Blocked;
        }

        // An origin past the i32 range counts as blocked.
        let target = self
            .active
            .origin_row
            .checked_add(dy)
            .zip(self.active.origin_col.checked_add(dx));

        if let Some((row, col)) = target {
            if !self.collides(&self.active.shape, row, col) {
                self.active.origin_row = row;
                self.active.origin_col = col;
                return MoveResult::Moved;
            }
        }

        if dy > 0 {
            self.lock();
            return MoveResult::Locked;
        }

        MoveResult::Blocked
    }

    /// Rotate the active piece 90° clockwise in place
    ///
    /// The origin stays put; a rotation that would collide is rejected.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let rotated = self.active.shape.rotate_cw();
        if self.collides(&rotated, self.active.origin_row, self.active.origin_col) {
            return false;
        }

        self.active.shape = rotated;
        true
    }

    /// Gravity step, same as `try_move(0, 1)`
    pub fn advance(&mut self) -> MoveResult {
        self.try_move(0, 1)
    }

    /// Write the active piece into the grid, clear rows and spawn the next
    /// piece
    ///
    /// Sets game-over when the new piece collides where it spawns.
    pub fn lock(&mut self) {
        if self.game_over {
            return;
        }

        let color = self.active.color;
        let mut discarded = 0usize;
        for (row, col) in self.active.cells() {
            if !self.grid.set(row, col, Some(color)) {
                discarded += 1;
            }
        }
        debug!(
            "locked {} piece at ({}, {})",
            color.as_str(),
            self.active.origin_row,
            self.active.origin_col
        );
        if discarded > 0 {
            debug!("{} cells above the grid discarded on lock", discarded);
        }

        let score_before = self.score;
        let lines_cleared = self.clear_lines();

        self.active = self.spawn();
        if self.active_collides() {
            warn!("spawn blocked; game over with score {}", self.score);
            self.game_over = true;
        }

        self.last_event = Some(LockEvent {
            lines_cleared,
            score_gained: self.score - score_before,
            game_over: self.game_over,
        });
    }

    /// Remove all complete rows at once and score them
    ///
    /// Returns the number of rows removed.
    pub fn clear_lines(&mut self) -> u32 {
        let cleared = self.grid.clear_full_rows() as u32;
        if cleared > 0 {
            self.score = self
                .score
                .saturating_add(cleared.saturating_mul(self.config.line_score));
            self.lines = self.lines.saturating_add(cleared);
            info!("cleared {} rows, score {}", cleared, self.score);
        }
        cleared
    }

    /// Start over with an empty grid, keeping the configuration
    ///
    /// The piece sequence continues from the current RNG state.
    pub fn restart(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.lines = 0;
        self.game_over = false;
        self.last_event = None;
        self.active = self.spawn();
    }

    /// Apply a driver action; returns whether anything changed
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0).changed(),
            GameAction::MoveRight => self.try_move(1, 0).changed(),
            GameAction::MoveDown => self.try_move(0, 1).changed(),
            GameAction::Rotate => self.rotate(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut EngineSnapshot) {
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        out.grid.clear();
        out.grid.extend_from_slice(self.grid.cells());
        match out.active.as_mut() {
            Some(piece) => piece.clone_from(&self.active),
            None => out.active = Some(self.active.clone()),
        }
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        let mut s = EngineSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

fn spawn_from(config: &EngineConfig, rng: &mut SimpleRng) -> Piece {
    // Palette is non-empty once the config has been validated.
    let idx = rng.next_range(config.palette.len() as u32) as usize;
    let entry = &config.palette[idx];
    let piece = Piece::spawn(entry, config.cols);
    trace!("spawned {} at column {}", entry.name, piece.origin_col);
    piece
}
