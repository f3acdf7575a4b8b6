//! Shared types - plain data with no external dependencies
//!
//! Everything here is used by the engine, the input mapping and the terminal
//! view alike, so it stays free of I/O and of any framework types.
//!
//! # Playfield Dimensions
//!
//! The classic playfield is 300x600 units with 30-unit blocks, which gives
//! a grid of 10 columns by 20 rows. Both values are only defaults: the engine
//! takes its dimensions from configuration.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PLAYFIELD_WIDTH` | 300 | Playfield width in units |
//! | `PLAYFIELD_HEIGHT` | 600 | Playfield height in units |
//! | `BLOCK_SIZE` | 30 | Size of one cell in units |
//! | `DEFAULT_COLS` | 10 | `PLAYFIELD_WIDTH / BLOCK_SIZE` |
//! | `DEFAULT_ROWS` | 20 | `PLAYFIELD_HEIGHT / BLOCK_SIZE` |
//! | `LINE_SCORE` | 100 | Points per cleared row |
//! | `ADVANCE_INTERVAL_MS` | 500 | Driver gravity interval |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, GameAction, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! assert_eq!(Color::from_str("Cyan"), Some(Color::Cyan));
//! assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
//! assert_eq!(DEFAULT_COLS, 10);
//! assert_eq!(DEFAULT_ROWS, 20);
//! ```

/// Playfield width in units
pub const PLAYFIELD_WIDTH: u32 = 300;

/// Playfield height in units
pub const PLAYFIELD_HEIGHT: u32 = 600;

/// Size of a single block in units
pub const BLOCK_SIZE: u32 = 30;

/// Default number of grid columns
pub const DEFAULT_COLS: usize = (PLAYFIELD_WIDTH / BLOCK_SIZE) as usize;

/// Default number of grid rows
pub const DEFAULT_ROWS: usize = (PLAYFIELD_HEIGHT / BLOCK_SIZE) as usize;

/// Default points awarded per cleared row
pub const LINE_SCORE: u32 = 100;

/// Default interval between driver `advance` calls, in milliseconds
pub const ADVANCE_INTERVAL_MS: u64 = 500;


/// The seven palette colors
///
/// Each canonical shape owns exactly one of these:
/// - **Cyan**: I
/// - **Yellow**: O
/// - **Purple**: T
/// - **Orange**: L
/// - **Blue**: J
/// - **Red**: Z
/// - **Green**: S
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Yellow,
    Purple,
    Orange,
    Blue,
    Red,
    Green,
}

impl Color {
    /// All palette colors in canonical order
    pub const ALL: [Color; 7] = [
        Color::Cyan,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
        Color::Blue,
        Color::Red,
        Color::Green,
    ];

    /// Parse a color from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Color;
    ///
    /// assert_eq!(Color::from_str("red"), Some(Color::Red));
    /// assert_eq!(Color::from_str("PURPLE"), Some(Color::Purple));
    /// assert_eq!(Color::from_str("white"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cyan" => Some(Color::Cyan),
            "yellow" => Some(Color::Yellow),
            "purple" => Some(Color::Purple),
            "orange" => Some(Color::Orange),
            "blue" => Some(Color::Blue),
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            _ => None,
        }
    }

    /// Lowercase color name
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
        }
    }
}

/// A cell on the grid
///
/// - `None`: empty
/// - `Some(Color)`: a settled block of that color
pub type Cell = Option<Color>;

/// Outcome of a single move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveResult {
    /// The piece moved to the proposed origin
    Moved,
    /// A downward move was blocked, so the piece was locked into the grid
    Locked,
    /// The move was blocked (or the game is over); nothing changed
    Blocked,
}

impl MoveResult {
    /// Whether the engine state changed
    pub fn changed(&self) -> bool {
        !matches!(self, MoveResult::Blocked)
    }
}

/// Player actions forwarded by a driver
///
/// Each action maps to exactly one engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// `move(-1, 0)`
    MoveLeft,
    /// `move(1, 0)`
    MoveRight,
    /// `move(0, 1)`, which locks the piece when blocked
    MoveDown,
    /// Clockwise rotation, no wall kicks
    Rotate,
    /// Start a fresh game
    Restart,
}

impl GameAction {
    /// Parse action from a camelCase or lowercase name
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("movedown"), Some(GameAction::MoveDown));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" => Some(GameAction::MoveDown),
            "rotate" => Some(GameAction::Rotate),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
            GameAction::Restart => "restart",
        }
    }
}
