//! Core engine - pure, deterministic, and testable
//!
//! This crate holds the whole falling-block game: the grid, the shape
//! palette, seeded piece selection and the engine state machine. It has no
//! dependency on terminals, timers or I/O; a driver calls into it and reads
//! its state back.
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size playfield with full-row compaction
//! - [`pieces`]: shape matrices, clockwise rotation and the standard palette
//! - [`rng`]: seedable LCG for uniform shape selection
//! - [`config`]: validated engine configuration
//! - [`engine`]: spawn, collision, move, rotate, lock, line clear, advance
//! - [`snapshot`]: owned copy of the state for rendering
//!
//! # Rules
//!
//! - **Uniform spawn**: every shape is picked independently; no bag
//! - **No wall kicks**: a rotation that collides is simply rejected
//! - **Instant lock**: a blocked downward move locks the piece at once
//! - **Scoring**: 100 points per cleared row by default
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Engine, EngineConfig};
//! use blockfall_types::{GameAction, MoveResult};
//!
//! let mut engine = Engine::new(EngineConfig::default().with_seed(12345)).unwrap();
//!
//! engine.apply_action(GameAction::MoveLeft);
//! engine.apply_action(GameAction::Rotate);
//!
//! // Drive gravity until the piece lands.
//! while engine.advance() != MoveResult::Locked {}
//!
//! assert_eq!(engine.grid().filled_count(), 4);
//! assert!(!engine.game_over());
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

pub use config::EngineConfig;
pub use engine::{Engine, LockEvent, Piece};
pub use error::EngineError;
pub use grid::Grid;
pub use pieces::{standard_entry, standard_palette, PaletteEntry, Shape};
pub use rng::SimpleRng;
pub use snapshot::EngineSnapshot;
