//! Terminal presentation for the engine.
//!
//! Renders into a plain framebuffer first and only then flushes it through
//! crossterm, so everything except [`TerminalRenderer`] is pure and testable.
//!
//! - [`fb`]: glyph framebuffer
//! - [`game_view`]: engine snapshot to framebuffer
//! - [`renderer`]: framebuffer to terminal, with changed-run diffs

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{color_rgb, GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
