//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events to [`crate::types::GameAction`]s. Every key
//! press is one discrete action; there is no auto-repeat handling here, the
//! terminal's own key repeat is forwarded as-is.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
