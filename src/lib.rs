//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the
//! command-line driver configuration used by the `blockfall` binary.

pub mod driver;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
