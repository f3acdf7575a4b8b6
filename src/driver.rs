//! Driver configuration: command-line flags for the terminal game.
//!
//! ```text
//! blockfall [--seed N] [--rows N] [--cols N] [--tick-ms N]
//! ```

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Result};

use crate::core::EngineConfig;
use crate::types::{ADVANCE_INTERVAL_MS, DEFAULT_COLS, DEFAULT_ROWS};

pub const USAGE: &str = "usage: blockfall [--seed N] [--rows N] [--cols N] [--tick-ms N]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub seed: u32,
    pub rows: usize,
    pub cols: usize,
    /// Interval between gravity steps
    pub tick_ms: u64,
}

impl DriverConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_rows(self.rows)
            .with_cols(self.cols)
            .with_seed(self.seed)
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_ms: ADVANCE_INTERVAL_MS,
        }
    }
}

/// Parse flags (without the program name).
///
/// Returns `Ok(None)` when help was requested.
pub fn parse_args(args: &[String]) -> Result<Option<DriverConfig>> {
    let mut config = DriverConfig::default();
    let mut iter = args.iter();

    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "-h" | "--help" => return Ok(None),
            "--seed" => config.seed = parse_value(flag, iter.next())?,
            "--rows" => config.rows = parse_value(flag, iter.next())?,
            "--cols" => config.cols = parse_value(flag, iter.next())?,
            "--tick-ms" => config.tick_ms = parse_value(flag, iter.next())?,
            other => bail!("unknown argument: {}\n{}", other, USAGE),
        }
    }

    if config.tick_ms == 0 {
        bail!("--tick-ms must be greater than zero");
    }

    Ok(Some(config))
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T> {
    let value = value.ok_or_else(|| anyhow!("missing value for {}", flag))?;
    value
        .parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, value))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
