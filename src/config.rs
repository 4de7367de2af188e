//! Command-line configuration and logging setup.

use std::{fs::File, path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::Result;
use env_logger::{Builder, Env, Target};

use crate::search::Algorithm;

/// Default number of grid rows; odd so that recursive division leaves a closed border.
pub(crate) const DEFAULT_ROWS: u16 = 21;

/// Default number of grid columns.
pub(crate) const DEFAULT_COLS: u16 = 41;

/// Replay speed presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Speed {
    /// One step every 10 milliseconds.
    #[default]
    Fast,
    /// One step every 50 milliseconds.
    Average,
    /// One step every 100 milliseconds.
    Slow,
}

impl Speed {
    /// Delay between two replayed steps.
    #[must_use]
    pub const fn frame_delay(self) -> Duration {
        match self {
            Self::Fast => Duration::from_millis(10),
            Self::Average => Duration::from_millis(50),
            Self::Slow => Duration::from_millis(100),
        }
    }

    /// Display name of the preset.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Average => "average",
            Self::Slow => "slow",
        }
    }

    /// Preset following this one, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Fast => Self::Average,
            Self::Average => Self::Slow,
            Self::Slow => Self::Fast,
        }
    }
}

/// Visualize BFS, DFS and A* on a grid, and carve mazes by recursive division.
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
#[command(version, about)]
pub struct Config {
    /// Number of grid rows.
    #[arg(
        long,
        default_value_t = DEFAULT_ROWS,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub rows: u16,
    /// Number of grid columns.
    #[arg(
        long,
        default_value_t = DEFAULT_COLS,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub cols: u16,
    /// Search algorithm selected at startup.
    #[arg(long, value_enum, default_value_t = Algorithm::Bfs)]
    pub algorithm: Algorithm,
    /// Replay speed selected at startup.
    #[arg(long, value_enum, default_value_t = Speed::Fast)]
    pub speed: Speed,
    /// Seed for maze generation; a fresh seed is drawn from the OS when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Write log records to this file; `RUST_LOG` selects the level (default `info`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            algorithm: Algorithm::default(),
            speed: Speed::default(),
            seed: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Installs a file-backed logger if a log file was requested.
    ///
    /// Logging to the terminal would tear through the interface, so without a log file no logger
    /// is installed and every record is discarded.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - The log file cannot be created
    /// - A global logger has already been installed
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };

        let file = File::create(path)?;
        Builder::from_env(Env::default().default_filter_or("info"))
            .target(Target::Pipe(Box::new(file)))
            .try_init()?;

        Ok(())
    }
}
