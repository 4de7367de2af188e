//! Grid pathfinding engine and terminal visualizer.
//!
//! The engine is made of the [`grid`] model, the [`search`] algorithms (BFS, DFS and A*), the
//! [`path`] reconstructor, and the recursive-division [`maze`] generator. Every operation that
//! changes what a user would see returns an ordered trace of [`StepEvent`]s, so a front-end can
//! replay a run one cell at a time. The [`App`] type is such a front-end, drawing the grid in a
//! terminal with Ratatui.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
pub mod config;
pub mod error;
mod events;
pub mod grid;
pub mod maze;
pub mod path;
mod replay;
pub mod search;
mod types;
mod ui;

pub use app::App;
pub use config::{Config, Speed};
pub use error::EngineError;
pub use grid::{Cell, CellKind, Coord, Grid, StepEvent};
pub use maze::generate_maze;
pub use path::{reconstruct_path, CameFrom, Reconstruction};
pub use search::{search, Algorithm, Outcome, SearchResult};
