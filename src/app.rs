//! Core application state and logic for the grid visualizer.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use log::info;
use rand::{rngs::StdRng, SeedableRng as _};
use ratatui::DefaultTerminal;

use crate::{
    config::{Config, Speed},
    events,
    grid::{CellKind, Coord, Grid},
    maze,
    replay::{AnimationManager, TraceKind},
    search::{self, Algorithm, Outcome},
    types::{Brush, MainMenuItem, Screen},
    ui,
};

/// Summary of a finished search, shown as one row of the results table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RunRecord {
    /// Algorithm that ran.
    pub(crate) algorithm: Algorithm,
    /// Wall-clock time spent inside the engine.
    pub(crate) elapsed: Duration,
    /// Number of cells the search accounted as visited.
    pub(crate) visited: usize,
    /// Path length, or `None` if the end was unreachable.
    pub(crate) length: Option<usize>,
}

/// Application state container for the grid visualizer.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the interface and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    ///
    /// This field holds the current screen. It is used to determine which screen to render and
    /// what actions to take based on user input.
    pub(crate) screen: Screen,
    /// Grid being edited and searched.
    pub(crate) grid: Grid,
    /// Cell under the editing cursor.
    pub(crate) cursor: Coord,
    /// Kind painted by the enter key.
    pub(crate) brush: Brush,
    /// Algorithm run by the next search.
    pub(crate) algorithm: Algorithm,
    /// Replay speed of the next and the current trace.
    pub(crate) speed: Speed,
    /// Random source of the maze generator.
    ///
    /// Seeded from the command line when a seed is given, so a session produces the same sequence
    /// of mazes every time it is started with that seed.
    pub(crate) rng: StdRng,
    /// Animation manager for trace replay.
    ///
    /// This field manages the replay state including timing and current step tracking. A finished
    /// search trace stays loaded so its overlay remains on screen until it is cleared.
    pub(crate) animation_manager: AnimationManager,
    /// Results table, oldest run first.
    pub(crate) results: Vec<RunRecord>,
    /// One-line message about the last action.
    pub(crate) status: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl App {
    /// Creates a new instance of the App structure from the command-line configuration.
    pub fn new(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::Visualize),
            grid: Grid::new(usize::from(config.rows), usize::from(config.cols)),
            cursor: Coord::new(0, 0),
            brush: Brush::default(),
            algorithm: config.algorithm,
            speed: config.speed,
            rng,
            animation_manager: AnimationManager::new(config.speed.frame_delay()),
            results: Vec::new(),
            status: None,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input, advances the replay, and updates the application state.
    /// The loop continues until the exit condition is `true`, after which the function returns to
    /// the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    /// - [`EngineError`](crate::error::EngineError) raised by a search or a maze generation
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal
                .try_draw(|frame| ui::draw(self, frame).map_err(std::io::Error::other))?;
            events::handle_events(self)?;
            self.tick()?;
        }

        Ok(())
    }

    /// Whether a trace is still being replayed; editing is locked meanwhile.
    pub(crate) fn is_animating(&self) -> bool {
        self.animation_manager.is_running()
    }

    /// Advances the replay by at most one event.
    ///
    /// Maze events are written into the grid as they are revealed; search events only feed the
    /// overlay drawn by the interface.
    ///
    /// # Errors
    ///
    /// This function may return errors if a maze event falls outside of the grid.
    pub(crate) fn tick(&mut self) -> Result<()> {
        if let Some(event) = self.animation_manager.update() {
            if self.animation_manager.kind == TraceKind::Maze {
                self.grid.apply(event)?;
            }
        }

        Ok(())
    }

    /// Runs the selected algorithm and starts replaying its trace.
    ///
    /// # Errors
    ///
    /// This function may return errors if the engine reports an inconsistent grid.
    pub(crate) fn find_path(&mut self) -> Result<()> {
        if self.is_animating() {
            return Ok(());
        }
        self.animation_manager.clear();

        let started = Instant::now();
        let result = search::search(&self.grid, self.algorithm)?;
        let elapsed = started.elapsed();

        let length = match result.outcome {
            Outcome::MissingEndpoint => {
                self.status = Some("place a start and an end first".to_owned());
                return Ok(());
            }
            Outcome::NoPath => {
                self.status = Some("no path found".to_owned());
                None
            }
            Outcome::Found => {
                self.status = Some(format!(
                    "{} found a path of length {} and cost {}",
                    self.algorithm,
                    result.length(),
                    result.cost()
                ));
                Some(result.length())
            }
        };

        info!(
            "{} visited {} cells in {elapsed:?}",
            self.algorithm, result.visited_count
        );
        self.results.push(RunRecord {
            algorithm: self.algorithm,
            elapsed,
            visited: result.visited_count,
            length,
        });
        self.animation_manager.load(TraceKind::Search, result.steps);

        Ok(())
    }

    /// Clears the grid, puts the endpoints back, and starts replaying a fresh maze onto it.
    ///
    /// # Errors
    ///
    /// This function may return errors from the maze generator.
    pub(crate) fn generate_maze(&mut self) -> Result<()> {
        if self.is_animating() {
            return Ok(());
        }
        self.animation_manager.clear();

        let (start, end) = (self.grid.start(), self.grid.end());
        self.grid.reset();
        if let Some(start) = start {
            self.grid.set_cell(start.row, start.col, CellKind::Start)?;
        }
        if let Some(end) = end {
            self.grid.set_cell(end.row, end.col, CellKind::End)?;
        }

        let steps = maze::generate_maze(&self.grid, &mut self.rng)?;
        info!("generated a maze of {} walls", steps.len());
        self.status = Some(format!("carving a maze of {} walls", steps.len()));
        self.animation_manager.load(TraceKind::Maze, steps);

        Ok(())
    }

    /// Stops the replay and drops the search overlay.
    pub(crate) fn clear_path(&mut self) {
        self.animation_manager.clear();
        self.status = None;
    }

    /// Stops the replay and empties the grid, endpoints included.
    pub(crate) fn reset_grid(&mut self) {
        self.animation_manager.clear();
        self.grid.reset();
        self.status = Some("grid reset".to_owned());
    }

    /// Moves the cursor by one cell, staying inside of the grid.
    pub(crate) fn move_cursor(&mut self, row_step: isize, col_step: isize) {
        let row = self
            .cursor
            .row
            .saturating_add_signed(row_step)
            .min(self.grid.rows().saturating_sub(1));
        let col = self
            .cursor
            .col
            .saturating_add_signed(col_step)
            .min(self.grid.cols().saturating_sub(1));

        self.cursor = Coord::new(row, col);
    }

    /// Writes the selected brush into the cell under the cursor.
    ///
    /// # Errors
    ///
    /// This function may return errors if the cursor lies outside of the grid.
    pub(crate) fn paint(&mut self) -> Result<()> {
        if self.is_animating() {
            return Ok(());
        }
        self.animation_manager.clear();

        self.grid
            .set_cell(self.cursor.row, self.cursor.col, self.brush.kind())?;

        Ok(())
    }

    /// Cycles the cell under the cursor through start, end, wall and empty.
    ///
    /// # Errors
    ///
    /// This function may return errors if the cursor lies outside of the grid.
    pub(crate) fn toggle(&mut self) -> Result<()> {
        if self.is_animating() {
            return Ok(());
        }
        self.animation_manager.clear();

        self.grid.toggle_cell(self.cursor.row, self.cursor.col)?;

        Ok(())
    }

    /// Selects the next algorithm, dropping the finished overlay of the previous one.
    pub(crate) fn cycle_algorithm(&mut self) {
        self.algorithm = self.algorithm.next();
        if !self.is_animating() {
            self.clear_path();
        }
    }

    /// Selects the next replay speed, applying it to the running replay as well.
    pub(crate) const fn cycle_speed(&mut self) {
        self.speed = self.speed.next();
        self.animation_manager.frame_delay = self.speed.frame_delay();
    }

    /// Leaves the grid screen, stopping any replay.
    pub(crate) fn return_to_menu(&mut self) {
        self.animation_manager.clear();
        self.screen = Screen::MainMenu(MainMenuItem::Visualize);
    }
}
