//! Timed replay of step traces and the grid-to-canvas coordinate transform.
//!
//! The engine computes every trace up front; this module hands the events of a trace out one at a
//! time, at the pace of the selected speed, so the interface can draw the run as it unfolds.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;

use crate::grid::{Coord, StepEvent};

/// Origin of the trace being replayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum TraceKind {
    /// Search trace, drawn as an overlay on top of the grid.
    #[default]
    Search,
    /// Maze trace, written into the grid one event per frame.
    Maze,
}

/// Animation state manager for trace replay.
///
/// This structure manages the replay state including timing, the current step, and the events
/// already revealed to the interface.
#[derive(Debug)]
pub(crate) struct AnimationManager {
    /// Events of the trace being replayed, in emission order.
    pub(crate) steps: Vec<StepEvent>,
    /// Number of events already handed out.
    ///
    /// Events before this index are revealed; the event just before it is the one highlighted by
    /// the interface.
    pub(crate) current_index: usize,
    /// Timestamp of the last animation frame update.
    ///
    /// This field stores the time when the animation was last updated, used to control the timing
    /// between animation frames.
    pub(crate) last_update_time: Instant,
    /// Delay between two replayed events.
    pub(crate) frame_delay: Duration,
    /// Origin of the loaded trace.
    pub(crate) kind: TraceKind,
}

impl AnimationManager {
    /// Creates an empty animation manager replaying at `frame_delay`.
    pub(crate) fn new(frame_delay: Duration) -> Self {
        Self {
            steps: Vec::new(),
            current_index: 0,
            last_update_time: Instant::now(),
            frame_delay,
            kind: TraceKind::default(),
        }
    }

    /// Replaces the current trace and starts replaying it from its first event.
    pub(crate) fn load(&mut self, kind: TraceKind, steps: Vec<StepEvent>) {
        self.kind = kind;
        self.steps = steps;
        self.reset();
    }

    /// Rewinds the replay to the beginning.
    pub(crate) fn reset(&mut self) {
        self.current_index = 0;
        self.last_update_time = Instant::now();
    }

    /// Clears all animation data and resets state.
    pub(crate) fn clear(&mut self) {
        self.steps.clear();
        self.reset();
    }

    /// Whether events remain to be handed out.
    pub(crate) fn is_running(&self) -> bool {
        self.current_index < self.steps.len()
    }

    /// Events handed out so far.
    pub(crate) fn revealed(&self) -> &[StepEvent] {
        self.steps.get(..self.current_index).unwrap_or_default()
    }

    /// Most recently handed out event.
    pub(crate) fn current(&self) -> Option<&StepEvent> {
        self.current_index
            .checked_sub(1)
            .and_then(|index| self.steps.get(index))
    }

    /// Hands out the next event once the frame delay has elapsed.
    ///
    /// Returns `None` while waiting for the next frame and once the trace is exhausted. A finished
    /// trace stays loaded, so its events remain revealed until the manager is cleared.
    pub(crate) fn update(&mut self) -> Option<StepEvent> {
        if !self.is_running() || self.last_update_time.elapsed() < self.frame_delay {
            return None;
        }

        self.last_update_time = Instant::now();
        let step = self.steps.get(self.current_index).copied();
        self.current_index += 1;

        step
    }
}

/// Transforms grid coordinates to screen coordinates for canvas rendering.
///
/// This function converts grid coordinates (row, col) to screen coordinates (x, y) using the
/// standard transformation formulas: coordinate[i] = (n - 1) / 2 - i for rows (ascending order) and
/// coordinate[i] = i - (n - 1) / 2 for columns (descending order). The grid is thus centered on
/// the canvas origin with row 0 at the top.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn transform_grid_to_screen_coords(
    coords: &[Coord],
    rows: usize,
    cols: usize,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(rows)?);
    let cols_n = f64::from(u16::try_from(cols)?);

    coords
        .iter()
        .map(|coord| {
            // Row transformation: coordinate[i] = (n - 1) / 2 - i
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(coord.row)?);

            // Column transformation: coordinate[i] = i - (n - 1) / 2
            let screen_x = f64::from(u16::try_from(coord.col)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}
