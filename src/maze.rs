//! Maze generation by recursive division.
//!
//! The generator never touches the grid it is given. It returns the walls to paint as a trace so
//! the caller can replay them at its own pace, skipping the cells that currently hold the start or
//! the end. Whether the start and the end stay connected is not checked.

use log::{debug, trace};
use rand::Rng;

use crate::{
    error::EngineError,
    grid::{CellKind, Coord, Grid, StepEvent},
};

/// Direction of the wall placed by a division step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Orientation {
    /// Wall along a column, splitting the region into a left and a right part.
    Vertical,
    /// Wall along a row, splitting the region into a top and a bottom part.
    Horizontal,
}

/// Inclusive bounds of the area where the next wall may be placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Region {
    /// First candidate row.
    row_from: isize,
    /// Last candidate row.
    row_to: isize,
    /// First candidate column.
    col_from: isize,
    /// Last candidate column.
    col_to: isize,
}

impl Region {
    /// Whether the region has no room left for a wall.
    const fn is_exhausted(self) -> bool {
        self.row_to < self.row_from || self.col_to < self.col_from
    }
}

/// Draws a uniformly distributed even number from `from..=to`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRange`] if the range holds no even number.
pub(crate) fn random_even<R: Rng>(
    rng: &mut R,
    from: isize,
    to: isize,
) -> Result<isize, EngineError> {
    let first = if from.rem_euclid(2) == 0 { from } else { from + 1 };
    random_step_of_two(rng, first, from, to)
}

/// Draws a uniformly distributed odd number from `from..=to`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRange`] if the range holds no odd number.
pub(crate) fn random_odd<R: Rng>(
    rng: &mut R,
    from: isize,
    to: isize,
) -> Result<isize, EngineError> {
    let first = if from.rem_euclid(2) == 1 { from } else { from + 1 };
    random_step_of_two(rng, first, from, to)
}

/// Draws one of `first, first + 2, ...` up to `to`.
fn random_step_of_two<R: Rng>(
    rng: &mut R,
    first: isize,
    from: isize,
    to: isize,
) -> Result<isize, EngineError> {
    if from > to || first > to {
        return Err(EngineError::InvalidRange { from, to });
    }

    let invalid = || EngineError::InvalidRange { from, to };
    let candidates = i64::try_from((to - first) / 2 + 1).map_err(|_err| invalid())?;
    let offset = isize::try_from(2 * rng.random_range(0..candidates)).map_err(|_err| invalid())?;

    Ok(first + offset)
}

/// Recursive division state for a single maze.
struct Divider<'run, R> {
    /// Grid the maze is generated for.
    grid: &'run Grid,
    /// Source of every random draw.
    rng: &'run mut R,
    /// Wall events emitted so far.
    steps: Vec<StepEvent>,
}

impl<R: Rng> Divider<'_, R> {
    /// Emits a wall event for `(row, col)` unless the cell is an endpoint.
    fn wall(&mut self, row: isize, col: isize) -> Result<(), EngineError> {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return Ok(());
        };

        let cell = self.grid.cell(row, col)?;
        if !matches!(cell.kind(), CellKind::Start | CellKind::End) {
            self.steps.push(StepEvent::new(Coord::new(row, col), CellKind::Wall));
        }

        Ok(())
    }

    /// Walls in every cell on the edge of the grid, row by row.
    fn border(&mut self) {
        let last_row = self.grid.rows().saturating_sub(1);
        let last_col = self.grid.cols().saturating_sub(1);

        for cell in self.grid.cells() {
            let on_edge = cell.row() == 0
                || cell.row() == last_row
                || cell.col() == 0
                || cell.col() == last_col;
            if on_edge && !matches!(cell.kind(), CellKind::Start | CellKind::End) {
                self.steps.push(StepEvent::new(cell.coord(), CellKind::Wall));
            }
        }
    }

    /// Splits `region` with a single-gap wall and recurses into both halves.
    fn divide(&mut self, region: Region, orientation: Orientation) -> Result<(), EngineError> {
        if region.is_exhausted() {
            return Ok(());
        }

        let height = region.row_to - region.row_from;
        let width = region.col_to - region.col_from;

        match orientation {
            Orientation::Vertical => {
                let wall_col = random_even(&mut *self.rng, region.col_from, region.col_to)?;
                let passage_row =
                    random_odd(&mut *self.rng, region.row_from - 1, region.row_to + 1)?;
                trace!("vertical wall at column {wall_col}, passage at row {passage_row}");

                for row in (region.row_from - 1)..=(region.row_to + 1) {
                    if row != passage_row {
                        self.wall(row, wall_col)?;
                    }
                }

                let left = Region {
                    col_to: wall_col - 2,
                    ..region
                };
                let right = Region {
                    col_from: wall_col + 2,
                    ..region
                };

                self.divide(left, Self::favoured(height, left.col_to - left.col_from))?;
                self.divide(right, Self::favoured(height, right.col_to - right.col_from))
            }
            Orientation::Horizontal => {
                let wall_row = random_even(&mut *self.rng, region.row_from, region.row_to)?;
                let passage_col =
                    random_odd(&mut *self.rng, region.col_from - 1, region.col_to + 1)?;
                trace!("horizontal wall at row {wall_row}, passage at column {passage_col}");

                for col in (region.col_from - 1)..=(region.col_to + 1) {
                    if col != passage_col {
                        self.wall(wall_row, col)?;
                    }
                }

                let top = Region {
                    row_to: wall_row - 2,
                    ..region
                };
                let bottom = Region {
                    row_from: wall_row + 2,
                    ..region
                };

                self.divide(top, Self::favoured(top.row_to - top.row_from, width))?;
                self.divide(bottom, Self::favoured(bottom.row_to - bottom.row_from, width))
            }
        }
    }

    /// Orientation that cuts across the larger extent of a region.
    const fn favoured(height: isize, width: isize) -> Orientation {
        if height > width {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Generates the wall trace of a recursive-division maze for `grid`.
///
/// The trace starts with the outer border, followed by the walls of each division step in
/// recursion order. The same random source state always yields the same trace.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRange`] if the recursion ever asks for a random wall or passage
/// from an empty range, and [`EngineError::OutOfBounds`] if a wall would land outside of the grid.
pub fn generate_maze<R: Rng>(grid: &Grid, rng: &mut R) -> Result<Vec<StepEvent>, EngineError> {
    let mut divider = Divider {
        grid,
        rng,
        steps: Vec::new(),
    };

    divider.border();

    let interior = Region {
        row_from: 2,
        row_to: isize::try_from(grid.rows()).unwrap_or(isize::MAX) - 3,
        col_from: 2,
        col_to: isize::try_from(grid.cols()).unwrap_or(isize::MAX) - 3,
    };
    divider.divide(interior, Orientation::Vertical)?;

    debug!(
        "generated a {}x{} maze with {} wall events",
        grid.rows(),
        grid.cols(),
        divider.steps.len()
    );

    Ok(divider.steps)
}
