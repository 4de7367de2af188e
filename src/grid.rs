//! Grid data model.
//!
//! This module contains the cell and grid types the search algorithms and the maze generator
//! operate on, together with the step events that make up every replayable trace.

use std::fmt;

use crate::error::EngineError;

/// Traversal cost of every cell that is not weighted.
pub const DEFAULT_COST: u32 = 1;

/// Traversal cost of a weighted ("hill") cell.
pub const HILL_COST: u32 = 5;

/// Orthogonal steps in the fixed north, east, south, west order.
///
/// The order drives the order in which frontiers grow, so every trace depends on it.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Grid coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Zero-based row, growing downwards.
    pub row: usize,
    /// Zero-based column, growing rightwards.
    pub col: usize,
}

impl Coord {
    /// Builds a coordinate from its row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Number of orthogonal steps between two coordinates.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.row, self.col)
    }
}

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Open floor.
    #[default]
    Empty,
    /// Impassable obstacle.
    Wall,
    /// Search origin.
    Start,
    /// Search goal.
    End,
    /// Passable cell that is more expensive to enter.
    Weighted,
    /// Cell explored by a search.
    Searched,
    /// Cell on the selected path.
    Path,
}

impl CellKind {
    /// Cost of entering a cell of this kind.
    #[must_use]
    pub const fn cost(self) -> u32 {
        match self {
            Self::Weighted => HILL_COST,
            Self::Empty | Self::Wall | Self::Start | Self::End | Self::Searched | Self::Path => {
                DEFAULT_COST
            }
        }
    }
}

/// A single grid cell.
///
/// The coordinate of a cell never changes; a new kind is stored by replacing the whole value in
/// the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Location of the cell.
    coord: Coord,
    /// Current state of the cell.
    kind: CellKind,
    /// Traversal cost used by cost-aware search.
    cost: u32,
}

impl Cell {
    /// Builds a cell whose cost follows from its kind.
    #[must_use]
    pub const fn new(row: usize, col: usize, kind: CellKind) -> Self {
        Self {
            coord: Coord::new(row, col),
            kind,
            cost: kind.cost(),
        }
    }

    /// Location of the cell.
    #[must_use]
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    /// Row of the cell.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.coord.row
    }

    /// Column of the cell.
    #[must_use]
    pub const fn col(&self) -> usize {
        self.coord.col
    }

    /// Current kind of the cell.
    #[must_use]
    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    /// Cost of entering the cell.
    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.cost
    }
}

/// Atomic unit of a trace: the cell at `(row, col)` takes `kind`.
///
/// Order within a trace is significant and must be preserved by whoever replays it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StepEvent {
    /// Row of the affected cell.
    pub row: usize,
    /// Column of the affected cell.
    pub col: usize,
    /// Kind the cell takes.
    pub kind: CellKind,
}

impl StepEvent {
    /// Builds an event for the cell at `coord`.
    #[must_use]
    pub const fn new(coord: Coord, kind: CellKind) -> Self {
        Self {
            row: coord.row,
            col: coord.col,
            kind,
        }
    }

    /// Coordinate of the affected cell.
    #[must_use]
    pub const fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}

/// Rectangular grid of cells with optional start and end markers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Row-major cell storage with exactly one cell per coordinate.
    cells: Vec<Cell>,
    /// Coordinate of the start cell, if one is placed.
    start: Option<Coord>,
    /// Coordinate of the end cell, if one is placed.
    end: Option<Coord>,
}

impl Grid {
    /// Creates a grid of empty cells without start or end.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut grid = Self {
            rows,
            cols,
            cells: Vec::new(),
            start: None,
            end: None,
        };
        grid.reset();

        grid
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Coordinate of the start cell.
    #[must_use]
    pub const fn start(&self) -> Option<Coord> {
        self.start
    }

    /// Coordinate of the end cell.
    #[must_use]
    pub const fn end(&self) -> Option<Coord> {
        self.end
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Whether `(row, col)` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Storage index of `(row, col)`.
    fn index(&self, row: usize, col: usize) -> Result<usize, EngineError> {
        if self.contains(row, col) {
            Ok(row * self.cols + col)
        } else {
            Err(EngineError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Looks up the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if the coordinate lies outside of the grid.
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, EngineError> {
        let index = self.index(row, col)?;
        self.cells.get(index).ok_or(EngineError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Looks up the cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if the coordinate lies outside of the grid.
    pub fn cell_at(&self, coord: Coord) -> Result<&Cell, EngineError> {
        self.cell(coord.row, coord.col)
    }

    /// Stores a fresh cell of `kind` at `(row, col)` without any endpoint bookkeeping.
    fn replace(&mut self, row: usize, col: usize, kind: CellKind) -> Result<(), EngineError> {
        let index = self.index(row, col)?;
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = Cell::new(row, col, kind);
        }

        Ok(())
    }

    /// Replaces the kind of the cell at `(row, col)`.
    ///
    /// Walls never overwrite the start or end cell; such a call leaves the grid untouched. Placing
    /// a start clears the previous start back to empty, and the same holds for the end. Any other
    /// kind written over the current start or end removes that marker.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if the coordinate lies outside of the grid.
    pub fn set_cell(&mut self, row: usize, col: usize, kind: CellKind) -> Result<(), EngineError> {
        let current = self.cell(row, col)?.kind();
        if kind == CellKind::Wall && matches!(current, CellKind::Start | CellKind::End) {
            return Ok(());
        }

        let coord = Coord::new(row, col);
        if self.start == Some(coord) && kind != CellKind::Start {
            self.start = None;
        }
        if self.end == Some(coord) && kind != CellKind::End {
            self.end = None;
        }

        match kind {
            CellKind::Start => {
                if let Some(previous) = self.start.replace(coord) {
                    if previous != coord {
                        self.replace(previous.row, previous.col, CellKind::Empty)?;
                    }
                }
            }
            CellKind::End => {
                if let Some(previous) = self.end.replace(coord) {
                    if previous != coord {
                        self.replace(previous.row, previous.col, CellKind::Empty)?;
                    }
                }
            }
            CellKind::Empty
            | CellKind::Wall
            | CellKind::Weighted
            | CellKind::Searched
            | CellKind::Path => {}
        }

        self.replace(row, col, kind)
    }

    /// Cycles the cell at `(row, col)` for direct editing without a selected brush.
    ///
    /// The first empty cells clicked become the start and then the end; clicking an endpoint or a
    /// wall clears it, and any other cell becomes a wall.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if the coordinate lies outside of the grid.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<(), EngineError> {
        let coord = Coord::new(row, col);
        let kind = self.cell(row, col)?.kind();

        let next = if self.start.is_none() && kind == CellKind::Empty {
            CellKind::Start
        } else if self.start == Some(coord) {
            CellKind::Empty
        } else if self.end.is_none() && kind == CellKind::Empty {
            CellKind::End
        } else if self.end == Some(coord) || kind == CellKind::Wall {
            CellKind::Empty
        } else {
            CellKind::Wall
        };

        self.set_cell(row, col, next)
    }

    /// Replays a single trace event onto the grid through [`Grid::set_cell`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if the event targets a cell outside of the grid.
    pub fn apply(&mut self, event: StepEvent) -> Result<(), EngineError> {
        self.set_cell(event.row, event.col, event.kind)
    }

    /// In-bounds orthogonal neighbors of `cell`, in north, east, south, west order.
    #[must_use]
    pub fn neighbors(&self, cell: &Cell) -> Vec<Cell> {
        DIRECTIONS
            .iter()
            .filter_map(|&(row_step, col_step)| {
                let row = cell.row().checked_add_signed(row_step)?;
                let col = cell.col().checked_add_signed(col_step)?;
                self.cell(row, col).ok().copied()
            })
            .collect()
    }

    /// Restores every cell to empty and clears both endpoints.
    pub fn reset(&mut self) {
        self.cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| Cell::new(row, col, CellKind::Empty)))
            .collect();
        self.start = None;
        self.end = None;
    }
}
