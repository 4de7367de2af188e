//! Path reconstruction from a parent relation.

use std::collections::HashMap;

use crate::{
    error::EngineError,
    grid::{Cell, CellKind, Coord, Grid, StepEvent},
};

/// Parent relation recorded by a single search call, mapping each reached cell to the cell it was
/// reached from.
pub type CameFrom = HashMap<Coord, Coord>;

/// Path recovered from a [`CameFrom`] relation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reconstruction {
    /// Cells from the end up to the neighbor of the start, in that order.
    pub path: Vec<Cell>,
    /// Number of edges between the end and the start.
    pub length: usize,
    /// One `path` event per cell strictly between the end and the start.
    pub steps: Vec<StepEvent>,
}

/// Walks `came_from` backwards from `end` until the start, or a cell without parent, is reached.
///
/// Neither endpoint is ever given a `path` event, so both keep their markers when the steps are
/// replayed. Callers that need the path in start-to-end order have to reverse it.
///
/// # Errors
///
/// - [`EngineError::OutOfBounds`] if the relation names a cell outside of the grid.
/// - [`EngineError::BrokenParentChain`] if the walk does not terminate within the number of cells
///   of the grid.
pub fn reconstruct_path(
    grid: &Grid,
    came_from: &CameFrom,
    start: Coord,
    end: Coord,
) -> Result<Reconstruction, EngineError> {
    let mut path = Vec::new();
    let mut steps = Vec::new();

    let mut current = end;
    while current != start {
        let Some(&parent) = came_from.get(&current) else {
            break;
        };
        if path.len() >= grid.len() {
            return Err(EngineError::BrokenParentChain {
                row: current.row,
                col: current.col,
            });
        }

        path.push(*grid.cell_at(current)?);
        if current != end {
            steps.push(StepEvent::new(current, CellKind::Path));
        }

        current = parent;
    }

    Ok(Reconstruction {
        length: path.len(),
        path,
        steps,
    })
}
