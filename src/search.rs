//! Breadth-first, depth-first and A* search over the grid.
//!
//! Every algorithm returns a [`SearchResult`] whose step trace lists the explored cells in
//! visitation order followed by the cells of the selected path, ready to be replayed by a renderer.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet, VecDeque},
    fmt,
};

use clap::ValueEnum;
use log::debug;

use crate::{
    error::EngineError,
    grid::{Cell, CellKind, Coord, Grid, StepEvent},
    path::{self, CameFrom},
};

/// Available search algorithms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    /// Breadth-first search; minimal hop count.
    #[default]
    Bfs,
    /// Depth-first search; no optimality guarantee.
    Dfs,
    /// A* with a floored Euclidean heuristic; minimal path cost.
    #[value(name = "astar")]
    AStar,
}

impl Algorithm {
    /// Display name of the algorithm.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::AStar => "A*",
        }
    }

    /// Algorithm following this one, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Bfs => Self::Dfs,
            Self::Dfs => Self::AStar,
            Self::AStar => Self::Bfs,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// How a search call ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The end was reached and a path was reconstructed.
    Found,
    /// The frontier ran dry before the end was reached.
    NoPath,
    /// The grid lacks a start or an end; nothing was searched.
    MissingEndpoint,
}

/// Result of a single search call.
#[derive(Clone, Debug, PartialEq, Eq)]
#[expect(
    clippy::module_name_repetitions,
    reason = "Re-exported at the crate root, where a bare `Result` would shadow the prelude."
)]
pub struct SearchResult {
    /// How the search ended.
    pub outcome: Outcome,
    /// Cells from the end up to the neighbor of the start; empty unless the path was found.
    pub path: Vec<Cell>,
    /// Number of cells that entered the closed or visited accounting.
    pub visited_count: usize,
    /// Search events in visitation order, followed by path events.
    pub steps: Vec<StepEvent>,
}

impl SearchResult {
    /// Result of a call made without both endpoints.
    const fn missing_endpoint() -> Self {
        Self {
            outcome: Outcome::MissingEndpoint,
            path: Vec::new(),
            visited_count: 0,
            steps: Vec::new(),
        }
    }

    /// Result of a search whose frontier was exhausted.
    const fn exhausted(visited_count: usize, steps: Vec<StepEvent>) -> Self {
        Self {
            outcome: Outcome::NoPath,
            path: Vec::new(),
            visited_count,
            steps,
        }
    }

    /// Whether a path was found.
    #[must_use]
    pub fn found(&self) -> bool {
        self.outcome == Outcome::Found
    }

    /// Number of edges on the path.
    #[must_use]
    pub fn length(&self) -> usize {
        self.path.len()
    }

    /// Sum of the costs of every cell entered along the path.
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.path.iter().map(Cell::cost).sum()
    }
}

/// Start and end of the search being run.
#[derive(Clone, Copy)]
struct Endpoints {
    /// Search origin.
    start: Coord,
    /// Search goal.
    end: Coord,
}

impl Endpoints {
    /// Records a `searched` event for `coord` unless it is one of the endpoints.
    fn mark_searched(self, coord: Coord, steps: &mut Vec<StepEvent>) {
        if coord != self.start && coord != self.end {
            steps.push(StepEvent::new(coord, CellKind::Searched));
        }
    }

    /// Reconstructs the path and appends its events to the search trace.
    fn finish(
        self,
        grid: &Grid,
        came_from: &CameFrom,
        visited_count: usize,
        mut steps: Vec<StepEvent>,
    ) -> Result<SearchResult, EngineError> {
        let reconstruction = path::reconstruct_path(grid, came_from, self.start, self.end)?;
        steps.extend(reconstruction.steps);

        Ok(SearchResult {
            outcome: Outcome::Found,
            path: reconstruction.path,
            visited_count,
            steps,
        })
    }
}

/// Runs `algorithm` from the grid's start to its end.
///
/// A grid without both endpoints yields an empty result with [`Outcome::MissingEndpoint`].
///
/// # Errors
///
/// Only fails if the grid or the recorded parent relation is inconsistent, see [`EngineError`].
pub fn search(grid: &Grid, algorithm: Algorithm) -> Result<SearchResult, EngineError> {
    let (Some(start), Some(end)) = (grid.start(), grid.end()) else {
        debug!("{algorithm} skipped: start or end is missing");
        return Ok(SearchResult::missing_endpoint());
    };
    let endpoints = Endpoints { start, end };

    let result = match algorithm {
        Algorithm::Bfs => uninformed(grid, endpoints, Frontier::Queue)?,
        Algorithm::Dfs => uninformed(grid, endpoints, Frontier::Stack)?,
        Algorithm::AStar => astar(grid, endpoints)?,
    };

    debug!(
        "{algorithm} from {start} to {end}: {:?}, visited {}, length {}, cost {}",
        result.outcome,
        result.visited_count,
        result.length(),
        result.cost()
    );

    Ok(result)
}

/// Discipline of an uninformed frontier.
#[derive(Clone, Copy)]
enum Frontier {
    /// First in, first out.
    Queue,
    /// Last in, first out.
    Stack,
}

impl Frontier {
    /// Takes the next cell to expand out of `pending`.
    fn pop(self, pending: &mut VecDeque<Coord>) -> Option<Coord> {
        match self {
            Self::Queue => pending.pop_front(),
            Self::Stack => pending.pop_back(),
        }
    }
}

/// Breadth-first or depth-first traversal, depending on `frontier`.
///
/// Cells are marked visited as soon as they are discovered, walls are never discovered, and the
/// first recorded parent of a cell is never overwritten.
fn uninformed(
    grid: &Grid,
    endpoints: Endpoints,
    frontier: Frontier,
) -> Result<SearchResult, EngineError> {
    let mut pending = VecDeque::from([endpoints.start]);
    let mut visited = HashSet::from([endpoints.start]);
    let mut came_from = CameFrom::new();
    let mut steps = Vec::new();

    while let Some(current) = frontier.pop(&mut pending) {
        endpoints.mark_searched(current, &mut steps);

        if current == endpoints.end {
            return endpoints.finish(grid, &came_from, visited.len(), steps);
        }

        let cell = grid.cell_at(current)?;
        for neighbor in grid.neighbors(cell) {
            let coord = neighbor.coord();
            if neighbor.kind() == CellKind::Wall || !visited.insert(coord) {
                continue;
            }

            let _ = came_from.entry(coord).or_insert(current);
            pending.push_back(coord);
        }
    }

    Ok(SearchResult::exhausted(visited.len(), steps))
}

/// Floor of the Euclidean distance between two coordinates.
fn heuristic(from: Coord, to: Coord) -> u32 {
    let row_delta = u64::try_from(from.row.abs_diff(to.row)).unwrap_or(u64::MAX);
    let col_delta = u64::try_from(from.col.abs_diff(to.col)).unwrap_or(u64::MAX);
    let squared = row_delta
        .saturating_mul(row_delta)
        .saturating_add(col_delta.saturating_mul(col_delta));

    u32::try_from(squared.isqrt()).unwrap_or(u32::MAX)
}

/// Open set of the A* search.
///
/// Members are kept in a binary heap ordered by `(fScore, sequence)`. The sequence number is
/// handed out when a cell joins the set and kept while its score improves, so among equal scores
/// the earliest member wins. Outdated heap entries are skipped when popped.
#[derive(Default)]
struct OpenSet {
    /// Candidate entries as `(fScore, sequence, coordinate)`.
    heap: BinaryHeap<Reverse<(u32, u64, Coord)>>,
    /// Sequence number of every current member.
    members: HashMap<Coord, u64>,
    /// Sequence number for the next member.
    next_sequence: u64,
}

impl OpenSet {
    /// Whether `coord` currently belongs to the set.
    fn contains(&self, coord: Coord) -> bool {
        self.members.contains_key(&coord)
    }

    /// Adds `coord` at the back of the set.
    fn insert(&mut self, coord: Coord, f_score: u32) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        let _ = self.members.insert(coord, sequence);
        self.heap.push(Reverse((f_score, sequence, coord)));
    }

    /// Records a lower score for a member without changing its position.
    fn lower(&mut self, coord: Coord, f_score: u32) {
        if let Some(&sequence) = self.members.get(&coord) {
            self.heap.push(Reverse((f_score, sequence, coord)));
        }
    }

    /// Removes and returns the member with the lowest score.
    fn pop(&mut self, f_scores: &HashMap<Coord, u32>) -> Option<Coord> {
        while let Some(Reverse((f_score, sequence, coord))) = self.heap.pop() {
            let current = self.members.get(&coord) == Some(&sequence)
                && f_scores.get(&coord) == Some(&f_score);
            if current {
                let _ = self.members.remove(&coord);
                return Some(coord);
            }
        }

        None
    }
}

/// A* search weighing each step by the cost of the entered cell.
fn astar(grid: &Grid, endpoints: Endpoints) -> Result<SearchResult, EngineError> {
    let Endpoints { start, end } = endpoints;

    let mut open = OpenSet::default();
    let mut came_from = CameFrom::new();
    let mut g_scores = HashMap::from([(start, 0_u32)]);
    let mut f_scores = HashMap::from([(start, heuristic(start, end))]);
    let mut steps = Vec::new();
    let mut visited_count = 0;

    open.insert(start, heuristic(start, end));

    while let Some(current) = open.pop(&f_scores) {
        visited_count += 1;
        endpoints.mark_searched(current, &mut steps);

        if current == end {
            return endpoints.finish(grid, &came_from, visited_count, steps);
        }

        let current_g = g_scores.get(&current).copied().unwrap_or(u32::MAX);
        let cell = grid.cell_at(current)?;
        for neighbor in grid.neighbors(cell) {
            let coord = neighbor.coord();
            let tentative = current_g.saturating_add(neighbor.cost());
            if tentative >= g_scores.get(&coord).copied().unwrap_or(u32::MAX) {
                continue;
            }

            let f_score = tentative.saturating_add(heuristic(coord, end));
            let _ = came_from.insert(coord, current);
            let _ = g_scores.insert(coord, tentative);
            let _ = f_scores.insert(coord, f_score);

            if open.contains(coord) {
                open.lower(coord, f_score);
            } else if neighbor.kind() != CellKind::Wall {
                open.insert(coord, f_score);
            }
        }
    }

    Ok(SearchResult::exhausted(visited_count, steps))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    /// Builds a grid with the given endpoints and walls.
    fn grid_with(
        rows: usize,
        cols: usize,
        start: (usize, usize),
        end: (usize, usize),
        walls: &[(usize, usize)],
    ) -> Grid {
        let mut grid = Grid::new(rows, cols);
        grid.set_cell(start.0, start.1, CellKind::Start)
            .expect("start should be in bounds");
        grid.set_cell(end.0, end.1, CellKind::End)
            .expect("end should be in bounds");
        for &(row, col) in walls {
            grid.set_cell(row, col, CellKind::Wall)
                .expect("wall should be in bounds");
        }

        grid
    }

    /// Asserts that the path steps orthogonally from the end to a neighbor of the start.
    fn assert_connected(result: &SearchResult, start: Coord, end: Coord) {
        let coords: Vec<Coord> = result.path.iter().map(Cell::coord).collect();

        assert_eq!(coords.first(), Some(&end), "the path starts at the end");
        assert_eq!(
            coords.last().map(|last| last.manhattan(start)),
            Some(1),
            "the path stops next to the start"
        );
        assert!(
            coords.windows(2).all(|pair| match pair {
                [first, second] => first.manhattan(*second) == 1,
                _ => false,
            }),
            "consecutive path cells are orthogonal neighbors"
        );
    }

    const ALGORITHMS: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::AStar];

    #[test]
    fn test_missing_endpoint_is_a_no_op() {
        let mut grid = Grid::new(3, 3);
        grid.set_cell(0, 0, CellKind::Start)
            .expect("start should be in bounds");

        for algorithm in ALGORITHMS {
            let result = search(&grid, algorithm).expect("search should not fail");

            assert_eq!(
                result.outcome,
                Outcome::MissingEndpoint,
                "{algorithm} needs both endpoints"
            );
            assert!(result.steps.is_empty(), "{algorithm} records no steps");
            assert!(result.path.is_empty(), "{algorithm} returns no path");
            assert_eq!(result.visited_count, 0, "{algorithm} visits nothing");
        }
    }

    #[test]
    fn test_bfs_open_five_by_five() {
        let grid = grid_with(5, 5, (0, 0), (4, 4), &[]);

        let result = search(&grid, Algorithm::Bfs).expect("search should not fail");

        assert!(result.found(), "an open grid is always solvable");
        assert_eq!(result.length(), 8, "the shortest path has eight edges");
        assert!(result.visited_count <= 25, "at most every cell is visited");
        assert_connected(&result, Coord::new(0, 0), Coord::new(4, 4));
    }

    #[test]
    fn test_bfs_length_matches_manhattan_distance() {
        let cases = [
            ((0, 0), (0, 6)),
            ((3, 2), (0, 5)),
            ((6, 6), (1, 0)),
            ((2, 4), (4, 1)),
        ];

        for (start, end) in cases {
            let grid = grid_with(7, 7, start, end, &[]);
            let result = search(&grid, Algorithm::Bfs).expect("search should not fail");

            assert_eq!(
                result.length(),
                Coord::new(start.0, start.1).manhattan(Coord::new(end.0, end.1)),
                "without walls BFS is as short as the manhattan distance"
            );
        }
    }

    #[test]
    fn test_enclosed_end_reports_no_path() {
        let grid = grid_with(3, 3, (0, 0), (2, 2), &[(1, 1), (1, 2), (2, 1)]);

        for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
            let result = search(&grid, algorithm).expect("search should not fail");

            assert_eq!(result.outcome, Outcome::NoPath, "{algorithm} cannot reach the end");
            assert!(result.path.is_empty(), "{algorithm} returns no path");
            assert_eq!(
                result.visited_count, 5,
                "{algorithm} visits every reachable open cell"
            );
        }

        let result = search(&grid, Algorithm::AStar).expect("search should not fail");
        assert_eq!(result.outcome, Outcome::NoPath, "A* cannot reach the end");
        assert_eq!(result.visited_count, 5, "A* pops every reachable open cell");
    }

    #[test]
    fn test_search_steps_skip_endpoints() {
        let grid = grid_with(4, 4, (0, 0), (3, 3), &[(1, 1)]);

        for algorithm in ALGORITHMS {
            let result = search(&grid, algorithm).expect("search should not fail");

            assert!(
                result.steps.iter().all(|step| {
                    step.coord() != Coord::new(0, 0) && step.coord() != Coord::new(3, 3)
                }),
                "{algorithm} never paints over the endpoints"
            );
            assert!(
                result
                    .steps
                    .iter()
                    .all(|step| step.coord() != Coord::new(1, 1)),
                "{algorithm} never explores walls"
            );
        }
    }

    #[test]
    fn test_search_steps_precede_path_steps() {
        let grid = grid_with(4, 6, (1, 0), (2, 5), &[(0, 2), (1, 2), (2, 2)]);

        for algorithm in ALGORITHMS {
            let result = search(&grid, algorithm).expect("search should not fail");
            let first_path = result
                .steps
                .iter()
                .position(|step| step.kind == CellKind::Path)
                .expect("a found path is marked");

            assert!(
                result
                    .steps
                    .iter()
                    .skip(first_path)
                    .all(|step| step.kind == CellKind::Path),
                "{algorithm} appends the path after the exploration"
            );
            assert_eq!(
                result.steps.len() - first_path,
                result.length() - 1,
                "{algorithm} marks every path cell but the end"
            );
        }
    }

    #[test]
    fn test_bfs_visits_in_layers() {
        let grid = grid_with(1, 4, (0, 0), (0, 3), &[]);

        let result = search(&grid, Algorithm::Bfs).expect("search should not fail");

        assert_eq!(
            result.steps,
            vec![
                StepEvent::new(Coord::new(0, 1), CellKind::Searched),
                StepEvent::new(Coord::new(0, 2), CellKind::Searched),
                StepEvent::new(Coord::new(0, 2), CellKind::Path),
                StepEvent::new(Coord::new(0, 1), CellKind::Path),
            ],
            "a corridor is explored cell by cell, then painted back"
        );
    }

    #[test]
    fn test_dfs_follows_the_last_pushed_neighbor() {
        let grid = grid_with(3, 3, (1, 1), (0, 0), &[]);

        let result = search(&grid, Algorithm::Dfs).expect("search should not fail");
        let searched: Vec<Coord> = result
            .steps
            .iter()
            .filter(|step| step.kind == CellKind::Searched)
            .map(StepEvent::coord)
            .collect();

        assert_eq!(
            searched.first(),
            Some(&Coord::new(1, 0)),
            "west is pushed last and popped first"
        );
        assert!(result.found(), "the end is reachable");
        assert_connected(&result, Coord::new(1, 1), Coord::new(0, 0));
    }

    #[test]
    fn test_dfs_is_not_shorter_than_bfs() {
        let grid = grid_with(
            6,
            6,
            (0, 0),
            (5, 5),
            &[(1, 1), (2, 1), (3, 3), (3, 4), (4, 2)],
        );

        let bfs = search(&grid, Algorithm::Bfs).expect("search should not fail");
        let dfs = search(&grid, Algorithm::Dfs).expect("search should not fail");

        assert!(bfs.found() && dfs.found(), "both reach the end");
        assert!(
            bfs.length() <= dfs.length(),
            "breadth-first paths have the fewest hops"
        );
        assert_connected(&dfs, Coord::new(0, 0), Coord::new(5, 5));
    }

    #[test]
    fn test_astar_is_not_costlier_than_dfs() {
        let mut grid = grid_with(6, 7, (2, 0), (3, 6), &[(0, 3), (1, 3), (4, 3)]);
        for (row, col) in [(2, 2), (3, 2), (2, 4), (5, 5)] {
            grid.set_cell(row, col, CellKind::Weighted)
                .expect("cell should be in bounds");
        }

        let astar = search(&grid, Algorithm::AStar).expect("search should not fail");
        let dfs = search(&grid, Algorithm::Dfs).expect("search should not fail");

        assert!(astar.found() && dfs.found(), "both reach the end");
        assert!(astar.cost() <= dfs.cost(), "A* paths are the cheapest");
        assert_connected(&astar, Coord::new(2, 0), Coord::new(3, 6));
    }

    #[test]
    fn test_path_quality_holds_on_random_layouts() {
        let mut rng = StdRng::seed_from_u64(2718);

        for _ in 0..500 {
            let rows = rng.random_range(2..=9);
            let cols = rng.random_range(2..=9);
            let start = Coord::new(rng.random_range(0..rows), rng.random_range(0..cols));
            let end = Coord::new(rng.random_range(0..rows), rng.random_range(0..cols));
            if start == end {
                continue;
            }

            let mut grid = grid_with(rows, cols, (start.row, start.col), (end.row, end.col), &[]);
            for row in 0..rows {
                for col in 0..cols {
                    if Coord::new(row, col) == start || Coord::new(row, col) == end {
                        continue;
                    }
                    let kind = match rng.random_range(0..100) {
                        0..25 => CellKind::Wall,
                        25..40 => CellKind::Weighted,
                        _ => continue,
                    };
                    grid.set_cell(row, col, kind)
                        .expect("cell should be in bounds");
                }
            }

            let bfs = search(&grid, Algorithm::Bfs).expect("search should not fail");
            let dfs = search(&grid, Algorithm::Dfs).expect("search should not fail");
            let astar = search(&grid, Algorithm::AStar).expect("search should not fail");

            assert!(
                bfs.found() == dfs.found() && dfs.found() == astar.found(),
                "every algorithm agrees on reachability in {grid:?}"
            );
            if bfs.found() {
                assert!(bfs.length() <= dfs.length(), "BFS has the fewest hops in {grid:?}");
                assert!(astar.cost() <= dfs.cost(), "A* is never costlier than DFS in {grid:?}");
                assert!(astar.cost() <= bfs.cost(), "A* is never costlier than BFS in {grid:?}");
                assert_connected(&astar, start, end);
            }
        }
    }

    #[test]
    fn test_astar_detours_around_weighted_cell() {
        let mut grid = grid_with(3, 5, (1, 0), (1, 4), &[]);
        grid.set_cell(1, 2, CellKind::Weighted)
            .expect("cell should be in bounds");

        let astar = search(&grid, Algorithm::AStar).expect("search should not fail");
        let bfs = search(&grid, Algorithm::Bfs).expect("search should not fail");

        assert!(astar.found(), "the end is reachable");
        assert!(
            astar.path.iter().all(|cell| cell.coord() != Coord::new(1, 2)),
            "A* avoids the hill"
        );
        assert_eq!(astar.length(), 6, "the detour takes two extra hops");
        assert_eq!(astar.cost(), 6, "the detour only crosses plain cells");
        assert_eq!(bfs.length(), 4, "BFS goes straight through");
        assert_eq!(bfs.cost(), 8, "crossing the hill costs more");
    }

    #[test]
    fn test_astar_crosses_hill_when_cheaper() {
        let mut grid = grid_with(3, 5, (1, 0), (1, 4), &[(0, 2), (2, 2)]);
        grid.set_cell(1, 2, CellKind::Weighted)
            .expect("cell should be in bounds");

        let result = search(&grid, Algorithm::AStar).expect("search should not fail");

        assert!(result.found(), "the hill is passable");
        assert_eq!(result.cost(), 8, "three plain cells and one hill");
    }

    #[test]
    fn test_astar_counts_pops() {
        let grid = grid_with(1, 5, (0, 0), (0, 4), &[]);

        let result = search(&grid, Algorithm::AStar).expect("search should not fail");

        assert_eq!(result.visited_count, 5, "each corridor cell is popped once");
        assert_eq!(result.length(), 4, "the corridor is four edges long");
    }

    #[test]
    fn test_heuristic_is_floored_euclidean() {
        assert_eq!(heuristic(Coord::new(0, 0), Coord::new(3, 4)), 5, "3-4-5 triangle");
        assert_eq!(heuristic(Coord::new(0, 0), Coord::new(1, 1)), 1, "sqrt(2) floors to 1");
        assert_eq!(heuristic(Coord::new(5, 5), Coord::new(2, 3)), 3, "sqrt(13) floors to 3");
        assert_eq!(heuristic(Coord::new(4, 4), Coord::new(4, 4)), 0, "no distance");
    }

    #[test]
    fn test_open_set_breaks_ties_by_insertion() {
        let mut open = OpenSet::default();
        let scores = HashMap::from([
            (Coord::new(0, 0), 4),
            (Coord::new(0, 1), 3),
            (Coord::new(0, 2), 3),
        ]);
        open.insert(Coord::new(0, 0), 5);
        open.insert(Coord::new(0, 1), 3);
        open.insert(Coord::new(0, 2), 3);
        open.lower(Coord::new(0, 0), 4);

        assert_eq!(open.pop(&scores), Some(Coord::new(0, 1)), "first minimum wins");
        assert_eq!(open.pop(&scores), Some(Coord::new(0, 2)), "then the next minimum");
        assert_eq!(open.pop(&scores), Some(Coord::new(0, 0)), "lowered scores are used");
        assert_eq!(open.pop(&scores), None, "outdated entries are dropped");
    }

    #[test]
    fn test_searches_are_deterministic() {
        let grid = grid_with(6, 6, (0, 0), (5, 3), &[(2, 0), (2, 1), (2, 2), (4, 4)]);

        for algorithm in ALGORITHMS {
            let first = search(&grid, algorithm).expect("search should not fail");
            let second = search(&grid, algorithm).expect("search should not fail");

            assert_eq!(first, second, "{algorithm} replays identically");
        }
    }

    #[test]
    fn test_algorithm_cycle_and_names() {
        assert_eq!(Algorithm::Bfs.next(), Algorithm::Dfs, "BFS is followed by DFS");
        assert_eq!(Algorithm::Dfs.next(), Algorithm::AStar, "DFS is followed by A*");
        assert_eq!(Algorithm::AStar.next(), Algorithm::Bfs, "A* wraps around");
        assert_eq!(Algorithm::AStar.to_string(), "A*", "A* displays its short name");
    }
}
