use rustc_hash::FxHashSet;

use crate::algorithms::common::{SearchAlgorithm, SearchResult};
use crate::grid::{Grid, Position};

/// Depth-first search. Commits to one corridor at a time and backtracks on
/// dead ends; the path it reports is whatever it stumbled into first, with
/// no length guarantee.
///
/// Unlike BFS, membership is checked at pop time: a cell may sit in the
/// frontier several times (once per discovered route to it) and only the
/// first pop settles it. Because pushes go right, down, left, up onto a
/// stack, "up" is the direction explored first among ties.
#[derive(Default)]
pub struct Dfs;

impl Dfs {
    pub fn new() -> Self {
        Dfs
    }
}

impl SearchAlgorithm for Dfs {
    fn search(&mut self, grid: &Grid, start: Position, goal: Position) -> SearchResult {
        let mut stack: Vec<(Position, Vec<Position>)> = vec![(start, vec![start])];
        let mut settled: FxHashSet<Position> = FxHashSet::default();
        let mut visited_order = Vec::new();

        while let Some((pos, path)) = stack.pop() {
            // Stale duplicate from an earlier push; already settled.
            if !settled.insert(pos) {
                continue;
            }
            visited_order.push(pos);

            if pos == goal {
                return SearchResult { visited_order, path };
            }

            for neighbor in grid.neighbors(pos) {
                if grid.is_traversable(neighbor) {
                    let mut extended = path.clone();
                    extended.push(neighbor);
                    stack.push((neighbor, extended));
                }
            }
        }

        SearchResult {
            visited_order,
            path: Vec::new(),
        }
    }

    fn name(&self) -> &'static str {
        "dfs"
    }
}
