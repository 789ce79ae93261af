use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::algorithms::common::{SearchAlgorithm, SearchResult};
use crate::grid::{Grid, Position};

/// Breadth-first search. Explores in rings of increasing step count, so the
/// first path that reaches the goal is the shortest in steps.
#[derive(Default)]
pub struct Bfs;

impl Bfs {
    pub fn new() -> Self {
        Bfs
    }
}

impl SearchAlgorithm for Bfs {
    fn search(&mut self, grid: &Grid, start: Position, goal: Position) -> SearchResult {
        let mut queue: VecDeque<(Position, Vec<Position>)> = VecDeque::new();
        queue.push_back((start, vec![start]));

        // Membership is checked at enqueue time: a cell enters the frontier
        // at most once, which is what makes the first arrival the shortest.
        let mut enqueued: FxHashSet<Position> = FxHashSet::default();
        enqueued.insert(start);

        let mut visited_order = Vec::new();

        while let Some((pos, path)) = queue.pop_front() {
            visited_order.push(pos);

            if pos == goal {
                return SearchResult { visited_order, path };
            }

            for neighbor in grid.neighbors(pos) {
                if grid.is_traversable(neighbor) && enqueued.insert(neighbor) {
                    let mut extended = path.clone();
                    extended.push(neighbor);
                    queue.push_back((neighbor, extended));
                }
            }
        }

        SearchResult {
            visited_order,
            path: Vec::new(),
        }
    }

    fn name(&self) -> &'static str {
        "bfs"
    }
}
