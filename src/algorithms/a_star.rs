use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;

use crate::algorithms::common::{SearchAlgorithm, SearchResult};
use crate::grid::{Grid, Position};

/// A frontier entry ordered by `f = g + h`, with equal-`f` entries served in
/// insertion order via the monotonic `seq` counter. `Ord` is reversed so a
/// `BinaryHeap` behaves as a stable min-heap.
struct Entry {
    f: i32,
    seq: u64,
    pos: Position,
    path: Vec<Position>,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior; lower seq wins among equal f.
        match other.f.cmp(&self.f) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            ord => ord,
        }
    }
}

/// Best-first search keyed by `g + h`, where `g` counts steps from the start
/// and `h` is the Manhattan distance to the goal. The heuristic is
/// admissible on a 4-directional unweighted grid.
///
/// Settled positions are never re-opened: membership is checked at pop time
/// and there is no decrease-key step. On small unweighted grids the
/// admissible heuristic plus the stable tie-break makes the returned path
/// optimal in practice, but unlike BFS this is not a guarantee on every
/// topology where equal-cost routes converge before settlement.
#[derive(Default)]
pub struct AStar;

impl AStar {
    pub fn new() -> Self {
        AStar
    }
}

impl SearchAlgorithm for AStar {
    fn search(&mut self, grid: &Grid, start: Position, goal: Position) -> SearchResult {
        let mut frontier = BinaryHeap::new();
        let mut seq = 0u64;
        frontier.push(Entry {
            f: start.manhattan(&goal),
            seq,
            pos: start,
            path: vec![start],
        });

        let mut settled: FxHashSet<Position> = FxHashSet::default();
        let mut visited_order = Vec::new();

        while let Some(Entry { pos, path, .. }) = frontier.pop() {
            if !settled.insert(pos) {
                continue;
            }
            visited_order.push(pos);

            if pos == goal {
                return SearchResult { visited_order, path };
            }

            // g of a neighbor is its edge count from the start: the current
            // path holds g + 1 positions, so the extended one holds g + 2.
            let neighbor_g = path.len() as i32;
            for neighbor in grid.neighbors(pos) {
                if grid.is_traversable(neighbor) && !settled.contains(&neighbor) {
                    let mut extended = path.clone();
                    extended.push(neighbor);
                    seq += 1;
                    frontier.push(Entry {
                        f: neighbor_g + neighbor.manhattan(&goal),
                        seq,
                        pos: neighbor,
                        path: extended,
                    });
                }
            }
        }

        SearchResult {
            visited_order,
            path: Vec::new(),
        }
    }

    fn name(&self) -> &'static str {
        "a_star"
    }
}
