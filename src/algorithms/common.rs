use std::fmt;
use std::str::FromStr;

use crate::grid::{Grid, Position};

/// What a single search run produced.
///
/// `visited_order` lists positions in the order they were settled, with no
/// duplicates. `path` runs from start to goal inclusive when a route exists
/// and is empty otherwise. A missing start or goal yields both sequences
/// empty; since any run with valid endpoints settles at least the start
/// cell, an empty `visited_order` is how callers tell "invalid maze" apart
/// from "goal unreachable".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub visited_order: Vec<Position>,
    pub path: Vec<Position>,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

pub trait SearchAlgorithm {
    /// Run the traversal from `start` towards `goal` over an immutable grid.
    /// Positions are expanded in the grid's fixed neighbor order, so the
    /// output is fully deterministic for a given grid.
    fn search(&mut self, grid: &Grid, start: Position, goal: Position) -> SearchResult;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Bfs,
    Dfs,
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Bfs, Strategy::Dfs, Strategy::AStar];

    pub fn algorithm(&self) -> Box<dyn SearchAlgorithm> {
        match self {
            Strategy::Bfs => Box::new(super::bfs::Bfs::new()),
            Strategy::Dfs => Box::new(super::dfs::Dfs::new()),
            Strategy::AStar => Box::new(super::a_star::AStar::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::AStar => "a_star",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            "a_star" | "astar" => Ok(Strategy::AStar),
            other => Err(format!(
                "unknown algorithm '{}': expected 'bfs', 'dfs', or 'a_star'",
                other
            )),
        }
    }
}

/// The engine's call boundary: locate the endpoints, run the chosen
/// strategy, and hand back plain data for the caller to display at its own
/// pace. A grid without a start or goal marker is a recoverable condition
/// (interactive editors produce such grids mid-edit), reported as an empty
/// result rather than a panic.
pub fn search(grid: &Grid, strategy: Strategy) -> SearchResult {
    let Some((start, goal)) = grid.endpoints() else {
        return SearchResult::default();
    };
    strategy.algorithm().search(grid, start, goal)
}
