use std::collections::HashSet;

use maze_pathfinding::algorithms::{search, SearchResult, Strategy};
use maze_pathfinding::generator;
use maze_pathfinding::grid::{Cell, Grid, Position};

fn pos(row: usize, col: usize) -> Position {
    Position { row, col }
}

/// The 3x4 maze the original visualizer ships with.
fn reference_maze() -> Grid {
    Grid::parse("S010\n1010\n000G").unwrap()
}

fn assert_valid_path(grid: &Grid, result: &SearchResult) {
    let path = &result.path;
    assert_eq!(grid.cell(path[0]), Cell::Start);
    assert_eq!(grid.cell(*path.last().unwrap()), Cell::Goal);

    let mut seen = HashSet::new();
    for p in path {
        assert!(grid.is_traversable(*p), "{:?} is not traversable", p);
        assert!(seen.insert(*p), "{:?} repeats on the path", p);
    }
    for pair in path.windows(2) {
        assert_eq!(
            pair[0].manhattan(&pair[1]),
            1,
            "{:?} -> {:?} is not a single orthogonal step",
            pair[0],
            pair[1]
        );
    }
}

fn assert_no_duplicate_visits(result: &SearchResult) {
    let mut seen = HashSet::new();
    for p in &result.visited_order {
        assert!(seen.insert(*p), "{:?} settled twice", p);
    }
}

#[test]
fn reference_maze_all_strategies_find_valid_paths() {
    let grid = reference_maze();
    for strategy in Strategy::ALL {
        let result = search(&grid, strategy);
        assert!(result.found(), "{} found no path", strategy);
        assert_valid_path(&grid, &result);
        assert_no_duplicate_visits(&result);
    }
}

#[test]
fn reference_maze_bfs_path_is_six_positions() {
    let result = search(&reference_maze(), Strategy::Bfs);
    assert_eq!(result.path.len(), 6);
    assert_eq!(
        result.path,
        vec![pos(0, 0), pos(0, 1), pos(1, 1), pos(2, 1), pos(2, 2), pos(2, 3)]
    );
}

#[test]
fn bfs_path_is_never_longer_than_dfs_or_a_star() {
    for seed in 0..20 {
        let grid = generator::generate(12, 12, 40, Some(seed)).unwrap();
        let bfs = search(&grid, Strategy::Bfs);
        let dfs = search(&grid, Strategy::Dfs);
        let astar = search(&grid, Strategy::AStar);

        // All three agree on reachability.
        assert_eq!(bfs.found(), dfs.found(), "seed {}", seed);
        assert_eq!(bfs.found(), astar.found(), "seed {}", seed);

        if bfs.found() {
            assert!(bfs.path.len() <= dfs.path.len(), "seed {}", seed);
            assert!(bfs.path.len() <= astar.path.len(), "seed {}", seed);
            assert_valid_path(&grid, &bfs);
            assert_valid_path(&grid, &dfs);
            assert_valid_path(&grid, &astar);
        }
    }
}

#[test]
fn bfs_length_matches_independent_oracle() {
    for seed in 0..20 {
        let grid = generator::generate(10, 14, 35, Some(seed)).unwrap();
        let (start, goal) = grid.endpoints().unwrap();

        let oracle = pathfinding::prelude::bfs(
            &start,
            |&p| {
                grid.neighbors(p)
                    .into_iter()
                    .filter(|&n| grid.is_traversable(n))
                    .collect::<Vec<_>>()
            },
            |&p| p == goal,
        );

        let ours = search(&grid, Strategy::Bfs);
        match oracle {
            Some(path) => {
                assert!(ours.found(), "seed {}: oracle found a path, we did not", seed);
                assert_eq!(ours.path.len(), path.len(), "seed {}", seed);
            }
            None => assert!(!ours.found(), "seed {}: we found a path, oracle did not", seed),
        }
    }
}

#[test]
fn repeated_calls_are_byte_identical() {
    let grid = generator::generate(15, 15, 60, Some(99)).unwrap();
    for strategy in Strategy::ALL {
        let first = search(&grid, strategy);
        let second = search(&grid, strategy);
        assert_eq!(first, second, "{} diverged between calls", strategy);
    }
}

#[test]
fn fully_isolated_start_visits_only_itself() {
    let grid = Grid::parse("S1.\n11.\n..G").unwrap();
    for strategy in Strategy::ALL {
        let result = search(&grid, strategy);
        assert!(result.path.is_empty());
        assert_eq!(result.visited_order, vec![pos(0, 0)]);
    }
}

#[test]
fn unreachable_goal_visits_exactly_the_start_component() {
    // Left chamber: (0,0), (0,1), (1,0), (1,1). Right chamber holds the goal.
    let grid = Grid::parse("S.1.\n..1G").unwrap();
    let component: HashSet<Position> =
        [pos(0, 0), pos(0, 1), pos(1, 0), pos(1, 1)].into_iter().collect();
    for strategy in Strategy::ALL {
        let result = search(&grid, strategy);
        assert!(result.path.is_empty());
        let visited: HashSet<Position> = result.visited_order.iter().copied().collect();
        assert_eq!(visited, component, "{} explored the wrong cells", strategy);
        assert_no_duplicate_visits(&result);
    }
}

#[test]
fn missing_endpoint_is_recoverable_not_fatal() {
    for text in ["S..", "..G", "...", "S"] {
        let grid = Grid::parse(text).unwrap();
        for strategy in Strategy::ALL {
            let result = search(&grid, strategy);
            assert!(result.visited_order.is_empty());
            assert!(result.path.is_empty());
        }
    }
}

#[test]
fn goal_appears_last_in_visited_order_on_success() {
    let grid = reference_maze();
    for strategy in Strategy::ALL {
        let result = search(&grid, strategy);
        assert_eq!(result.visited_order.last(), result.path.last());
    }
}

#[test]
fn single_row_corridor() {
    let grid = Grid::parse("S...G").unwrap();
    for strategy in Strategy::ALL {
        let result = search(&grid, strategy);
        assert_eq!(
            result.path,
            vec![pos(0, 0), pos(0, 1), pos(0, 2), pos(0, 3), pos(0, 4)]
        );
    }
}
