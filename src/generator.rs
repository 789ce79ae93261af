use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{Cell, Grid, Position};

/// Generate a random maze with the start pinned to the top-left corner and
/// the goal to the bottom-right corner, the layout an interactive editor
/// would hand the engine. Walls land on random empty cells; placement gives
/// up after a bounded number of attempts so dense requests still terminate.
/// A seed makes the layout reproducible across runs.
///
/// Returns `None` when the dimensions cannot hold two distinct endpoints
/// (anything smaller than 1x2).
pub fn generate(rows: usize, cols: usize, num_walls: usize, seed: Option<u64>) -> Option<Grid> {
    if rows * cols < 2 {
        return None;
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut cells = vec![vec![Cell::Empty; cols]; rows];
    let start = Position { row: 0, col: 0 };
    let goal = Position {
        row: rows - 1,
        col: cols - 1,
    };
    cells[start.row][start.col] = Cell::Start;
    cells[goal.row][goal.col] = Cell::Goal;

    let mut walls_placed = 0;
    let mut attempts = 0;
    while walls_placed < num_walls && attempts < num_walls * 3 {
        let row = rng.gen_range(0..rows);
        let col = rng.gen_range(0..cols);

        if cells[row][col] == Cell::Empty {
            cells[row][col] = Cell::Wall;
            walls_placed += 1;
        }
        attempts += 1;
    }

    Grid::new(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_sit_in_opposite_corners() {
        let grid = generate(5, 7, 8, Some(42)).unwrap();
        assert_eq!(grid.locate(Cell::Start), Some(Position { row: 0, col: 0 }));
        assert_eq!(grid.locate(Cell::Goal), Some(Position { row: 4, col: 6 }));
    }

    #[test]
    fn same_seed_same_maze() {
        let a = generate(10, 10, 25, Some(7)).unwrap();
        let b = generate(10, 10, 25, Some(7)).unwrap();
        for row in 0..10 {
            for col in 0..10 {
                let pos = Position { row, col };
                assert_eq!(a.cell(pos), b.cell(pos));
            }
        }
    }

    #[test]
    fn wall_count_is_bounded_by_request() {
        let grid = generate(4, 4, 5, Some(1)).unwrap();
        let mut walls = 0;
        for row in 0..4 {
            for col in 0..4 {
                if grid.cell(Position { row, col }) == Cell::Wall {
                    walls += 1;
                }
            }
        }
        assert!(walls <= 5);
    }

    #[test]
    fn oversaturated_request_terminates() {
        // Far more walls than free cells; the attempt cap must kick in.
        let grid = generate(3, 3, 1000, Some(3)).unwrap();
        assert!(grid.endpoints().is_some());
    }

    #[test]
    fn degenerate_dimensions_are_rejected() {
        assert!(generate(1, 1, 0, Some(0)).is_none());
        assert!(generate(1, 2, 0, Some(0)).is_some());
    }
}
