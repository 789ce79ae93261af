use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use crate::algorithms::SearchResult;
use crate::grid::{Cell, Grid, Position};

pub const LEGEND: &str = "Legend: S=Start, G=Goal, #=Wall, .=Empty, *=Visited, @=Path";

fn cell_char(grid: &Grid, pos: Position, visited: &HashSet<Position>, path: &HashSet<Position>) -> char {
    match grid.cell(pos) {
        Cell::Start => 'S',
        Cell::Goal => 'G',
        Cell::Wall => '#',
        Cell::Empty => {
            if path.contains(&pos) {
                '@'
            } else if visited.contains(&pos) {
                '*'
            } else {
                '.'
            }
        }
    }
}

/// Render one frame of the maze with visited/path overlays, with the row and
/// column headers the terminal view uses.
pub fn render(grid: &Grid, visited: &[Position], path: &[Position]) -> String {
    let visited: HashSet<Position> = visited.iter().copied().collect();
    let path: HashSet<Position> = path.iter().copied().collect();

    let mut out = String::new();
    out.push_str("   ");
    for col in 0..grid.cols {
        out.push_str(&format!("{:2}", col % 10));
    }
    out.push('\n');

    for row in 0..grid.rows {
        out.push_str(&format!("{:2} ", row));
        for col in 0..grid.cols {
            let pos = Position { row, col };
            out.push(cell_char(grid, pos, &visited, &path));
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

fn frame(grid: &Grid, title: &str, visited: &[Position], path: &[Position], delay_ms: u64) {
    clear_screen();
    println!("=== MAZE SEARCH ===");
    println!("{}", title);
    println!("{}", LEGEND);
    println!("{}", render(grid, visited, path));
    thread::sleep(Duration::from_millis(delay_ms));
}

/// Stage the reveal of a finished search: one visited cell per tick, then
/// one path cell per tick. The engine already ran to completion; this loop
/// owns all pacing, exactly like the visualizer it stands in for.
pub fn play(grid: &Grid, name: &str, result: &SearchResult, delay_ms: u64) {
    for i in 1..=result.visited_order.len() {
        let title = format!("Algorithm: {} | exploring ({} cells)", name, i);
        frame(grid, &title, &result.visited_order[..i], &[], delay_ms);
    }

    for i in 1..=result.path.len() {
        let title = format!(
            "Algorithm: {} | tracing path ({} of {})",
            name,
            i,
            result.path.len()
        );
        frame(grid, &title, &result.visited_order, &result.path[..i], delay_ms);
    }

    if !result.found() {
        println!("No path exists from start to goal.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlays_mark_visited_and_path() {
        let grid = Grid::parse("S.G").unwrap();
        let visited = [Position { row: 0, col: 1 }];
        let out = render(&grid, &visited, &[]);
        assert!(out.contains("S * G"));

        let out = render(&grid, &visited, &visited);
        assert!(out.contains("S @ G"));
    }

    #[test]
    fn markers_win_over_overlays() {
        let grid = Grid::parse("SG").unwrap();
        let everything = [Position { row: 0, col: 0 }, Position { row: 0, col: 1 }];
        let out = render(&grid, &everything, &everything);
        assert!(out.contains("S G"));
    }

    #[test]
    fn walls_render_as_hashes() {
        let grid = Grid::parse("S#G").unwrap();
        let out = render(&grid, &[], &[]);
        assert!(out.contains("S # G"));
    }
}
