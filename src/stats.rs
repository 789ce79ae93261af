use std::fmt;
use std::time::Duration;

use crate::algorithms::SearchResult;

/// Per-run summary the CLI prints after a search, mirroring the "path
/// length / cells explored" readout of the visualizer.
#[derive(Debug, Clone)]
pub struct SearchSummary {
    pub algorithm: String,
    pub found: bool,
    pub cells_explored: usize,
    /// Positions on the path, start and goal included. 0 when no path.
    pub path_len: usize,
    pub elapsed: Duration,
}

impl SearchSummary {
    pub fn new(algorithm: &str, result: &SearchResult, elapsed: Duration) -> Self {
        SearchSummary {
            algorithm: algorithm.to_string(),
            found: result.found(),
            cells_explored: result.visited_order.len(),
            path_len: result.path.len(),
            elapsed,
        }
    }

    /// Steps along the path (edges, not positions).
    pub fn steps(&self) -> usize {
        self.path_len.saturating_sub(1)
    }
}

impl fmt::Display for SearchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        if self.found {
            writeln!(f, "Path Length: {} steps", self.steps())?;
        } else {
            writeln!(f, "Path Length: no path found")?;
        }
        writeln!(f, "Cells Explored: {}", self.cells_explored)?;
        writeln!(f, "Search Time: {:.2?}", self.elapsed)?;
        Ok(())
    }
}

/// Print the side-by-side table for `--algorithm all` runs.
pub fn print_comparison(summaries: &[SearchSummary]) {
    println!("\n=== ALGORITHM COMPARISON RESULTS ===\n");
    println!(
        "{:<12} {:<8} {:<10} {:<12} {:<12}",
        "Algorithm", "Found", "Steps", "Explored", "Time"
    );
    println!("{}", "-".repeat(54));

    for summary in summaries {
        let found_str = if summary.found { "yes" } else { "no" };
        let steps_str = if summary.found {
            summary.steps().to_string()
        } else {
            "-".to_string()
        };
        println!(
            "{:<12} {:<8} {:<10} {:<12} {:<12}",
            summary.algorithm,
            found_str,
            steps_str,
            summary.cells_explored,
            format!("{:.2?}", summary.elapsed),
        );
    }

    if let Some(best) = summaries
        .iter()
        .filter(|s| s.found)
        .min_by_key(|s| s.path_len)
    {
        println!("\nShortest route: {} ({} steps)", best.algorithm, best.steps());
    } else {
        println!("\nNo algorithm found a route.");
    }
}
