use std::time::Instant;

use clap::Parser;

use maze_pathfinding::algorithms::{search, Strategy};
use maze_pathfinding::config::Config;
use maze_pathfinding::generator;
use maze_pathfinding::grid::Grid;
use maze_pathfinding::render;
use maze_pathfinding::stats::{print_comparison, SearchSummary};

fn build_grid(config: &Config) -> Result<Grid, String> {
    match &config.maze {
        Some(text) => Grid::parse(text)
            .ok_or_else(|| "invalid --maze layout (legend: S G # . or 1 0)".to_string()),
        None => generator::generate(config.rows, config.cols, config.num_walls, config.seed)
            .ok_or_else(|| "grid must hold at least two cells".to_string()),
    }
}

fn run(config: &Config) -> Result<(), String> {
    let grid = build_grid(config)?;

    if grid.endpoints().is_none() {
        return Err("maze has no start or no goal marker".to_string());
    }

    if config.algorithm == "all" {
        let mut summaries = Vec::new();
        for strategy in Strategy::ALL {
            let started = Instant::now();
            let result = search(&grid, strategy);
            summaries.push(SearchSummary::new(strategy.name(), &result, started.elapsed()));
        }
        println!("{}", render::render(&grid, &[], &[]));
        print_comparison(&summaries);
        return Ok(());
    }

    let strategy: Strategy = config.algorithm.parse()?;
    let started = Instant::now();
    let result = search(&grid, strategy);
    let summary = SearchSummary::new(strategy.name(), &result, started.elapsed());

    if config.no_visualization {
        println!("{}", render::render(&grid, &result.visited_order, &result.path));
    } else {
        render::play(&grid, strategy.name(), &result, config.delay_ms);
    }

    println!("\n=== FINAL RESULTS ===");
    println!("{}", summary);
    Ok(())
}

fn main() {
    let config = Config::parse();

    println!("Starting maze search...");
    println!("Algorithm: {}", config.algorithm);
    match &config.maze {
        Some(_) => println!("Maze: supplied on the command line"),
        None => println!(
            "Maze: {}x{} random, {} walls{}",
            config.rows,
            config.cols,
            config.num_walls,
            config
                .seed
                .map(|s| format!(", seed {}", s))
                .unwrap_or_default()
        ),
    }
    println!();

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
