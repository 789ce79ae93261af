//! Maze search engine with three interchangeable traversal strategies.
//!
//! The core is a pure function of `(grid, strategy)`: [`algorithms::search`]
//! takes an immutable [`grid::Grid`] snapshot and returns the order in which
//! cells were settled plus the reconstructed start-to-goal path. Rendering,
//! pacing, and grid editing are caller concerns; [`render`] and [`generator`]
//! are the bundled collaborators the CLI uses.

pub mod algorithms;
pub mod generator;
pub mod grid;
pub mod render;
pub mod stats;

pub mod config;
