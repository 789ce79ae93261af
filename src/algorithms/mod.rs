pub mod a_star;
pub mod bfs;
pub mod common;
pub mod dfs;

pub use common::{search, SearchAlgorithm, SearchResult, Strategy};
