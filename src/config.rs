use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 10)]
    pub rows: usize,

    #[arg(long, default_value_t = 10)]
    pub cols: usize,

    #[arg(long, default_value_t = 25)]
    pub num_walls: usize,

    /// 'bfs', 'dfs', 'a_star', or 'all' to compare the three.
    #[arg(long, default_value = "bfs")]
    pub algorithm: String,

    /// Maze layout, rows separated by ';' (e.g. "S01;0.G"). Overrides the
    /// random generator.
    #[arg(long)]
    pub maze: Option<String>,

    /// Seed for the random maze generator.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = 50)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,
}
