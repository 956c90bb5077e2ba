//! Command-line driver shared by the `gridnav` binary and its tests.
//!
//! Builds a grid (from a file or a seeded generator), optionally exports it,
//! runs one search while painting a [`TagLayer`], and reports the route
//! length and the number of expanded cells.

use std::fmt;
use std::path::PathBuf;

use clap::Parser;
use gridnav_core::{
    DEFAULT_PASS_PROBABILITY, GenConfig, Grid, GridError, Pos, TagLayer, read_grid, write_grid,
};
use gridnav_search::{Heuristic, Observation, SearchError, Strategy};
use log::info;
use thiserror::Error;

/// Command-line configuration.
#[derive(Parser, Debug, Clone)]
#[command(name = "gridnav", version, about = "Find a route across a grid of open and blocked cells")]
pub struct Cli {
    /// Load the grid from a comma-separated grid file instead of generating one.
    #[arg(long, conflicts_with_all = ["rows", "cols", "seed", "pass_probability"])]
    pub file: Option<PathBuf>,

    /// Rows of a generated grid.
    #[arg(long, default_value_t = 20)]
    pub rows: usize,

    /// Columns of a generated grid.
    #[arg(long, default_value_t = 20)]
    pub cols: usize,

    /// Seed for a generated grid; a fresh one is drawn and logged if omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Chance that a generated cell is passable.
    #[arg(long, default_value_t = DEFAULT_PASS_PROBABILITY)]
    pub pass_probability: f64,

    /// bfs, dfs, astar or greedy.
    #[arg(long, default_value = "astar")]
    pub strategy: Strategy,

    /// euclidean or manhattan; used by astar and greedy.
    #[arg(long, default_value = "euclidean")]
    pub heuristic: Heuristic,

    /// Start cell as `row,col` (default: top-left).
    #[arg(long, value_parser = parse_pos)]
    pub start: Option<Pos>,

    /// Stop cell as `row,col` (default: bottom-right).
    #[arg(long, value_parser = parse_pos)]
    pub stop: Option<Pos>,

    /// Force the start and stop cells open before searching.
    #[arg(long)]
    pub open_endpoints: bool,

    /// Write the grid to this file before searching.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Print the grid with the explored cells and the route marked.
    #[arg(long)]
    pub show: bool,
}

/// Parse `row,col`.
pub fn parse_pos(s: &str) -> Result<Pos, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected row,col, got {s:?}"))?;
    let row = r.trim().parse().map_err(|e| format!("bad row {r:?}: {e}"))?;
    let col = c.trim().parse().map_err(|e| format!("bad column {c:?}: {e}"))?;
    Ok(Pos::new(row, col))
}

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Outcome of one driver run.
#[derive(Debug, Clone)]
pub struct Report {
    pub strategy: Strategy,
    pub start: Pos,
    pub stop: Pos,
    /// Cells on the route, both endpoints included.
    pub distance: usize,
    pub expanded: usize,
    /// Tagged grid, when requested.
    pub picture: Option<String>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(picture) = &self.picture {
            writeln!(f, "{picture}")?;
        }
        writeln!(f, "strategy: {}", self.strategy)?;
        writeln!(f, "route: {} -> {}", self.start, self.stop)?;
        writeln!(f, "distance: {}", self.distance)?;
        write!(f, "expanded: {}", self.expanded)
    }
}

/// Build the grid described by `cli`.
pub fn load_grid(cli: &Cli) -> Result<Grid, GridError> {
    if let Some(path) = &cli.file {
        return read_grid(path);
    }
    let (grid, seed) = GenConfig {
        rows: cli.rows,
        cols: cli.cols,
        pass_probability: cli.pass_probability,
        seed: cli.seed,
    }
    .generate()?;
    info!("generated {}x{} grid with seed {seed}", cli.rows, cli.cols);
    Ok(grid)
}

/// Run the whole driver.
pub fn run(cli: &Cli) -> Result<Report, DemoError> {
    let mut grid = load_grid(cli)?;
    let start = cli.start.unwrap_or(Pos::ORIGIN);
    let stop = cli
        .stop
        .unwrap_or(Pos::new(grid.dims().rows - 1, grid.dims().cols - 1));

    if cli.open_endpoints {
        grid.set_passable(start, true)?;
        grid.set_passable(stop, true)?;
    }
    if let Some(path) = &cli.export {
        write_grid(path, &grid)?;
        info!("grid written to {}", path.display());
    }

    let strategy = cli.strategy.with_heuristic(cli.heuristic);
    let mut layer = TagLayer::from_grid(&grid);
    let solution = strategy.search_with(&grid, start, stop, &mut |o: Observation| {
        layer.paint(o.pos, o.role)
    })?;

    Ok(Report {
        strategy,
        start,
        stop,
        distance: solution.len(),
        expanded: solution.expanded,
        picture: cli.show.then(|| layer.to_string()),
    })
}
