use anyhow::Result;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;

mod config;
mod error;

mod grids;

mod renderer;

mod generators;
use generators::backtracker::generate;
use generators::openings::place_openings;
use grids::count_grid::CountGrid;

use config::MazeConfig;

fn run<R: Rng>(config: &MazeConfig, mut rng: R) -> Result<CountGrid> {
    let mut grid = generate(config.rows, config.columns, &mut rng)?;
    let openings = place_openings(&mut grid, &mut rng)?;
    info!(
        "{}x{} maze ready, entrance {:?}, exit {:?}",
        config.rows, config.columns, openings.entrance, openings.exit
    );

    Ok(grid)
}

fn main() -> Result<()> {
    env_logger::init();
    let config = MazeConfig::from_env()?;

    let grid = match config.seed {
        Some(seed) => run(&config, StdRng::seed_from_u64(seed))?,
        None => run(&config, rand::thread_rng())?,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write!(out, "\n\n\nMaximize window for proper scaling\n\n")?;
    renderer::print_maze(&mut out, &grid)?;

    Ok(())
}
